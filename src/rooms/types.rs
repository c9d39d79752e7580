//! Data types for the building/room schedule returned to clients.

use serde::Serialize;
use std::collections::BTreeMap;

/// One meeting as listed under its room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingSummary {
    pub class_name: String,
    pub start_time: String,
    pub end_time: String,
    pub start_date: String,
    pub end_date: String,
    pub pattern: String,
}

/// Building name → room number → meetings, in the order they were added.
///
/// Serializes as a plain nested JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RoomSchedule {
    buildings: BTreeMap<String, BTreeMap<String, Vec<MeetingSummary>>>,
}

impl RoomSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `meeting` to the room's list, creating the building and room
    /// entries on first use.
    pub fn push(&mut self, building: &str, room: &str, meeting: MeetingSummary) {
        self.buildings
            .entry(building.to_string())
            .or_default()
            .entry(room.to_string())
            .or_default()
            .push(meeting);
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    pub fn building(&self, name: &str) -> Option<&BTreeMap<String, Vec<MeetingSummary>>> {
        self.buildings.get(name)
    }

    pub fn room(&self, building: &str, room: &str) -> Option<&[MeetingSummary]> {
        self.buildings.get(building)?.get(room).map(Vec::as_slice)
    }

    pub fn building_names(&self) -> impl Iterator<Item = &str> {
        self.buildings.keys().map(String::as_str)
    }

    /// Total number of meetings across all rooms.
    pub fn meeting_count(&self) -> usize {
        self.buildings
            .values()
            .flat_map(BTreeMap::values)
            .map(Vec::len)
            .sum()
    }
}
