use tracing::trace;

use crate::rooms::time::{TimeFormat, format_time};
use crate::rooms::types::{MeetingSummary, RoomSchedule};
use crate::rooms::utility::{or_unavailable, room_number};
use crate::services::roster_api::{ClassRecord, Meeting};

/// Files every meeting of `classes` under its building and room in `schedule`.
///
/// Meetings without a usable facility description are skipped. Missing
/// fields on the remaining ones are filled with the placeholder.
pub fn format_classes(schedule: &mut RoomSchedule, classes: &[ClassRecord], time_format: TimeFormat) {
    for class in classes {
        let class_name = class_name(class);

        let meetings = class
            .enroll_groups
            .iter()
            .flat_map(|group| &group.class_sections)
            .flat_map(|section| &section.meetings);

        for meeting in meetings {
            let building = or_unavailable(meeting.bldg_descr.as_deref());
            let facility = or_unavailable(meeting.facility_descr.as_deref());

            let Some(room) = room_number(&facility) else {
                trace!(class = %class_name, building = %building, "Meeting has no room, skipping");
                continue;
            };

            schedule.push(&building, room, summarize(&class_name, meeting, time_format));
        }
    }
}

fn class_name(class: &ClassRecord) -> String {
    format!(
        "{} {}",
        class.subject.as_deref().unwrap_or_default(),
        class.catalog_nbr.as_deref().unwrap_or_default()
    )
}

fn summarize(class_name: &str, meeting: &Meeting, time_format: TimeFormat) -> MeetingSummary {
    MeetingSummary {
        class_name: class_name.to_string(),
        start_time: format_time(&or_unavailable(meeting.time_start.as_deref()), time_format),
        end_time: format_time(&or_unavailable(meeting.time_end.as_deref()), time_format),
        start_date: or_unavailable(meeting.start_dt.as_deref()),
        end_date: or_unavailable(meeting.end_dt.as_deref()),
        pattern: or_unavailable(meeting.pattern.as_deref()),
    }
}
