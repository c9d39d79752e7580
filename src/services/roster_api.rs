//! Trait and types for interacting with an upstream class roster.
//!
//! The record types mirror the nesting of the roster's class search payload:
//! class → enrollment group → class section → meeting. Leaf fields are all
//! optional; the nested collections are required, so a payload missing one of
//! them fails to decode instead of silently yielding nothing.

use anyhow::Result;
use serde::Deserialize;

/// One course offering for a subject in a term.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRecord {
    pub subject: Option<String>,
    pub catalog_nbr: Option<String>,
    pub enroll_groups: Vec<EnrollGroup>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollGroup {
    pub class_sections: Vec<ClassSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSection {
    pub meetings: Vec<Meeting>,
}

/// A scheduled meeting of a class section, as reported upstream.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    /// Building name, e.g. "Gates Hall".
    pub bldg_descr: Option<String>,
    /// Building plus room, e.g. "Gates Hall G01".
    pub facility_descr: Option<String>,
    pub time_start: Option<String>,
    pub time_end: Option<String>,
    pub start_dt: Option<String>,
    pub end_dt: Option<String>,
    /// Weekday pattern, e.g. "MWF".
    pub pattern: Option<String>,
}

/// Abstraction over a class roster provider.
#[async_trait::async_trait]
pub trait RosterApi: Send + Sync {
    /// Returns the subject codes offered in `term`, in upstream order.
    async fn list_subjects(&self, term: &str) -> Result<Vec<String>>;

    /// Returns every class record for `subject` in `term`.
    async fn list_classes(&self, term: &str, subject: &str) -> Result<Vec<ClassRecord>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_record_decodes_camel_case() {
        let json = r#"{
            "subject": "CS",
            "catalogNbr": "2110",
            "titleShort": "OOP & Data Structures",
            "enrollGroups": [{
                "classSections": [{
                    "meetings": [{
                        "bldgDescr": "Gates Hall",
                        "facilityDescr": "Gates Hall G01",
                        "timeStart": "9:00AM",
                        "timeEnd": "9:50AM",
                        "startDt": "2024-01-22",
                        "endDt": "2024-05-10",
                        "pattern": "MWF"
                    }]
                }]
            }]
        }"#;

        let record: ClassRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.subject.as_deref(), Some("CS"));
        assert_eq!(record.catalog_nbr.as_deref(), Some("2110"));

        let meeting = &record.enroll_groups[0].class_sections[0].meetings[0];
        assert_eq!(meeting.facility_descr.as_deref(), Some("Gates Hall G01"));
        assert_eq!(meeting.time_start.as_deref(), Some("9:00AM"));
        assert_eq!(meeting.pattern.as_deref(), Some("MWF"));
    }

    #[test]
    fn test_meeting_fields_may_be_missing_or_null() {
        let meeting: Meeting = serde_json::from_str(r#"{"bldgDescr": null}"#).unwrap();
        assert!(meeting.bldg_descr.is_none());
        assert!(meeting.facility_descr.is_none());
    }

    #[test]
    fn test_class_record_without_enroll_groups_is_rejected() {
        let result = serde_json::from_str::<ClassRecord>(r#"{"subject": "CS"}"#);
        assert!(result.is_err());
    }
}
