use std::sync::Arc;

use crate::rooms::aggregate::ScheduleOptions;
use crate::services::roster_api::RosterApi;
use crate::subjects::SubjectList;

/// Shared state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<dyn RosterApi>,
    pub subjects: SubjectList,
    pub options: Arc<ScheduleOptions>,
}

impl AppState {
    pub fn new(roster: Arc<dyn RosterApi>, subjects: SubjectList, options: ScheduleOptions) -> Self {
        Self {
            roster,
            subjects,
            options: Arc::new(options),
        }
    }
}
