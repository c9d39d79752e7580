use axum::{Json, extract::State};
use tracing::info;

use super::error::AppError;
use super::state::AppState;
use crate::rooms::aggregate::collect_room_schedule;
use crate::rooms::types::RoomSchedule;

/// `GET /`: rebuilds the schedule from the roster on every call.
pub async fn get_room_schedule(State(state): State<AppState>) -> Result<Json<RoomSchedule>, AppError> {
    let subjects = state.subjects.snapshot();
    let schedule = collect_room_schedule(state.roster.clone(), &subjects, &state.options).await?;

    info!(
        subjects = subjects.len(),
        buildings = schedule.building_names().count(),
        meetings = schedule.meeting_count(),
        "Room schedule served"
    );
    Ok(Json(schedule))
}
