//! Inbound HTTP surface: a single `GET /` returning the room schedule.

mod error;
mod handlers;
mod router;
mod state;

pub use error::AppError;
pub use router::create_router;
pub use state::AppState;
