use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{Instrument, debug, error};

use crate::config::DEFAULT_TERM;
use crate::rooms::format::format_classes;
use crate::rooms::time::TimeFormat;
use crate::rooms::types::RoomSchedule;
use crate::services::roster_api::{ClassRecord, RosterApi};

/// Settings that shape one aggregation run.
#[derive(Debug, Clone)]
pub struct ScheduleOptions {
    pub term: String,
    pub time_format: TimeFormat,
    /// Maximum class fetches in flight. `1` fetches strictly one subject at a
    /// time; values above the semaphore's permit limit are capped to it.
    pub concurrency: usize,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self {
            term: DEFAULT_TERM.to_string(),
            time_format: TimeFormat::Raw,
            concurrency: 1,
        }
    }
}

/// Builds a fresh [`RoomSchedule`] from every subject in `subjects`.
///
/// A subject whose classes cannot be fetched is logged and left out. The
/// result is merged in `subjects` order regardless of `concurrency`.
///
/// # Errors
///
/// Only fails if a concurrent fetch task dies before reporting back.
#[tracing::instrument(skip_all, fields(term = %opts.term, subjects = subjects.len()))]
pub async fn collect_room_schedule(
    roster: Arc<dyn RosterApi>,
    subjects: &[String],
    opts: &ScheduleOptions,
) -> Result<RoomSchedule> {
    let mut schedule = RoomSchedule::new();

    if opts.concurrency <= 1 {
        for subject in subjects {
            let result = roster.list_classes(&opts.term, subject).await;
            merge_subject(&mut schedule, subject, result, opts.time_format);
        }
    } else {
        let permits = opts.concurrency.min(Semaphore::MAX_PERMITS);
        let semaphore = Arc::new(Semaphore::new(permits));
        let mut tasks = Vec::with_capacity(subjects.len());

        for subject in subjects {
            let sem = semaphore.clone();
            let roster = roster.clone();
            let term = opts.term.clone();
            let owned = subject.clone();

            let span = tracing::info_span!("fetch_subject", subject = %subject);
            let task = tokio::spawn(
                async move {
                    match sem.acquire_owned().await {
                        Ok(_permit) => roster.list_classes(&term, &owned).await,
                        Err(e) => Err(e.into()),
                    }
                }
                .instrument(span),
            );

            tasks.push((subject, task));
        }

        for (subject, task) in tasks {
            let result = task
                .await
                .with_context(|| format!("Class fetch task for {subject} did not complete"))?;
            merge_subject(&mut schedule, subject, result, opts.time_format);
        }
    }

    debug!(meetings = schedule.meeting_count(), "Room schedule assembled");
    Ok(schedule)
}

fn merge_subject(
    schedule: &mut RoomSchedule,
    subject: &str,
    result: Result<Vec<ClassRecord>>,
    time_format: TimeFormat,
) {
    match result {
        Ok(classes) => format_classes(schedule, &classes, time_format),
        Err(e) => {
            error!(subject, error = ?e, "Error fetching and organizing data for subject classes");
        }
    }
}
