//! Runtime configuration, from command-line flags or the environment.

use clap::Parser;
use std::net::SocketAddr;

use crate::infra::cornell::client::DEFAULT_API_BASE;
use crate::rooms::aggregate::ScheduleOptions;
use crate::rooms::time::TimeFormat;

pub const DEFAULT_TERM: &str = "SP24";

/// Upper bound accepted for `--concurrency`.
pub const MAX_CONCURRENCY: i64 = 256;

#[derive(Parser, Debug, Clone)]
#[command(name = "room_schedule")]
#[command(about = "Serves class meetings grouped by building and room", long_about = None)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Roster term to report on (e.g. "SP24", "FA23")
    #[arg(short, long, env = "ROSTER_TERM", default_value = DEFAULT_TERM)]
    pub term: String,

    /// Base URL of the class roster API
    #[arg(long, env = "ROSTER_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// How meeting times are written: as given upstream, or as 24-hour HH:MM
    #[arg(long, env = "TIME_FORMAT", value_enum, default_value_t = TimeFormat::Raw)]
    pub time_format: TimeFormat,

    /// Maximum number of subjects fetched at once (1 = one at a time)
    #[arg(
        short,
        long,
        env = "FETCH_CONCURRENCY",
        default_value_t = 1,
        value_parser = clap::value_parser!(u16).range(1..=MAX_CONCURRENCY)
    )]
    pub concurrency: u16,

    /// File the JSON log is written to (rotated daily)
    #[arg(long, env = "LOG_FILE_PATH", default_value = "logs/room_schedule.log")]
    pub log_file_path: String,
}

impl Config {
    pub fn schedule_options(&self) -> ScheduleOptions {
        ScheduleOptions {
            term: self.term.clone(),
            time_format: self.time_format,
            concurrency: usize::from(self.concurrency),
        }
    }

    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}
