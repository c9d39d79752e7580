pub mod client;

pub use client::CornellRosterClient;
