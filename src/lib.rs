pub mod config;
pub mod fetch;
pub mod http;
pub mod infra;
pub mod rooms;
pub mod services;
pub mod subjects;
