pub mod roster_api;
