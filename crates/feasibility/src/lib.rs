pub mod config;
pub mod error;
pub mod projects;
pub mod scoring;
pub mod telemetry;
