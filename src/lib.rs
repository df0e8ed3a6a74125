// ABOUTME: Library root for fleetshift - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod rollout;
pub mod types;
