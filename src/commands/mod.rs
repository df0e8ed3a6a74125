// ABOUTME: Command implementations for the fleetshift CLI.
// ABOUTME: The single deploy command owns rollout orchestration.

pub mod deploy;
