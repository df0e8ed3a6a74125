// ABOUTME: Rollout state marker types for the type state pattern.
// ABOUTME: Zero-sized types enforce valid phase ordering at compile time.

/// Preconditions checked: the retiring fleet and the alias both exist.
/// Available actions: `provision_build()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Validated;

/// New build created and READY.
/// Available actions: `provision_fleet()`
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildReady;

/// New fleet created; fleet and every location ACTIVE.
/// Available actions: `cutover()`
#[derive(Debug, Clone, Copy, Default)]
pub struct FleetActive;

/// Alias repointed: client traffic now routes to the new fleet.
/// Available actions: `drain_previous()`
#[derive(Debug, Clone, Copy, Default)]
pub struct CutOver;

/// Retiring fleet has zero live game sessions.
/// Available actions: `retire_previous()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Drained;

/// Rollout finished: old fleet deleted.
/// Available actions: `finish()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Completed;
