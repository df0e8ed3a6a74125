// ABOUTME: Pending-set tracker for multi-location fleet convergence.
// ABOUTME: Shrinks by identity as locations report ACTIVE; ERROR aborts early.

use std::collections::BTreeSet;

use crate::client::LocationAttributes;
use crate::types::{FleetId, LocationCode, LocationStatus};

use super::error::RolloutError;

/// Working set of locations that have not yet reported ACTIVE.
///
/// Seeded from the initial unfiltered location query; each subsequent poll
/// covers only the still-pending locations. Removal is by identity, so
/// response ordering does not matter, and the set can only shrink. Any
/// location observed in ERROR aborts the whole wait: the fleet can never
/// converge once a location has failed.
#[derive(Debug)]
pub struct LocationReadinessTracker {
    fleet: FleetId,
    pending: BTreeSet<LocationCode>,
}

impl LocationReadinessTracker {
    /// Seed the pending set from the initial full location listing.
    ///
    /// A fleet with zero locations yields an already-converged tracker.
    ///
    /// # Errors
    ///
    /// `RolloutError::LocationFailed` if any location is already in ERROR.
    pub fn new(fleet: FleetId, initial: &[LocationAttributes]) -> Result<Self, RolloutError> {
        let mut tracker = Self {
            fleet,
            pending: initial.iter().map(|a| a.location.clone()).collect(),
        };
        tracker.observe(initial)?;
        Ok(tracker)
    }

    /// Fold one poll response into the pending set.
    ///
    /// Locations observed ACTIVE are removed; anything else stays pending
    /// for the next poll.
    ///
    /// # Errors
    ///
    /// `RolloutError::LocationFailed` on the first location observed in
    /// ERROR.
    pub fn observe(&mut self, records: &[LocationAttributes]) -> Result<(), RolloutError> {
        for record in records {
            match record.status {
                LocationStatus::Active => {
                    self.pending.remove(&record.location);
                }
                LocationStatus::Error => {
                    return Err(RolloutError::LocationFailed {
                        fleet: self.fleet.clone(),
                        location: record.location.clone(),
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Locations still awaited, in stable order, for use as a query filter.
    pub fn pending(&self) -> Vec<LocationCode> {
        self.pending.iter().cloned().collect()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// True once every location has reported ACTIVE.
    pub fn is_converged(&self) -> bool {
        self.pending.is_empty()
    }
}
