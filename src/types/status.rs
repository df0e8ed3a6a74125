// ABOUTME: Closed status enumerations for builds, fleets, and locations.
// ABOUTME: Explicit terminal classification replaces magic-string comparisons.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("unrecognized {resource} status: {value}")]
pub struct UnknownStatus {
    pub resource: &'static str,
    pub value: String,
}

/// Lifecycle status of a build upload.
///
/// `Ready` is the success terminal; `Failed` is the failure terminal.
/// Everything else means the provisioning system is still working.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStatus {
    Initialized,
    Uploading,
    Validating,
    Validated,
    Building,
    Ready,
    Failed,
}

impl BuildStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, BuildStatus::Ready | BuildStatus::Failed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BuildStatus::Initialized => "INITIALIZED",
            BuildStatus::Uploading => "UPLOADING",
            BuildStatus::Validating => "VALIDATING",
            BuildStatus::Validated => "VALIDATED",
            BuildStatus::Building => "BUILDING",
            BuildStatus::Ready => "READY",
            BuildStatus::Failed => "FAILED",
        }
    }
}

impl FromStr for BuildStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INITIALIZED" => Ok(BuildStatus::Initialized),
            "UPLOADING" => Ok(BuildStatus::Uploading),
            "VALIDATING" => Ok(BuildStatus::Validating),
            "VALIDATED" => Ok(BuildStatus::Validated),
            "BUILDING" => Ok(BuildStatus::Building),
            "READY" => Ok(BuildStatus::Ready),
            "FAILED" => Ok(BuildStatus::Failed),
            other => Err(UnknownStatus {
                resource: "build",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a fleet.
///
/// `Active` gates rollout progress. `Error` is the failure terminal.
/// `Deleting`/`Terminated` are terminal too; observing them while waiting
/// for activation means something external tore the fleet down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetStatus {
    New,
    Downloading,
    Validating,
    Building,
    Activating,
    Active,
    Error,
    Deleting,
    Terminated,
}

impl FleetStatus {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            FleetStatus::Active | FleetStatus::Error | FleetStatus::Deleting | FleetStatus::Terminated
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FleetStatus::New => "NEW",
            FleetStatus::Downloading => "DOWNLOADING",
            FleetStatus::Validating => "VALIDATING",
            FleetStatus::Building => "BUILDING",
            FleetStatus::Activating => "ACTIVATING",
            FleetStatus::Active => "ACTIVE",
            FleetStatus::Error => "ERROR",
            FleetStatus::Deleting => "DELETING",
            FleetStatus::Terminated => "TERMINATED",
        }
    }
}

impl FromStr for FleetStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEW" => Ok(FleetStatus::New),
            "DOWNLOADING" => Ok(FleetStatus::Downloading),
            "VALIDATING" => Ok(FleetStatus::Validating),
            "BUILDING" => Ok(FleetStatus::Building),
            "ACTIVATING" => Ok(FleetStatus::Activating),
            "ACTIVE" => Ok(FleetStatus::Active),
            "ERROR" => Ok(FleetStatus::Error),
            "DELETING" => Ok(FleetStatus::Deleting),
            "TERMINATED" => Ok(FleetStatus::Terminated),
            other => Err(UnknownStatus {
                resource: "fleet",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for FleetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Readiness status of one location within a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationStatus {
    New,
    Downloading,
    Validating,
    Building,
    Activating,
    Active,
    Error,
}

impl LocationStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, LocationStatus::Active | LocationStatus::Error)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LocationStatus::New => "NEW",
            LocationStatus::Downloading => "DOWNLOADING",
            LocationStatus::Validating => "VALIDATING",
            LocationStatus::Building => "BUILDING",
            LocationStatus::Activating => "ACTIVATING",
            LocationStatus::Active => "ACTIVE",
            LocationStatus::Error => "ERROR",
        }
    }
}

impl FromStr for LocationStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEW" => Ok(LocationStatus::New),
            "DOWNLOADING" => Ok(LocationStatus::Downloading),
            "VALIDATING" => Ok(LocationStatus::Validating),
            "BUILDING" => Ok(LocationStatus::Building),
            "ACTIVATING" => Ok(LocationStatus::Activating),
            "ACTIVE" => Ok(LocationStatus::Active),
            "ERROR" => Ok(LocationStatus::Error),
            other => Err(UnknownStatus {
                resource: "location",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for LocationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_status_round_trips() {
        for s in [
            "INITIALIZED",
            "UPLOADING",
            "VALIDATING",
            "VALIDATED",
            "BUILDING",
            "READY",
            "FAILED",
        ] {
            let status: BuildStatus = s.parse().unwrap();
            assert_eq!(status.as_str(), s);
        }
    }

    #[test]
    fn build_terminal_classification() {
        assert!(BuildStatus::Ready.is_terminal());
        assert!(BuildStatus::Failed.is_terminal());
        assert!(!BuildStatus::Uploading.is_terminal());
    }

    #[test]
    fn fleet_terminal_classification() {
        assert!(FleetStatus::Active.is_terminal());
        assert!(FleetStatus::Error.is_terminal());
        assert!(FleetStatus::Terminated.is_terminal());
        assert!(!FleetStatus::Activating.is_terminal());
    }

    #[test]
    fn unknown_status_is_an_error_not_a_fallback() {
        let err = "GREAT".parse::<FleetStatus>().unwrap_err();
        assert_eq!(err.resource, "fleet");
        assert_eq!(err.value, "GREAT");
    }
}
