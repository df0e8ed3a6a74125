// ABOUTME: Fleet specification document model.
// ABOUTME: Mirrors the CreateFleet request shape with AWS-style JSON keys.

use serde::Deserialize;

use super::build::Tag;
use crate::types::LocationCode;

/// A new fleet to provision, as described by the operator's JSON document.
///
/// `Name`, `EC2InstanceType`, and `RuntimeConfiguration` are mandatory.
/// `BuildId` may appear in existing documents but is overridden: the fleet is
/// always created against the build this rollout just provisioned.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct FleetSpec {
    pub name: String,
    #[serde(rename = "EC2InstanceType")]
    pub ec2_instance_type: String,
    pub runtime_configuration: RuntimeConfiguration,
    #[serde(default)]
    pub build_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "EC2InboundPermissions")]
    pub ec2_inbound_permissions: Option<Vec<IpPermission>>,
    #[serde(default)]
    pub new_game_session_protection_policy: Option<String>,
    #[serde(default)]
    pub fleet_type: Option<String>,
    #[serde(default)]
    pub metric_groups: Option<Vec<String>>,
    #[serde(default)]
    pub instance_role_arn: Option<String>,
    #[serde(default)]
    pub resource_creation_limit_policy: Option<ResourceCreationLimitPolicy>,
    #[serde(default)]
    pub peer_vpc_aws_account_id: Option<String>,
    #[serde(default)]
    pub peer_vpc_id: Option<String>,
    #[serde(default)]
    pub certificate_configuration: Option<CertificateConfiguration>,
    #[serde(default)]
    pub compute_type: Option<String>,
    #[serde(default)]
    pub anywhere_configuration: Option<AnywhereConfiguration>,
    #[serde(default)]
    pub locations: Option<Vec<LocationEntry>>,
    #[serde(default)]
    pub tags: Option<Vec<Tag>>,
}

/// Cap on game-session creation per creator id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ResourceCreationLimitPolicy {
    #[serde(default)]
    pub new_game_sessions_per_creator: Option<i32>,
    #[serde(default)]
    pub policy_period_in_minutes: Option<i32>,
}

/// TLS certificate generation for fleet instances.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CertificateConfiguration {
    pub certificate_type: String,
}

/// Cost hint for Anywhere fleets.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct AnywhereConfiguration {
    pub cost: String,
}

/// Which server processes run on each instance, and how many.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct RuntimeConfiguration {
    pub server_processes: Vec<ServerProcess>,
    #[serde(default)]
    pub max_concurrent_game_session_activations: Option<i32>,
    #[serde(default)]
    pub game_session_activation_timeout_seconds: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ServerProcess {
    pub launch_path: String,
    #[serde(default)]
    pub parameters: Option<String>,
    pub concurrent_executions: i32,
}

/// Inbound firewall rule for fleet instances.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct IpPermission {
    pub from_port: i32,
    pub to_port: i32,
    pub ip_range: String,
    pub protocol: String,
}

/// One remote location the fleet should deploy into.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct LocationEntry {
    pub location: LocationCode,
}
