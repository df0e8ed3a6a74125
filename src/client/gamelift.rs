// ABOUTME: Concrete GameLift binding over aws-sdk-gamelift.
// ABOUTME: Implements the capability traits and maps SDK shapes into domain types.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_gamelift::Client;
use aws_sdk_gamelift::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_gamelift::types as sdk;

use super::alias::AliasOps;
use super::build::BuildOps;
use super::error::ClientError;
use super::fleet::FleetOps;
use super::session::GameSessionOps;
use super::types::{
    AliasDetail, BuildDetail, CreatedBuild, FleetAttributes, GameSession, LocationAttributes,
};
use crate::config::{BuildSpec, FleetSpec, Tag};
use crate::types::{AliasId, BuildId, FleetId, GameSessionId, LocationCode};

/// GameLift API client for one region.
///
/// Writes are attempted exactly once; there is no retry layer here. A
/// transport failure surfaces as `ClientError::Transport` and aborts the
/// rollout.
#[derive(Debug, Clone)]
pub struct GameLiftClient {
    inner: Client,
}

impl GameLiftClient {
    /// Connect using the default credential chain and the given region.
    pub async fn connect(region: &str) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;
        Self {
            inner: Client::new(&config),
        }
    }
}

#[async_trait]
impl BuildOps for GameLiftClient {
    async fn create_build(&self, spec: &BuildSpec) -> Result<CreatedBuild, ClientError> {
        let storage = sdk::S3Location::builder()
            .bucket(&spec.storage_location.bucket)
            .key(&spec.storage_location.key)
            .role_arn(&spec.storage_location.role_arn)
            .set_object_version(spec.storage_location.object_version.clone())
            .build();

        let out = self
            .inner
            .create_build()
            .name(&spec.name)
            .storage_location(storage)
            .set_version(spec.version.clone())
            .set_operating_system(
                spec.operating_system
                    .as_deref()
                    .map(sdk::OperatingSystem::from),
            )
            .set_server_sdk_version(spec.server_sdk_version.clone())
            .set_tags(map_tags(spec.tags.as_deref()))
            .send()
            .await
            .map_err(|e| map_sdk_err("build", e))?;

        let build = out.build_value.ok_or_else(|| missing_field("CreateBuild", "Build"))?;
        let id = build
            .build_id
            .ok_or_else(|| missing_field("CreateBuild", "BuildId"))?;
        let status = build
            .status
            .ok_or_else(|| missing_field("CreateBuild", "Status"))?;

        Ok(CreatedBuild {
            id: BuildId::new(id),
            status: status.as_str().parse()?,
        })
    }

    async fn describe_build(&self, id: &BuildId) -> Result<BuildDetail, ClientError> {
        let out = self
            .inner
            .describe_build()
            .build_id(id.as_str())
            .send()
            .await
            .map_err(|e| map_sdk_err("build", e))?;

        let build = out
            .build_value
            .ok_or_else(|| missing_field("DescribeBuild", "Build"))?;
        let status = build
            .status
            .ok_or_else(|| missing_field("DescribeBuild", "Status"))?;

        Ok(BuildDetail {
            id: id.clone(),
            status: status.as_str().parse()?,
        })
    }
}

#[async_trait]
impl FleetOps for GameLiftClient {
    async fn create_fleet(
        &self,
        spec: &FleetSpec,
        build: &BuildId,
    ) -> Result<FleetId, ClientError> {
        let mut processes = Vec::with_capacity(spec.runtime_configuration.server_processes.len());
        for process in &spec.runtime_configuration.server_processes {
            processes.push(
                sdk::ServerProcess::builder()
                    .launch_path(&process.launch_path)
                    .set_parameters(process.parameters.clone())
                    .concurrent_executions(process.concurrent_executions)
                    .build(),
            );
        }

        let runtime_configuration = sdk::RuntimeConfiguration::builder()
            .set_server_processes(Some(processes))
            .set_max_concurrent_game_session_activations(
                spec.runtime_configuration
                    .max_concurrent_game_session_activations,
            )
            .set_game_session_activation_timeout_seconds(
                spec.runtime_configuration
                    .game_session_activation_timeout_seconds,
            )
            .build();

        let permissions = match &spec.ec2_inbound_permissions {
            Some(rules) => {
                let mut mapped = Vec::with_capacity(rules.len());
                for rule in rules {
                    mapped.push(
                        sdk::IpPermission::builder()
                            .from_port(rule.from_port)
                            .to_port(rule.to_port)
                            .ip_range(&rule.ip_range)
                            .protocol(sdk::IpProtocol::from(rule.protocol.as_str()))
                            .build(),
                    );
                }
                Some(mapped)
            }
            None => None,
        };

        let locations = match &spec.locations {
            Some(entries) => {
                let mut mapped = Vec::with_capacity(entries.len());
                for entry in entries {
                    mapped.push(
                        sdk::LocationConfiguration::builder()
                            .location(entry.location.as_str())
                            .build(),
                    );
                }
                Some(mapped)
            }
            None => None,
        };

        let out = self
            .inner
            .create_fleet()
            .name(&spec.name)
            .build_id(build.as_str())
            .ec2_instance_type(sdk::Ec2InstanceType::from(spec.ec2_instance_type.as_str()))
            .runtime_configuration(runtime_configuration)
            .set_description(spec.description.clone())
            .set_ec2_inbound_permissions(permissions)
            .set_new_game_session_protection_policy(
                spec.new_game_session_protection_policy
                    .as_deref()
                    .map(sdk::ProtectionPolicy::from),
            )
            .set_fleet_type(spec.fleet_type.as_deref().map(sdk::FleetType::from))
            .set_metric_groups(spec.metric_groups.clone())
            .set_instance_role_arn(spec.instance_role_arn.clone())
            .set_resource_creation_limit_policy(spec.resource_creation_limit_policy.as_ref().map(
                |policy| {
                    sdk::ResourceCreationLimitPolicy::builder()
                        .set_new_game_sessions_per_creator(policy.new_game_sessions_per_creator)
                        .set_policy_period_in_minutes(policy.policy_period_in_minutes)
                        .build()
                },
            ))
            .set_peer_vpc_aws_account_id(spec.peer_vpc_aws_account_id.clone())
            .set_peer_vpc_id(spec.peer_vpc_id.clone())
            .set_certificate_configuration(spec.certificate_configuration.as_ref().map(|cert| {
                sdk::CertificateConfiguration::builder()
                    .certificate_type(sdk::CertificateType::from(cert.certificate_type.as_str()))
                    .build()
            }))
            .set_compute_type(spec.compute_type.as_deref().map(sdk::ComputeType::from))
            .set_anywhere_configuration(spec.anywhere_configuration.as_ref().map(|anywhere| {
                sdk::AnywhereConfiguration::builder()
                    .cost(&anywhere.cost)
                    .build()
            }))
            .set_locations(locations)
            .set_tags(map_tags(spec.tags.as_deref()))
            .send()
            .await
            .map_err(|e| map_sdk_err("fleet", e))?;

        let attributes = out
            .fleet_attributes
            .ok_or_else(|| missing_field("CreateFleet", "FleetAttributes"))?;
        let id = attributes
            .fleet_id
            .ok_or_else(|| missing_field("CreateFleet", "FleetId"))?;

        Ok(FleetId::new(id))
    }

    async fn describe_fleet_attributes(
        &self,
        id: &FleetId,
    ) -> Result<Vec<FleetAttributes>, ClientError> {
        let out = self
            .inner
            .describe_fleet_attributes()
            .fleet_ids(id.as_str())
            .send()
            .await
            .map_err(|e| map_sdk_err("fleet", e))?;

        let mut records = Vec::new();
        for attrs in out.fleet_attributes.unwrap_or_default() {
            let fleet_id = attrs
                .fleet_id
                .ok_or_else(|| missing_field("DescribeFleetAttributes", "FleetId"))?;
            let status = attrs
                .status
                .ok_or_else(|| missing_field("DescribeFleetAttributes", "Status"))?;
            records.push(FleetAttributes {
                id: FleetId::new(fleet_id),
                status: status.as_str().parse()?,
            });
        }
        Ok(records)
    }

    async fn describe_fleet_location_attributes(
        &self,
        id: &FleetId,
        locations: Option<&[LocationCode]>,
    ) -> Result<Vec<LocationAttributes>, ClientError> {
        let out = self
            .inner
            .describe_fleet_location_attributes()
            .fleet_id(id.as_str())
            .set_locations(
                locations.map(|ls| ls.iter().map(|l| l.as_str().to_string()).collect()),
            )
            .send()
            .await
            .map_err(|e| map_sdk_err("fleet", e))?;

        let mut records = Vec::new();
        for attrs in out.location_attributes.unwrap_or_default() {
            let state = attrs
                .location_state
                .ok_or_else(|| missing_field("DescribeFleetLocationAttributes", "LocationState"))?;
            let location = state
                .location
                .ok_or_else(|| missing_field("DescribeFleetLocationAttributes", "Location"))?;
            let status = state
                .status
                .ok_or_else(|| missing_field("DescribeFleetLocationAttributes", "Status"))?;
            records.push(LocationAttributes {
                location: LocationCode::new(&location).map_err(|e| {
                    ClientError::InvalidRequest {
                        message: format!("bad location in response: {e}"),
                    }
                })?,
                status: status.as_str().parse()?,
            });
        }
        Ok(records)
    }

    async fn delete_fleet(&self, id: &FleetId) -> Result<(), ClientError> {
        self.inner
            .delete_fleet()
            .fleet_id(id.as_str())
            .send()
            .await
            .map_err(|e| map_sdk_err("fleet", e))?;
        Ok(())
    }
}

#[async_trait]
impl AliasOps for GameLiftClient {
    async fn describe_alias(&self, id: &AliasId) -> Result<Option<AliasDetail>, ClientError> {
        let result = self
            .inner
            .describe_alias()
            .alias_id(id.as_str())
            .send()
            .await;

        match result {
            Ok(out) => {
                let Some(alias) = out.alias else {
                    return Ok(None);
                };
                let target_fleet = alias
                    .routing_strategy
                    .and_then(|r| r.fleet_id)
                    .map(FleetId::new);
                Ok(Some(AliasDetail {
                    id: id.clone(),
                    target_fleet,
                }))
            }
            Err(err) => match map_sdk_err("alias", err) {
                ClientError::NotFound { .. } => Ok(None),
                other => Err(other),
            },
        }
    }

    async fn update_alias(&self, id: &AliasId, target: &FleetId) -> Result<(), ClientError> {
        let strategy = sdk::RoutingStrategy::builder()
            .r#type(sdk::RoutingStrategyType::Simple)
            .fleet_id(target.as_str())
            .message("Updated by fleetshift rollout.")
            .build();

        self.inner
            .update_alias()
            .alias_id(id.as_str())
            .routing_strategy(strategy)
            .send()
            .await
            .map_err(|e| map_sdk_err("alias", e))?;
        Ok(())
    }
}

#[async_trait]
impl GameSessionOps for GameLiftClient {
    async fn describe_game_sessions(
        &self,
        fleet: &FleetId,
    ) -> Result<Vec<GameSession>, ClientError> {
        let out = self
            .inner
            .describe_game_sessions()
            .fleet_id(fleet.as_str())
            .send()
            .await
            .map_err(|e| map_sdk_err("fleet", e))?;

        Ok(out
            .game_sessions
            .unwrap_or_default()
            .into_iter()
            .filter_map(|s| s.game_session_id)
            .map(|id| GameSession {
                id: GameSessionId::new(id),
            })
            .collect())
    }
}

fn map_tags(tags: Option<&[Tag]>) -> Option<Vec<sdk::Tag>> {
    tags.map(|tags| {
        tags.iter()
            .map(|tag| sdk::Tag::builder().key(&tag.key).value(&tag.value).build())
            .collect()
    })
}

fn missing_field(operation: &str, field: &str) -> ClientError {
    ClientError::Api {
        code: "MalformedResponse".to_string(),
        message: format!("{operation} response missing {field}"),
    }
}

fn map_sdk_err<E, R>(resource: &str, err: SdkError<E, R>) -> ClientError
where
    E: ProvideErrorMetadata,
{
    match &err {
        SdkError::ServiceError(ctx) => {
            let service_err = ctx.err();
            let code = service_err.code().unwrap_or("Unknown").to_string();
            let message = service_err
                .message()
                .unwrap_or("no message from service")
                .to_string();
            if code == "NotFoundException" {
                ClientError::NotFound {
                    resource: format!("{resource} ({message})"),
                }
            } else {
                ClientError::Api { code, message }
            }
        }
        other => ClientError::Transport {
            message: other.to_string(),
        },
    }
}
