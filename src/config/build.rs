// ABOUTME: Build specification document model.
// ABOUTME: Mirrors the CreateBuild request shape with AWS-style JSON keys.

use serde::Deserialize;

/// A new build to upload, as described by the operator's JSON document.
///
/// Keys follow the AWS wire convention (`Name`, `StorageLocation`, ...), so
/// existing documents written for the GameLift API work unchanged. `Name`
/// and `StorageLocation` are mandatory; everything else is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct BuildSpec {
    pub name: String,
    pub storage_location: StorageLocation,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub operating_system: Option<String>,
    #[serde(default)]
    pub server_sdk_version: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<Tag>>,
}

/// S3 location of the uploaded server binary package.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct StorageLocation {
    pub bucket: String,
    pub key: String,
    pub role_arn: String,
    #[serde(default)]
    pub object_version: Option<String>,
}

/// Resource tag key/value pair.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_document_parses() {
        let json = r#"{
            "Name": "my-server-build",
            "StorageLocation": {
                "Bucket": "my-bucket",
                "Key": "builds/server.zip",
                "RoleArn": "arn:aws:iam::123456789012:role/uploader"
            }
        }"#;
        let spec: BuildSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.name, "my-server-build");
        assert_eq!(spec.storage_location.bucket, "my-bucket");
        assert!(spec.version.is_none());
    }

    #[test]
    fn missing_storage_location_is_an_error() {
        let json = r#"{ "Name": "my-server-build" }"#;
        let err = serde_json::from_str::<BuildSpec>(json).unwrap_err();
        assert!(err.to_string().contains("StorageLocation"));
    }
}
