//! Wire types for the Strata Cloud account API

use serde::{Deserialize, Serialize};

use crate::Error;

/// Operations a permission grants on its buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionMode {
    AllOperations,
    ReadOnly,
    WriteOnly,
}

impl ActionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionMode::AllOperations => "all-operations",
            ActionMode::ReadOnly => "read-only",
            ActionMode::WriteOnly => "write-only",
        }
    }
}

impl std::fmt::Display for ActionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ActionMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all-operations" => Ok(ActionMode::AllOperations),
            "read-only" => Ok(ActionMode::ReadOnly),
            "write-only" => Ok(ActionMode::WriteOnly),
            other => Err(Error::InvalidActionMode(other.to_string())),
        }
    }
}

/// Mutually exclusive strategy selecting which buckets a permission covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BucketScope {
    AllBuckets,
    BucketPrefix(String),
    BucketNames(Vec<String>),
}

impl BucketScope {
    /// Stable kind string as recorded in the `type` attribute.
    pub fn kind(&self) -> &'static str {
        match self {
            BucketScope::AllBuckets => "all-buckets",
            BucketScope::BucketPrefix(_) => "bucket-prefix",
            BucketScope::BucketNames(_) => "bucket-names",
        }
    }

    /// Prefix field of the API payload. Empty unless prefix-scoped.
    pub fn prefix(&self) -> &str {
        match self {
            BucketScope::BucketPrefix(prefix) => prefix,
            _ => "",
        }
    }

    /// Buckets list of the API payload. A prefix scope carries the prefix
    /// in the list as well, matching what the account API expects.
    pub fn buckets(&self) -> Vec<String> {
        match self {
            BucketScope::AllBuckets => Vec::new(),
            BucketScope::BucketPrefix(prefix) => vec![prefix.clone()],
            BucketScope::BucketNames(names) => names.clone(),
        }
    }
}

/// Payload for permission create and update calls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionInput {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub permission_type: String,
    pub actions: ActionMode,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prefix: String,
    #[serde(default)]
    pub buckets: Vec<String>,
}

impl PermissionInput {
    pub fn new(
        name: String,
        description: String,
        actions: ActionMode,
        scope: &BucketScope,
    ) -> Self {
        Self {
            name,
            description,
            permission_type: scope.kind().to_string(),
            actions,
            prefix: scope.prefix().to_string(),
            buckets: scope.buckets(),
        }
    }
}

/// Permission record as returned by the account API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub permission_type: String,
    pub actions: ActionMode,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub buckets: Vec<String>,
    /// Whether the permission has finished provisioning remotely
    #[serde(default)]
    pub ready_state: bool,
}

/// Payload for service account creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceAccountInput {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Permission ids, submitted in configuration order
    pub permissions: Vec<String>,
}

/// One-time credentials returned when a service account is created.
///
/// The access secret is never returned by any later call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceAccountKeys {
    pub id: String,
    pub access_key: String,
    pub access_secret: String,
}

/// Service account record as returned by the account API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceAccountRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_mode_parses_known_values() {
        assert_eq!("all-operations".parse::<ActionMode>().unwrap(), ActionMode::AllOperations);
        assert_eq!("read-only".parse::<ActionMode>().unwrap(), ActionMode::ReadOnly);
        assert_eq!("write-only".parse::<ActionMode>().unwrap(), ActionMode::WriteOnly);
    }

    #[test]
    fn action_mode_rejects_unknown_values() {
        let err = "invalid-value".parse::<ActionMode>().unwrap_err();
        assert!(matches!(err, Error::InvalidActionMode(v) if v == "invalid-value"));
    }

    #[test]
    fn prefix_scope_carries_prefix_in_buckets() {
        let scope = BucketScope::BucketPrefix("team-".to_string());
        assert_eq!(scope.kind(), "bucket-prefix");
        assert_eq!(scope.prefix(), "team-");
        assert_eq!(scope.buckets(), vec!["team-".to_string()]);
    }

    #[test]
    fn permission_input_flattens_scope() {
        let scope = BucketScope::BucketNames(vec!["b1".into(), "b2".into()]);
        let input = PermissionInput::new(
            "p1".into(),
            String::new(),
            ActionMode::ReadOnly,
            &scope,
        );
        assert_eq!(input.permission_type, "bucket-names");
        assert_eq!(input.prefix, "");
        assert_eq!(input.buckets, vec!["b1".to_string(), "b2".to_string()]);

        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["type"], "bucket-names");
        assert_eq!(json["actions"], "read-only");
        // empty prefix is omitted from the payload
        assert!(json.get("prefix").is_none());
    }
}
