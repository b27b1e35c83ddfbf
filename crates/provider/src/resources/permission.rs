//! Permission resource handler
//!
//! Maps the `strata_permission` configuration onto account API permission
//! records. The three bucket-scope fields are mutually exclusive in the
//! schema; resolution still applies a fixed priority so an ambiguous
//! configuration cannot reach the API.

use async_trait::async_trait;
use tracing::{debug, info};

use strata_account::{
    AccountApi, AccountConfig, ActionMode, BucketScope, Error, PermissionInput, PermissionRecord,
    Result,
};

use super::{name_with_suffix, Resource};
use crate::state::{
    bool_value, get_bool_attr, get_optional_string_attr, get_string_attr, get_string_list_attr,
    make_state, string_list_value, string_value, DynamicValue,
};

/// Handler for the `strata_permission` resource
pub struct PermissionResource<C> {
    client: C,
    account: AccountConfig,
}

impl<C: AccountApi> PermissionResource<C> {
    pub fn new(client: C, account: AccountConfig) -> Self {
        Self { client, account }
    }

    fn check_credentials(&self) -> Result<()> {
        if !self.account.has_account_credentials() {
            return Err(Error::MissingCredentials);
        }
        Ok(())
    }

    /// Build the API payload from a configuration, validating the action
    /// mode and resolving the bucket scope before any call is made.
    fn build_input(config: &DynamicValue) -> Result<PermissionInput> {
        let name = name_with_suffix(
            &get_string_attr(config, "name"),
            &get_string_attr(config, "name_prefix"),
        );
        let description = get_string_attr(config, "description");
        let actions: ActionMode = get_string_attr(config, "actions").parse()?;
        let scope = resolve_scope(config)?;

        Ok(PermissionInput::new(name, description, actions, &scope))
    }

    async fn read_into_state(&self, id: &str, prior: &DynamicValue) -> Result<DynamicValue> {
        let record = self
            .client
            .get_permission(id)
            .await
            .map_err(|e| Error::remote("reading permission", e))?;
        Ok(permission_state(&record, prior))
    }
}

/// Pick the bucket scope with fixed priority: `all_buckets`, then
/// `bucket_prefix`, then `bucket_names`. First one set wins.
fn resolve_scope(config: &DynamicValue) -> Result<BucketScope> {
    if get_bool_attr(config, "all_buckets", false) {
        return Ok(BucketScope::AllBuckets);
    }
    if let Some(prefix) = get_optional_string_attr(config, "bucket_prefix") {
        return Ok(BucketScope::BucketPrefix(prefix));
    }
    let names = get_string_list_attr(config, "bucket_names");
    if !names.is_empty() {
        return Ok(BucketScope::BucketNames(names));
    }
    Err(Error::MissingBucketScope)
}

/// Build the full resource state from a remote record.
///
/// `name_prefix` and `all_buckets` are not echoed by the API and are
/// carried over from the prior state or configuration.
fn permission_state(record: &PermissionRecord, prior: &DynamicValue) -> DynamicValue {
    make_state(vec![
        ("id", string_value(&record.id)),
        ("name", string_value(&record.name)),
        ("name_prefix", string_value(get_string_attr(prior, "name_prefix"))),
        ("description", string_value(&record.description)),
        ("type", string_value(&record.permission_type)),
        ("actions", string_value(record.actions.as_str())),
        ("all_buckets", bool_value(get_bool_attr(prior, "all_buckets", false))),
        ("bucket_prefix", string_value(&record.prefix)),
        ("bucket_names", string_list_value(&record.buckets)),
        ("ready_state", bool_value(record.ready_state)),
    ])
}

#[async_trait]
impl<C: AccountApi> Resource for PermissionResource<C> {
    fn type_name(&self) -> &'static str {
        "strata_permission"
    }

    async fn create(&self, config: &DynamicValue) -> Result<DynamicValue> {
        self.check_credentials()?;
        let input = Self::build_input(config)?;

        info!("Creating permission {} ({})", input.name, input.permission_type);
        let record = self
            .client
            .create_permission(&input)
            .await
            .map_err(|e| Error::remote("creating permission", e))?;

        self.read_into_state(&record.id, config).await
    }

    async fn read(&self, state: &DynamicValue) -> Result<DynamicValue> {
        self.check_credentials()?;
        let id = get_string_attr(state, "id");

        debug!("Reading permission {}", id);
        self.read_into_state(&id, state).await
    }

    async fn update(&self, state: &DynamicValue, config: &DynamicValue) -> Result<DynamicValue> {
        self.check_credentials()?;
        let id = get_string_attr(state, "id");
        let input = Self::build_input(config)?;

        info!("Updating permission {}", id);
        self.client
            .update_permission(&id, &input)
            .await
            .map_err(|e| Error::remote("updating permission", e))?;

        self.read_into_state(&id, config).await
    }

    async fn delete(&self, state: &DynamicValue) -> Result<()> {
        self.check_credentials()?;
        let id = get_string_attr(state, "id");

        info!("Deleting permission {}", id);
        self.client
            .delete_permission(&id)
            .await
            .map_err(|e| Error::remote("deleting permission", e))?;
        Ok(())
    }
}
