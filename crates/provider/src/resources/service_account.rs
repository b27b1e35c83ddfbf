//! Service account resource handler
//!
//! Service accounts are created and deleted, never mutated: the account
//! API offers no update call, and the access secret is only returned once
//! at creation time. Read and update are therefore local no-ops; changing
//! permissions requires delete and recreate.

use async_trait::async_trait;
use tracing::info;

use strata_account::{AccountApi, AccountConfig, Error, Result, ServiceAccountInput};

use super::Resource;
use crate::state::{
    get_string_attr, get_string_list_attr, make_state, string_list_value, string_value,
    DynamicValue,
};

/// Handler for the `strata_service_account` resource
pub struct ServiceAccountResource<C> {
    client: C,
    account: AccountConfig,
}

impl<C: AccountApi> ServiceAccountResource<C> {
    pub fn new(client: C, account: AccountConfig) -> Self {
        Self { client, account }
    }

    fn check_credentials(&self) -> Result<()> {
        if !self.account.has_account_credentials() {
            return Err(Error::MissingCredentials);
        }
        Ok(())
    }
}

#[async_trait]
impl<C: AccountApi> Resource for ServiceAccountResource<C> {
    fn type_name(&self) -> &'static str {
        "strata_service_account"
    }

    async fn create(&self, config: &DynamicValue) -> Result<DynamicValue> {
        self.check_credentials()?;

        let input = ServiceAccountInput {
            name: get_string_attr(config, "name"),
            description: get_string_attr(config, "description"),
            permissions: get_string_list_attr(config, "permissions"),
        };

        info!("Creating service account {}", input.name);
        let keys = self
            .client
            .create_service_account(&input)
            .await
            .map_err(|e| Error::remote("creating service account", e))?;

        Ok(make_state(vec![
            ("id", string_value(&keys.id)),
            ("name", string_value(&input.name)),
            ("description", string_value(&input.description)),
            ("permissions", string_list_value(&input.permissions)),
            ("access_key", string_value(&keys.access_key)),
            ("access_secret", string_value(&keys.access_secret)),
        ]))
    }

    /// Re-affirms the stored identifier only. The account API never returns
    /// the access secret again, so remote state is not re-fetched.
    async fn read(&self, state: &DynamicValue) -> Result<DynamicValue> {
        Ok(state.clone())
    }

    /// No-op: the account API cannot mutate an existing service account.
    async fn update(&self, state: &DynamicValue, _config: &DynamicValue) -> Result<DynamicValue> {
        Ok(state.clone())
    }

    async fn delete(&self, state: &DynamicValue) -> Result<()> {
        self.check_credentials()?;
        let id = get_string_attr(state, "id");

        info!("Deleting service account {}", id);
        self.client
            .delete_service_account(&id)
            .await
            .map_err(|e| Error::remote("deleting service account", e))?;
        Ok(())
    }
}
