//! Resource registry
//!
//! Maps Terraform type names to their resource handlers. The plugin host
//! looks handlers up here and drives CRUD through the `Resource` trait.

use std::collections::HashMap;

use strata_account::{AccountApi, AccountConfig};

use crate::resources::permission::PermissionResource;
use crate::resources::service_account::ServiceAccountResource;
use crate::resources::Resource;

/// Registry of resource handlers keyed by Terraform type name
#[derive(Default)]
pub struct ResourceRegistry {
    resources: HashMap<&'static str, Box<dyn Resource>>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self {
            resources: HashMap::new(),
        }
    }

    /// Build a registry with every Strata resource handler wired to one
    /// API client and account configuration.
    pub fn with_defaults<C>(client: C, account: AccountConfig) -> Self
    where
        C: AccountApi + Clone + 'static,
    {
        let mut registry = Self::new();
        registry.register(Box::new(PermissionResource::new(
            client.clone(),
            account.clone(),
        )));
        registry.register(Box::new(ServiceAccountResource::new(client, account)));
        registry
    }

    pub fn register(&mut self, resource: Box<dyn Resource>) {
        let type_name = resource.type_name();
        self.resources.insert(type_name, resource);
    }

    pub fn get(&self, type_name: &str) -> Option<&dyn Resource> {
        self.resources.get(type_name).map(|r| r.as_ref())
    }

    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.resources.keys().copied()
    }
}
