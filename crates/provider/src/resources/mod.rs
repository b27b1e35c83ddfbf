//! Resource Implementations
//!
//! Implements the CRUD operations for each resource type.

pub mod permission;
pub mod service_account;

use async_trait::async_trait;
use uuid::Uuid;

use crate::state::DynamicValue;
use strata_account::Result;

/// Length of the uniquifying suffix appended to generated names
const NAME_SUFFIX_LENGTH: usize = 8;

/// Trait for resource operations
#[async_trait]
pub trait Resource: Send + Sync {
    /// Terraform resource type name
    fn type_name(&self) -> &'static str;

    /// Create a new resource from its configuration
    async fn create(&self, config: &DynamicValue) -> Result<DynamicValue>;

    /// Refresh an existing resource from remote state
    async fn read(&self, state: &DynamicValue) -> Result<DynamicValue>;

    /// Update an existing resource
    async fn update(&self, state: &DynamicValue, config: &DynamicValue) -> Result<DynamicValue>;

    /// Delete a resource
    async fn delete(&self, state: &DynamicValue) -> Result<()>;
}

/// Resolve the final resource name from `name` or `name_prefix`.
///
/// An explicit name always wins. Otherwise the prefix is extended with a
/// uniquifying suffix so repeated applies do not collide.
pub fn name_with_suffix(name: &str, prefix: &str) -> String {
    if !name.is_empty() {
        return name.to_string();
    }
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}{}", prefix, &suffix[..NAME_SUFFIX_LENGTH])
}
