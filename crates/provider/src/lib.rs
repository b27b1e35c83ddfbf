//! Strata Cloud Terraform Provider
//!
//! Resource handlers translating declarative configuration into calls
//! against the Strata account-management API. The plugin wire protocol,
//! plan/diff lifecycle, and state persistence belong to the external host;
//! this crate owns the CRUD mapping for each resource type.

pub mod registry;
pub mod resources;
pub mod state;

pub use registry::ResourceRegistry;
pub use resources::Resource;
