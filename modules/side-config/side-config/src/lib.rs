//! Side Config Module
//!
//! Edits the per-node side configuration of TAXII miner nodes: API key and
//! header, basic-auth username and password, and certificate verification.
//! The record lives in the host config store under `<node>_side_config`.
//!
//! - [`module::SideConfigModule`] registers the miner node-detail tabs once
//!   and hands out editors.
//! - [`domain::SideConfigEditor`] runs the load, set-field, and toggle
//!   workflows against the host services in [`domain::HostServices`].
//! - [`domain::SideConfigReloader`] resolves the credentials a node sends
//!   with its requests.
//! - [`infra::storage::YamlFileConfigStore`] keeps records as YAML files.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod infra;
pub mod module;

#[cfg(test)]
mod test_support;

pub use config::SideConfigModuleConfig;
pub use domain::{
    DomainError, FieldUpdate, HostServices, NodeCredentials, SideConfigEditor, SideConfigReloader,
};
pub use infra::storage::YamlFileConfigStore;
pub use module::SideConfigModule;
