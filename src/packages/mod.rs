//! # Package Manager Plugins
//!
//! Each supported package manager implements [`Plugin`]:
//!
//! - **General** (`general.rs`): one fixed command line (brew, gcloud, fisher, krew)
//! - **APT** (`apt.rs`): autoremove, index refresh, then a targeted upgrade
//!
//! `registry.rs` builds the list the `update` command walks.

pub mod apt;
pub mod general;
pub mod registry;
pub mod traits;

pub use registry::default_plugins;
pub use traits::Plugin;
