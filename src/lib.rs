//! Assemble and check the settings an external static site generator runs with.
//!
//! A site has base settings, used for local previews, and optional publish overrides layered
//! on top of them when publishing.  [`SettingsLoader`] turns both into a checked
//! [`ConfigurationSet`]; [`Project`] finds and reads the files.

#![warn(clippy::print_stderr)]
#![warn(clippy::print_stdout)]

pub use siteconf_config::*;

pub mod loader;
pub mod project;
pub mod validate;

pub use crate::loader::OverridePolicy;
pub use crate::loader::Resolved;
pub use crate::loader::SettingsLoader;
pub use crate::project::Context;
pub use crate::project::Error;
pub use crate::project::Project;
pub use crate::validate::validate;
