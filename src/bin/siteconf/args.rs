use std::env;
use std::path;

use siteconf::Context;
use siteconf::OverridePolicy;
use siteconf::Project;
use siteconf::SettingsLoader;

use crate::error::*;

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ConfigArgs {
    /// Base settings [default: `_site.{yml,yaml,json,toml}` in the current directory or a parent]
    #[arg(short, long, value_name = "FILE")]
    config: Option<path::PathBuf>,

    /// Publish overrides, implies `--publish` [default: `_publish.*` next to the base settings]
    #[arg(long, value_name = "FILE")]
    overrides: Option<path::PathBuf>,

    /// Resolve the settings for publishing rather than a local preview
    #[arg(long)]
    publish: bool,

    /// Ignore unrecognized settings instead of failing
    #[arg(long)]
    lenient: bool,
}

impl ConfigArgs {
    pub(crate) fn project(&self) -> Result<Project> {
        let project = match self.config.as_deref() {
            Some(site_file) => Project::from_file(site_file),
            None => {
                let cwd = env::current_dir().context("Failed to read the current directory")?;
                Project::from_cwd(cwd)?
            }
        };
        let project = match self.overrides.as_deref() {
            Some(publish_file) => project.with_publish_file(publish_file),
            None => project,
        };
        log::info!("Using settings from `{}`", project.site_file().display());
        Ok(project)
    }

    pub(crate) fn context(&self) -> Context {
        if self.publish || self.overrides.is_some() {
            Context::Publish
        } else {
            Context::Preview
        }
    }

    pub(crate) fn loader(&self) -> SettingsLoader {
        let policy = if self.lenient {
            OverridePolicy::Lenient
        } else {
            OverridePolicy::Strict
        };
        SettingsLoader::with_policy(policy)
    }
}
