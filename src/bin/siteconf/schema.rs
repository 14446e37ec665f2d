use siteconf::SettingKey;

use crate::error::*;

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct SchemaArgs {}

impl SchemaArgs {
    pub(crate) fn run(&self) -> Result<()> {
        anstream::println!("# schema version {}", siteconf::SCHEMA_VERSION);
        for key in SettingKey::ALL {
            let required = if key.is_required() {
                "required"
            } else {
                "optional"
            };
            anstream::println!(
                "{:<24} {:<8} {:<8} {}",
                key.as_str(),
                key.kind().as_str(),
                required,
                key.generator_name()
            );
        }
        Ok(())
    }
}
