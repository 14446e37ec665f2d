use siteconf::ArticleSample;
use siteconf::Pattern;
use siteconf::SettingKey;
use siteconf::ValueKind;

use crate::args;
use crate::error::*;

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ShowArgs {
    #[command(flatten, next_help_heading = "Config")]
    config: args::ConfigArgs,

    /// Print JSON keyed by the names the generator reads
    #[arg(long)]
    generator_names: bool,

    /// Also print where an article with this slug would be served and saved
    #[arg(long, value_name = "SLUG")]
    sample_slug: Option<String>,
}

impl ShowArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let project = self.config.project()?;
        let context = self.config.context();
        let resolved = project.resolve(&self.config.loader(), context)?;
        log::info!("Resolved {} settings for {context}", resolved.settings.len());

        if self.generator_names {
            let converted = serde_json::to_string_pretty(&resolved.settings.to_generator_map())?;
            anstream::println!("{converted}");
        } else {
            anstream::println!("{}", resolved.settings);
        }

        if let Some(slug) = self.sample_slug.as_deref() {
            let sample = ArticleSample::with_slug(slug);
            for key in SettingKey::ALL {
                if key.kind() != ValueKind::Pattern {
                    continue;
                }
                let Some(pattern) = resolved.settings.text(key) else {
                    continue;
                };
                let rendered = Pattern::parse(pattern)
                    .and_then(|pattern| pattern.render(&sample))
                    .with_context(|| format!("`{key}` could not be rendered"))?;
                anstream::println!("# {key}: {rendered}");
            }
        }

        Ok(())
    }
}
