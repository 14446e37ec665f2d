use siteconf::ValidationIssue;

use crate::args;
use crate::error::*;

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct CheckArgs {
    #[command(flatten, next_help_heading = "Config")]
    config: args::ConfigArgs,

    /// Fail on warnings too
    #[arg(long)]
    deny_warnings: bool,
}

impl CheckArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let project = self.config.project()?;
        let context = self.config.context();
        let issues = project.inspect(&self.config.loader(), context)?;

        let error_style = anstyle::AnsiColor::Red.on_default().bold();
        let warning_style = anstyle::AnsiColor::Yellow.on_default().bold();
        for issue in &issues {
            match issue {
                ValidationIssue::Error(error) => {
                    anstream::println!("{error_style}error{error_style:#}: {error}");
                }
                ValidationIssue::Warning(warning) => {
                    anstream::println!("{warning_style}warning{warning_style:#}: {warning}");
                }
            }
        }

        let errors = issues.iter().filter(|i| i.is_fatal()).count();
        let warnings = issues.len() - errors;
        anstream::println!(
            "{}: {errors} error(s), {warnings} warning(s) for {context}",
            project.site_file().display()
        );

        if 0 < errors {
            anyhow::bail!("Settings are not usable for {context}");
        }
        if self.deny_warnings && 0 < warnings {
            anyhow::bail!("Settings have warnings for {context}");
        }
        Ok(())
    }
}
