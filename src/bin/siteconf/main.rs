use std::io::Write;

use clap::Parser;
use proc_exit::prelude::*;

mod args;
mod check;
mod error;
mod schema;
mod show;

/// Assemble and check the settings of a static site
#[derive(Debug, clap::Parser)]
#[command(version, about, propagate_version = true)]
struct Cli {
    #[command(flatten)]
    color: colorchoice_clap::Color,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::WarnLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
enum Command {
    /// Print the resolved settings
    Show(show::ShowArgs),

    /// Report every problem with the settings, not just the first
    Check(check::CheckArgs),

    /// List the recognized settings
    Schema(schema::SchemaArgs),
}

impl Command {
    fn run(&self) -> error::Result<()> {
        match self {
            Self::Show(cmd) => cmd.run(),
            Self::Check(cmd) => cmd.run(),
            Self::Schema(cmd) => cmd.run(),
        }
    }
}

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    let cli = Cli::parse();

    cli.color.write_global();
    init_logging(cli.verbose.log_level_filter());

    cli.command.run().with_code(proc_exit::Code::FAILURE)?;

    Ok(())
}

fn init_logging(level: log::LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter(None, level);
    builder.format(|f, record| {
        let level = format!("[{}]", record.level()).to_lowercase();
        writeln!(f, "{level:8} {}", record.args())
    });
    builder.init();
}
