mod attrs;
mod check;
mod completions;
mod render;

use attrs::AttrsCommand;
use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use render::RenderCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for htmlprop_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "prop")]
#[command(version)]
#[command(about = "Build HTML attribute values from TOML definitions")]
pub(crate) struct Cli {
    /// Print debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Check(cmd) => cmd.run(),
            Commands::Attrs(cmd) => cmd.run(),
            Commands::Render(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate prop.toml and build every property
    Check(CheckCommand),

    /// Print the attributes built from prop.toml
    Attrs(AttrsCommand),

    /// Print the fragment serialized from prop.toml
    Render(RenderCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
