use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eyre::{Context, Result};
use htmlprop_manifest::PropToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Format {
    /// One `name="value"` line per attribute
    #[default]
    Text,
    /// A JSON object, in attribute order
    Json,
}

#[derive(Args)]
pub struct AttrsCommand {
    /// Path to prop.toml (defaults to ./prop.toml)
    #[arg(short, long, default_value = "prop.toml")]
    pub config: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: Format,
}

impl AttrsCommand {
    pub fn run(&self) -> Result<()> {
        let prop_toml = PropToml::open(&self.config).unwrap_or_exit();
        let report = ops::attrs(prop_toml.manifest())?;

        match self.format {
            Format::Text => report.render(&mut TerminalOutput::new()),
            Format::Json => {
                let json = serde_json::to_string_pretty(&report.attributes)
                    .wrap_err("Failed to serialize attributes")?;
                println!("{}", json);
            }
        }

        Ok(())
    }
}
