use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use htmlprop_manifest::PropToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct RenderCommand {
    /// Path to prop.toml (defaults to ./prop.toml)
    #[arg(short, long, default_value = "prop.toml")]
    pub config: PathBuf,
}

impl RenderCommand {
    pub fn run(&self) -> Result<()> {
        let prop_toml = PropToml::open(&self.config).unwrap_or_exit();

        let report = ops::render(prop_toml.manifest(), &self.config);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
