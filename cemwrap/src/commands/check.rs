use std::path::PathBuf;

use cemwrap_codegen::GeneratorConfig;
use cemwrap_manifest::Manifest;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to cemwrap.toml (defaults to ./cemwrap.toml)
    #[arg(short, long, default_value = "cemwrap.toml")]
    pub config: PathBuf,

    /// Manifest path, overriding the config file
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let mut config = if self.config.exists() {
            GeneratorConfig::from_file(&self.config)?
        } else {
            GeneratorConfig::default()
        };
        if let Some(manifest) = &self.manifest {
            config.manifest = Some(manifest.clone());
        }
        let manifest_path = config.manifest_path()?.to_path_buf();

        let manifest =
            Manifest::from_file(&manifest_path, &config.selector_prefix).unwrap_or_exit();

        println!("✓ {} is valid\n", manifest_path.display());
        println!(
            "  {} component{}:",
            manifest.len(),
            if manifest.len() == 1 { "" } else { "s" }
        );
        for component in manifest.components() {
            println!(
                "    {} -> {} ({} member{}, {} event{})",
                component.tag_name,
                component.selector,
                component.members.len(),
                if component.members.len() == 1 { "" } else { "s" },
                component.events.len(),
                if component.events.len() == 1 { "" } else { "s" },
            );
        }

        Ok(())
    }
}
