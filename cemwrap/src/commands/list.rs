use std::path::PathBuf;

use cemwrap_codegen::GeneratorConfig;
use cemwrap_manifest::Manifest;
use clap::Args;
use eyre::{Context, Result};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ListCommand {
    /// Path to cemwrap.toml (defaults to ./cemwrap.toml)
    #[arg(short, long, default_value = "cemwrap.toml")]
    pub config: PathBuf,

    /// Manifest path, overriding the config file
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Print the normalized model as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    /// Run the list command
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

        if self.json {
            let rendered = serde_json::to_string_pretty(manifest.components())
                .wrap_err("failed to serialize component model")?;
            println!("{rendered}");
            return Ok(());
        }

        for component in manifest.components() {
            println!("{} ({})", component.tag_name, component.class_name);
            for member in &component.members {
                let optional = if member.optional { "?" } else { "" };
                println!("  .{}{}: {}", member.name, optional, member.ty);
            }
            for event in &component.events {
                println!("  @{} -> {}: {}", event.event_name, event.output_name, event.ty);
            }
        }

        Ok(())
    }
}
