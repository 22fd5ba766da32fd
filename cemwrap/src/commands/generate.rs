use std::path::PathBuf;

use cemwrap_codegen::{Generator, GeneratorConfig};
use cemwrap_manifest::Manifest;
use clap::Args;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::analyzer;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to cemwrap.toml (defaults to ./cemwrap.toml)
    #[arg(short, long, default_value = "cemwrap.toml")]
    pub config: PathBuf,

    /// Manifest path, overriding the config file
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Run the manifest analyzer before generating
    #[arg(long)]
    pub analyze: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let mut config = self.load_config()?;
        if let Some(manifest) = &self.manifest {
            config.manifest = Some(manifest.clone());
        }

        // The manifest path is the one required setting; surface its absence
        // before touching the filesystem.
        let manifest_path = config.manifest_path()?.to_path_buf();

        if self.analyze {
            analyzer::run(&manifest_path)?;
        }

        let manifest =
            Manifest::from_file(&manifest_path, &config.selector_prefix).unwrap_or_exit();
        let generator = Generator::new(manifest.components(), &config);

        if self.dry_run {
            return Self::run_preview(&generator);
        }

        let result = generator
            .generate(&config.out_dir)
            .wrap_err("failed to generate wrappers")?;

        println!(
            "Generated {} component{} from {}",
            manifest.len(),
            if manifest.len() == 1 { "" } else { "s" },
            manifest_path.display()
        );
        for file in &result.written {
            println!("  + {}/{}", config.out_dir.display(), file);
        }
        if !result.deleted.is_empty() {
            println!();
            println!("Removed stale wrappers:");
            for file in &result.deleted {
                println!("  - {}/{}", config.out_dir.display(), file);
            }
        }
        if !result.skipped.is_empty() {
            println!();
            println!("Left untouched:");
            for file in &result.skipped {
                println!("  = {}/{}", config.out_dir.display(), file);
            }
        }

        Ok(())
    }

    fn load_config(&self) -> Result<GeneratorConfig> {
        if self.config.exists() {
            GeneratorConfig::from_file(&self.config)
        } else {
            Ok(GeneratorConfig::default())
        }
    }

    fn run_preview(generator: &Generator) -> Result<()> {
        let files = generator.preview();

        for file in &files {
            println!("── {} ──", file.path);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());

        Ok(())
    }
}
