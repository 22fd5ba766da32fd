use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result, bail};

#[derive(Args)]
pub struct InitCommand {
    /// npm name of the component library to wrap
    pub library: String,

    /// Where to write the config (defaults to ./cemwrap.toml)
    #[arg(short, long, default_value = "cemwrap.toml")]
    pub config: PathBuf,
}

impl InitCommand {
    /// Run the init command
    pub fn run(&self) -> Result<()> {
        if self.config.exists() {
            bail!("'{}' already exists", self.config.display());
        }

        let content = format!(
            r#"manifest = "custom-elements.json"
out-dir = "src/generated"
selector-prefix = "wc-"
library-import = "{library}"
standalone = false
package-name = "{library}-angular"
"#,
            library = self.library
        );
        std::fs::write(&self.config, content)
            .wrap_err_with(|| format!("failed to write '{}'", self.config.display()))?;

        println!("Created {}", self.config.display());
        println!();
        println!("Next steps:");
        println!("  1. produce a manifest: cemwrap generate --analyze");
        println!("  2. or point `manifest` at one your build already emits");

        Ok(())
    }
}
