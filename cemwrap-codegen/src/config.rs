//! Generator configuration, loaded from `cemwrap.toml`.

use std::path::{Path, PathBuf};

use eyre::{Context, Result, eyre};
use serde::Deserialize;

pub const DEFAULT_OUT_DIR: &str = "src/generated";
pub const DEFAULT_SELECTOR_PREFIX: &str = "wc-";
pub const DEFAULT_LIBRARY_IMPORT: &str = "web-components";
pub const DEFAULT_PACKAGE_NAME: &str = "generated-wrappers";

/// Options recognized in `cemwrap.toml`. Every key is optional except
/// `manifest`, which is checked lazily via [`GeneratorConfig::manifest_path`]
/// so the missing-path error fires before any filesystem work.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GeneratorConfig {
    /// Path to the custom elements manifest produced by the analyzer.
    #[serde(default)]
    pub manifest: Option<PathBuf>,

    /// Directory receiving every generated file.
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Prefix prepended to each tag name to form selectors and file names.
    #[serde(default = "default_selector_prefix")]
    pub selector_prefix: String,

    /// Module specifier for type-only imports and the register helper.
    #[serde(default = "default_library_import")]
    pub library_import: String,

    /// Emit standalone components instead of module-declared ones.
    #[serde(default)]
    pub standalone: bool,

    /// Name written into the scaffold package descriptor.
    #[serde(default = "default_package_name")]
    pub package_name: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            manifest: None,
            out_dir: default_out_dir(),
            selector_prefix: default_selector_prefix(),
            library_import: default_library_import(),
            standalone: false,
            package_name: default_package_name(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config '{}'", path.display()))?;
        toml::from_str(&text)
            .wrap_err_with(|| format!("failed to parse config '{}'", path.display()))
    }

    /// The one required setting.
    pub fn manifest_path(&self) -> Result<&Path> {
        match self.manifest.as_deref() {
            Some(path) if !path.as_os_str().is_empty() => Ok(path),
            _ => Err(eyre!(
                "missing `manifest` path: set it in cemwrap.toml or pass --manifest"
            )),
        }
    }
}

fn default_out_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUT_DIR)
}

fn default_selector_prefix() -> String {
    DEFAULT_SELECTOR_PREFIX.to_string()
}

fn default_library_import() -> String {
    DEFAULT_LIBRARY_IMPORT.to_string()
}

fn default_package_name() -> String {
    DEFAULT_PACKAGE_NAME.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_to_missing_keys() {
        let config: GeneratorConfig = toml::from_str(r#"manifest = "cem.json""#).unwrap();
        assert_eq!(config.out_dir, PathBuf::from(DEFAULT_OUT_DIR));
        assert_eq!(config.selector_prefix, DEFAULT_SELECTOR_PREFIX);
        assert_eq!(config.library_import, DEFAULT_LIBRARY_IMPORT);
        assert!(!config.standalone);
    }

    #[test]
    fn test_kebab_case_keys() {
        let config: GeneratorConfig = toml::from_str(
            r#"
            manifest = "custom-elements.json"
            out-dir = "projects/wrappers/src"
            selector-prefix = "ui-"
            library-import = "@acme/components"
            standalone = true
            package-name = "acme-angular"
            "#,
        )
        .unwrap();
        assert_eq!(config.selector_prefix, "ui-");
        assert_eq!(config.library_import, "@acme/components");
        assert!(config.standalone);
        assert_eq!(config.package_name, "acme-angular");
    }

    #[test]
    fn test_manifest_path_is_required() {
        let config = GeneratorConfig::default();
        let err = config.manifest_path().unwrap_err();
        assert!(err.to_string().contains("manifest"));

        let empty = GeneratorConfig {
            manifest: Some(PathBuf::new()),
            ..GeneratorConfig::default()
        };
        assert!(empty.manifest_path().is_err());
    }
}
