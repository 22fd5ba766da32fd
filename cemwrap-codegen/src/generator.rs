//! The regeneration coordinator: writes the current generation of files and
//! reconciles the output directory against it.

use std::path::Path;

use cemwrap_core::{GeneratedFile, WriteResult};
use cemwrap_manifest::{COMPONENT_FILE_SUFFIX, ComponentMeta};
use eyre::{Context, Result};
use indexmap::IndexSet;

use crate::{
    GeneratorConfig,
    component::ComponentFile,
    files::{PackageJson, PublicApiTs, REGISTER_FILE_NAME, RegisterTs, TsConfig},
};

/// A rendered file that has not been written to disk.
#[derive(Debug, Clone)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

/// Outcome of one generation run.
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Component files written, in generation (tag) order.
    pub written: Vec<String>,
    /// Orphaned wrapper files deleted from the output directory.
    pub deleted: Vec<String>,
    /// Scaffold files left untouched because they already existed.
    pub skipped: Vec<String>,
}

/// Angular wrapper generator for a parsed manifest.
pub struct Generator<'a> {
    components: &'a [ComponentMeta],
    config: &'a GeneratorConfig,
}

impl<'a> Generator<'a> {
    pub fn new(components: &'a [ComponentMeta], config: &'a GeneratorConfig) -> Self {
        Self { components, config }
    }

    /// Preview generated files without writing to disk.
    pub fn preview(&self) -> Vec<PreviewFile> {
        let mut files = Vec::new();

        for component in self.components {
            files.push(PreviewFile {
                path: component.file_name.clone(),
                content: ComponentFile::new(component, self.config).render(),
            });
        }

        let public_api = PublicApiTs::new(self.components);
        files.push(PreviewFile {
            path: "public-api.ts".to_string(),
            content: public_api.render(),
        });

        let register = RegisterTs::new(&self.config.library_import);
        files.push(PreviewFile {
            path: REGISTER_FILE_NAME.to_string(),
            content: register.render(),
        });

        files
    }

    /// Generate all files into the output directory, then delete wrapper
    /// files from a previous generation that no longer have a component.
    ///
    /// Running twice with an unchanged manifest is byte-for-byte idempotent:
    /// the second run rewrites identical content and deletes nothing.
    pub fn generate(&self, out_dir: &Path) -> Result<GenerateResult> {
        std::fs::create_dir_all(out_dir)
            .wrap_err_with(|| format!("failed to create output directory '{}'", out_dir.display()))?;

        let mut result = GenerateResult::default();
        let mut kept: IndexSet<String> = IndexSet::new();

        for component in self.components {
            ComponentFile::new(component, self.config)
                .write(out_dir)
                .wrap_err_with(|| format!("failed to write wrapper '{}'", component.file_name))?;
            kept.insert(component.file_name.clone());
            result.written.push(component.file_name.clone());
        }

        PublicApiTs::new(self.components).write(out_dir)?;
        RegisterTs::new(&self.config.library_import).write(out_dir)?;

        let package_json = PackageJson::new(&self.config.package_name, &self.config.library_import);
        if package_json.write(out_dir)? == WriteResult::Skipped {
            result.skipped.push("package.json".to_string());
        }
        if TsConfig.write(out_dir)? == WriteResult::Skipped {
            result.skipped.push("tsconfig.json".to_string());
        }

        // The cleanup scan runs strictly after every write above, so a file
        // that is still part of the current generation can never be deleted
        // before its rewrite lands.
        result.deleted = remove_orphans(out_dir, &self.config.selector_prefix, &kept)?;

        Ok(result)
    }
}

/// Delete previously generated wrapper files that are no longer represented
/// in the manifest. Only files matching the configured prefix and the
/// wrapper suffix are considered; everything else in the directory is kept.
fn remove_orphans(
    out_dir: &Path,
    selector_prefix: &str,
    kept: &IndexSet<String>,
) -> Result<Vec<String>> {
    let mut deleted = Vec::new();

    let entries = std::fs::read_dir(out_dir)
        .wrap_err_with(|| format!("failed to scan output directory '{}'", out_dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if path.is_dir() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if !name.starts_with(selector_prefix) || !name.ends_with(COMPONENT_FILE_SUFFIX) {
            continue;
        }
        if kept.contains(name) {
            continue;
        }
        std::fs::remove_file(&path)
            .wrap_err_with(|| format!("failed to delete orphaned wrapper '{}'", path.display()))?;
        deleted.push(name.to_string());
    }

    deleted.sort();
    Ok(deleted)
}
