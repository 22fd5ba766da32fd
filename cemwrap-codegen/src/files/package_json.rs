//! package.json scaffold for the generated wrapper package.

use std::path::{Path, PathBuf};

use cemwrap_core::{FileRules, GeneratedFile};

const DEFAULT_VERSION: &str = "0.0.1";

/// The package.json descriptor. Written once; after that the file belongs to
/// the user and regeneration leaves it alone.
pub struct PackageJson<'a> {
    name: &'a str,
    library_import: &'a str,
}

impl<'a> PackageJson<'a> {
    pub fn new(name: &'a str, library_import: &'a str) -> Self {
        Self {
            name,
            library_import,
        }
    }
}

impl GeneratedFile for PackageJson<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("package.json")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        format!(
            r#"{{
  "name": "{}",
  "version": "{}",
  "description": "Angular wrappers generated from a custom elements manifest",
  "sideEffects": false,
  "peerDependencies": {{
    "@angular/core": ">=16.0.0",
    "{}": "*"
  }}
}}
"#,
            self.name, DEFAULT_VERSION, self.library_import
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_json_references_the_library() {
        let content = PackageJson::new("acme-angular", "@acme/components").render();
        assert!(content.contains(r#""name": "acme-angular","#));
        assert!(content.contains(r#""@acme/components": "*""#));
    }
}
