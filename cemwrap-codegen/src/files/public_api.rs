//! public-api.ts generator: the package's aggregate export surface.

use std::path::{Path, PathBuf};

use cemwrap_core::{FileRules, GeneratedFile};
use cemwrap_manifest::ComponentMeta;

use crate::ast::{DocBlock, Import};

/// The public-api.ts barrel file. Re-exports every generated wrapper class
/// and exposes them as one ordered literal array, in tag order.
pub struct PublicApiTs<'a> {
    components: &'a [ComponentMeta],
}

impl<'a> PublicApiTs<'a> {
    pub fn new(components: &'a [ComponentMeta]) -> Self {
        Self { components }
    }

    fn header() -> String {
        DocBlock::new()
            .line("Public API surface of the generated wrapper package.")
            .blank()
            .line("Generated file. Do not edit directly.")
            .build()
    }
}

impl GeneratedFile for PublicApiTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("public-api.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        let mut sections = vec![Self::header()];

        if self.components.is_empty() {
            sections.push("export const WRAPPER_COMPONENTS = [];".to_string());
        } else {
            let imports = self
                .components
                .iter()
                .map(|component| {
                    let stem = component
                        .file_name
                        .strip_suffix(".ts")
                        .unwrap_or(&component.file_name);
                    Import::new(format!("./{stem}"))
                        .named(component.class_name.clone())
                        .build()
                })
                .collect::<Vec<_>>()
                .join("\n");
            sections.push(imports);

            let names: Vec<&str> = self
                .components
                .iter()
                .map(|component| component.class_name.as_str())
                .collect();
            sections.push(format!("export {{ {} }};", names.join(", ")));

            let mut array = String::from("export const WRAPPER_COMPONENTS = [\n");
            for name in &names {
                array.push_str("  ");
                array.push_str(name);
                array.push_str(",\n");
            }
            array.push_str("];");
            sections.push(array);
        }

        sections.push("export { defineCustomElements } from './register';".to_string());
        sections.join("\n\n") + "\n"
    }
}
