//! register.ts generator: one-time loading of the component library.

use std::path::{Path, PathBuf};

use cemwrap_core::{FileRules, GeneratedFile};

pub const REGISTER_FILE_NAME: &str = "register.ts";

/// The register.ts helper. Loading the component library is a side effect
/// that defines every custom element, so it must happen exactly once per
/// process and never outside a browser-like environment. The guard is a
/// plain module-level latch, checked before every call.
pub struct RegisterTs<'a> {
    library_import: &'a str,
}

impl<'a> RegisterTs<'a> {
    pub fn new(library_import: &'a str) -> Self {
        Self { library_import }
    }
}

impl GeneratedFile for RegisterTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(REGISTER_FILE_NAME)
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        format!(
            r#"/**
 * Lazy one-time registration of the underlying custom elements.
 *
 * Generated file. Do not edit directly.
 */
let alreadyRegistered = false;

/**
 * Loads the component library once so its custom elements register
 * themselves. Repeated calls and non-browser environments are no-ops.
 */
export function defineCustomElements(): void {{
  if (alreadyRegistered) {{
    return;
  }}
  if (typeof window === 'undefined' || typeof customElements === 'undefined') {{
    return;
  }}
  alreadyRegistered = true;
  void import('{}');
}}
"#,
            self.library_import
        )
    }
}
