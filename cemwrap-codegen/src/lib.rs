//! Angular wrapper code generator for cemwrap.
//!
//! Given the normalized component records produced by [`cemwrap_manifest`],
//! this crate renders one Angular component source per custom element, plus
//! the package's aggregate files, and reconciles the output directory so
//! repeated runs converge on exactly the set described by the manifest.
//!
//! # Usage
//!
//! This crate is used internally by the `cemwrap` CLI. You typically don't
//! need to use it directly.
//!
//! ```ignore
//! use cemwrap_codegen::{Generator, GeneratorConfig};
//! use cemwrap_manifest::Manifest;
//!
//! let config = GeneratorConfig::from_file("cemwrap.toml".as_ref())?;
//! let manifest = Manifest::from_file(config.manifest_path()?, &config.selector_prefix)?;
//! let generator = Generator::new(manifest.components(), &config);
//!
//! // Preview files without writing
//! let files = generator.preview();
//!
//! // Generate files to disk and clean up orphans
//! let result = generator.generate(&config.out_dir)?;
//! ```
//!
//! # Generated Output
//!
//! - `<selector>.component.ts` — one wrapper component per custom element
//! - `public-api.ts` — re-exports and the ordered component array
//! - `register.ts` — lazy one-time registration of the custom elements
//! - `package.json`, `tsconfig.json` — scaffold, written only when absent

mod builtins;
mod component;
mod config;
mod generator;

pub mod ast;
pub mod files;

pub use builtins::{BUILTIN_TYPES, collect_custom_type_tokens, is_builtin_type};
pub use component::ComponentFile;
pub use config::{
    DEFAULT_LIBRARY_IMPORT, DEFAULT_OUT_DIR, DEFAULT_PACKAGE_NAME, DEFAULT_SELECTOR_PREFIX,
    GeneratorConfig,
};
pub use generator::{GenerateResult, Generator, PreviewFile};
