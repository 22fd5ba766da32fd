//! Core utilities for the cemwrap wrapper generator.
//!
//! This crate is the leaf of the workspace: string/identifier helpers used to
//! derive selectors, class names and event binding names from manifest data,
//! plus the file-writing primitives shared by every generated file.

mod file;
mod naming;

pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
pub use naming::{FALLBACK_IDENTIFIER, to_safe_identifier, to_title_case};
