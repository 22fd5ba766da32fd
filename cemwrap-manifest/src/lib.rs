//! Custom elements manifest parsing for the cemwrap wrapper generator.
//!
//! A custom elements manifest is a JSON description of a web-component
//! library's public API, produced by an external analyzer. This crate reads
//! that document and normalizes every component-like class declaration into
//! a [`ComponentMeta`] record ready for code emission.
//!
//! Manifest producers in the wild vary in strictness, so the parser is
//! deliberately tolerant: a missing or oddly-shaped `modules`, `declarations`,
//! `members` or `events` field degrades to an empty collection instead of
//! failing. Only malformed JSON is an error.

mod error;
mod model;
mod parse;

pub use error::{Error, Result};
pub use model::{
    COMPONENT_FILE_SUFFIX, ComponentEvent, ComponentMember, ComponentMeta, DEFAULT_OPTIONAL,
    UNTYPED_EVENT, UNTYPED_MEMBER, WRAPPER_CLASS_PREFIX, WRAPPER_CLASS_SUFFIX,
};
pub use parse::Manifest;
