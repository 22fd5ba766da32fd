//! Normalized in-memory model of the components described by a manifest.

use cemwrap_core::{to_safe_identifier, to_title_case};
use serde::Serialize;

/// Type text used when a member carries no declared type.
/// Biased toward permissive typing so generated bindings never reject values.
pub const UNTYPED_MEMBER: &str = "any";

/// Event detail type used when an event carries no declared type.
pub const UNTYPED_EVENT: &str = "CustomEvent<unknown>";

/// Members without an explicit `optional` flag are treated as optional.
pub const DEFAULT_OPTIONAL: bool = true;

/// Prefix and suffix composing every generated wrapper class name.
pub const WRAPPER_CLASS_PREFIX: &str = "Wc";
pub const WRAPPER_CLASS_SUFFIX: &str = "Component";

/// File suffix shared by every generated wrapper source file.
pub const COMPONENT_FILE_SUFFIX: &str = ".component.ts";

/// A settable property surfaced by a custom element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentMember {
    /// Property identifier as declared on the element (never renamed).
    pub name: String,
    /// Raw declared type text, verbatim (unions and generics included).
    #[serde(rename = "type")]
    pub ty: String,
    pub optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A custom event a component may dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentEvent {
    /// Literal event name as dispatched (may contain dashes, dots, digits).
    pub event_name: String,
    /// Identifier-safe binding name derived from the event name.
    pub output_name: String,
    /// Raw declared event-detail type text.
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ComponentEvent {
    pub fn new(event_name: impl Into<String>) -> Self {
        let event_name = event_name.into();
        let output_name = to_safe_identifier(&event_name);
        Self {
            event_name,
            output_name,
            ty: UNTYPED_EVENT.to_string(),
            description: None,
        }
    }

    /// Whether the emitter property needs an alias back to the literal
    /// event name (dashes and dots never survive identifier derivation).
    pub fn needs_alias(&self) -> bool {
        self.output_name != self.event_name
    }
}

/// One generated wrapper unit, keyed by custom element tag name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentMeta {
    /// The custom element's registered tag, as found in the manifest.
    pub tag_name: String,
    /// Wrapper selector: configured prefix + tag name.
    pub selector: String,
    /// Wrapper class name: `Wc` + TitleCase(tag) + `Component`.
    pub class_name: String,
    /// Generated file name: selector + `.component.ts`.
    pub file_name: String,
    /// Manifest module path the declaration came from, kept for the header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_module: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub members: Vec<ComponentMember>,
    pub events: Vec<ComponentEvent>,
}

impl ComponentMeta {
    /// Build a record with all derived identifiers computed from the tag.
    pub fn new(tag_name: impl Into<String>, selector_prefix: &str) -> Self {
        let tag_name = tag_name.into();
        let selector = format!("{selector_prefix}{tag_name}");
        let class_name = format!(
            "{WRAPPER_CLASS_PREFIX}{}{WRAPPER_CLASS_SUFFIX}",
            to_title_case(&tag_name)
        );
        let file_name = format!("{selector}{COMPONENT_FILE_SUFFIX}");
        Self {
            tag_name,
            selector,
            class_name,
            file_name,
            source_module: None,
            description: None,
            members: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn has_members(&self) -> bool {
        !self.members.is_empty()
    }

    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_identifiers() {
        let meta = ComponentMeta::new("my-data-grid", "wc-");
        assert_eq!(meta.selector, "wc-my-data-grid");
        assert_eq!(meta.class_name, "WcMyDataGridComponent");
        assert_eq!(meta.file_name, "wc-my-data-grid.component.ts");
    }

    #[test]
    fn test_event_alias_detection() {
        assert!(ComponentEvent::new("item-selected").needs_alias());
        assert!(ComponentEvent::new("item.updated").needs_alias());
        assert!(!ComponentEvent::new("change").needs_alias());
    }
}
