//! Resolution of custom type names that need an import from the component
//! library.

use std::collections::BTreeSet;

use cemwrap_manifest::ComponentMeta;

/// Platform and language types that never need an import: primitive wrappers,
/// standard event types, common DOM interfaces and TypeScript utility types.
pub const BUILTIN_TYPES: &[&str] = &[
    "AnimationEvent",
    "Array",
    "ArrayLike",
    "BigInt",
    "Blob",
    "Boolean",
    "ClipboardEvent",
    "CloseEvent",
    "CompositionEvent",
    "CustomEvent",
    "DOMRect",
    "Date",
    "Document",
    "DocumentFragment",
    "DragEvent",
    "Element",
    "Error",
    "ErrorEvent",
    "Event",
    "EventTarget",
    "File",
    "FileList",
    "FocusEvent",
    "FormData",
    "Function",
    "HTMLCollection",
    "HTMLElement",
    "InputEvent",
    "Iterable",
    "KeyboardEvent",
    "Map",
    "MessageEvent",
    "MouseEvent",
    "Node",
    "NodeList",
    "Number",
    "Object",
    "Omit",
    "Partial",
    "Pick",
    "PointerEvent",
    "ProgressEvent",
    "Promise",
    "PromiseLike",
    "ReadonlyArray",
    "Record",
    "RegExp",
    "Required",
    "Set",
    "ShadowRoot",
    "StorageEvent",
    "String",
    "SubmitEvent",
    "Symbol",
    "Text",
    "TouchEvent",
    "TransitionEvent",
    "UIEvent",
    "URL",
    "WeakMap",
    "WeakSet",
    "WheelEvent",
    "Window",
];

pub fn is_builtin_type(token: &str) -> bool {
    BUILTIN_TYPES.contains(&token)
}

/// Collect the custom type tokens referenced by a component's member and
/// event type text. Tokens are deduplicated and iterate in sorted order, so
/// the emitted import list is deterministic.
pub fn collect_custom_type_tokens(component: &ComponentMeta) -> BTreeSet<String> {
    let mut tokens = BTreeSet::new();
    for member in &component.members {
        scan_type_tokens(&member.ty, &mut tokens);
    }
    for event in &component.events {
        scan_type_tokens(&event.ty, &mut tokens);
    }
    tokens
}

/// Extract every candidate type-name token: an uppercase ASCII letter
/// followed by one or more letters, digits or underscores. Type text is
/// scanned as a whole, so unions (`A | B`) and generic wrappers
/// (`Array<Foo>`) contribute every embedded token, not just the head.
fn scan_type_tokens(text: &str, tokens: &mut BTreeSet<String>) {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_uppercase() {
            let start = i;
            i += 1;
            while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                i += 1;
            }
            if i - start > 1 {
                let token = &text[start..i];
                if !is_builtin_type(token) {
                    tokens.insert(token.to_string());
                }
            }
        } else {
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens_of(text: &str) -> Vec<String> {
        let mut tokens = BTreeSet::new();
        scan_type_tokens(text, &mut tokens);
        tokens.into_iter().collect()
    }

    #[test]
    fn test_builtin_generics_need_no_import() {
        assert!(tokens_of("Array<string>").is_empty());
        assert!(tokens_of("Promise<void>").is_empty());
        assert!(tokens_of("CustomEvent<number>").is_empty());
    }

    #[test]
    fn test_union_contributes_every_token() {
        assert_eq!(
            tokens_of("ColumnDefinition[] | GridData"),
            vec!["ColumnDefinition", "GridData"]
        );
    }

    #[test]
    fn test_tokens_inside_generics() {
        assert_eq!(tokens_of("Array<RowModel>"), vec!["RowModel"]);
        assert_eq!(
            tokens_of("CustomEvent<SelectionChange>"),
            vec!["SelectionChange"]
        );
    }

    #[test]
    fn test_single_letter_parameters_are_ignored() {
        assert!(tokens_of("A | B").is_empty());
        assert!(tokens_of("Map<K, V>").is_empty());
    }

    #[test]
    fn test_tokens_are_deduplicated_and_sorted() {
        assert_eq!(
            tokens_of("GridData | ColumnDefinition | GridData"),
            vec!["ColumnDefinition", "GridData"]
        );
    }

    #[test]
    fn test_collect_spans_members_and_events() {
        let mut component = ComponentMeta::new("my-grid", "wc-");
        component.members.push(cemwrap_manifest::ComponentMember {
            name: "columns".to_string(),
            ty: "ColumnDefinition[]".to_string(),
            optional: true,
            description: None,
        });
        component.events.push(cemwrap_manifest::ComponentEvent {
            event_name: "selection-changed".to_string(),
            output_name: "selectionChanged".to_string(),
            ty: "CustomEvent<GridData>".to_string(),
            description: None,
        });

        let tokens: Vec<_> = collect_custom_type_tokens(&component).into_iter().collect();
        assert_eq!(tokens, vec!["ColumnDefinition", "GridData"]);
    }
}
