//! Tolerant walk of the manifest JSON into [`ComponentMeta`] records.

use std::path::Path;

use serde_json::{Map, Value};

use crate::{
    ComponentEvent, ComponentMember, ComponentMeta, DEFAULT_OPTIONAL, Error, Result, UNTYPED_MEMBER,
};

/// Declaration kind marking a class in the manifest schema.
const DECLARATION_KIND_CLASS: &str = "class";

/// Member kinds that map to settable properties on the element.
const MEMBER_KINDS: &[&str] = &["field", "property"];

/// Privacy markers (both the `privacy` field and `modifiers` entries).
const PRIVATE_PRIVACY: &[&str] = &["private", "protected"];

/// Leading characters marking a member as internal.
const PRIVATE_NAME_MARKERS: &[char] = &['_', '#'];

/// A parsed manifest, reduced to the components eligible for wrapping.
#[derive(Debug, Clone)]
pub struct Manifest {
    components: Vec<ComponentMeta>,
}

impl Manifest {
    /// Read and parse a manifest file, deriving wrapper identifiers with the
    /// given selector prefix.
    pub fn from_file(path: impl AsRef<Path>, selector_prefix: &str) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::io(path, source))?;
        Self::parse(&text, &path.display().to_string(), selector_prefix)
    }

    /// Parse manifest text. `source_name` is used for error reporting only.
    ///
    /// Malformed JSON fails the whole operation; a well-formed document with
    /// unexpected shapes degrades to an empty component list.
    pub fn parse(text: &str, source_name: &str, selector_prefix: &str) -> Result<Self> {
        let document: Value =
            serde_json::from_str(text).map_err(|source| Error::parse(source, text, source_name))?;

        let mut components: Vec<ComponentMeta> = document
            .get("modules")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .flat_map(|module| module_components(module, selector_prefix))
            .collect();

        // Manifest order is producer-dependent; tag order makes every
        // downstream output byte-for-byte reproducible.
        components.sort_by(|a, b| a.tag_name.cmp(&b.tag_name));

        Ok(Self { components })
    }

    pub fn components(&self) -> &[ComponentMeta] {
        &self.components
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }
}

fn module_components(module: &Value, selector_prefix: &str) -> Vec<ComponentMeta> {
    let module_path = module.get("path").and_then(Value::as_str);
    module
        .get("declarations")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|declaration| {
            component_from_declaration(declaration, module_path, selector_prefix)
        })
        .collect()
}

/// A declaration is a component when it is a class registered under a tag.
/// Interfaces, mixins, functions and tagless classes are skipped silently.
fn component_from_declaration(
    declaration: &Value,
    module_path: Option<&str>,
    selector_prefix: &str,
) -> Option<ComponentMeta> {
    let object = declaration.as_object()?;
    if object.get("kind").and_then(Value::as_str) != Some(DECLARATION_KIND_CLASS) {
        return None;
    }
    let tag_name = object
        .get("tagName")
        .and_then(Value::as_str)
        .filter(|tag| !tag.is_empty())?;

    let mut meta = ComponentMeta::new(tag_name, selector_prefix);
    meta.source_module = module_path.map(str::to_string);
    meta.description = string_field(object, "description");
    meta.members = extract_members(object.get("members"));
    meta.events = extract_events(object.get("events"));
    Some(meta)
}

fn extract_members(members: Option<&Value>) -> Vec<ComponentMember> {
    members
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(member_from_value)
        .collect()
}

fn member_from_value(member: &Value) -> Option<ComponentMember> {
    let object = member.as_object()?;
    let kind = object.get("kind").and_then(Value::as_str)?;
    if !MEMBER_KINDS.contains(&kind) {
        return None;
    }
    let name = object
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())?;
    if name.starts_with(PRIVATE_NAME_MARKERS) || is_private(object) {
        return None;
    }

    Some(ComponentMember {
        name: name.to_string(),
        ty: type_text(object).unwrap_or_else(|| UNTYPED_MEMBER.to_string()),
        optional: object
            .get("optional")
            .and_then(Value::as_bool)
            .unwrap_or(DEFAULT_OPTIONAL),
        description: string_field(object, "description"),
    })
}

fn is_private(object: &Map<String, Value>) -> bool {
    let declared_private = object
        .get("privacy")
        .and_then(Value::as_str)
        .is_some_and(|privacy| PRIVATE_PRIVACY.contains(&privacy));
    declared_private
        || object
            .get("modifiers")
            .and_then(Value::as_array)
            .is_some_and(|modifiers| {
                modifiers
                    .iter()
                    .filter_map(Value::as_str)
                    .any(|modifier| PRIVATE_PRIVACY.contains(&modifier))
            })
}

/// Events carry no privacy concept in the source schema, so none are filtered.
fn extract_events(events: Option<&Value>) -> Vec<ComponentEvent> {
    events
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(event_from_value)
        .collect()
}

fn event_from_value(event: &Value) -> Option<ComponentEvent> {
    let object = event.as_object()?;
    let name = object
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())?;

    let mut parsed = ComponentEvent::new(name);
    if let Some(ty) = type_text(object) {
        parsed.ty = ty;
    }
    parsed.description = string_field(object, "description");
    Some(parsed)
}

fn type_text(object: &Map<String, Value>) -> Option<String> {
    object
        .get("type")
        .and_then(|ty| ty.get("text"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
}
