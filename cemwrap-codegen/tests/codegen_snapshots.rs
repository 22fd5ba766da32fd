//! Snapshot tests for wrapper emission.
//!
//! These verify the full text of generated files. Run `cargo insta review`
//! to update snapshots when making intentional changes.

use cemwrap_codegen::{Generator, GeneratorConfig};
use cemwrap_manifest::Manifest;

fn config() -> GeneratorConfig {
    GeneratorConfig {
        library_import: "@acme/components".to_string(),
        ..GeneratorConfig::default()
    }
}

/// Generate previews for a manifest and return (path, content) pairs.
fn generate_files(manifest_json: &str, config: &GeneratorConfig) -> Vec<(String, String)> {
    let manifest = Manifest::parse(manifest_json, "custom-elements.json", &config.selector_prefix)
        .expect("manifest should parse");
    Generator::new(manifest.components(), config)
        .preview()
        .into_iter()
        .map(|file| (file.path, file.content))
        .collect()
}

fn get_file<'a>(files: &'a [(String, String)], path: &str) -> &'a str {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, content)| content.as_str())
        .unwrap_or_else(|| panic!("{path} not generated"))
}

#[test]
fn test_my_button_component() {
    let files = generate_files(
        r#"{
          "modules": [{
            "path": "src/my-button.ts",
            "declarations": [{
              "kind": "class",
              "tagName": "my-button",
              "description": "A clickable button.",
              "members": [
                {
                  "kind": "field",
                  "name": "label",
                  "type": {"text": "string"},
                  "optional": false,
                  "description": "Caption shown inside the button."
                },
                {"kind": "field", "name": "icon", "type": {"text": "IconDescriptor"}}
              ],
              "events": [
                {
                  "name": "button-click",
                  "type": {"text": "CustomEvent<void>"},
                  "description": "Fired on activation."
                }
              ]
            }]
          }]
        }"#,
        &config(),
    );

    let content = get_file(&files, "wc-my-button.component.ts");
    insta::assert_snapshot!("my_button_component", content);
}

#[test]
fn test_bare_component() {
    let files = generate_files(
        r#"{
          "modules": [{
            "declarations": [{"kind": "class", "tagName": "my-divider"}]
          }]
        }"#,
        &config(),
    );

    let content = get_file(&files, "wc-my-divider.component.ts");
    insta::assert_snapshot!("bare_component", content);
}

#[test]
fn test_public_api_file() {
    let files = generate_files(
        r#"{
          "modules": [{
            "declarations": [
              {"kind": "class", "tagName": "my-card"},
              {"kind": "class", "tagName": "my-badge"}
            ]
          }]
        }"#,
        &config(),
    );

    let content = get_file(&files, "public-api.ts");
    insta::assert_snapshot!("public_api", content);
}
