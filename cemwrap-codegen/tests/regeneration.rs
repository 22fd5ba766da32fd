//! Filesystem round-trip tests for the regeneration coordinator.

use std::{collections::BTreeMap, fs, path::Path};

use cemwrap_codegen::{GenerateResult, Generator, GeneratorConfig};
use cemwrap_manifest::Manifest;
use tempfile::TempDir;

fn config() -> GeneratorConfig {
    GeneratorConfig {
        library_import: "@acme/components".to_string(),
        ..GeneratorConfig::default()
    }
}

/// Build a minimal manifest declaring one tag-only class per entry.
fn manifest_with_tags(tags: &[&str]) -> String {
    let declarations: Vec<String> = tags
        .iter()
        .map(|tag| format!(r#"{{"kind": "class", "tagName": "{tag}"}}"#))
        .collect();
    format!(
        r#"{{"modules": [{{"declarations": [{}]}}]}}"#,
        declarations.join(", ")
    )
}

fn generate(manifest_json: &str, out_dir: &Path) -> GenerateResult {
    let config = config();
    let manifest = Manifest::parse(manifest_json, "custom-elements.json", &config.selector_prefix)
        .expect("manifest should parse");
    Generator::new(manifest.components(), &config)
        .generate(out_dir)
        .expect("generation should succeed")
}

/// Read back every file in the output directory, keyed by file name.
fn dir_contents(out_dir: &Path) -> BTreeMap<String, String> {
    fs::read_dir(out_dir)
        .unwrap()
        .map(|entry| {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            let content = fs::read_to_string(&path).unwrap();
            (name, content)
        })
        .collect()
}

#[test]
fn test_generation_writes_components_in_tag_order() {
    let temp = TempDir::new().unwrap();
    let result = generate(
        &manifest_with_tags(&["my-tooltip", "my-badge", "my-card"]),
        temp.path(),
    );

    assert_eq!(
        result.written,
        vec![
            "wc-my-badge.component.ts",
            "wc-my-card.component.ts",
            "wc-my-tooltip.component.ts",
        ]
    );
    assert!(result.deleted.is_empty());

    let files = dir_contents(temp.path());
    assert!(files.contains_key("public-api.ts"));
    assert!(files.contains_key("register.ts"));
    assert!(files.contains_key("package.json"));
    assert!(files.contains_key("tsconfig.json"));
}

#[test]
fn test_rerun_is_byte_identical_and_deletes_nothing() {
    let temp = TempDir::new().unwrap();
    let manifest = manifest_with_tags(&["my-badge", "my-card"]);

    generate(&manifest, temp.path());
    let first = dir_contents(temp.path());

    let result = generate(&manifest, temp.path());
    let second = dir_contents(temp.path());

    assert_eq!(first, second);
    assert!(result.deleted.is_empty());
}

#[test]
fn test_removed_components_are_cleaned_up() {
    let temp = TempDir::new().unwrap();

    generate(
        &manifest_with_tags(&["my-alert", "my-badge", "my-card"]),
        temp.path(),
    );
    let result = generate(&manifest_with_tags(&["my-alert"]), temp.path());

    assert_eq!(
        result.deleted,
        vec!["wc-my-badge.component.ts", "wc-my-card.component.ts"]
    );
    assert!(temp.path().join("wc-my-alert.component.ts").exists());
    assert!(!temp.path().join("wc-my-badge.component.ts").exists());
    assert!(!temp.path().join("wc-my-card.component.ts").exists());
}

#[test]
fn test_unrelated_files_survive_cleanup() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("notes.txt"), "keep me").unwrap();
    fs::write(temp.path().join("wc-legacy.component.ts"), "stale").unwrap();

    let result = generate(&manifest_with_tags(&["my-badge"]), temp.path());

    assert_eq!(result.deleted, vec!["wc-legacy.component.ts"]);
    assert!(temp.path().join("notes.txt").exists());
}

#[test]
fn test_scaffold_files_are_never_overwritten() {
    let temp = TempDir::new().unwrap();
    let manifest = manifest_with_tags(&["my-badge"]);

    generate(&manifest, temp.path());
    fs::write(temp.path().join("package.json"), "{ \"edited\": true }").unwrap();

    let result = generate(&manifest, temp.path());

    assert_eq!(
        fs::read_to_string(temp.path().join("package.json")).unwrap(),
        "{ \"edited\": true }"
    );
    assert!(result.skipped.contains(&"package.json".to_string()));
    assert!(result.skipped.contains(&"tsconfig.json".to_string()));
}

#[test]
fn test_end_to_end_my_button() {
    let temp = TempDir::new().unwrap();
    let manifest = r#"{
      "modules": [{
        "path": "src/my-button.ts",
        "declarations": [{
          "kind": "class",
          "tagName": "my-button",
          "members": [
            {"kind": "field", "name": "label", "type": {"text": "string"}, "optional": false}
          ],
          "events": [
            {"name": "button-click", "type": {"text": "CustomEvent<void>"}}
          ]
        }]
      }]
    }"#;

    generate(manifest, temp.path());

    let content = fs::read_to_string(temp.path().join("wc-my-button.component.ts")).unwrap();
    assert!(content.contains("selector: 'wc-my-button',"));
    assert!(content.contains("  label: string;"));
    assert!(!content.contains("label?:"));
    assert!(content.contains("@Output('button-click')"));
    assert!(content.contains("buttonClick = new EventEmitter<CustomEvent<void>>();"));
}
