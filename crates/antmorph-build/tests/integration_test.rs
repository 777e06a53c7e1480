//! Integration tests for antmorph-build.

use antmorph::{AntecedentType, ContextMode, Direction, LayerType, ModType, Mode, NodePath, Schema};
use antmorph_build::{
    generate, generate_schema_file, generate_to_string, load_schema, save_schema, GenerateError,
    SettingsError, StoreError, VerifyError,
};
use std::fs;
use tempfile::TempDir;

fn set(schema: &mut Schema, path: NodePath, mode: Mode, value: &str) {
    let mut node = schema.item_mut(path).expect("visible path");
    node.set_mode(mode);
    node.set_value(value);
}

fn sample_schema() -> Schema {
    let mut schema = Schema::new(ContextMode::Flat);
    schema.set_name("Sample");
    schema.set_version("1");
    schema.set_prefix("s");
    set(
        &mut schema,
        NodePath::Morph(AntecedentType::A, LayerType::Base, Direction::East),
        Mode::Text,
        "x",
    );
    set(
        &mut schema,
        NodePath::Mod(AntecedentType::A, LayerType::Base, Direction::East, ModType::Gui),
        Mode::SchemaName,
        "",
    );
    set(
        &mut schema,
        NodePath::Morph(AntecedentType::Dot, LayerType::Base, Direction::West),
        Mode::MacroName,
        "q",
    );
    schema
}

/// Create a temp directory with a saved schema and an antmorph.toml
fn setup(settings: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let mut schema = sample_schema();
    save_schema(&mut schema, dir.path().join("layout.amconf")).unwrap();

    let settings_path = dir.path().join("antmorph.toml");
    fs::write(&settings_path, settings).unwrap();
    (dir, settings_path)
}

#[test]
fn generate_writes_default_output() {
    let (dir, settings_path) = setup("schema = \"layout.amconf\"\n");

    let summary = generate(&settings_path).unwrap();
    assert_eq!(summary.macros, 2);

    let output = dir.path().join("antecedent_morphs.dtsi");
    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(text.len(), summary.bytes);
    assert!(text.starts_with("// Sample schema version 1\n"));
    assert!(text.contains("        amse: am_s_e {\n"));
    assert!(text.contains("            bindings = <&ams_x>;\n"));
    assert!(text.contains("            bindings = <&amstdm_q>;\n            antecedents = <0x070037>;\n"));
    assert!(text.contains("            // [a]Sample 1\n"));
    assert!(text.ends_with("    };\n};\n"));
}

#[test]
fn prefix_override_and_custom_output() {
    let (dir, settings_path) = setup(
        r#"
schema = "layout.amconf"
output = "out.dtsi"
prefix = "z"
"#,
    );

    generate(&settings_path).unwrap();

    let text = fs::read_to_string(dir.path().join("out.dtsi")).unwrap();
    assert!(text.contains("amzneagm: amzneagm {"));
    assert!(text.contains("bindings = <&amz_x>;"));
    assert!(!text.contains("ams_x"));

    // The override is not written back to the schema.
    let schema = load_schema(dir.path().join("layout.amconf")).unwrap();
    assert_eq!(schema.prefix(), "s");
}

#[test]
fn generation_is_deterministic() {
    let schema = sample_schema();
    let first = generate_to_string(&schema).unwrap();
    let second = generate_to_string(&schema).unwrap();
    assert_eq!(first, second);
}

#[test]
fn invalid_schema_is_not_written() {
    let dir = TempDir::new().unwrap();
    let mut schema = sample_schema();
    set(
        &mut schema,
        NodePath::Morph(AntecedentType::B, LayerType::Base, Direction::NorthWest),
        Mode::Text,
        "too long",
    );
    let schema_path = dir.path().join("bad.amconf");
    save_schema(&mut schema, &schema_path).unwrap();

    let output = dir.path().join("bad.dtsi");
    let result = generate_schema_file(&schema_path, &output);

    match result.unwrap_err() {
        GenerateError::Verify(VerifyError::InvalidValue { path, value }) => {
            assert_eq!(path.to_string(), "B.Base.NW");
            assert_eq!(value, "too long");
        }
        other => panic!("Expected InvalidValue, got: {:?}", other),
    }
    assert!(!output.exists());
}

#[test]
fn qmk_settings_are_rejected() {
    let (_dir, settings_path) = setup("schema = \"layout.amconf\"\nfirmware = \"qmk\"\n");
    assert!(matches!(
        generate(&settings_path),
        Err(GenerateError::Settings(SettingsError::Validation(_)))
    ));
}

#[test]
fn missing_schema_document() {
    let (_dir, settings_path) = setup("schema = \"nowhere.amconf\"\n");
    assert!(matches!(
        generate(&settings_path),
        Err(GenerateError::Document(StoreError::Io(_)))
    ));
}

#[test]
fn deep_schema_round_trips_through_disk() {
    let dir = TempDir::new().unwrap();
    let mut schema = sample_schema();
    schema.set_context_mode(ContextMode::Deep);
    set(
        &mut schema,
        NodePath::Morph(AntecedentType::N5, LayerType::Number, Direction::SouthWest),
        Mode::Text,
        "%",
    );
    let expected = generate_to_string(&schema).unwrap();

    let schema_path = dir.path().join("deep.amconf");
    let output = dir.path().join("deep.dtsi");
    save_schema(&mut schema, &schema_path).unwrap();
    generate_schema_file(&schema_path, &output).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), expected);
    assert!(expected.contains("        // Function layer\n"));
    assert!(expected.contains("        amsnumsw: am_s_num_sw {\n"));
    assert!(expected.contains("            // [5]%\n            bindings = <&macro_tap &kp BSPC &kp PRCNT>;\n"));
}
