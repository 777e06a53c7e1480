use antmorph::*;
use std::fs;
use tempfile::TempDir;

fn edit(schema: &mut Schema, path: &str, mode: Mode, value: &str) {
    let path = NodePath::parse(path).unwrap();
    let mut node = schema.item_mut(path).unwrap();
    node.set_mode(mode);
    node.set_value(value);
}

#[test]
fn document_survives_disk_round_trip() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("layout.amconf");

    let mut schema = Schema::new(ContextMode::Deep);
    schema.set_name("Workman");
    schema.set_version("0.3");
    schema.set_prefix("w");
    edit(&mut schema, "E.Base.NE", Mode::Text, "e");
    edit(&mut schema, "E.Media.SE.Alt", Mode::MacroName, "vol");
    edit(&mut schema, "\\.Symbol.W", Mode::SchemaName, "");
    schema.set_note(NodePath::parse("E.Base").unwrap(), "most common letter");

    fs::write(&file, schema.to_json_string()).unwrap();

    let mut loaded = Schema::default();
    loaded
        .from_json_str(&fs::read_to_string(&file).unwrap())
        .unwrap();

    assert!(!loaded.is_changed());
    assert_eq!(loaded.full_name(), "Workman 0.3");
    assert_eq!(loaded.context_mode(), ContextMode::Deep);
    for path in ["E.Base.NE", "E.Media.SE.Alt", "\\.Symbol.W"] {
        let path = NodePath::parse(path).unwrap();
        let (expected, actual) = (schema.leaf(path).unwrap(), loaded.leaf(path).unwrap());
        assert_eq!(actual.mode(), expected.mode());
        assert_eq!(actual.value(), expected.value());
    }
    assert_eq!(loaded.note(NodePath::Antecedent(AntecedentType::E)), Some("most common letter"));
}

#[test]
fn hidden_layers_keep_data_across_mode_switch() {
    let mut schema = Schema::new(ContextMode::Deep);
    edit(&mut schema, "J.Navigation.E", Mode::Text, "j");
    schema.clear_changed();

    assert!(schema.set_context_mode(ContextMode::Flat));
    let path = NodePath::parse("J.Navigation.E").unwrap();
    assert!(schema.item(path).is_none());

    let mut reloaded = Schema::default();
    reloaded.from_document(&schema.to_document()).unwrap();
    reloaded.set_context_mode(ContextMode::Deep);
    assert_eq!(reloaded.item(path).unwrap().item().value(), "j");
}

#[test]
fn walking_the_tree_generically() {
    let schema = Schema::new(ContextMode::Flat);
    let root = schema.item(NodePath::Schema).unwrap();
    assert_eq!(root.item().child_count(ContextMode::Flat), 62);

    let mut leaves = 0;
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.item().kind().is_leaf() {
            leaves += 1;
            assert_eq!(node.item().available_modes().len(), 3);
        }
        stack.extend(node.children(ContextMode::Flat));
    }
    assert_eq!(leaves, schema.leaves().count());
}
