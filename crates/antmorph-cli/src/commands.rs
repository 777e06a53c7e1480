//! Subcommand implementations.
//!
//! Every editing command loads the document, applies one change, and saves
//! it back only when something actually changed.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use antmorph::{ContextMode, Hand, Mode, NodePath, NodeRef, Schema};
use antmorph_build::{GenerationSummary, load_schema, save_schema};

pub fn new_schema(
    file: Option<&Path>,
    name: &str,
    version: &str,
    prefix: &str,
    deep: bool,
) -> Result<PathBuf> {
    let context = if deep { ContextMode::Deep } else { ContextMode::Flat };
    let mut schema = Schema::new(context);
    schema.set_name(name);
    schema.set_version(version);
    schema.set_prefix(prefix);

    let path = match file {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(schema.suggested_file_name()),
    };
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    save_schema(&mut schema, &path).with_context(|| format!("creating {}", path.display()))?;
    info!(path = %path.display(), "schema created");
    Ok(path)
}

/// Write every visible leaf, grouped by antecedent.
///
/// Empty leaves are skipped unless `all` is set; an antecedent with nothing
/// to show is skipped entirely.
pub fn show(out: &mut impl Write, schema: &Schema, hand: Option<Hand>, all: bool) -> Result<()> {
    writeln!(
        out,
        "{} ({}, prefix '{}')",
        schema.full_name().trim(),
        schema.context_mode().name(),
        schema.prefix()
    )?;

    for antecedent in schema.antecedents() {
        if hand.is_some_and(|h| antecedent.hand() != h) {
            continue;
        }
        let Some(node) = schema.item(NodePath::Antecedent(antecedent.antecedent_type())) else {
            continue;
        };
        let mut rows = Vec::new();
        collect_rows(schema, node, all, &mut rows);
        if rows.is_empty() && antecedent.note().is_empty() {
            continue;
        }

        if antecedent.note().is_empty() {
            writeln!(out, "{}", antecedent.symbol())?;
        } else {
            writeln!(out, "{}  # {}", antecedent.symbol(), antecedent.note())?;
        }
        for (path, mode, value) in rows {
            writeln!(out, "  {:<24} {:<7} {}", path, mode.name(), value)?;
        }
    }
    Ok(())
}

fn collect_rows(schema: &Schema, node: NodeRef<'_>, all: bool, rows: &mut Vec<(String, Mode, String)>) {
    if let Some(leaf) = node.leaf()
        && (all || !leaf.is_empty())
    {
        rows.push((node.path().to_string(), leaf.mode(), node.display_value(schema)));
    }
    for child in node.children(schema.context_mode()) {
        collect_rows(schema, child, all, rows);
    }
}

/// Change the mode and/or value at `path`. Returns whether anything changed.
pub fn set_leaf(schema: &mut Schema, path: &str, value: &str, mode: Option<Mode>) -> Result<bool> {
    let path = NodePath::parse(path).with_context(|| format!("bad path '{}'", path))?;
    if !matches!(path, NodePath::Morph(..) | NodePath::Mod(..)) {
        bail!("{} is not a morph or mod", path);
    }
    let context = schema.context_mode();
    let Some(mut node) = schema.item_mut(path) else {
        bail!("{} is hidden in {} mode", path, context.name());
    };

    let mut changed = false;
    if let Some(mode) = mode {
        changed |= node.set_mode(mode);
    }
    if mode != Some(Mode::SchemaName) {
        changed |= node.set_value(value);
    }
    debug!(%path, changed, "leaf edited");
    Ok(changed)
}

pub fn set_note(schema: &mut Schema, path: &str, text: &str) -> Result<bool> {
    let path = NodePath::parse(path).with_context(|| format!("bad path '{}'", path))?;
    if path == NodePath::Schema {
        bail!("notes belong to antecedents; the path must start with a symbol");
    }
    Ok(schema.set_note(path, text))
}

/// Apply schema property changes. `None` leaves a property alone.
pub fn set_props(
    schema: &mut Schema,
    name: Option<&str>,
    version: Option<&str>,
    prefix: Option<&str>,
    context: Option<ContextMode>,
) -> bool {
    let mut changed = false;
    if let Some(name) = name {
        changed |= schema.set_name(name);
    }
    if let Some(version) = version {
        changed |= schema.set_version(version);
    }
    if let Some(prefix) = prefix {
        changed |= schema.set_prefix(prefix);
    }
    if let Some(context) = context {
        changed |= schema.set_context_mode(context);
    }
    changed
}

/// Load, edit, and save back if `edit` reports a change.
pub fn edit_file(file: &Path, edit: impl FnOnce(&mut Schema) -> Result<bool>) -> Result<bool> {
    let mut schema = load_schema(file).with_context(|| format!("loading {}", file.display()))?;
    let changed = edit(&mut schema)?;
    if changed {
        save_schema(&mut schema, file).with_context(|| format!("saving {}", file.display()))?;
    }
    Ok(changed)
}

pub fn verify_file(file: &Path) -> Result<()> {
    let schema = load_schema(file).with_context(|| format!("loading {}", file.display()))?;
    antmorph_build::verify(&schema)?;
    Ok(())
}

pub fn generate(
    settings: &Path,
    schema: Option<&Path>,
    output: Option<&Path>,
) -> Result<GenerationSummary> {
    let summary = match (schema, output) {
        (Some(schema), Some(output)) => antmorph_build::generate_schema_file(schema, output)
            .with_context(|| format!("generating from {}", schema.display()))?,
        (Some(_), None) => bail!("--schema needs --output"),
        _ => antmorph_build::generate(settings)
            .with_context(|| format!("generating from {}", settings.display()))?,
    };
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use antmorph::SchemaItem;
    use tempfile::TempDir;

    fn created(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("s.amconf");
        new_schema(Some(&path), "Demo", "2", "d", false).unwrap()
    }

    #[test]
    fn new_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = created(&dir);
        assert!(new_schema(Some(&path), "Other", "1", "", true).is_err());
        assert_eq!(load_schema(&path).unwrap().name(), "Demo");
    }

    #[test]
    fn set_then_show() {
        let dir = TempDir::new().unwrap();
        let path = created(&dir);

        assert!(edit_file(&path, |s| set_leaf(s, "A.Base.NE", "a b", None)).unwrap());
        assert!(edit_file(&path, |s| set_leaf(s, "A.Base.E.GUI", "", Some(Mode::SchemaName))).unwrap());
        assert!(edit_file(&path, |s| set_note(s, "A.Base", "vowel")).unwrap());
        // Same value again: nothing to save.
        assert!(!edit_file(&path, |s| set_leaf(s, "A.Base.NE", "a b", None)).unwrap());

        let schema = load_schema(&path).unwrap();
        let mut out = Vec::new();
        show(&mut out, &schema, None, false).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Demo 2 (Flat, prefix 'd')\n"));
        assert!(text.contains("A  # vowel\n"));
        assert!(text.contains("A.Base.NE"));
        assert!(text.contains("a\u{00B7}b"));
        assert!(text.contains("SchName Demo 2"));
        assert!(!text.contains("\nB\n"));
    }

    #[test]
    fn show_filters_by_hand() {
        let mut schema = Schema::default();
        set_leaf(&mut schema, "A.Base.NE", "x", None).unwrap();
        set_leaf(&mut schema, "J.Base.NE", "y", None).unwrap();

        let mut out = Vec::new();
        show(&mut out, &schema, Some(Hand::Right), false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("J.Base.NE"));
        assert!(!text.contains("A.Base.NE"));
    }

    #[test]
    fn set_rejects_hidden_and_non_leaf_paths() {
        let mut schema = Schema::new(ContextMode::Flat);
        assert!(set_leaf(&mut schema, "A.Symbol.W", "x", None).is_err());
        assert!(set_leaf(&mut schema, "A.Base", "x", None).is_err());
        assert!(set_leaf(&mut schema, "A.Base.Up", "x", None).is_err());
        assert!(!schema.is_changed());
    }

    #[test]
    fn props_switch_context() {
        let mut schema = Schema::default();
        assert!(set_props(&mut schema, Some("N"), None, None, Some(ContextMode::Deep)));
        assert_eq!(schema.context_mode(), ContextMode::Deep);
        assert!(!set_props(&mut schema, Some("N"), None, None, None));
    }

    #[test]
    fn verify_reports_first_bad_leaf() {
        let dir = TempDir::new().unwrap();
        let path = created(&dir);
        edit_file(&path, |s| set_leaf(s, "B.Base.SW", "far too long", None)).unwrap();

        let err = verify_file(&path).unwrap_err();
        assert!(err.to_string().contains("[B.Base.SW] Invalid value"));
    }

    #[test]
    fn generate_from_schema_file() {
        let dir = TempDir::new().unwrap();
        let path = created(&dir);
        edit_file(&path, |s| set_leaf(s, "A.Base.E", "x", None)).unwrap();

        let output = dir.path().join("out.dtsi");
        let summary = generate(Path::new("unused.toml"), Some(&path), Some(&output)).unwrap();
        assert_eq!(summary.macros, 1);
        assert!(std::fs::read_to_string(&output).unwrap().contains("<&amd_x>"));
    }
}
