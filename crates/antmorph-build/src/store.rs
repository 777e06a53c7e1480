//! Reading and writing schema documents on disk.

use std::path::Path;

use antmorph::{DocumentError, Schema, SchemaItem};

/// Load a schema document from `path` and remember the path.
pub fn load_schema(path: impl AsRef<Path>) -> Result<Schema, StoreError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| StoreError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    let mut schema = Schema::default();
    schema.from_json_str(&text)?;
    schema.set_file_path(path);

    tracing::debug!(path = %path.display(), name = schema.name(), "schema loaded");
    Ok(schema)
}

/// Write `schema` to `path` as pretty-printed JSON.
///
/// A new schema adopts `path` as its file path. Changed flags are cleared.
pub fn save_schema(schema: &mut Schema, path: impl AsRef<Path>) -> Result<(), StoreError> {
    let path = path.as_ref();
    let mut text = schema.to_json_string();
    text.push('\n');
    std::fs::write(path, text)
        .map_err(|e| StoreError::Io(format!("Failed to write {}: {}", path.display(), e)))?;

    if schema.is_new() {
        schema.set_file_path(path);
    }
    schema.clear_changed();

    tracing::debug!(path = %path.display(), "schema saved");
    Ok(())
}

/// Write `schema` to `path` and make `path` its file path from now on.
pub fn save_schema_as(schema: &mut Schema, path: impl AsRef<Path>) -> Result<(), StoreError> {
    let path = path.as_ref();
    save_schema(schema, path)?;
    schema.set_file_path(path);
    Ok(())
}

/// Errors while loading or saving a schema document.
#[derive(Debug)]
pub enum StoreError {
    /// IO error
    Io(String),
    /// The file is not a schema document
    Document(DocumentError),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {}", msg),
            Self::Document(e) => write!(f, "Document error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<DocumentError> for StoreError {
    fn from(e: DocumentError) -> Self {
        Self::Document(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use antmorph::{AntecedentType, Direction, LayerType, NodePath};
    use tempfile::TempDir;

    #[test]
    fn save_adopts_path_and_clears_changed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("s.amconf");

        let mut schema = Schema::default();
        schema.set_name("S");
        assert!(schema.is_new());
        save_schema(&mut schema, &path).unwrap();

        assert_eq!(schema.file_path(), Some(path.as_path()));
        assert!(!schema.is_changed());
        assert!(std::fs::read_to_string(&path).unwrap().contains("\"format\": 1"));
    }

    #[test]
    fn save_to_another_path_keeps_file_path() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first.amconf");
        let copy = dir.path().join("copy.amconf");

        let mut schema = Schema::default();
        save_schema(&mut schema, &first).unwrap();
        save_schema(&mut schema, &copy).unwrap();
        assert_eq!(schema.file_path(), Some(first.as_path()));
        assert!(copy.exists());
    }

    #[test]
    fn save_as_adopts_new_path() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first.amconf");
        let renamed = dir.path().join("renamed.amconf");

        let mut schema = Schema::default();
        save_schema(&mut schema, &first).unwrap();
        schema.set_name("Renamed");
        save_schema_as(&mut schema, &renamed).unwrap();

        assert_eq!(schema.file_path(), Some(renamed.as_path()));
        assert!(!schema.is_changed());
        assert_eq!(load_schema(&renamed).unwrap().name(), "Renamed");
        assert_eq!(load_schema(&first).unwrap().name(), "");
    }

    #[test]
    fn load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("s.amconf");

        let mut schema = Schema::default();
        let leaf = NodePath::Morph(AntecedentType::K, LayerType::Base, Direction::SouthEast);
        schema.item_mut(leaf).unwrap().set_value("k");
        save_schema(&mut schema, &path).unwrap();

        let loaded = load_schema(&path).unwrap();
        assert_eq!(loaded.leaf(leaf).unwrap().value(), "k");
        assert_eq!(loaded.file_path(), Some(path.as_path()));
        assert!(!loaded.is_changed());
    }

    #[test]
    fn load_errors() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            load_schema(dir.path().join("missing.amconf")),
            Err(StoreError::Io(_))
        ));

        let path = dir.path().join("array.amconf");
        std::fs::write(&path, "[]").unwrap();
        assert!(matches!(
            load_schema(&path),
            Err(StoreError::Document(DocumentError::NotAnObject))
        ));
    }
}
