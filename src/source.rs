// Source Layer - filesystem layout and table loading
// One generic loader serves all fourteen entity kinds. Which file a kind
// reads is fixed by its Bilingual impl; only the data root is configurable.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::entities::Bilingual;
use crate::error::PipelineError;
use crate::schema::Shape;

// ============================================================================
// LAYOUT
// ============================================================================

/// Filesystem layout of one data root.
///
/// English source tables live under `source/enUS`, Chinese ones under
/// `source/zhCN`, merged result tables under `result`, and the final export
/// under `derivatives`.
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Layout { root: root.into() }
    }

    pub fn oracle_table(&self, file: &str) -> PathBuf {
        self.root
            .join("source")
            .join("enUS")
            .join(format!("{file}.json"))
    }

    pub fn locale_table(&self, file: &str) -> PathBuf {
        self.root
            .join("source")
            .join("zhCN")
            .join(format!("{file}.json"))
    }

    pub fn result_table(&self, kind: &str) -> PathBuf {
        self.root.join("result").join(format!("{kind}.json"))
    }

    pub fn export_file(&self) -> PathBuf {
        self.root.join("derivatives").join("collections.csv")
    }
}

// ============================================================================
// TABLE READING
// ============================================================================

/// Read one JSON table and validate every record against `shape`.
///
/// A file that cannot be read or is not a JSON array is `SourceUnavailable`;
/// a well-formed file containing an ill-shaped record is `SchemaViolation`.
pub(crate) fn read_table(path: &Path, shape: &Shape) -> Result<Vec<Value>, PipelineError> {
    let text = fs::read_to_string(path).map_err(|err| PipelineError::SourceUnavailable {
        path: path.to_path_buf(),
        detail: err.to_string(),
    })?;
    let records: Vec<Value> =
        serde_json::from_str(&text).map_err(|err| PipelineError::SourceUnavailable {
            path: path.to_path_buf(),
            detail: err.to_string(),
        })?;
    for record in &records {
        shape.validate(record)?;
    }
    Ok(records)
}

/// Deserialize one already-validated record into its typed form.
pub(crate) fn from_record<T: DeserializeOwned>(
    shape: &Shape,
    record: Value,
) -> Result<T, PipelineError> {
    serde_json::from_value(record).map_err(|err| PipelineError::SchemaViolation {
        record: shape.record.to_string(),
        field: "<decode>".to_string(),
        detail: err.to_string(),
    })
}

// ============================================================================
// ORACLE / LOCALE LOADERS
// ============================================================================

/// Load a kind's English oracle table, in file order.
///
/// Stateless and idempotent; repeated calls re-read the file.
pub fn load_oracle<E: Bilingual>(layout: &Layout) -> Result<Vec<E::Oracle>, PipelineError> {
    let path = layout.oracle_table(E::ORACLE_FILE);
    let records = read_table(&path, &E::ORACLE_SHAPE)?;
    records
        .into_iter()
        .map(|record| from_record(&E::ORACLE_SHAPE, record))
        .collect()
}

/// Load a kind's Chinese locale table, keyed by source id.
pub fn load_locale<E: Bilingual>(
    layout: &Layout,
) -> Result<HashMap<String, E::Locale>, PipelineError> {
    let path = layout.locale_table(E::LOCALE_FILE);
    let records = read_table(&path, &E::LOCALE_SHAPE)?;
    let mut table = HashMap::with_capacity(records.len());
    for record in records {
        let locale: E::Locale = from_record(&E::LOCALE_SHAPE, record)?;
        table.insert(E::locale_id(&locale).to_string(), locale);
    }
    Ok(table)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ResultSide;
    use std::fs;

    fn layout_with_oracle(content: &str) -> (tempfile::TempDir, Layout) {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::new(dir.path());
        let path = layout.oracle_table("sides");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        (dir, layout)
    }

    #[test]
    fn loads_oracle_records_in_file_order() {
        let (_dir, layout) = layout_with_oracle(
            r#"[
                {"id": "runner", "name": "Runner"},
                {"id": "corp", "name": "Corp"}
            ]"#,
        );
        let oracles = load_oracle::<ResultSide>(&layout).unwrap();
        assert_eq!(oracles.len(), 2);
        assert_eq!(oracles[0].id, "runner");
        assert_eq!(oracles[1].id, "corp");
    }

    #[test]
    fn repeated_loads_are_identical() {
        let (_dir, layout) =
            layout_with_oracle(r#"[{"id": "runner", "name": "Runner"}]"#);
        let first = load_oracle::<ResultSide>(&layout).unwrap();
        let second = load_oracle::<ResultSide>(&layout).unwrap();
        assert_eq!(first.len(), second.len());
        assert_eq!(first[0].id, second[0].id);
    }

    #[test]
    fn missing_file_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::new(dir.path());
        let err = load_oracle::<ResultSide>(&layout).unwrap_err();
        assert!(matches!(err, PipelineError::SourceUnavailable { .. }));
    }

    #[test]
    fn malformed_json_is_source_unavailable() {
        let (_dir, layout) = layout_with_oracle("this is not json");
        let err = load_oracle::<ResultSide>(&layout).unwrap_err();
        assert!(matches!(err, PipelineError::SourceUnavailable { .. }));
    }

    #[test]
    fn ill_shaped_record_is_schema_violation() {
        let (_dir, layout) =
            layout_with_oracle(r#"[{"id": "runner", "name": "Runner", "colour": "red"}]"#);
        let err = load_oracle::<ResultSide>(&layout).unwrap_err();
        match err {
            PipelineError::SchemaViolation { field, .. } => assert_eq!(field, "colour"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn locale_table_is_keyed_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::new(dir.path());
        let path = layout.locale_table("sides");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            r#"[
                {"id": "runner", "name": "潜袭者"},
                {"id": "corp", "name": "公司"}
            ]"#,
        )
        .unwrap();

        let locales = load_locale::<ResultSide>(&layout).unwrap();
        assert_eq!(locales.len(), 2);
        assert_eq!(locales["runner"].name, "潜袭者");
        assert_eq!(locales["corp"].name, "公司");
    }
}
