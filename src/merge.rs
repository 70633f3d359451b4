// Merge Layer - oracle/locale join and result-table writing
// One generic pass per entity kind: load both source tables, left-join by
// id, write the merged entities as a durable result table. The merge and
// collection stages are independently invocable; the result tables are the
// contract between them.

use std::collections::HashMap;
use std::fs;

use serde_json::Value;

use crate::entities::Bilingual;
use crate::error::PipelineError;
use crate::source::{self, Layout};

/// Left-join oracle records with their locale counterparts.
///
/// Output order follows oracle input order. An oracle record without a
/// locale counterpart aborts the kind with `MissingLocalization`; locale
/// records without an oracle counterpart are ignored (stale display data
/// cannot corrupt output, a missing translation would).
pub fn merge<E: Bilingual>(
    oracles: Vec<E::Oracle>,
    locales: &HashMap<String, E::Locale>,
) -> Result<Vec<E>, PipelineError> {
    let mut results = Vec::with_capacity(oracles.len());
    for oracle in oracles {
        let id = E::oracle_id(&oracle);
        let locale = locales
            .get(id)
            .cloned()
            .ok_or_else(|| PipelineError::MissingLocalization {
                kind: E::KIND,
                id: id.to_string(),
            })?;
        results.push(E::combine(oracle, locale));
    }
    Ok(results)
}

/// Write merged entities to the kind's result table.
///
/// Every entity is re-validated against the result shape before anything
/// reaches disk, so the pipeline cannot emit a malformed table. Output is
/// pretty-printed JSON with non-ASCII characters preserved literally.
pub fn write_result<E: Bilingual>(layout: &Layout, entities: &[E]) -> Result<(), PipelineError> {
    let path = layout.result_table(E::KIND);

    let mut records = Vec::with_capacity(entities.len());
    for entity in entities {
        let record: Value =
            serde_json::to_value(entity).map_err(|err| PipelineError::SchemaViolation {
                record: E::RESULT_SHAPE.record.to_string(),
                field: "<encode>".to_string(),
                detail: err.to_string(),
            })?;
        E::RESULT_SHAPE.validate(&record)?;
        records.push(record);
    }

    let text = serde_json::to_string_pretty(&records).map_err(|err| {
        PipelineError::SchemaViolation {
            record: E::RESULT_SHAPE.record.to_string(),
            field: "<encode>".to_string(),
            detail: err.to_string(),
        }
    })?;

    let unavailable = |err: std::io::Error| PipelineError::SourceUnavailable {
        path: path.clone(),
        detail: err.to_string(),
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(unavailable)?;
    }
    fs::write(&path, text + "\n").map_err(unavailable)
}

/// Run the whole merge pass for one kind. Returns the merged record count.
pub fn refresh<E: Bilingual>(layout: &Layout) -> Result<usize, PipelineError> {
    let oracles = source::load_oracle::<E>(layout)?;
    let locales = source::load_locale::<E>(layout)?;
    let merged = merge::<E>(oracles, &locales)?;
    write_result(layout, &merged)?;
    Ok(merged.len())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        LocaleCardType, LocaleSide, OracleCardType, OracleSide, ResultCardType, ResultSide,
    };

    fn oracle_side(id: &str, name: &str) -> OracleSide {
        OracleSide {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn locale_side(id: &str, name: &str) -> (String, LocaleSide) {
        (
            id.to_string(),
            LocaleSide {
                id: id.to_string(),
                name: name.to_string(),
            },
        )
    }

    #[test]
    fn merge_output_length_matches_oracle_input() {
        let oracles = vec![oracle_side("corp", "Corp"), oracle_side("runner", "Runner")];
        let locales: HashMap<_, _> = [
            locale_side("corp", "公司"),
            locale_side("runner", "潜袭者"),
        ]
        .into_iter()
        .collect();

        let merged = merge::<ResultSide>(oracles, &locales).unwrap();
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn merge_preserves_oracle_order() {
        let oracles = vec![
            oracle_side("runner", "Runner"),
            oracle_side("corp", "Corp"),
        ];
        let locales: HashMap<_, _> = [
            locale_side("corp", "公司"),
            locale_side("runner", "潜袭者"),
        ]
        .into_iter()
        .collect();

        let merged = merge::<ResultSide>(oracles, &locales).unwrap();
        assert_eq!(merged[0].codename, "runner");
        assert_eq!(merged[1].codename, "corp");
    }

    #[test]
    fn merge_pairs_oracle_and_locale_names() {
        let oracles = vec![oracle_side("corp", "Corp")];
        let locales: HashMap<_, _> = [locale_side("corp", "公司")].into_iter().collect();

        let merged = merge::<ResultSide>(oracles, &locales).unwrap();
        assert_eq!(merged[0].oracle_name, "Corp");
        assert_eq!(merged[0].locale_name, "公司");
    }

    #[test]
    fn missing_locale_counterpart_is_fatal() {
        let oracles = vec![oracle_side("corp", "Corp"), oracle_side("runner", "Runner")];
        let locales: HashMap<_, _> = [locale_side("corp", "公司")].into_iter().collect();

        let err = merge::<ResultSide>(oracles, &locales).unwrap_err();
        match err {
            PipelineError::MissingLocalization { kind, id } => {
                assert_eq!(kind, "sides");
                assert_eq!(id, "runner");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn first_missing_id_wins_in_oracle_order() {
        let oracles = vec![oracle_side("alpha", "A"), oracle_side("beta", "B")];
        let locales = HashMap::new();

        let err = merge::<ResultSide>(oracles, &locales).unwrap_err();
        match err {
            PipelineError::MissingLocalization { id, .. } => assert_eq!(id, "alpha"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn extra_locale_records_are_ignored() {
        let oracles = vec![oracle_side("corp", "Corp")];
        let locales: HashMap<_, _> = [
            locale_side("corp", "公司"),
            locale_side("ghost", "幽灵"),
        ]
        .into_iter()
        .collect();

        let merged = merge::<ResultSide>(oracles, &locales).unwrap();
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].codename, "corp");
    }

    #[test]
    fn merge_renames_foreign_keys() {
        let oracles = vec![OracleCardType {
            id: "program".to_string(),
            name: "Program".to_string(),
            side_id: "runner".to_string(),
        }];
        let locales: HashMap<_, _> = [(
            "program".to_string(),
            LocaleCardType {
                id: "program".to_string(),
                name: "程序".to_string(),
            },
        )]
        .into_iter()
        .collect();

        let merged = merge::<ResultCardType>(oracles, &locales).unwrap();
        assert_eq!(merged[0].side_codename, "runner");
    }

    #[test]
    fn write_result_round_trips_through_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::new(dir.path());
        let entities = vec![ResultSide {
            codename: "runner".to_string(),
            oracle_name: "Runner".to_string(),
            locale_name: "潜袭者".to_string(),
        }];

        write_result(&layout, &entities).unwrap();
        let text = std::fs::read_to_string(layout.result_table("sides")).unwrap();
        // Non-ASCII must land in the file literally, not escaped.
        assert!(text.contains("潜袭者"));

        let store = crate::store::load_store::<ResultSide>(&layout).unwrap();
        assert_eq!(store["runner"].locale_name, "潜袭者");
    }
}
