// Result Store - keyed access to merged entities
// Reads the durable result tables written by the merge pass. Records are
// validated again on the way in; a result table edited by hand gets the
// same scrutiny as a source table.

use std::collections::BTreeMap;

use crate::entities::Bilingual;
use crate::error::PipelineError;
use crate::source::{self, Layout};

/// Load one kind's result table, keyed by codename.
pub fn load_store<E: Bilingual>(layout: &Layout) -> Result<BTreeMap<String, E>, PipelineError> {
    let path = layout.result_table(E::KIND);
    let records = source::read_table(&path, &E::RESULT_SHAPE)?;
    let mut store = BTreeMap::new();
    for record in records {
        let entity: E = source::from_record(&E::RESULT_SHAPE, record)?;
        store.insert(entity.codename().to_string(), entity);
    }
    Ok(store)
}

/// Entities of one kind in ascending codename order.
///
/// Used for printings to fix the export order regardless of source file
/// order.
pub fn load_sorted<E: Bilingual>(layout: &Layout) -> Result<Vec<E>, PipelineError> {
    Ok(load_store::<E>(layout)?.into_values().collect())
}

// ============================================================================
// TESTS
// ============================================================================
