// Collection Builder - the final relational join
// Walks all printings in codename order, resolves the full foreign-key
// chain through the other stores, and flattens each printing into one
// 51-column export row. Any unresolved codename aborts the build; no
// partial rows are ever emitted.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entities::{
    ResultCard, ResultCardType, ResultCycle, ResultFaction, ResultPrinting, ResultSet,
    ResultSettype, ResultSide, ResultSubtype,
};
use crate::error::PipelineError;
use crate::source::Layout;
use crate::store::load_store;

// ============================================================================
// COLLECTION ROW
// ============================================================================

/// One fully flattened export record per physical printing.
///
/// Field order is the output contract: the CSV header follows the struct.
/// `is_unique` is a single-character marker rather than a boolean because
/// the flat export renders it directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionRow {
    pub id: String,
    #[serde(rename = "cycle_enUS")]
    pub cycle_en_us: String,
    #[serde(rename = "cycle_zhCN")]
    pub cycle_zh_cn: String,
    pub cycle_position: i64,
    #[serde(rename = "set_enUS")]
    pub set_en_us: String,
    #[serde(rename = "set_zhCN")]
    pub set_zh_cn: String,
    pub set_position: i64,
    #[serde(rename = "settype_enUS")]
    pub settype_en_us: String,
    #[serde(rename = "settype_zhCN")]
    pub settype_zh_cn: String,
    pub set_size: i64,
    pub position: i64,
    #[serde(rename = "title_enUS")]
    pub title_en_us: String,
    #[serde(rename = "title_zhCN")]
    pub title_zh_cn: String,
    pub stripped_title: String,
    #[serde(rename = "text_enUS")]
    pub text_en_us: String,
    #[serde(rename = "text_zhCN")]
    pub text_zh_cn: String,
    pub stripped_text: String,
    #[serde(rename = "type_enUS")]
    pub type_en_us: String,
    #[serde(rename = "type_zhCN")]
    pub type_zh_cn: String,
    #[serde(rename = "subtype_enUS")]
    pub subtype_en_us: String,
    #[serde(rename = "subtype_zhCN")]
    pub subtype_zh_cn: String,
    #[serde(rename = "side_enUS")]
    pub side_en_us: String,
    #[serde(rename = "side_zhCN")]
    pub side_zh_cn: String,
    #[serde(rename = "faction_enUS")]
    pub faction_en_us: String,
    #[serde(rename = "faction_zhCN")]
    pub faction_zh_cn: String,
    pub is_unique: String,
    pub deck_limit: Option<i64>,
    pub advancement_requirement: Option<i64>,
    pub agenda_point: Option<i64>,
    pub base_link: Option<i64>,
    pub minimum_deck_size: Option<i64>,
    pub influence_limit: Option<i64>,
    pub influence_cost: Option<i64>,
    pub cost: Option<i64>,
    pub strength: Option<i64>,
    pub memory_cost: Option<i64>,
    pub trash_cost: Option<i64>,
    #[serde(rename = "flavor_enUS")]
    pub flavor_en_us: String,
    #[serde(rename = "flavor_zhCN")]
    pub flavor_zh_cn: String,
    pub quantity: i64,
    /// The printing's extra face count; `extra_face` below is the card's.
    pub extra_printing: i64,
    pub illustrator: String,
    pub attribution: String,
    pub pronouns: String,
    pub pronunciation_ipa: String,
    pub pronunciation_approx: String,
    pub extra_face: i64,
    #[serde(rename = "narrative_enUS")]
    pub narrative_en_us: String,
    pub designed_by: String,
    pub released_by: String,
    pub release_date: String,
}

// ============================================================================
// DEPENDENCY STORES
// ============================================================================

/// The eight stores the build joins against.
pub struct Stores {
    pub cycles: BTreeMap<String, ResultCycle>,
    pub sets: BTreeMap<String, ResultSet>,
    pub settypes: BTreeMap<String, ResultSettype>,
    pub cards: BTreeMap<String, ResultCard>,
    pub sides: BTreeMap<String, ResultSide>,
    pub factions: BTreeMap<String, ResultFaction>,
    pub types: BTreeMap<String, ResultCardType>,
    pub subtypes: BTreeMap<String, ResultSubtype>,
}

impl Stores {
    /// Load all dependency stores up front. A single missing table aborts
    /// the build before any row is produced.
    pub fn load(layout: &Layout) -> Result<Self, PipelineError> {
        Ok(Stores {
            cycles: load_store(layout)?,
            sets: load_store(layout)?,
            settypes: load_store(layout)?,
            cards: load_store(layout)?,
            sides: load_store(layout)?,
            factions: load_store(layout)?,
            types: load_store(layout)?,
            subtypes: load_store(layout)?,
        })
    }
}

fn resolve<'a, T>(
    store: &'a BTreeMap<String, T>,
    child: &str,
    field: &'static str,
    codename: &str,
) -> Result<&'a T, PipelineError> {
    store
        .get(codename)
        .ok_or_else(|| PipelineError::DanglingReference {
            child: child.to_string(),
            field,
            missing: codename.to_string(),
        })
}

// ============================================================================
// BUILD
// ============================================================================

/// Flatten printings into export rows, resolving the whole reference chain.
///
/// Row order follows the input printing order; callers pass printings
/// sorted by codename (see `store::load_sorted`).
pub fn build(
    stores: &Stores,
    printings: &[ResultPrinting],
) -> Result<Vec<CollectionRow>, PipelineError> {
    let mut rows = Vec::with_capacity(printings.len());
    for printing in printings {
        let set = resolve(
            &stores.sets,
            &printing.codename,
            "set_codename",
            &printing.set_codename,
        )?;
        let cycle = resolve(
            &stores.cycles,
            &set.codename,
            "cycle_codename",
            &set.cycle_codename,
        )?;
        let settype = resolve(
            &stores.settypes,
            &set.codename,
            "settype_codename",
            &set.settype_codename,
        )?;
        let card = resolve(
            &stores.cards,
            &printing.codename,
            "card_codename",
            &printing.card_codename,
        )?;
        let side = resolve(
            &stores.sides,
            &card.codename,
            "side_codename",
            &card.side_codename,
        )?;
        let faction = resolve(
            &stores.factions,
            &card.codename,
            "faction_codename",
            &card.faction_codename,
        )?;
        let card_type = resolve(
            &stores.types,
            &card.codename,
            "type_codename",
            &card.type_codename,
        )?;

        // The one place cardinality collapses: the card's subtype list
        // becomes two parallel comma-joined strings, order and duplicates
        // preserved.
        let mut subtype_en_us = Vec::with_capacity(card.subtype_codenames.len());
        let mut subtype_zh_cn = Vec::with_capacity(card.subtype_codenames.len());
        for codename in &card.subtype_codenames {
            let subtype = resolve(
                &stores.subtypes,
                &card.codename,
                "subtype_codenames",
                codename,
            )?;
            subtype_en_us.push(subtype.oracle_name.as_str());
            subtype_zh_cn.push(subtype.locale_name.as_str());
        }

        rows.push(CollectionRow {
            id: printing.codename.clone(),
            cycle_en_us: cycle.oracle_name.clone(),
            cycle_zh_cn: cycle.locale_name.clone(),
            cycle_position: cycle.position,
            set_en_us: set.oracle_name.clone(),
            set_zh_cn: set.locale_name.clone(),
            set_position: set.position,
            settype_en_us: settype.oracle_name.clone(),
            settype_zh_cn: settype.locale_name.clone(),
            set_size: set.size,
            position: printing.position,
            title_en_us: card.oracle_title.clone(),
            title_zh_cn: card.locale_title.clone(),
            stripped_title: card.stripped_title.clone(),
            text_en_us: card.oracle_text.clone(),
            text_zh_cn: card.locale_text.clone(),
            stripped_text: card.stripped_text.clone(),
            type_en_us: card_type.oracle_name.clone(),
            type_zh_cn: card_type.locale_name.clone(),
            subtype_en_us: subtype_en_us.join(","),
            subtype_zh_cn: subtype_zh_cn.join(","),
            side_en_us: side.oracle_name.clone(),
            side_zh_cn: side.locale_name.clone(),
            faction_en_us: faction.oracle_name.clone(),
            faction_zh_cn: faction.locale_name.clone(),
            is_unique: if card.is_unique {
                "♦".to_string()
            } else {
                String::new()
            },
            deck_limit: card.deck_limit,
            advancement_requirement: card.advancement_requirement,
            agenda_point: card.agenda_point,
            base_link: card.base_link,
            minimum_deck_size: card.minimum_deck_size,
            influence_limit: card.influence_limit,
            influence_cost: card.influence_cost,
            cost: card.cost,
            strength: card.strength,
            memory_cost: card.memory_cost,
            trash_cost: card.trash_cost,
            flavor_en_us: printing.oracle_flavor.clone(),
            flavor_zh_cn: printing.locale_flavor.clone(),
            quantity: printing.quantity,
            extra_printing: printing.extra_face,
            illustrator: printing.illustrator.clone(),
            attribution: card.attribution.clone(),
            pronouns: card.pronouns.clone(),
            pronunciation_ipa: card.pronunciation_ipa.clone(),
            pronunciation_approx: card.pronunciation_approx.clone(),
            extra_face: card.extra_face,
            narrative_en_us: card.oracle_narrative.clone(),
            designed_by: card.designed_by.clone(),
            released_by: printing.released_by.clone(),
            release_date: set.release_date.clone(),
        });
    }

    Ok(rows)
}

// ============================================================================
// EXPORT WRITER
// ============================================================================

/// Write the flattened rows as the final CSV export.
///
/// Spreadsheet tools need the UTF-8 BOM to pick up the Chinese columns.
pub fn save(path: &Path, rows: &[CollectionRow]) -> Result<(), PipelineError> {
    let unavailable = |detail: String| PipelineError::SourceUnavailable {
        path: path.to_path_buf(),
        detail,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| unavailable(err.to_string()))?;
    }
    let mut file = File::create(path).map_err(|err| unavailable(err.to_string()))?;
    file.write_all("\u{feff}".as_bytes())
        .map_err(|err| unavailable(err.to_string()))?;

    let mut writer = csv::Writer::from_writer(file);
    for row in rows {
        writer
            .serialize(row)
            .map_err(|err| unavailable(err.to_string()))?;
    }
    writer
        .into_inner()
        .map_err(|err| unavailable(err.to_string()))?
        .flush()
        .map_err(|err| unavailable(err.to_string()))
}

// ============================================================================
// TESTS
// ============================================================================
