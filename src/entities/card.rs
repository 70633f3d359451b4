// Card entity - the widest kind in the dataset.
// Stats that only exist for some card types (cost, strength, memory...) are
// nullable; the export keeps them empty rather than inventing zeroes.

use serde::{Deserialize, Serialize};

use super::Bilingual;
use crate::schema::FieldType::{Bool, Int, Str, StrList};
use crate::schema::{opt, req, Shape};

/// English card record.
#[derive(Debug, Clone, Deserialize)]
pub struct OracleCard {
    pub id: String,
    pub title: String,
    /// ASCII-folded title, used where the export must stay 7-bit safe.
    pub stripped_title: String,
    pub text: String,
    pub stripped_text: String,
    pub is_unique: bool,
    pub side_id: String,
    pub faction_id: String,
    pub type_id: String,
    /// Zero or more subtype ids, in display order. Duplicates allowed.
    pub subtype_ids: Vec<String>,
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
    pub attribution: String,
    pub pronouns: String,
    pub pronunciation_ipa: String,
    pub pronunciation_approx: String,
    /// Number of extra faces (flip cards and the like).
    pub extra_face: i64,
    pub narrative: String,
    pub designed_by: String,
}

/// Chinese card record; translated title and rules text only.
#[derive(Debug, Clone, Deserialize)]
pub struct LocaleCard {
    pub id: String,
    pub title: String,
    pub text: String,
}

/// Merged card entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultCard {
    pub codename: String,
    pub oracle_title: String,
    pub locale_title: String,
    pub stripped_title: String,
    pub oracle_text: String,
    pub locale_text: String,
    pub stripped_text: String,
    pub is_unique: bool,
    pub side_codename: String,
    pub faction_codename: String,
    pub type_codename: String,
    pub subtype_codenames: Vec<String>,
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
    pub attribution: String,
    pub pronouns: String,
    pub pronunciation_ipa: String,
    pub pronunciation_approx: String,
    pub extra_face: i64,
    pub oracle_narrative: String,
    pub designed_by: String,
}

impl Bilingual for ResultCard {
    type Oracle = OracleCard;
    type Locale = LocaleCard;

    const KIND: &'static str = "cards";
    const ORACLE_FILE: &'static str = "cards";
    const LOCALE_FILE: &'static str = "cards";

    const ORACLE_SHAPE: Shape = Shape::new(
        "oracle card",
        &[
            req("id", Str),
            req("title", Str),
            req("stripped_title", Str),
            req("text", Str),
            req("stripped_text", Str),
            req("is_unique", Bool),
            req("side_id", Str),
            req("faction_id", Str),
            req("type_id", Str),
            req("subtype_ids", StrList),
            opt("deck_limit", Int),
            opt("advancement_requirement", Int),
            opt("agenda_point", Int),
            opt("base_link", Int),
            opt("minimum_deck_size", Int),
            opt("influence_limit", Int),
            opt("influence_cost", Int),
            opt("cost", Int),
            opt("strength", Int),
            opt("memory_cost", Int),
            opt("trash_cost", Int),
            req("attribution", Str),
            req("pronouns", Str),
            req("pronunciation_ipa", Str),
            req("pronunciation_approx", Str),
            req("extra_face", Int),
            req("narrative", Str),
            req("designed_by", Str),
        ],
    );
    const LOCALE_SHAPE: Shape = Shape::new(
        "locale card",
        &[req("id", Str), req("title", Str), req("text", Str)],
    );
    const RESULT_SHAPE: Shape = Shape::new(
        "result card",
        &[
            req("codename", Str),
            req("oracle_title", Str),
            req("locale_title", Str),
            req("stripped_title", Str),
            req("oracle_text", Str),
            req("locale_text", Str),
            req("stripped_text", Str),
            req("is_unique", Bool),
            req("side_codename", Str),
            req("faction_codename", Str),
            req("type_codename", Str),
            req("subtype_codenames", StrList),
            opt("deck_limit", Int),
            opt("advancement_requirement", Int),
            opt("agenda_point", Int),
            opt("base_link", Int),
            opt("minimum_deck_size", Int),
            opt("influence_limit", Int),
            opt("influence_cost", Int),
            opt("cost", Int),
            opt("strength", Int),
            opt("memory_cost", Int),
            opt("trash_cost", Int),
            req("attribution", Str),
            req("pronouns", Str),
            req("pronunciation_ipa", Str),
            req("pronunciation_approx", Str),
            req("extra_face", Int),
            req("oracle_narrative", Str),
            req("designed_by", Str),
        ],
    );

    fn oracle_id(oracle: &Self::Oracle) -> &str {
        &oracle.id
    }

    fn locale_id(locale: &Self::Locale) -> &str {
        &locale.id
    }

    fn combine(oracle: Self::Oracle, locale: Self::Locale) -> Self {
        ResultCard {
            codename: oracle.id,
            oracle_title: oracle.title,
            locale_title: locale.title,
            stripped_title: oracle.stripped_title,
            oracle_text: oracle.text,
            locale_text: locale.text,
            stripped_text: oracle.stripped_text,
            is_unique: oracle.is_unique,
            side_codename: oracle.side_id,
            faction_codename: oracle.faction_id,
            type_codename: oracle.type_id,
            subtype_codenames: oracle.subtype_ids,
            deck_limit: oracle.deck_limit,
            advancement_requirement: oracle.advancement_requirement,
            agenda_point: oracle.agenda_point,
            base_link: oracle.base_link,
            minimum_deck_size: oracle.minimum_deck_size,
            influence_limit: oracle.influence_limit,
            influence_cost: oracle.influence_cost,
            cost: oracle.cost,
            strength: oracle.strength,
            memory_cost: oracle.memory_cost,
            trash_cost: oracle.trash_cost,
            attribution: oracle.attribution,
            pronouns: oracle.pronouns,
            pronunciation_ipa: oracle.pronunciation_ipa,
            pronunciation_approx: oracle.pronunciation_approx,
            extra_face: oracle.extra_face,
            oracle_narrative: oracle.narrative,
            designed_by: oracle.designed_by,
        }
    }

    fn codename(&self) -> &str {
        &self.codename
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oracle() -> OracleCard {
        OracleCard {
            id: "gordian_blade".to_string(),
            title: "Gordian Blade".to_string(),
            stripped_title: "Gordian Blade".to_string(),
            text: "1[credit]: Break code gate subroutine.".to_string(),
            stripped_text: "1credit: Break code gate subroutine.".to_string(),
            is_unique: false,
            side_id: "runner".to_string(),
            faction_id: "shaper".to_string(),
            type_id: "program".to_string(),
            subtype_ids: vec!["icebreaker".to_string(), "decoder".to_string()],
            deck_limit: Some(3),
            advancement_requirement: None,
            agenda_point: None,
            base_link: None,
            minimum_deck_size: None,
            influence_limit: None,
            influence_cost: Some(3),
            cost: Some(4),
            strength: Some(2),
            memory_cost: Some(1),
            trash_cost: None,
            attribution: String::new(),
            pronouns: String::new(),
            pronunciation_ipa: String::new(),
            pronunciation_approx: String::new(),
            extra_face: 0,
            narrative: String::new(),
            designed_by: "studio".to_string(),
        }
    }

    fn locale() -> LocaleCard {
        LocaleCard {
            id: "gordian_blade".to_string(),
            title: "戈耳工之刃".to_string(),
            text: "1[信用点]：破解代码门子程序。".to_string(),
        }
    }

    #[test]
    fn combine_renames_references_into_codename_domain() {
        let card = ResultCard::combine(oracle(), locale());
        assert_eq!(card.codename, "gordian_blade");
        assert_eq!(card.side_codename, "runner");
        assert_eq!(card.faction_codename, "shaper");
        assert_eq!(card.type_codename, "program");
        assert_eq!(card.subtype_codenames, vec!["icebreaker", "decoder"]);
    }

    #[test]
    fn combine_keeps_both_language_variants() {
        let card = ResultCard::combine(oracle(), locale());
        assert_eq!(card.oracle_title, "Gordian Blade");
        assert_eq!(card.locale_title, "戈耳工之刃");
        assert_eq!(card.oracle_text, "1[credit]: Break code gate subroutine.");
        assert_eq!(card.locale_text, "1[信用点]：破解代码门子程序。");
    }

    #[test]
    fn serialized_card_matches_its_own_shape() {
        let card = ResultCard::combine(oracle(), locale());
        let value = serde_json::to_value(&card).unwrap();
        assert!(ResultCard::RESULT_SHAPE.validate(&value).is_ok());
    }
}
