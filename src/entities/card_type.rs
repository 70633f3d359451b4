use serde::{Deserialize, Serialize};

use super::Bilingual;
use crate::schema::FieldType::Str;
use crate::schema::{req, Shape};

/// English card-type record. Types belong to exactly one side.
#[derive(Debug, Clone, Deserialize)]
pub struct OracleCardType {
    pub id: String,
    pub name: String,
    pub side_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocaleCardType {
    pub id: String,
    pub name: String,
}

/// Merged card-type entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultCardType {
    pub codename: String,
    pub oracle_name: String,
    pub locale_name: String,
    pub side_codename: String,
}

impl Bilingual for ResultCardType {
    type Oracle = OracleCardType;
    type Locale = LocaleCardType;

    const KIND: &'static str = "types";
    // Upstream names the English table "card_types", the Chinese one "types".
    const ORACLE_FILE: &'static str = "card_types";
    const LOCALE_FILE: &'static str = "types";

    const ORACLE_SHAPE: Shape = Shape::new(
        "oracle type",
        &[req("id", Str), req("name", Str), req("side_id", Str)],
    );
    const LOCALE_SHAPE: Shape =
        Shape::new("locale type", &[req("id", Str), req("name", Str)]);
    const RESULT_SHAPE: Shape = Shape::new(
        "result type",
        &[
            req("codename", Str),
            req("oracle_name", Str),
            req("locale_name", Str),
            req("side_codename", Str),
        ],
    );

    fn oracle_id(oracle: &Self::Oracle) -> &str {
        &oracle.id
    }

    fn locale_id(locale: &Self::Locale) -> &str {
        &locale.id
    }

    fn combine(oracle: Self::Oracle, locale: Self::Locale) -> Self {
        ResultCardType {
            codename: oracle.id,
            oracle_name: oracle.name,
            locale_name: locale.name,
            side_codename: oracle.side_id,
        }
    }

    fn codename(&self) -> &str {
        &self.codename
    }
}
