use serde::{Deserialize, Serialize};

use super::Bilingual;
use crate::schema::FieldType::Str;
use crate::schema::{req, Shape};

/// English side record as authored upstream.
#[derive(Debug, Clone, Deserialize)]
pub struct OracleSide {
    pub id: String,
    pub name: String,
}

/// Chinese side record; display fields only.
#[derive(Debug, Clone, Deserialize)]
pub struct LocaleSide {
    pub id: String,
    pub name: String,
}

/// Merged side entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultSide {
    pub codename: String,
    pub oracle_name: String,
    pub locale_name: String,
}

impl Bilingual for ResultSide {
    type Oracle = OracleSide;
    type Locale = LocaleSide;

    const KIND: &'static str = "sides";
    const ORACLE_FILE: &'static str = "sides";
    const LOCALE_FILE: &'static str = "sides";

    const ORACLE_SHAPE: Shape =
        Shape::new("oracle side", &[req("id", Str), req("name", Str)]);
    const LOCALE_SHAPE: Shape =
        Shape::new("locale side", &[req("id", Str), req("name", Str)]);
    const RESULT_SHAPE: Shape = Shape::new(
        "result side",
        &[
            req("codename", Str),
            req("oracle_name", Str),
            req("locale_name", Str),
        ],
    );

    fn oracle_id(oracle: &Self::Oracle) -> &str {
        &oracle.id
    }

    fn locale_id(locale: &Self::Locale) -> &str {
        &locale.id
    }

    fn combine(oracle: Self::Oracle, locale: Self::Locale) -> Self {
        ResultSide {
            codename: oracle.id,
            oracle_name: oracle.name,
            locale_name: locale.name,
        }
    }

    fn codename(&self) -> &str {
        &self.codename
    }
}
