use serde::{Deserialize, Serialize};

use super::Bilingual;
use crate::schema::FieldType::Str;
use crate::schema::{req, Shape};

#[derive(Debug, Clone, Deserialize)]
pub struct OracleFaction {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocaleFaction {
    pub id: String,
    pub name: String,
}

/// Merged faction entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultFaction {
    pub codename: String,
    pub oracle_name: String,
    pub locale_name: String,
}

impl Bilingual for ResultFaction {
    type Oracle = OracleFaction;
    type Locale = LocaleFaction;

    const KIND: &'static str = "factions";
    const ORACLE_FILE: &'static str = "factions";
    const LOCALE_FILE: &'static str = "factions";

    const ORACLE_SHAPE: Shape =
        Shape::new("oracle faction", &[req("id", Str), req("name", Str)]);
    const LOCALE_SHAPE: Shape =
        Shape::new("locale faction", &[req("id", Str), req("name", Str)]);
    const RESULT_SHAPE: Shape = Shape::new(
        "result faction",
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
        ResultFaction {
            codename: oracle.id,
            oracle_name: oracle.name,
            locale_name: locale.name,
        }
    }

    fn codename(&self) -> &str {
        &self.codename
    }
}
