use serde::{Deserialize, Serialize};

use super::Bilingual;
use crate::schema::FieldType::{Int, Str};
use crate::schema::{req, Shape};

/// English set record. A set belongs to one cycle and has one set type.
#[derive(Debug, Clone, Deserialize)]
pub struct OracleSet {
    pub id: String,
    pub name: String,
    pub cycle_id: String,
    pub settype_id: String,
    /// Position of the set within its cycle.
    pub position: i64,
    /// Number of distinct printings in the set.
    pub size: i64,
    pub release_date: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocaleSet {
    pub id: String,
    pub name: String,
}

/// Merged set entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultSet {
    pub codename: String,
    pub oracle_name: String,
    pub locale_name: String,
    pub cycle_codename: String,
    pub settype_codename: String,
    pub position: i64,
    pub size: i64,
    pub release_date: String,
}

impl Bilingual for ResultSet {
    type Oracle = OracleSet;
    type Locale = LocaleSet;

    const KIND: &'static str = "sets";
    const ORACLE_FILE: &'static str = "card_sets";
    const LOCALE_FILE: &'static str = "sets";

    const ORACLE_SHAPE: Shape = Shape::new(
        "oracle set",
        &[
            req("id", Str),
            req("name", Str),
            req("cycle_id", Str),
            req("settype_id", Str),
            req("position", Int),
            req("size", Int),
            req("release_date", Str),
        ],
    );
    const LOCALE_SHAPE: Shape =
        Shape::new("locale set", &[req("id", Str), req("name", Str)]);
    const RESULT_SHAPE: Shape = Shape::new(
        "result set",
        &[
            req("codename", Str),
            req("oracle_name", Str),
            req("locale_name", Str),
            req("cycle_codename", Str),
            req("settype_codename", Str),
            req("position", Int),
            req("size", Int),
            req("release_date", Str),
        ],
    );

    fn oracle_id(oracle: &Self::Oracle) -> &str {
        &oracle.id
    }

    fn locale_id(locale: &Self::Locale) -> &str {
        &locale.id
    }

    fn combine(oracle: Self::Oracle, locale: Self::Locale) -> Self {
        ResultSet {
            codename: oracle.id,
            oracle_name: oracle.name,
            locale_name: locale.name,
            cycle_codename: oracle.cycle_id,
            settype_codename: oracle.settype_id,
            position: oracle.position,
            size: oracle.size,
            release_date: oracle.release_date,
        }
    }

    fn codename(&self) -> &str {
        &self.codename
    }
}
