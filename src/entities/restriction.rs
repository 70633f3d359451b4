use serde::{Deserialize, Serialize};

use super::Bilingual;
use crate::schema::FieldType::{Str, StrList};
use crate::schema::{req, Shape};

/// English restriction list. `banned` holds card ids.
#[derive(Debug, Clone, Deserialize)]
pub struct OracleRestriction {
    pub id: String,
    pub name: String,
    pub format_id: String,
    pub date_start: String,
    pub banned: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocaleRestriction {
    pub id: String,
    pub name: String,
}

/// Merged restriction entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRestriction {
    pub codename: String,
    pub oracle_name: String,
    pub locale_name: String,
    pub format_codename: String,
    pub date_start: String,
    pub banned_codenames: Vec<String>,
}

impl Bilingual for ResultRestriction {
    type Oracle = OracleRestriction;
    type Locale = LocaleRestriction;

    const KIND: &'static str = "restrictions";
    const ORACLE_FILE: &'static str = "restrictions";
    const LOCALE_FILE: &'static str = "restrictions";

    const ORACLE_SHAPE: Shape = Shape::new(
        "oracle restriction",
        &[
            req("id", Str),
            req("name", Str),
            req("format_id", Str),
            req("date_start", Str),
            req("banned", StrList),
        ],
    );
    const LOCALE_SHAPE: Shape =
        Shape::new("locale restriction", &[req("id", Str), req("name", Str)]);
    const RESULT_SHAPE: Shape = Shape::new(
        "result restriction",
        &[
            req("codename", Str),
            req("oracle_name", Str),
            req("locale_name", Str),
            req("format_codename", Str),
            req("date_start", Str),
            req("banned_codenames", StrList),
        ],
    );

    fn oracle_id(oracle: &Self::Oracle) -> &str {
        &oracle.id
    }

    fn locale_id(locale: &Self::Locale) -> &str {
        &locale.id
    }

    fn combine(oracle: Self::Oracle, locale: Self::Locale) -> Self {
        ResultRestriction {
            codename: oracle.id,
            oracle_name: oracle.name,
            locale_name: locale.name,
            format_codename: oracle.format_id,
            date_start: oracle.date_start,
            banned_codenames: oracle.banned,
        }
    }

    fn codename(&self) -> &str {
        &self.codename
    }
}
