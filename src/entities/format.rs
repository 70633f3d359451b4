// Play formats and their dated snapshots. A snapshot pins a format to a
// card pool and (optionally) a restriction list at a point in time.

use serde::{Deserialize, Serialize};

use super::Bilingual;
use crate::schema::FieldType::{Bool, Str};
use crate::schema::{opt, req, Shape};

#[derive(Debug, Clone, Deserialize)]
pub struct OracleFormat {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocaleFormat {
    pub id: String,
    pub name: String,
}

/// Merged format entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultFormat {
    pub codename: String,
    pub oracle_name: String,
    pub locale_name: String,
}

impl Bilingual for ResultFormat {
    type Oracle = OracleFormat;
    type Locale = LocaleFormat;

    const KIND: &'static str = "formats";
    const ORACLE_FILE: &'static str = "formats";
    const LOCALE_FILE: &'static str = "formats";

    const ORACLE_SHAPE: Shape =
        Shape::new("oracle format", &[req("id", Str), req("name", Str)]);
    const LOCALE_SHAPE: Shape =
        Shape::new("locale format", &[req("id", Str), req("name", Str)]);
    const RESULT_SHAPE: Shape = Shape::new(
        "result format",
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
        ResultFormat {
            codename: oracle.id,
            oracle_name: oracle.name,
            locale_name: locale.name,
        }
    }

    fn codename(&self) -> &str {
        &self.codename
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OracleSnapshot {
    pub id: String,
    pub name: String,
    pub format_id: String,
    pub pool_id: String,
    /// Early snapshots predate restriction lists.
    pub restriction_id: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocaleSnapshot {
    pub id: String,
    pub name: String,
}

/// Merged snapshot entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultSnapshot {
    pub codename: String,
    pub oracle_name: String,
    pub locale_name: String,
    pub format_codename: String,
    pub pool_codename: String,
    pub restriction_codename: Option<String>,
    pub active: bool,
}

impl Bilingual for ResultSnapshot {
    type Oracle = OracleSnapshot;
    type Locale = LocaleSnapshot;

    const KIND: &'static str = "snapshots";
    const ORACLE_FILE: &'static str = "snapshots";
    const LOCALE_FILE: &'static str = "snapshots";

    const ORACLE_SHAPE: Shape = Shape::new(
        "oracle snapshot",
        &[
            req("id", Str),
            req("name", Str),
            req("format_id", Str),
            req("pool_id", Str),
            opt("restriction_id", Str),
            req("active", Bool),
        ],
    );
    const LOCALE_SHAPE: Shape =
        Shape::new("locale snapshot", &[req("id", Str), req("name", Str)]);
    const RESULT_SHAPE: Shape = Shape::new(
        "result snapshot",
        &[
            req("codename", Str),
            req("oracle_name", Str),
            req("locale_name", Str),
            req("format_codename", Str),
            req("pool_codename", Str),
            opt("restriction_codename", Str),
            req("active", Bool),
        ],
    );

    fn oracle_id(oracle: &Self::Oracle) -> &str {
        &oracle.id
    }

    fn locale_id(locale: &Self::Locale) -> &str {
        &locale.id
    }

    fn combine(oracle: Self::Oracle, locale: Self::Locale) -> Self {
        ResultSnapshot {
            codename: oracle.id,
            oracle_name: oracle.name,
            locale_name: locale.name,
            format_codename: oracle.format_id,
            pool_codename: oracle.pool_id,
            restriction_codename: oracle.restriction_id,
            active: oracle.active,
        }
    }

    fn codename(&self) -> &str {
        &self.codename
    }
}
