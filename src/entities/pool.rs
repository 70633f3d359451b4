use serde::{Deserialize, Serialize};

use super::Bilingual;
use crate::schema::FieldType::Str;
use crate::schema::{req, Shape};

#[derive(Debug, Clone, Deserialize)]
pub struct OraclePool {
    pub id: String,
    pub name: String,
    pub format_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalePool {
    pub id: String,
    pub name: String,
}

/// Merged card-pool entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultPool {
    pub codename: String,
    pub oracle_name: String,
    pub locale_name: String,
    pub format_codename: String,
}

impl Bilingual for ResultPool {
    type Oracle = OraclePool;
    type Locale = LocalePool;

    const KIND: &'static str = "pools";
    const ORACLE_FILE: &'static str = "card_pools";
    const LOCALE_FILE: &'static str = "pools";

    const ORACLE_SHAPE: Shape = Shape::new(
        "oracle pool",
        &[req("id", Str), req("name", Str), req("format_id", Str)],
    );
    const LOCALE_SHAPE: Shape =
        Shape::new("locale pool", &[req("id", Str), req("name", Str)]);
    const RESULT_SHAPE: Shape = Shape::new(
        "result pool",
        &[
            req("codename", Str),
            req("oracle_name", Str),
            req("locale_name", Str),
            req("format_codename", Str),
        ],
    );

    fn oracle_id(oracle: &Self::Oracle) -> &str {
        &oracle.id
    }

    fn locale_id(locale: &Self::Locale) -> &str {
        &locale.id
    }

    fn combine(oracle: Self::Oracle, locale: Self::Locale) -> Self {
        ResultPool {
            codename: oracle.id,
            oracle_name: oracle.name,
            locale_name: locale.name,
            format_codename: oracle.format_id,
        }
    }

    fn codename(&self) -> &str {
        &self.codename
    }
}
