use serde::{Deserialize, Serialize};

use super::Bilingual;
use crate::schema::FieldType::Str;
use crate::schema::{req, Shape};

#[derive(Debug, Clone, Deserialize)]
pub struct OracleSubtype {
    pub id: String,
    pub name: String,
    pub side_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocaleSubtype {
    pub id: String,
    pub name: String,
}

/// Merged subtype entity. Cards reference zero or more of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultSubtype {
    pub codename: String,
    pub oracle_name: String,
    pub locale_name: String,
    pub side_codename: String,
}

impl Bilingual for ResultSubtype {
    type Oracle = OracleSubtype;
    type Locale = LocaleSubtype;

    const KIND: &'static str = "subtypes";
    const ORACLE_FILE: &'static str = "subtypes";
    const LOCALE_FILE: &'static str = "subtypes";

    const ORACLE_SHAPE: Shape = Shape::new(
        "oracle subtype",
        &[req("id", Str), req("name", Str), req("side_id", Str)],
    );
    const LOCALE_SHAPE: Shape =
        Shape::new("locale subtype", &[req("id", Str), req("name", Str)]);
    const RESULT_SHAPE: Shape = Shape::new(
        "result subtype",
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
        ResultSubtype {
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
