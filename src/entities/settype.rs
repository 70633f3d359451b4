use serde::{Deserialize, Serialize};

use super::Bilingual;
use crate::schema::FieldType::Str;
use crate::schema::{req, Shape};

#[derive(Debug, Clone, Deserialize)]
pub struct OracleSettype {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocaleSettype {
    pub id: String,
    pub name: String,
}

/// Merged set-type entity (core set, booster, campaign, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultSettype {
    pub codename: String,
    pub oracle_name: String,
    pub locale_name: String,
}

impl Bilingual for ResultSettype {
    type Oracle = OracleSettype;
    type Locale = LocaleSettype;

    const KIND: &'static str = "settypes";
    const ORACLE_FILE: &'static str = "set_types";
    const LOCALE_FILE: &'static str = "settypes";

    const ORACLE_SHAPE: Shape =
        Shape::new("oracle settype", &[req("id", Str), req("name", Str)]);
    const LOCALE_SHAPE: Shape =
        Shape::new("locale settype", &[req("id", Str), req("name", Str)]);
    const RESULT_SHAPE: Shape = Shape::new(
        "result settype",
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
        ResultSettype {
            codename: oracle.id,
            oracle_name: oracle.name,
            locale_name: locale.name,
        }
    }

    fn codename(&self) -> &str {
        &self.codename
    }
}
