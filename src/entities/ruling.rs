use serde::{Deserialize, Serialize};

use super::Bilingual;
use crate::schema::FieldType::Str;
use crate::schema::{req, Shape};

/// English ruling. Each ruling concerns exactly one card.
#[derive(Debug, Clone, Deserialize)]
pub struct OracleRuling {
    pub id: String,
    pub card_id: String,
    pub date: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocaleRuling {
    pub id: String,
    pub text: String,
}

/// Merged ruling entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRuling {
    pub codename: String,
    pub card_codename: String,
    pub date: String,
    pub oracle_text: String,
    pub locale_text: String,
}

impl Bilingual for ResultRuling {
    type Oracle = OracleRuling;
    type Locale = LocaleRuling;

    const KIND: &'static str = "rulings";
    const ORACLE_FILE: &'static str = "rulings";
    const LOCALE_FILE: &'static str = "rulings";

    const ORACLE_SHAPE: Shape = Shape::new(
        "oracle ruling",
        &[
            req("id", Str),
            req("card_id", Str),
            req("date", Str),
            req("text", Str),
        ],
    );
    const LOCALE_SHAPE: Shape =
        Shape::new("locale ruling", &[req("id", Str), req("text", Str)]);
    const RESULT_SHAPE: Shape = Shape::new(
        "result ruling",
        &[
            req("codename", Str),
            req("card_codename", Str),
            req("date", Str),
            req("oracle_text", Str),
            req("locale_text", Str),
        ],
    );

    fn oracle_id(oracle: &Self::Oracle) -> &str {
        &oracle.id
    }

    fn locale_id(locale: &Self::Locale) -> &str {
        &locale.id
    }

    fn combine(oracle: Self::Oracle, locale: Self::Locale) -> Self {
        ResultRuling {
            codename: oracle.id,
            card_codename: oracle.card_id,
            date: oracle.date,
            oracle_text: oracle.text,
            locale_text: locale.text,
        }
    }

    fn codename(&self) -> &str {
        &self.codename
    }
}
