use serde::{Deserialize, Serialize};

use super::Bilingual;
use crate::schema::FieldType::{Int, Str};
use crate::schema::{req, Shape};

#[derive(Debug, Clone, Deserialize)]
pub struct OracleCycle {
    pub id: String,
    pub name: String,
    /// Release order among cycles.
    pub position: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocaleCycle {
    pub id: String,
    pub name: String,
}

/// Merged cycle entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultCycle {
    pub codename: String,
    pub oracle_name: String,
    pub locale_name: String,
    pub position: i64,
}

impl Bilingual for ResultCycle {
    type Oracle = OracleCycle;
    type Locale = LocaleCycle;

    const KIND: &'static str = "cycles";
    const ORACLE_FILE: &'static str = "cycles";
    const LOCALE_FILE: &'static str = "cycles";

    const ORACLE_SHAPE: Shape = Shape::new(
        "oracle cycle",
        &[req("id", Str), req("name", Str), req("position", Int)],
    );
    const LOCALE_SHAPE: Shape =
        Shape::new("locale cycle", &[req("id", Str), req("name", Str)]);
    const RESULT_SHAPE: Shape = Shape::new(
        "result cycle",
        &[
            req("codename", Str),
            req("oracle_name", Str),
            req("locale_name", Str),
            req("position", Int),
        ],
    );

    fn oracle_id(oracle: &Self::Oracle) -> &str {
        &oracle.id
    }

    fn locale_id(locale: &Self::Locale) -> &str {
        &locale.id
    }

    fn combine(oracle: Self::Oracle, locale: Self::Locale) -> Self {
        ResultCycle {
            codename: oracle.id,
            oracle_name: oracle.name,
            locale_name: locale.name,
            position: oracle.position,
        }
    }

    fn codename(&self) -> &str {
        &self.codename
    }
}
