use serde::{Deserialize, Serialize};

use super::Bilingual;
use crate::schema::FieldType::{Int, Str};
use crate::schema::{req, Shape};

/// English printing record: one physical appearance of a card in a set.
#[derive(Debug, Clone, Deserialize)]
pub struct OraclePrinting {
    pub id: String,
    pub card_id: String,
    pub set_id: String,
    /// Collector number within the set.
    pub position: i64,
    /// Copies of this printing in one box of the set.
    pub quantity: i64,
    pub flavor: String,
    pub illustrator: String,
    pub released_by: String,
    pub extra_face: i64,
}

/// Chinese printing record; translated flavor text only.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalePrinting {
    pub id: String,
    pub flavor: String,
}

/// Merged printing entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultPrinting {
    pub codename: String,
    pub card_codename: String,
    pub set_codename: String,
    pub position: i64,
    pub quantity: i64,
    pub oracle_flavor: String,
    pub locale_flavor: String,
    pub illustrator: String,
    pub released_by: String,
    pub extra_face: i64,
}

impl Bilingual for ResultPrinting {
    type Oracle = OraclePrinting;
    type Locale = LocalePrinting;

    const KIND: &'static str = "printings";
    const ORACLE_FILE: &'static str = "printings";
    const LOCALE_FILE: &'static str = "printings";

    const ORACLE_SHAPE: Shape = Shape::new(
        "oracle printing",
        &[
            req("id", Str),
            req("card_id", Str),
            req("set_id", Str),
            req("position", Int),
            req("quantity", Int),
            req("flavor", Str),
            req("illustrator", Str),
            req("released_by", Str),
            req("extra_face", Int),
        ],
    );
    const LOCALE_SHAPE: Shape = Shape::new(
        "locale printing",
        &[req("id", Str), req("flavor", Str)],
    );
    const RESULT_SHAPE: Shape = Shape::new(
        "result printing",
        &[
            req("codename", Str),
            req("card_codename", Str),
            req("set_codename", Str),
            req("position", Int),
            req("quantity", Int),
            req("oracle_flavor", Str),
            req("locale_flavor", Str),
            req("illustrator", Str),
            req("released_by", Str),
            req("extra_face", Int),
        ],
    );

    fn oracle_id(oracle: &Self::Oracle) -> &str {
        &oracle.id
    }

    fn locale_id(locale: &Self::Locale) -> &str {
        &locale.id
    }

    fn combine(oracle: Self::Oracle, locale: Self::Locale) -> Self {
        ResultPrinting {
            codename: oracle.id,
            card_codename: oracle.card_id,
            set_codename: oracle.set_id,
            position: oracle.position,
            quantity: oracle.quantity,
            oracle_flavor: oracle.flavor,
            locale_flavor: locale.flavor,
            illustrator: oracle.illustrator,
            released_by: oracle.released_by,
            extra_face: oracle.extra_face,
        }
    }

    fn codename(&self) -> &str {
        &self.codename
    }
}
