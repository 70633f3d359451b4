// Entity Models - one module per bilingual entity kind
//
// Each kind pairs an English oracle table (structurally authoritative) with
// a Chinese locale table (display-only) sharing the same id domain. The
// merged result entity is keyed by codename and carries forward references
// only, never back-references.

pub mod card;
pub mod card_type;
pub mod cycle;
pub mod faction;
pub mod format;
pub mod pool;
pub mod printing;
pub mod restriction;
pub mod ruling;
pub mod set;
pub mod settype;
pub mod side;
pub mod subtype;

pub use card::{LocaleCard, OracleCard, ResultCard};
pub use card_type::{LocaleCardType, OracleCardType, ResultCardType};
pub use cycle::{LocaleCycle, OracleCycle, ResultCycle};
pub use faction::{LocaleFaction, OracleFaction, ResultFaction};
pub use format::{
    LocaleFormat, LocaleSnapshot, OracleFormat, OracleSnapshot, ResultFormat, ResultSnapshot,
};
pub use pool::{LocalePool, OraclePool, ResultPool};
pub use printing::{LocalePrinting, OraclePrinting, ResultPrinting};
pub use restriction::{LocaleRestriction, OracleRestriction, ResultRestriction};
pub use ruling::{LocaleRuling, OracleRuling, ResultRuling};
pub use set::{LocaleSet, OracleSet, ResultSet};
pub use settype::{LocaleSettype, OracleSettype, ResultSettype};
pub use side::{LocaleSide, OracleSide, ResultSide};
pub use subtype::{LocaleSubtype, OracleSubtype, ResultSubtype};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::schema::Shape;

/// One bilingual entity kind.
///
/// Implemented on the merged result type. The impl fixes where the kind's
/// tables live, what shape each table's records must have, and how an
/// oracle record and its locale counterpart combine into the result entity.
/// All loading, merging, and store machinery is generic over this trait.
pub trait Bilingual: Serialize + DeserializeOwned {
    type Oracle: DeserializeOwned;
    type Locale: DeserializeOwned + Clone;

    /// Table stem for the result file and the store ("sides", "cards", ...).
    const KIND: &'static str;
    /// Source file stem under the oracle root. Usually equals `KIND`, but
    /// the upstream repositories disagree on a few names.
    const ORACLE_FILE: &'static str;
    /// Source file stem under the locale root.
    const LOCALE_FILE: &'static str;

    const ORACLE_SHAPE: Shape;
    const LOCALE_SHAPE: Shape;
    const RESULT_SHAPE: Shape;

    fn oracle_id(oracle: &Self::Oracle) -> &str;
    fn locale_id(locale: &Self::Locale) -> &str;

    /// Combine an oracle record with its locale counterpart. Foreign-key
    /// ids are renamed into the codename domain here; no resolution against
    /// other kinds happens until collection build.
    fn combine(oracle: Self::Oracle, locale: Self::Locale) -> Self;

    fn codename(&self) -> &str;
}
