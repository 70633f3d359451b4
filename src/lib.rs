// Card Atlas - Core Library
// Bilingual card-data pipeline: merges English oracle tables with Chinese
// locale tables into canonical result tables, then flattens the joined
// dataset into one export row per printing.

pub mod collection;
pub mod entities;
pub mod error;
pub mod merge;
pub mod schema;
pub mod source;
pub mod store;

// Re-export commonly used types
pub use collection::{build, save, CollectionRow, Stores};
pub use entities::{
    Bilingual, ResultCard, ResultCardType, ResultCycle, ResultFaction, ResultFormat, ResultPool,
    ResultPrinting, ResultRestriction, ResultRuling, ResultSet, ResultSettype, ResultSide,
    ResultSnapshot, ResultSubtype,
};
pub use error::PipelineError;
pub use merge::{merge, refresh, write_result};
pub use schema::{opt, req, FieldSpec, FieldType, Shape};
pub use source::{load_locale, load_oracle, Layout};
pub use store::{load_sorted, load_store};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
