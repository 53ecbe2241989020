//! Domain-side rules for the shared ledger types: id generation, input
//! validation and the seed category set.

pub mod category;
pub mod ids;
pub mod transaction;

pub use category::{default_categories, palette_color};
pub use ids::IdSequence;
pub use transaction::{validate_draft, ValidationError, MAX_AMOUNT};
