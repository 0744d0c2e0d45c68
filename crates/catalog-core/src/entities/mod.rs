//! Entity structs for catalog domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation.

mod detail;
mod item;

pub use detail::{DetailValue, ItemDetail};
pub use item::Item;
