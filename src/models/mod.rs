//! Bundled model descriptors.
//!
//! These are the types the `amei` command can resolve by identifier.

mod toy;
mod weather;

pub use toy::toy1;
pub use weather::iweather;

use crate::model::TypeRegistry;

/// Registry of every bundled model type.
pub fn builtin_registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    let weather = registry.register(iweather());
    registry.register(toy1(weather));
    registry
}
