//! Registry mapping type identifiers to descriptors.

use std::sync::Arc;

use indexmap::IndexMap;

use super::TypeDescriptor;
use crate::extract::ExtractError;

/// Known model types, keyed by fully qualified identifier.
///
/// Registration order is preserved so listings are stable.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: IndexMap<String, Arc<TypeDescriptor>>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor under its fully qualified name. A later
    /// registration with the same name replaces the earlier one.
    pub fn register(&mut self, descriptor: impl Into<Arc<TypeDescriptor>>) -> Arc<TypeDescriptor> {
        let descriptor = descriptor.into();
        self.types
            .insert(descriptor.full_name(), Arc::clone(&descriptor));
        descriptor
    }

    pub fn with(mut self, descriptor: impl Into<Arc<TypeDescriptor>>) -> Self {
        self.register(descriptor);
        self
    }

    /// Look up a type by its fully qualified identifier, or by bare name when
    /// exactly one registered type has that name.
    pub fn get(&self, id: &str) -> Option<&Arc<TypeDescriptor>> {
        if let Some(found) = self.types.get(id) {
            return Some(found);
        }
        let mut by_name = self.types.values().filter(|t| t.name == id);
        match (by_name.next(), by_name.next()) {
            (Some(only), None) => Some(only),
            _ => None,
        }
    }

    /// Like [`get`](Self::get) but failing with [`ExtractError::TypeNotFound`].
    pub fn resolve(&self, id: &str) -> Result<Arc<TypeDescriptor>, ExtractError> {
        self.get(id)
            .cloned()
            .ok_or_else(|| ExtractError::TypeNotFound(id.to_string()))
    }

    /// Registered identifiers in registration order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> TypeRegistry {
        TypeRegistry::new()
            .with(TypeDescriptor::new("Toy1").with_namespace("Models.Toy"))
            .with(TypeDescriptor::new("Weather").with_namespace("Models.Climate"))
    }

    #[test]
    fn test_resolve_fully_qualified() {
        let t = registry().resolve("Models.Toy.Toy1").unwrap();
        assert_eq!(t.name, "Toy1");
    }

    #[test]
    fn test_resolve_bare_name_when_unambiguous() {
        let t = registry().resolve("Weather").unwrap();
        assert_eq!(t.full_name(), "Models.Climate.Weather");
    }

    #[test]
    fn test_bare_name_ambiguous() {
        let r = registry().with(TypeDescriptor::new("Weather").with_namespace("Other"));
        assert!(r.get("Weather").is_none());
        assert!(r.get("Other.Weather").is_some());
    }

    #[test]
    fn test_resolve_unknown_type() {
        let err = registry().resolve("Models.Nope").unwrap_err();
        assert!(matches!(err, ExtractError::TypeNotFound(ref id) if id == "Models.Nope"));
        assert_eq!(err.to_string(), "Cannot find type Models.Nope");
    }

    #[test]
    fn test_identifiers_in_registration_order() {
        let ids: Vec<_> = registry().identifiers().map(str::to_string).collect();
        assert_eq!(ids, vec!["Models.Toy.Toy1", "Models.Climate.Weather"]);
    }
}
