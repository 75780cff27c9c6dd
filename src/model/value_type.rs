//! Declared value types of model members.

use std::borrow::Cow;
use std::sync::Arc;

use super::TypeDescriptor;

/// The declared type of a field, property, or method return.
///
/// `type_name()` mirrors the runtime type name the model was written against
/// (`Double`, `Int32`, `Double[]`, ...), which is what the Crop2ML datatype
/// token is derived from.
#[derive(Debug, Clone)]
pub enum ValueType {
    Double,
    Single,
    Int32,
    Int64,
    Boolean,
    String,
    DateTime,
    Void,
    /// Delegate type used for event backing fields.
    EventHandler,
    Array(Box<ValueType>),
    /// A type known only by name (no member information).
    Named(String),
    /// Another registered model type whose members can be looked up.
    Model(Arc<TypeDescriptor>),
}

impl ValueType {
    /// Array of the given element type.
    pub fn array_of(element: ValueType) -> Self {
        ValueType::Array(Box::new(element))
    }

    /// Opaque named type.
    pub fn named(name: impl Into<String>) -> Self {
        ValueType::Named(name.into())
    }

    /// Reference to another model type.
    pub fn model(descriptor: Arc<TypeDescriptor>) -> Self {
        ValueType::Model(descriptor)
    }

    /// Runtime-style type name, e.g. `Double[]`.
    pub fn type_name(&self) -> Cow<'_, str> {
        match self {
            ValueType::Double => Cow::Borrowed("Double"),
            ValueType::Single => Cow::Borrowed("Single"),
            ValueType::Int32 => Cow::Borrowed("Int32"),
            ValueType::Int64 => Cow::Borrowed("Int64"),
            ValueType::Boolean => Cow::Borrowed("Boolean"),
            ValueType::String => Cow::Borrowed("String"),
            ValueType::DateTime => Cow::Borrowed("DateTime"),
            ValueType::Void => Cow::Borrowed("Void"),
            ValueType::EventHandler => Cow::Borrowed("EventHandler"),
            ValueType::Array(inner) => Cow::Owned(format!("{}[]", inner.type_name())),
            ValueType::Named(name) => Cow::Borrowed(name.as_str()),
            ValueType::Model(descriptor) => Cow::Borrowed(descriptor.name.as_str()),
        }
    }

    /// Crop2ML datatype token: upper-cased type name with `[]` spelled `ARRAY`.
    pub fn data_type(&self) -> String {
        self.type_name().to_uppercase().replace("[]", "ARRAY")
    }

    /// The model descriptor behind this type, if it is a registered model.
    pub fn as_model(&self) -> Option<&Arc<TypeDescriptor>> {
        match self {
            ValueType::Model(descriptor) => Some(descriptor),
            _ => None,
        }
    }

    pub fn is_event_handler(&self) -> bool {
        matches!(self, ValueType::EventHandler)
            || matches!(self, ValueType::Named(name) if name == "EventHandler")
    }

    pub fn is_array(&self) -> bool {
        matches!(self, ValueType::Array(_))
    }
}
