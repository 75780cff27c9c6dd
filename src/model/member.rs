//! Member declarations: fields, properties, and methods of a model type.

use super::ValueType;

/// Declared accessibility of a member or accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Protected,
    Internal,
    Private,
}

impl Visibility {
    pub fn is_public(self) -> bool {
        self == Visibility::Public
    }
}

/// What kind of member a declaration is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberKind {
    Field,
    Property {
        /// Setter accessibility, `None` for get-only properties.
        setter: Option<Visibility>,
        /// Whether the compiler supplies the storage (`{ get; set; }`).
        auto_implemented: bool,
    },
    Method,
}

/// A single declared member together with its declarative annotations.
///
/// Annotations are the structured literal a model author attaches to a
/// member: a summary (description), a units string, and the `linked` marker
/// for collaborator fields wired up by the simulation runtime.
#[derive(Debug, Clone)]
pub struct MemberDecl {
    pub name: String,
    pub kind: MemberKind,
    pub visibility: Visibility,
    pub is_static: bool,
    pub value_type: ValueType,
    pub summary: Option<String>,
    pub units: Option<String>,
    pub linked: bool,
}

impl MemberDecl {
    fn new(name: impl Into<String>, kind: MemberKind, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            kind,
            visibility: Visibility::Private,
            is_static: false,
            value_type,
            summary: None,
            units: None,
            linked: false,
        }
    }

    /// A private instance field.
    pub fn field(name: impl Into<String>, value_type: ValueType) -> Self {
        Self::new(name, MemberKind::Field, value_type)
    }

    /// A public get/set property.
    pub fn property(name: impl Into<String>, value_type: ValueType) -> Self {
        Self::new(
            name,
            MemberKind::Property {
                setter: Some(Visibility::Public),
                auto_implemented: false,
            },
            value_type,
        )
        .with_visibility(Visibility::Public)
    }

    /// A public get-only property.
    pub fn readonly_property(name: impl Into<String>, value_type: ValueType) -> Self {
        Self::property(name, value_type).with_setter(None)
    }

    /// A public instance method returning nothing.
    pub fn method(name: impl Into<String>) -> Self {
        Self::new(name, MemberKind::Method, ValueType::Void).with_visibility(Visibility::Public)
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Set the setter accessibility. No effect on fields and methods.
    pub fn with_setter(mut self, setter: Option<Visibility>) -> Self {
        if let MemberKind::Property { setter: s, .. } = &mut self.kind {
            *s = setter;
        }
        self
    }

    /// Mark a property as auto-implemented. No effect on fields and methods.
    pub fn auto_implemented(mut self) -> Self {
        if let MemberKind::Property {
            auto_implemented, ..
        } = &mut self.kind
        {
            *auto_implemented = true;
        }
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    /// Mark a field as a linked collaborator.
    pub fn linked(mut self) -> Self {
        self.linked = true;
        self
    }

    pub fn is_field(&self) -> bool {
        self.kind == MemberKind::Field
    }

    pub fn is_property(&self) -> bool {
        matches!(self.kind, MemberKind::Property { .. })
    }

    pub fn is_method(&self) -> bool {
        self.kind == MemberKind::Method
    }

    /// Writable from outside the type: a property with a public setter.
    pub fn is_publicly_writable(&self) -> bool {
        matches!(
            self.kind,
            MemberKind::Property {
                setter: Some(Visibility::Public),
                ..
            }
        )
    }

    /// Compiler-synthesized storage for an auto-implemented property.
    pub fn is_backing_field(&self) -> bool {
        self.is_field() && self.name.contains("__BackingField")
    }
}
