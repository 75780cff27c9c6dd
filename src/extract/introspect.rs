//! Classification of a type's declared members into raw groups.

use crate::model::{MemberDecl, TypeDescriptor, Visibility};

/// Method names that belong to property and event accessors.
const ACCESSOR_PREFIXES: [&str; 4] = ["get_", "set_", "add_", "remove_"];

/// A type's members, grouped by the role they play in its contract.
///
/// Every group keeps declaration order. A member may appear in more than one
/// group: input-state fields are also output state.
#[derive(Debug, Default)]
pub struct Introspection<'t> {
    /// Linked collaborator fields, including visible inherited ones.
    pub linked: Vec<&'t MemberDecl>,
    /// Public instance properties with a public setter.
    pub parameters: Vec<&'t MemberDecl>,
    /// Non-public instance fields that are not linked, not compiler
    /// synthesized, and not event delegates.
    pub input_state: Vec<&'t MemberDecl>,
    /// Input-state fields followed by public read-only properties.
    pub output_state: Vec<&'t MemberDecl>,
    /// Declared methods other than accessors.
    pub operations: Vec<&'t MemberDecl>,
}

pub fn introspect(ty: &TypeDescriptor) -> Introspection<'_> {
    let linked = ty.fields_with_inherited().filter(|m| m.linked).collect();

    let public_properties = || {
        ty.members()
            .filter(|m| m.is_property() && m.visibility.is_public() && !m.is_static)
    };

    let parameters = public_properties()
        .filter(|m| m.is_publicly_writable())
        .collect();

    let input_state: Vec<_> = ty.members().filter(|m| is_state_field(m)).collect();

    let output_state = input_state
        .iter()
        .copied()
        .chain(public_properties().filter(|m| !m.is_publicly_writable()))
        .collect();

    let operations = ty
        .members()
        .filter(|m| m.is_method() && !is_accessor_name(&m.name))
        .collect();

    Introspection {
        linked,
        parameters,
        input_state,
        output_state,
        operations,
    }
}

fn is_state_field(m: &MemberDecl) -> bool {
    m.is_field()
        && !m.is_static
        && !m.visibility.is_public()
        && !m.is_backing_field()
        && !m.value_type.is_event_handler()
        && !m.linked
}

fn is_accessor_name(name: &str) -> bool {
    ACCESSOR_PREFIXES.iter().any(|p| name.starts_with(p))
}
