//! Merge introspected members and scanned usages into descriptor records.

use tracing::{debug, warn};

use super::describe::resolve;
use super::introspect::Introspection;
use crate::interchange::{Category, MemberDescriptor};
use crate::model::MemberDecl;
use crate::parser::UsageScanner;

/// A callable operation before its external file is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub name: String,
    pub description: String,
}

/// Descriptor lists ready for assembly.
#[derive(Debug, Default)]
pub struct Classified {
    pub inputs: Vec<MemberDescriptor>,
    pub outputs: Vec<MemberDescriptor>,
    pub operations: Vec<Operation>,
}

/// Build descriptors for every group.
///
/// Inputs are ordered exogenous, parameters, input state. Nothing is
/// deduplicated across groups or across collaborators.
pub fn classify(raw: &Introspection<'_>, scanner: &UsageScanner<'_>) -> Classified {
    let mut inputs = Vec::new();

    for field in &raw.linked {
        exogenous(field, scanner, &mut inputs);
    }

    inputs.extend(
        raw.parameters
            .iter()
            .map(|m| descriptor(m, Category::Parameter, true)),
    );
    inputs.extend(
        raw.input_state
            .iter()
            .map(|m| descriptor(m, Category::InputState, false)),
    );

    let outputs = raw
        .output_state
        .iter()
        .map(|m| descriptor(m, Category::OutputState, m.is_property()))
        .collect();

    let operations = raw
        .operations
        .iter()
        .map(|m| Operation {
            name: m.name.clone(),
            description: resolve(m).description,
        })
        .collect();

    Classified {
        inputs,
        outputs,
        operations,
    }
}

/// One descriptor per scanned member that exists as a property of the
/// collaborator's type.
fn exogenous(field: &MemberDecl, scanner: &UsageScanner<'_>, out: &mut Vec<MemberDescriptor>) {
    let used = scanner.scan(&field.name);
    let Some(collaborator) = field.value_type.as_model() else {
        if !used.is_empty() {
            warn!(
                field = %field.name,
                ty = %field.value_type.type_name(),
                "linked field type has no registered members; usages ignored"
            );
        }
        return;
    };
    debug!(field = %field.name, usages = used.len(), "scanned linked field");

    for name in used {
        let Some(property) = collaborator.find_property(&name) else {
            warn!(
                field = %field.name,
                member = %name,
                ty = %collaborator.name,
                "used member is not a property of the linked type"
            );
            continue;
        };
        let resolved = resolve(property);
        out.push(MemberDescriptor {
            name: format!("{}.{}", collaborator.name, name),
            description: resolved.description,
            data_type: property.value_type.data_type(),
            unit: resolved.unit,
            category: Category::Exogenous,
        });
    }
}

fn descriptor(member: &MemberDecl, category: Category, with_unit: bool) -> MemberDescriptor {
    let resolved = resolve(member);
    MemberDescriptor {
        name: member.name.clone(),
        description: resolved.description,
        data_type: member.value_type.data_type(),
        unit: if with_unit { resolved.unit } else { String::new() },
        category,
    }
}
