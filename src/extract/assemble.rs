//! Document assembly: identity, header, and external routine linkage.

use super::ExtractOptions;
use super::classify::Classified;
use super::describe::describe_type;
use crate::interchange::{Document, Header, Linkage, OperationDescriptor};
use crate::model::TypeDescriptor;

/// Compose the final document for `ty` from its classified members.
pub fn assemble(ty: &TypeDescriptor, classified: Classified, options: &ExtractOptions) -> Document {
    let name = ty.name.clone();
    let init_file = options.algorithm_file(&format!("init.{name}"));

    let operations = classified
        .operations
        .into_iter()
        .map(|op| OperationDescriptor {
            filename: options.algorithm_file(&op.name),
            name: op.name,
            description: op.description,
            language: options.language.clone(),
        })
        .collect();

    Document {
        model_id: format!("{}_{name}", options.model_id_prefix),
        timestep: options.timestep.clone(),
        version: options.version.clone(),
        header: Header {
            title: name.clone(),
            authors: options.authors.clone(),
            institution: options.institution.clone(),
            uri: options.uri.clone(),
            short_description: describe_type(ty),
        },
        inputs: classified.inputs,
        outputs: classified.outputs,
        operations,
        initialization: Linkage {
            name: Some(format!("init_{name}")),
            language: options.language.clone(),
            filename: init_file.clone(),
        },
        algorithm: Linkage {
            name: None,
            language: options.language.clone(),
            filename: init_file,
        },
        name,
    }
}
