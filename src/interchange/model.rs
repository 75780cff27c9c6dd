//! The assembled model-interface document.
//!
//! A [`Document`] is built once per extraction and handed to a
//! [`DocumentFormat`](super::DocumentFormat) for serialization. It is never
//! modified afterwards.

use serde::Serialize;

/// Which part of the model contract a member belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Read from a linked collaborator.
    Exogenous,
    /// Writable, externally configured.
    Parameter,
    /// Model-owned value read at the start of a step.
    InputState,
    /// Model-owned value produced by a step.
    OutputState,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Exogenous => "exogenous",
            Category::Parameter => "parameter",
            Category::InputState => "input-state",
            Category::OutputState => "output-state",
        }
    }

    pub fn is_input(self) -> bool {
        self != Category::OutputState
    }

    /// Crop2ML `inputtype`; outputs carry none.
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            Category::Exogenous | Category::InputState => Some("variable"),
            Category::Parameter => Some("parameter"),
            Category::OutputState => None,
        }
    }

    /// Crop2ML `variablecategory`; parameters carry none.
    pub fn variable_category(self) -> Option<&'static str> {
        match self {
            Category::Exogenous => Some("exogenous"),
            Category::InputState | Category::OutputState => Some("state"),
            Category::Parameter => None,
        }
    }

    /// Crop2ML `parametercategory`; only parameters carry one.
    pub fn parameter_category(self) -> Option<&'static str> {
        match self {
            Category::Parameter => Some("constant"),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One exposed input or output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDescriptor {
    pub name: String,
    pub description: String,
    pub data_type: String,
    pub unit: String,
    pub category: Category,
}

/// One callable operation, implemented externally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDescriptor {
    pub name: String,
    pub description: String,
    pub filename: String,
    pub language: String,
}

/// Document header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub title: String,
    pub authors: String,
    pub institution: String,
    pub uri: String,
    pub short_description: String,
}

/// Reference to an externally implemented routine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Linkage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub language: String,
    pub filename: String,
}

/// A complete model-interface description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub model_id: String,
    pub name: String,
    pub timestep: String,
    pub version: String,
    pub header: Header,
    /// Exogenous, then parameters, then input state.
    pub inputs: Vec<MemberDescriptor>,
    pub outputs: Vec<MemberDescriptor>,
    pub operations: Vec<OperationDescriptor>,
    pub initialization: Linkage,
    pub algorithm: Linkage,
}

impl Document {
    /// Inputs of one category, in document order.
    pub fn inputs_of(&self, category: Category) -> impl Iterator<Item = &MemberDescriptor> {
        self.inputs.iter().filter(move |m| m.category == category)
    }

    pub fn input_names(&self) -> Vec<&str> {
        self.inputs.iter().map(|m| m.name.as_str()).collect()
    }

    pub fn output_names(&self) -> Vec<&str> {
        self.outputs.iter().map(|m| m.name.as_str()).collect()
    }
}
