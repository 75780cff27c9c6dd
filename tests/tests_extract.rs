//! Extraction pipeline tests: classification, usage scanning, and assembly.

mod helpers;

use amei::extract::{ExtractError, ExtractOptions, Extractor};
use amei::interchange::{Category, Document};
use amei::model::{MemberDecl, TypeDescriptor, ValueType};
use amei::models::builtin_registry;
use amei::parser::CommentDetection;
use rstest::rstest;

use helpers::{fixture_path, radiation, weather};

fn describe(ty: &TypeDescriptor, source: &str) -> Document {
    Extractor::default().describe(ty, source)
}

fn exogenous_names(doc: &Document) -> Vec<&str> {
    doc.inputs_of(Category::Exogenous)
        .map(|m| m.name.as_str())
        .collect()
}

fn linked_to_weather() -> TypeDescriptor {
    TypeDescriptor::new("Model").with_member(MemberDecl::field("met", ValueType::model(weather())).linked())
}

// ============================================================================
// Exogenous inputs
// ============================================================================

#[test]
fn test_exogenous_first_occurrence_order() {
    let source = "a = met.MaxT; b = met.Rain; c = met.MaxT;";
    let doc = describe(&linked_to_weather(), source);
    assert_eq!(exogenous_names(&doc), vec!["IWeather.MaxT", "IWeather.Rain"]);
}

#[test]
fn test_exogenous_excludes_line_comment() {
    let source = "a = met.MaxT;\n// met.Rain\n";
    let doc = describe(&linked_to_weather(), source);
    assert_eq!(exogenous_names(&doc), vec!["IWeather.MaxT"]);
}

#[test]
fn test_exogenous_from_interpolation_hole() {
    let source = "log($\"Rain {met.Rain} mm\"); // met.MaxT\nvar s = \"met.Radn\";";
    let doc = describe(&linked_to_weather(), source);
    assert_eq!(exogenous_names(&doc), vec!["IWeather.Rain"]);
}

#[rstest]
#[case(CommentDetection::Tokenized, vec!["IWeather.Radn"])]
#[case(CommentDetection::LineHeuristic, vec!["IWeather.Wind", "IWeather.CO2", "IWeather.Radn"])]
fn test_comment_detection_modes(#[case] mode: CommentDetection, #[case] expected: Vec<&str>) {
    let source = std::fs::read_to_string(fixture_path("Radiation.cs")).unwrap();
    let options = ExtractOptions::default().with_comment_detection(mode);
    let doc = Extractor::new(options).describe(&radiation(), &source);
    assert_eq!(exogenous_names(&doc), expected);
}

#[test]
fn test_exogenous_units_and_types() {
    let doc = describe(&linked_to_weather(), "met.StartDate; met.Radn;");
    let types: Vec<_> = doc
        .inputs
        .iter()
        .map(|m| (m.data_type.as_str(), m.unit.as_str()))
        .collect();
    assert_eq!(types, vec![("DATETIME", ""), ("DOUBLE", "MJ/m2/d")]);
}

// ============================================================================
// Parameters and state
// ============================================================================

#[test]
fn test_parameter_and_state_split() {
    let doc = describe(&radiation(), "");

    let params: Vec<_> = doc
        .inputs_of(Category::Parameter)
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(params, vec!["Extinction", "LayerThickness"]);

    let states: Vec<_> = doc
        .inputs_of(Category::InputState)
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(states, vec!["note", "lai"]);

    assert_eq!(doc.output_names(), vec!["note", "lai", "Intercepted"]);
    assert!(doc.outputs.iter().all(|m| m.category == Category::OutputState));
}

#[test]
fn test_input_order_by_category() {
    let source = std::fs::read_to_string(fixture_path("Radiation.cs")).unwrap();
    let doc = describe(&radiation(), &source);
    let categories: Vec<_> = doc.inputs.iter().map(|m| m.category).collect();
    assert_eq!(
        categories,
        vec![
            Category::Exogenous,
            Category::Parameter,
            Category::Parameter,
            Category::InputState,
            Category::InputState,
        ]
    );
}

#[rstest]
#[case("LayerThickness", "DOUBLEARRAY")]
#[case("Extinction", "DOUBLE")]
#[case("note", "STRING")]
fn test_data_type_mapping(#[case] name: &str, #[case] expected: &str) {
    let doc = describe(&radiation(), "");
    let member = doc.inputs.iter().find(|m| m.name == name).unwrap();
    assert_eq!(member.data_type, expected);
}

#[test]
fn test_description_falls_back_to_name() {
    let doc = describe(&radiation(), "");
    for member in doc.inputs.iter().chain(&doc.outputs) {
        assert!(!member.description.is_empty());
    }
    let lai = doc.inputs.iter().find(|m| m.name == "lai").unwrap();
    assert_eq!(lai.description, "lai");
    let ext = doc.inputs.iter().find(|m| m.name == "Extinction").unwrap();
    assert_eq!(ext.description, "Extinction coefficient");
}

#[test]
fn test_operations_exclude_accessors() {
    let doc = describe(&radiation(), "");
    let ops: Vec<_> = doc.operations.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(ops, vec!["OnStartOfDay"]);
    assert_eq!(doc.operations[0].filename, "algo/pyx/OnStartOfDay.pyx");
}

// ============================================================================
// End-to-end
// ============================================================================

#[test]
fn test_toy1_document() {
    let registry = builtin_registry();
    let toy = registry.resolve("Models.Toy.Toy1").unwrap();
    let doc = Extractor::default()
        .describe_file(&toy, &fixture_path("Toy1.cs"))
        .unwrap();

    assert_eq!(
        doc.input_names(),
        vec!["IWeather.MinT", "IWeather.VP", "IWeather.MaxT"]
    );
    assert_eq!(doc.output_names(), vec!["VPD"]);
    assert_eq!(doc.outputs[0].unit, "hPa");
    assert_eq!(doc.model_id, "AP_Toy1");
    assert_eq!(doc.header.short_description, "Calculates vapour pressure deficit");

    let ops: Vec<_> = doc.operations.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(ops, vec!["OnStartOfSimulation", "OnStartOfDay"]);
}

#[test]
fn test_empty_model() {
    let ty = TypeDescriptor::new("Empty");
    let doc = describe(&ty, "class Empty { }");
    assert!(doc.inputs.is_empty());
    assert!(doc.outputs.is_empty());
    assert!(doc.operations.is_empty());
    assert_eq!(doc.name, "Empty");
}

#[test]
fn test_missing_source_file() {
    let ty = TypeDescriptor::new("Empty");
    let err = Extractor::default()
        .describe_file(&ty, &fixture_path("DoesNotExist.cs"))
        .unwrap_err();
    assert!(matches!(err, ExtractError::SourceRead { .. }), "got {err:?}");
}
