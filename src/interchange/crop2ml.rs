//! Crop2ML model-unit XML.
//!
//! ## Structure
//!
//! ```xml
//! <?xml version="1.0" encoding="utf-8"?>
//! <ModelUnit modelid="AP_Toy1" name="Toy1" timestep="1" version="1.0">
//!   <Description>
//!     <Title>Toy1</Title>
//!     ...
//!   </Description>
//!   <Inputs>
//!     <Input name="IWeather.MinT" description="..." inputtype="variable"
//!            variablecategory="exogenous" datatype="DOUBLE" unit="oC"/>
//!   </Inputs>
//!   <Outputs>
//!     <Output name="VPD" variablecategory="state" .../>
//!   </Outputs>
//!   <Function name="OnStartOfDay" type="external" .../>
//!   <Initialization name="init_Toy1" language="cyml" filename="..."/>
//!   <Algorithm language="cyml" filename="..."/>
//! </ModelUnit>
//! ```
//!
//! No namespace is declared on the root element. The `unit` attribute is
//! left out when a member has no unit, except on input-state members, which
//! always carry `unit=""`.

use std::io::{Cursor, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::model::{Category, Document, Linkage, MemberDescriptor};
use super::{DocumentFormat, InterchangeError};

/// Crop2ML XML format handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Crop2Ml;

impl DocumentFormat for Crop2Ml {
    fn name(&self) -> &'static str {
        "Crop2ML"
    }

    fn extension(&self) -> &'static str {
        "xml"
    }

    fn mime_type(&self) -> &'static str {
        "application/xml"
    }

    fn write(&self, document: &Document) -> Result<Vec<u8>, InterchangeError> {
        let mut buffer = Cursor::new(Vec::new());
        let mut writer = Writer::new_with_indent(&mut buffer, b' ', 2);

        emit(
            &mut writer,
            Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)),
        )?;

        let mut root = BytesStart::new("ModelUnit");
        root.push_attribute(("modelid", document.model_id.as_str()));
        root.push_attribute(("name", document.name.as_str()));
        root.push_attribute(("timestep", document.timestep.as_str()));
        root.push_attribute(("version", document.version.as_str()));
        emit(&mut writer, Event::Start(root))?;

        write_description(&mut writer, document)?;
        write_members(&mut writer, "Inputs", "Input", &document.inputs)?;
        write_members(&mut writer, "Outputs", "Output", &document.outputs)?;

        for op in &document.operations {
            let mut function = BytesStart::new("Function");
            function.push_attribute(("name", op.name.as_str()));
            function.push_attribute(("type", "external"));
            function.push_attribute(("description", op.description.as_str()));
            function.push_attribute(("filename", op.filename.as_str()));
            function.push_attribute(("language", op.language.as_str()));
            emit(&mut writer, Event::Empty(function))?;
        }

        write_linkage(&mut writer, "Initialization", &document.initialization)?;
        write_linkage(&mut writer, "Algorithm", &document.algorithm)?;

        emit(&mut writer, Event::End(BytesEnd::new("ModelUnit")))?;

        let mut output = buffer.into_inner();
        output.push(b'\n');
        Ok(output)
    }
}

fn emit<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<(), InterchangeError> {
    writer
        .write_event(event)
        .map_err(|e| InterchangeError::xml(format!("Write error: {e}")))
}

fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    text: &str,
) -> Result<(), InterchangeError> {
    emit(writer, Event::Start(BytesStart::new(tag)))?;
    emit(writer, Event::Text(BytesText::new(text)))?;
    emit(writer, Event::End(BytesEnd::new(tag)))
}

fn write_description<W: Write>(
    writer: &mut Writer<W>,
    document: &Document,
) -> Result<(), InterchangeError> {
    let header = &document.header;
    emit(writer, Event::Start(BytesStart::new("Description")))?;
    write_text_element(writer, "Title", &header.title)?;
    write_text_element(writer, "Authors", &header.authors)?;
    write_text_element(writer, "Institution", &header.institution)?;
    write_text_element(writer, "URI", &header.uri)?;
    write_text_element(writer, "ShortDescription", &header.short_description)?;
    emit(writer, Event::End(BytesEnd::new("Description")))
}

fn write_members<W: Write>(
    writer: &mut Writer<W>,
    container: &str,
    tag: &str,
    members: &[MemberDescriptor],
) -> Result<(), InterchangeError> {
    if members.is_empty() {
        return emit(writer, Event::Empty(BytesStart::new(container)));
    }

    emit(writer, Event::Start(BytesStart::new(container)))?;
    for member in members {
        let category = member.category;
        let mut elem = BytesStart::new(tag);
        elem.push_attribute(("name", member.name.as_str()));
        if category.is_input() {
            elem.push_attribute(("description", member.description.as_str()));
            if let Some(input_type) = category.input_type() {
                elem.push_attribute(("inputtype", input_type));
            }
            if let Some(var) = category.variable_category() {
                elem.push_attribute(("variablecategory", var));
            }
        } else {
            if let Some(var) = category.variable_category() {
                elem.push_attribute(("variablecategory", var));
            }
            elem.push_attribute(("description", member.description.as_str()));
        }
        if let Some(param) = category.parameter_category() {
            elem.push_attribute(("parametercategory", param));
        }
        elem.push_attribute(("datatype", member.data_type.as_str()));
        if !member.unit.is_empty() || category == Category::InputState {
            elem.push_attribute(("unit", member.unit.as_str()));
        }
        emit(writer, Event::Empty(elem))?;
    }
    emit(writer, Event::End(BytesEnd::new(container)))
}

fn write_linkage<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    linkage: &Linkage,
) -> Result<(), InterchangeError> {
    let mut elem = BytesStart::new(tag);
    if let Some(name) = &linkage.name {
        elem.push_attribute(("name", name.as_str()));
    }
    elem.push_attribute(("language", linkage.language.as_str()));
    elem.push_attribute(("filename", linkage.filename.as_str()));
    emit(writer, Event::Empty(elem))
}
