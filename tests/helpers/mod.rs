//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use amei::model::{MemberDecl, TypeDescriptor, ValueType, Visibility};
use amei::models::iweather;

/// Path of a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn weather() -> Arc<TypeDescriptor> {
    Arc::new(iweather())
}

/// A model reading weather, with one of each kind of own member.
pub fn radiation() -> TypeDescriptor {
    TypeDescriptor::new("Radiation")
        .with_namespace("Models.Toy")
        .with_summary("Intercepted radiation.")
        .with_member(MemberDecl::field("weather", ValueType::model(weather())).linked())
        .with_member(MemberDecl::field("note", ValueType::String))
        .with_member(MemberDecl::field("lai", ValueType::Double).with_visibility(Visibility::Protected))
        .with_member(
            MemberDecl::property("Extinction", ValueType::Double)
                .auto_implemented()
                .with_summary("Extinction coefficient")
                .with_units("-"),
        )
        .with_member(
            MemberDecl::property("LayerThickness", ValueType::array_of(ValueType::Double))
                .with_units("mm"),
        )
        .with_member(
            MemberDecl::property("Intercepted", ValueType::Double)
                .with_setter(Some(Visibility::Private))
                .auto_implemented()
                .with_units("MJ/m2/d"),
        )
        .with_event("Calculated")
        .with_member(MemberDecl::method("OnStartOfDay"))
}
