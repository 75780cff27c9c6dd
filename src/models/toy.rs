use std::sync::Arc;

use crate::model::{MemberDecl, TypeDescriptor, ValueType, Visibility};

/// Vapour pressure deficit from daily minimum and maximum temperatures.
///
/// Declared against `Models/Toy/Toy1.cs`, which reads `weather.MinT`,
/// `weather.VP` and `weather.MaxT`.
pub fn toy1(weather: Arc<TypeDescriptor>) -> TypeDescriptor {
    TypeDescriptor::new("Toy1")
        .with_namespace("Models.Toy")
        .with_summary("Calculates vapour pressure deficit")
        .with_member(MemberDecl::field("weather", ValueType::model(weather)).linked())
        .with_member(
            MemberDecl::property("VPD", ValueType::Double)
                .with_setter(Some(Visibility::Private))
                .auto_implemented()
                .with_summary("Vapour pressure deficit")
                .with_units("hPa"),
        )
        .with_member(MemberDecl::method("OnStartOfSimulation").with_summary("Initialise the model."))
        .with_member(MemberDecl::method("OnStartOfDay").with_summary("Perform daily calculations."))
}
