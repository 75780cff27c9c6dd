use crate::model::{MemberDecl, TypeDescriptor, ValueType};

fn met(name: &str, summary: &str, units: &str) -> MemberDecl {
    MemberDecl::readonly_property(name, ValueType::Double)
        .with_summary(summary)
        .with_units(units)
}

/// Daily weather data provider, linked into models as a collaborator.
pub fn iweather() -> TypeDescriptor {
    TypeDescriptor::new("IWeather")
        .with_namespace("Models.Interfaces")
        .with_summary("A weather data provider.")
        .with_member(
            MemberDecl::readonly_property("StartDate", ValueType::DateTime)
                .with_summary("Start date of the weather file"),
        )
        .with_member(
            MemberDecl::readonly_property("EndDate", ValueType::DateTime)
                .with_summary("End date of the weather file"),
        )
        .with_member(met("MaxT", "Maximum air temperature", "oC"))
        .with_member(met("MinT", "Minimum air temperature", "oC"))
        .with_member(met("MeanT", "Mean air temperature", "oC"))
        .with_member(met("VPD", "Daily mean vapour pressure deficit", "hPa"))
        .with_member(met("Rain", "Rainfall", "mm"))
        .with_member(met("PanEvap", "Pan evaporation", "mm"))
        .with_member(met("Radn", "Solar radiation", "MJ/m2/d"))
        .with_member(met("VP", "Vapour pressure", "hPa"))
        .with_member(met("Wind", "Wind value found in weather file", "m/s"))
        .with_member(met("CO2", "CO2 level", "ppm"))
        .with_member(met("AirPressure", "Atmospheric air pressure", "hPa"))
        .with_member(met("Latitude", "Latitude", "deg"))
        .with_member(met("Tav", "Average temperature", "oC"))
        .with_member(met("Amp", "Temperature amplitude", "oC"))
        .with_member(
            MemberDecl::readonly_property("DayLength", ValueType::Double)
                .with_summary("Day length, including twilight")
                .with_units("h"),
        )
}
