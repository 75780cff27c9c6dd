//! Explicitly registered model types.
//!
//! A model author describes a type once, as a [`TypeDescriptor`] built from
//! [`MemberDecl`]s carrying their annotations (summary, units, linked). The
//! extractor works over these descriptors instead of inspecting compiled code.
//!
//! ```text
//! TypeDescriptor  "Toy1"
//!   ├─ field     weather : IWeather   [linked]
//!   ├─ property  VPD     : Double     [units hPa]  (private set)
//!   └─ method    OnStartOfDay
//! ```

mod descriptor;
mod member;
mod registry;
mod value_type;

pub use descriptor::TypeDescriptor;
pub use member::{MemberDecl, MemberKind, Visibility};
pub use registry::TypeRegistry;
pub use value_type::ValueType;
