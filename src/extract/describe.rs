//! Description and unit lookup for members and types.

use crate::model::{MemberDecl, TypeDescriptor};

/// Human-readable description and unit of a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Never empty: the member's name when no summary is attached.
    pub description: String,
    /// Empty when no units are attached.
    pub unit: String,
}

/// Resolve a member's description and unit from its annotations.
pub fn resolve(member: &MemberDecl) -> Resolved {
    Resolved {
        description: summary_or(member.summary.as_deref(), &member.name),
        unit: member.units.clone().unwrap_or_default(),
    }
}

/// The type's own summary, or its name.
pub fn describe_type(ty: &TypeDescriptor) -> String {
    summary_or(ty.summary.as_deref(), &ty.name)
}

/// Summaries are free text copied from doc comments; collapse their layout.
fn summary_or(summary: Option<&str>, fallback: &str) -> String {
    summary
        .map(|s| s.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ValueType;

    #[test]
    fn test_summary_and_units() {
        let m = MemberDecl::property("VPD", ValueType::Double)
            .with_summary("Vapour pressure deficit")
            .with_units("hPa");
        assert_eq!(
            resolve(&m),
            Resolved {
                description: "Vapour pressure deficit".to_string(),
                unit: "hPa".to_string(),
            }
        );
    }

    #[test]
    fn test_falls_back_to_name() {
        let m = MemberDecl::field("leafArea", ValueType::Double);
        let r = resolve(&m);
        assert_eq!(r.description, "leafArea");
        assert_eq!(r.unit, "");
    }

    #[test]
    fn test_blank_summary_falls_back() {
        let m = MemberDecl::method("Run").with_summary("  \n ");
        assert_eq!(resolve(&m).description, "Run");
    }

    #[test]
    fn test_summary_whitespace_collapsed() {
        let t = TypeDescriptor::new("Toy1").with_summary("\n  Calculates vapour\n  pressure deficit\n");
        assert_eq!(describe_type(&t), "Calculates vapour pressure deficit");
        assert_eq!(describe_type(&TypeDescriptor::new("Bare")), "Bare");
    }
}
