//! Type descriptors: the explicit, registered form of a model type.

use std::sync::Arc;

use super::{MemberDecl, MemberKind, ValueType, Visibility};

/// A model type as declared by its author.
///
/// Members are kept in declaration order. Adding a property or an event also
/// adds the members a compiler would synthesize for it (accessor methods,
/// backing fields, the event's delegate field), so consumers see the same
/// member set a runtime type would expose.
#[derive(Debug, Clone, Default)]
pub struct TypeDescriptor {
    pub name: String,
    pub namespace: Option<String>,
    pub summary: Option<String>,
    pub base: Option<Arc<TypeDescriptor>>,
    members: Vec<MemberDecl>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_base(mut self, base: Arc<TypeDescriptor>) -> Self {
        self.base = Some(base);
        self
    }

    /// Declare a member.
    pub fn with_member(mut self, member: MemberDecl) -> Self {
        if let MemberKind::Property {
            setter,
            auto_implemented,
        } = member.kind
        {
            if auto_implemented {
                self.members.push(MemberDecl::field(
                    format!("<{}>k__BackingField", member.name),
                    member.value_type.clone(),
                ));
            }
            let accessor = |prefix: &str, visibility: Visibility| {
                let mut m = MemberDecl::method(format!("{prefix}{}", member.name))
                    .with_visibility(visibility);
                m.is_static = member.is_static;
                m
            };
            self.members.push(accessor("get_", member.visibility));
            if let Some(setter) = setter {
                self.members.push(accessor("set_", setter));
            }
        }
        self.members.push(member);
        self
    }

    /// Declare a public event.
    pub fn with_event(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.members
            .push(MemberDecl::field(name.clone(), ValueType::EventHandler));
        self.members.push(MemberDecl::method(format!("add_{name}")));
        self.members.push(MemberDecl::method(format!("remove_{name}")));
        self
    }

    /// Fully qualified identifier, `Namespace.Name`.
    pub fn full_name(&self) -> String {
        match &self.namespace {
            Some(ns) if !ns.is_empty() => format!("{ns}.{}", self.name),
            _ => self.name.clone(),
        }
    }

    /// Members declared directly on this type, in declaration order.
    pub fn members(&self) -> impl Iterator<Item = &MemberDecl> {
        self.members.iter()
    }

    /// Base types, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = &TypeDescriptor> {
        std::iter::successors(self.base.as_deref(), |t| t.base.as_deref())
    }

    /// Instance fields visible on this type: all declared ones, then the
    /// non-private fields of each base type.
    pub fn fields_with_inherited(&self) -> impl Iterator<Item = &MemberDecl> {
        let own = self.members().filter(|m| m.is_field());
        let inherited = self.ancestors().flat_map(|t| {
            t.members()
                .filter(|m| m.is_field() && m.visibility != Visibility::Private)
        });
        own.chain(inherited).filter(|m| !m.is_static)
    }

    /// Find an instance property by name on this type or any base type,
    /// regardless of visibility.
    pub fn find_property(&self, name: &str) -> Option<&MemberDecl> {
        std::iter::once(self)
            .chain(self.ancestors())
            .flat_map(|t| t.members())
            .find(|m| m.is_property() && !m.is_static && m.name == name)
    }
}
