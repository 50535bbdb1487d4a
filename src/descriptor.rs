//! Descriptors for the types and operations documentation is requested for.
//!
//! The provider does not know the caller's type system; it only needs the
//! handful of facts these descriptors carry — names, interface-ness, the
//! routing marker, and the direct supertype surface used to decide which
//! type the generated page was written for.

/// A resource class or interface as seen by the documentation provider.
#[derive(Debug, Clone, Default)]
pub struct TypeDescriptor {
    /// Dotted qualified name, e.g. `org.example.BookStore`. Determines the
    /// documentation resource path.
    pub qualified_name: String,
    /// Bare name as it appears in the page heading, e.g. `BookStore`.
    pub simple_name: String,
    pub is_interface: bool,
    /// Whether this type itself carries the routing marker.
    pub has_route_marker: bool,
    /// Direct superclass, if any.
    pub superclass: Option<Box<TypeDescriptor>>,
    /// Directly implemented interfaces, in declaration order.
    pub interfaces: Vec<TypeDescriptor>,
}

impl TypeDescriptor {
    /// Convenience constructor for a type with no supertype surface.
    pub fn new(qualified_name: impl Into<String>) -> Self {
        let qualified_name = qualified_name.into();
        let simple_name = qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(&qualified_name)
            .to_string();
        TypeDescriptor {
            qualified_name,
            simple_name,
            ..TypeDescriptor::default()
        }
    }
}

/// An operation on a resource class: the declaring method's name and its
/// ordered parameter types.
#[derive(Debug, Clone)]
pub struct OperationDescriptor {
    pub name: String,
    /// Parameter type names in declaration order. Only the count takes part
    /// in anchor matching; the full list disambiguates cache slots.
    pub param_types: Vec<String>,
}

impl OperationDescriptor {
    pub fn new(name: impl Into<String>, param_types: Vec<String>) -> Self {
        OperationDescriptor {
            name: name.into(),
            param_types,
        }
    }

    pub fn key(&self) -> OperationKey {
        OperationKey {
            name: self.name.clone(),
            param_types: self.param_types.clone(),
        }
    }
}

/// Stable cache key for an operation: name plus ordered parameter types.
/// Two descriptors with the same name and type sequence share a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperationKey {
    name: String,
    param_types: Vec<String>,
}
