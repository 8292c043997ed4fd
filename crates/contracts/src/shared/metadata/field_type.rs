//! Field type enumeration for metadata system

/// How the raw text of a field is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldType {
    #[default]
    Text,
    /// Decimal number typed by the user (lengths, weight)
    Number,
    /// Integer id picked from a select (enumeration entry or reference record)
    Reference,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Reference => "reference",
        }
    }
}
