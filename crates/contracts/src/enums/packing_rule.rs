use super::CatalogEnum;

/// How a product group is packed for sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackingRule {
    Bundle,
    Closure,
    Frontal,
}

impl CatalogEnum for PackingRule {
    fn all() -> &'static [Self] {
        &[
            PackingRule::Bundle,
            PackingRule::Closure,
            PackingRule::Frontal,
        ]
    }

    fn id(&self) -> i32 {
        match self {
            PackingRule::Bundle => 1,
            PackingRule::Closure => 2,
            PackingRule::Frontal => 3,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            PackingRule::Bundle => "BUNDLE",
            PackingRule::Closure => "CLOSURE",
            PackingRule::Frontal => "FRONTAL",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            PackingRule::Bundle => "Bundle",
            PackingRule::Closure => "Closure",
            PackingRule::Frontal => "Frontal",
        }
    }
}
