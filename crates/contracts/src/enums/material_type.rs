use super::CatalogEnum;

/// Hair material of a product group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialType {
    Remy,
    Virgin,
    Synthetic,
}

impl CatalogEnum for MaterialType {
    fn all() -> &'static [Self] {
        &[
            MaterialType::Remy,
            MaterialType::Virgin,
            MaterialType::Synthetic,
        ]
    }

    fn id(&self) -> i32 {
        match self {
            MaterialType::Remy => 1,
            MaterialType::Virgin => 2,
            MaterialType::Synthetic => 3,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            MaterialType::Remy => "REMY",
            MaterialType::Virgin => "VIRGIN",
            MaterialType::Synthetic => "SYNTHETIC",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            MaterialType::Remy => "Remy hair",
            MaterialType::Virgin => "Virgin hair",
            MaterialType::Synthetic => "Synthetic",
        }
    }
}
