use super::CatalogEnum;

/// Unit of `weight`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightMeasureUnit {
    Gram,
    Kilogram,
}

impl CatalogEnum for WeightMeasureUnit {
    fn all() -> &'static [Self] {
        &[
            WeightMeasureUnit::Gram,
            WeightMeasureUnit::Kilogram,
        ]
    }

    fn id(&self) -> i32 {
        match self {
            WeightMeasureUnit::Gram => 1,
            WeightMeasureUnit::Kilogram => 2,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            WeightMeasureUnit::Gram => "GRAM",
            WeightMeasureUnit::Kilogram => "KILOGRAM",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            WeightMeasureUnit::Gram => "Gram",
            WeightMeasureUnit::Kilogram => "Kilogram",
        }
    }
}
