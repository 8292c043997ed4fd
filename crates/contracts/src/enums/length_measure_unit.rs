use super::CatalogEnum;

/// Unit of `fromLength` / `toLength`.
///
/// Lengths are entered as plain numbers; the unit only labels them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthMeasureUnit {
    Inch,
    Centimeter,
}

impl CatalogEnum for LengthMeasureUnit {
    fn all() -> &'static [Self] {
        &[
            LengthMeasureUnit::Inch,
            LengthMeasureUnit::Centimeter,
        ]
    }

    fn id(&self) -> i32 {
        match self {
            LengthMeasureUnit::Inch => 1,
            LengthMeasureUnit::Centimeter => 2,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            LengthMeasureUnit::Inch => "INCH",
            LengthMeasureUnit::Centimeter => "CENTIMETER",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            LengthMeasureUnit::Inch => "Inch",
            LengthMeasureUnit::Centimeter => "Centimeter",
        }
    }
}
