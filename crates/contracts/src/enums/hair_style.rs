use super::CatalogEnum;

/// Texture of the hair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HairStyle {
    Straight,
    Wavy,
    Curly,
    BodyWave,
}

impl CatalogEnum for HairStyle {
    fn all() -> &'static [Self] {
        &[
            HairStyle::Straight,
            HairStyle::Wavy,
            HairStyle::Curly,
            HairStyle::BodyWave,
        ]
    }

    fn id(&self) -> i32 {
        match self {
            HairStyle::Straight => 1,
            HairStyle::Wavy => 2,
            HairStyle::Curly => 3,
            HairStyle::BodyWave => 4,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            HairStyle::Straight => "STRAIGHT",
            HairStyle::Wavy => "WAVY",
            HairStyle::Curly => "CURLY",
            HairStyle::BodyWave => "BODY_WAVE",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            HairStyle::Straight => "Straight",
            HairStyle::Wavy => "Wavy",
            HairStyle::Curly => "Curly",
            HairStyle::BodyWave => "Body wave",
        }
    }
}
