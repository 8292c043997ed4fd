//! Catalog enumerations.
//!
//! Read-only, process-wide tables: every entry has a stable numeric id (the
//! value stored on the product), a code and a display name for select widgets.

mod hair_style;
mod length_measure_unit;
mod material_type;
mod packing_rule;
mod weight_measure_unit;

pub use hair_style::HairStyle;
pub use length_measure_unit::LengthMeasureUnit;
pub use material_type::MaterialType;
pub use packing_rule::PackingRule;
pub use weight_measure_unit::WeightMeasureUnit;

pub trait CatalogEnum: Copy + Sized + 'static {
    /// Every entry in declaration order
    fn all() -> &'static [Self];

    fn id(&self) -> i32;

    fn code(&self) -> &'static str;

    fn display_name(&self) -> &'static str;

    fn from_id(id: i32) -> Option<Self> {
        Self::all().iter().copied().find(|entry| entry.id() == id)
    }

    fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|entry| entry.code() == code)
    }
}
