pub mod a001_category;
pub mod a002_product_type;
pub mod a003_color;
pub mod a004_product;
pub mod common;
