pub mod aggregate;

pub use aggregate::{
    ColorVariantDto, CreateProductResponse, ImageRefDto, ProductDetails, ProductDto,
    ProductGroupId, ProductListItem,
};
