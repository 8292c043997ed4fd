pub mod aggregate;

pub use aggregate::ProductType;
