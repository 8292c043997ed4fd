pub mod aggregate;

pub use aggregate::Color;
