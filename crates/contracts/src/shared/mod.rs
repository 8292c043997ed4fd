pub mod metadata;
pub mod options;
