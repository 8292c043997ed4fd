//! Product edit dialog
//!
//! - form.rs: draft, schema, color variants, payload
//! - editor.rs: state machine (events in, commands out)
//! - commands.rs: runs gateway commands for the editor
//! - view_model.rs: binds the editor to signals
//! - page.rs + sections/: Leptos components

mod commands;
pub mod editor;
pub mod form;
mod page;
mod sections;
mod view_model;

pub use editor::DialogResult;
pub use page::ProductEditDialog;
