pub mod api_error;
pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod icons;
pub mod modal_stack;
pub mod notifications;
