//! Wire contracts shared between the catalog admin UI and the REST API.
//!
//! Nothing here touches the browser: DTOs, catalog enumerations, field
//! validation rules and the select-option mapper.

pub mod domain;
pub mod enums;
pub mod shared;
