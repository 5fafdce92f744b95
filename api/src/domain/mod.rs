//! Domain layer
//!
//! Blood groups, donors, donations and stock levels, plus the repository
//! traits the services depend on. Nothing here touches the database or HTTP.

pub mod entities;
pub mod ports;
