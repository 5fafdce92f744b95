//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and repository ports.

pub mod inventory_service;
pub mod registry_service;

pub use inventory_service::InventoryService;
pub use registry_service::RegistryService;
