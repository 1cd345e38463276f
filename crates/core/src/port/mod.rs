// Port Layer - Capability interfaces for subsystems

pub mod a_module;
pub mod b_module;
pub mod subsystem; // Registration (extension point)

// Re-exports
pub use a_module::{AModule, AModuleApi};
pub use b_module::{BModule, BModuleApi};
pub use subsystem::Subsystem;
