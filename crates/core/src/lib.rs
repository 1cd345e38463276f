// Facade Core - Subsystem Ports & Facade
// NO infrastructure dependencies: every operation is a total function

pub mod application;
pub mod port;

pub use application::{Facade, FacadeBuilder, ReportEntry, RunReport};
pub use port::{AModule, AModuleApi, BModule, BModuleApi, Subsystem};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
