// Application Layer - Facade composition over subsystem ports

pub mod facade;
pub mod report;

pub use facade::{Facade, FacadeBuilder};
pub use report::{ReportEntry, RunReport, LINE_SEPARATOR};
