// Facade - single entry point over subsystem A and B
use std::fmt;

use tracing::debug;

use super::report::RunReport;
use crate::port::{AModule, AModuleApi, BModule, BModuleApi, Subsystem};

/// Unified interface over subsystem A, subsystem B and any registered extras
///
/// Owns each subsystem exclusively. Holds no mutable state, so `&Facade`
/// can be shared across threads.
///
/// # Example
/// ```
/// use facade_core::Facade;
///
/// let facade = Facade::new();
/// assert_eq!(facade.run(), "A module running\nB module running");
/// ```
pub struct Facade {
    a: Box<dyn AModuleApi>,
    b: Box<dyn BModuleApi>,
    extra: Vec<Box<dyn Subsystem>>,
}

impl Facade {
    /// Create a facade over default A and B modules
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start building a facade with custom or additional subsystems
    pub fn builder() -> FacadeBuilder {
        FacadeBuilder::default()
    }

    /// Invoke A, then B, then registered extras, joined with `\n`
    pub fn run(&self) -> String {
        self.report().joined()
    }

    /// Same invocation as [`Facade::run`], keeping outputs per subsystem
    pub fn report(&self) -> RunReport {
        let mut report = RunReport::default();

        report.push("a", self.a.run_a());
        report.push("b", self.b.run_b());
        for subsystem in &self.extra {
            report.push(subsystem.name(), subsystem.run());
        }

        debug!(subsystems = report.entries.len(), "Facade run completed");

        report
    }

    /// Names of composed subsystems in invocation order
    pub fn subsystem_names(&self) -> Vec<&str> {
        let mut names = vec!["a", "b"];
        names.extend(self.extra.iter().map(|s| s.name()));
        names
    }
}

impl Default for Facade {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Facade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Facade")
            .field("subsystems", &self.subsystem_names())
            .finish()
    }
}

/// Builder for [`Facade`]
///
/// A and B default to [`AModule`] and [`BModule`]. Registered subsystems run
/// after B, in registration order.
#[derive(Default)]
pub struct FacadeBuilder {
    a: Option<Box<dyn AModuleApi>>,
    b: Option<Box<dyn BModuleApi>>,
    extra: Vec<Box<dyn Subsystem>>,
}

impl FacadeBuilder {
    /// Replace subsystem A
    pub fn with_a(mut self, a: Box<dyn AModuleApi>) -> Self {
        self.a = Some(a);
        self
    }

    /// Replace subsystem B
    pub fn with_b(mut self, b: Box<dyn BModuleApi>) -> Self {
        self.b = Some(b);
        self
    }

    /// Append an extra subsystem
    pub fn register(mut self, subsystem: Box<dyn Subsystem>) -> Self {
        debug!(subsystem = subsystem.name(), "Subsystem registered");
        self.extra.push(subsystem);
        self
    }

    pub fn build(self) -> Facade {
        Facade {
            a: self.a.unwrap_or_else(|| Box::new(AModule::new())),
            b: self.b.unwrap_or_else(|| Box::new(BModule::new())),
            extra: self.extra,
        }
    }
}
