// Subsystem A port

use super::subsystem::Subsystem;

/// Fixed output of [`AModule::run_a`]
pub const A_MODULE_OUTPUT: &str = "A module running";

/// Capability exposed by subsystem A
#[cfg_attr(test, mockall::automock)]
pub trait AModuleApi: Send + Sync {
    /// Run subsystem A
    fn run_a(&self) -> String;
}

/// Default subsystem A (stateless)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AModule;

impl AModule {
    pub fn new() -> Self {
        Self
    }
}

impl AModuleApi for AModule {
    fn run_a(&self) -> String {
        tracing::trace!(subsystem = "a", "A module invoked");
        A_MODULE_OUTPUT.to_string()
    }
}

impl Subsystem for AModule {
    fn name(&self) -> &str {
        "a"
    }

    fn run(&self) -> String {
        self.run_a()
    }
}
