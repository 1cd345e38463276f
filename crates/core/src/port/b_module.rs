// Subsystem B port

use super::subsystem::Subsystem;

/// Fixed output of [`BModule::run_b`]
pub const B_MODULE_OUTPUT: &str = "B module running";

/// Capability exposed by subsystem B
#[cfg_attr(test, mockall::automock)]
pub trait BModuleApi: Send + Sync {
    /// Run subsystem B
    fn run_b(&self) -> String;
}

/// Default subsystem B (stateless)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BModule;

impl BModule {
    pub fn new() -> Self {
        Self
    }
}

impl BModuleApi for BModule {
    fn run_b(&self) -> String {
        tracing::trace!(subsystem = "b", "B module invoked");
        B_MODULE_OUTPUT.to_string()
    }
}

impl Subsystem for BModule {
    fn name(&self) -> &str {
        "b"
    }

    fn run(&self) -> String {
        self.run_b()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_b_returns_fixed_text() {
        assert_eq!(BModule::new().run_b(), "B module running");
    }

    #[test]
    fn test_run_b_is_idempotent() {
        let module = BModule::default();
        let first = module.run_b();
        let second = module.run_b();
        assert_eq!(first, second);
    }

    #[test]
    fn test_subsystem_name() {
        assert_eq!(Subsystem::name(&BModule::new()), "b");
    }
}
