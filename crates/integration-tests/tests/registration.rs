// Extending the facade without touching its source

use facade_core::{AModuleApi, Facade, Subsystem};

struct CModule;

impl Subsystem for CModule {
    fn name(&self) -> &str {
        "c"
    }

    fn run(&self) -> String {
        "C module running".to_string()
    }
}

struct LoudA;

impl AModuleApi for LoudA {
    fn run_a(&self) -> String {
        "A MODULE RUNNING".to_string()
    }
}

#[test]
fn test_builder_without_changes_matches_new() {
    assert_eq!(Facade::builder().build().run(), Facade::new().run());
}

#[test]
fn test_registered_subsystem_is_appended() {
    let facade = Facade::builder().register(Box::new(CModule)).build();

    assert_eq!(
        facade.run(),
        "A module running\nB module running\nC module running"
    );
    assert_eq!(facade.subsystem_names(), vec!["a", "b", "c"]);
}

#[test]
fn test_replaced_a_keeps_order() {
    let facade = Facade::builder().with_a(Box::new(LoudA)).build();
    assert_eq!(facade.run(), "A MODULE RUNNING\nB module running");
}
