// Generic subsystem capability (used for registration and reporting)

/// Any unit of work the facade can compose
///
/// [`AModule`](super::AModule) and [`BModule`](super::BModule) implement this
/// alongside their dedicated ports. Extra implementations can be attached via
/// [`FacadeBuilder::register`](crate::application::FacadeBuilder::register).
///
/// # Example
/// ```
/// use facade_core::{Facade, Subsystem};
///
/// struct CModule;
///
/// impl Subsystem for CModule {
///     fn name(&self) -> &str {
///         "c"
///     }
///
///     fn run(&self) -> String {
///         "C module running".to_string()
///     }
/// }
///
/// let facade = Facade::builder().register(Box::new(CModule)).build();
/// assert_eq!(
///     facade.run(),
///     "A module running\nB module running\nC module running"
/// );
/// ```
pub trait Subsystem: Send + Sync {
    /// Short identifier, used as the report key
    fn name(&self) -> &str;

    /// Run the subsystem and return its output
    fn run(&self) -> String;
}
