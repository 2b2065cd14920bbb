//! Domain layer: core entities and business rules.

pub mod catalog;
pub mod credential;
pub mod fallback;
pub mod linker;
pub mod message;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
