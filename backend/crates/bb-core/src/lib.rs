pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, CoreResult};
pub use models::bell_kind::BellKind;
pub use models::burger_bell_event::BurgerBellEvent;
