pub mod bell_kind;
pub mod burger_bell_event;
