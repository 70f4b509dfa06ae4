mod bell_kind;
mod burger_bell_event;
