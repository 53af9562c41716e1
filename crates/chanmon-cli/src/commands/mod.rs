//! Command implementations.

mod clean;
mod new_event;
mod print_log;
mod watch;

pub use clean::execute_clean;
pub use new_event::execute_new_event;
pub use print_log::execute_print_log;
pub use watch::execute_watch;
