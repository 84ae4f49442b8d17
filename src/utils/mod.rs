pub mod deps;
pub mod logger;

pub use deps::require_tool;
pub use logger::init_logging;
