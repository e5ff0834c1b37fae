//! Result presentation and export

pub mod console;
pub mod export;
pub mod sink;

pub use console::ConsoleSink;
pub use export::{write_csv, write_json};
pub use sink::ResultsSink;
