//! HTTP request handlers organized by resource.

pub mod health;
pub mod runs;
pub mod threads;

pub use health::health_check;
pub use runs::{create_run_stream, get_run};
pub use threads::{create_thread, get_thread};
