mod loader;

pub use loader::{Config, ReportConfig};
