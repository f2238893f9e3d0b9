//! Configuration types

mod app;
mod injector;
mod logging;

pub use app::AppConfig;
pub use injector::InjectorConfig;
pub use logging::LoggingConfig;
