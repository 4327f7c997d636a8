pub mod config;
pub mod error;
pub mod logging;
pub mod paths;

pub use config::Config;
pub use error::{BoostError, Result};
pub use paths::AppPaths;
