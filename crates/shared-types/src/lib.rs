pub mod config;
pub mod error;
pub mod jurisdiction;
pub mod search;

pub use config::*;
pub use error::*;
pub use jurisdiction::*;
pub use search::*;
