#[cfg(feature = "server")]
pub mod config;

#[cfg(feature = "server")]
pub mod client;

#[cfg(feature = "server")]
pub mod excerpt;

#[cfg(feature = "server")]
pub mod error_convert;

pub mod api;
