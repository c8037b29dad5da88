pub mod api;
pub mod config;
pub mod effects;
pub mod error;
pub mod integrations;
pub mod logger;
pub mod state;
pub mod types;

#[cfg(feature = "ui")]
pub mod theme;
#[cfg(feature = "ui")]
pub mod ui;
#[cfg(feature = "ui")]
pub mod views;
