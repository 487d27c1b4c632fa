#![doc = include_str!("../README.md")]

mod error;
pub use error::{Error, Result};

pub mod config;
pub use config::Config;

#[cfg(test)]
mod testing;

pub mod routing;
pub mod api;
pub mod views;

mod app;
pub use app::{App, Loaded, Page};
