//! Backend core for a product-review application: authentication, the
//! review-submission and sentiment-classification pipeline, and persistence.
//! The GUI shell embedding this crate renders results and owns the current
//! [`types::Session`].

pub mod app_data;
pub mod config;
pub mod coordinators;
pub mod errors;
pub mod services;
pub mod stores;
pub mod types;

pub use app_data::{AppData, InitError};
