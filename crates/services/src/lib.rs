#![forbid(unsafe_code)]

pub mod backend;
pub mod config;
pub mod error;
pub mod review_service;

pub use backend::{HttpBackend, ReviewBackend};
#[cfg(any(test, feature = "test-support"))]
pub use backend::{Scripted, StubBackend};
pub use config::BackendConfig;
pub use error::{BackendError, ConfigError};
pub use reqwest::StatusCode;
pub use review_service::ReviewService;
