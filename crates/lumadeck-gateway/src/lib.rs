//! # lumadeck-gateway - Light Service Client
//!
//! The boundary between Lumadeck and the remote light service.
//!
//! ## Public API
//!
//! - [`DeviceGateway`] - Async trait for the service operations (list, read, write)
//! - [`HttpGateway`] - HTTP/JSON implementation over `reqwest`
//! - [`HttpGatewayConfig`] - Base URL, password and timeout
//! - [`protocol`] - Wire decoding and error-channel normalization
//!
//! With the `test-helpers` feature, `test_utils` provides a scripted
//! in-memory gateway for tests in dependent crates.

pub mod gateway;
pub mod http;
pub mod protocol;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use gateway::{DeviceGateway, LocalDeviceGateway};
pub use http::{HttpGateway, HttpGatewayConfig, DEFAULT_TIMEOUT};
