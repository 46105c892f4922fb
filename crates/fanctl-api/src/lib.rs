// fanctl-api: raw HTTP client for the fan controller gateway.
//
// This crate knows the gateway's wire format and nothing else. Domain
// translation (numeric codes -> typed enums) lives in fanctl-core.

pub mod client;
pub mod error;
pub mod fans;
pub mod models;
pub mod transport;

pub use client::GatewayClient;
pub use error::Error;
pub use models::{FanInfoData, FanStatusData, FanUid};
pub use transport::TransportConfig;
