//! Library package for reading and writing device inventory records over the
//! inventory REST API
//!
//! # Examples
//!
//! ```no_run
//! use devinv_lib::{
//!     client::{DeviceApi, DeviceClient},
//!     config::ApiConfig,
//!     device::DeviceCreateInput,
//! };
//!
//! let config = ApiConfig::builder()
//!     .base_url("http://localhost:8000")
//!     .build()?;
//! let client = DeviceClient::new(config)?;
//!
//! let created = client.create(&DeviceCreateInput::new("Router", "Acme"))?;
//! for device in client.list()? {
//!     println!("{device}");
//! }
//! client.delete(&created.id)?;
//! # Ok::<(), devinv_lib::error::DeviceApiError>(())
//! ```

#![deny(missing_docs)]
pub mod client;
pub mod config;
pub mod device;
pub mod error;
