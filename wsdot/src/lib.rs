//! Typed client for the WSDOT traveler information APIs.
//!
//! Covers the Highway Cameras API and the Washington State Ferries vessels
//! and schedule APIs. Each operation is a single authenticated GET whose
//! JSON body is decoded into the types below.
//!
//! ```no_run
//! use wsdot::{WsdotClient, WsdotConfig};
//!
//! # async fn run() -> Result<(), wsdot::WsdotError> {
//! let client = WsdotClient::new(WsdotConfig::new("my-api-key"))?;
//! let vessels = client.ferries().get_vessel_basics().await?;
//! println!("{} vessels", vessels.len());
//! # Ok(())
//! # }
//! ```

pub mod cameras;
pub mod client;
pub mod date;
pub mod error;
pub mod ferries;

pub use client::{WsdotClient, WsdotConfig};
pub use error::WsdotError;
