//! Highway Cameras API.
//!
//! Lists the traffic cameras WSDOT publishes and looks up a single camera
//! by ID. Authenticates with the `AccessCode` query parameter.

mod client;
mod types;

pub use client::CamerasClient;
pub use types::{Camera, CameraLocation};
