//! Washington State Ferries vessels and schedule APIs.
//!
//! Key characteristics:
//! - Authenticates with the `apiaccesscode` query parameter
//! - Dates are `/Date(<ms>±HHMM)/` strings; the millisecond value is the
//!   absolute instant and the offset is informational
//! - `scheduletoday` takes its parameters in the URL path, not the query

mod client;
mod convert;
mod types;

pub use client::FerriesClient;
pub use convert::{SailingTime, Schedule, TerminalCombo};
pub use types::{
    ContingencyAdjustment, RouteSchedule, ServiceDisruption, VesselBasic, VesselClass,
    VesselLocation, VesselStatus,
};
