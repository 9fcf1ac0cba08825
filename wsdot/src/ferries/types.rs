//! Ferries API response DTOs.
//!
//! These map directly to the JSON the vessels and schedule APIs return.
//! Date fields arrive as `/Date(<ms>±HHMM)/` strings; they are kept raw
//! here and each record offers `*_utc` accessors that normalize them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::date::normalize_optional;

/// Deserialize `null` as the type's default (used for list fields).
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A vessel in the fleet, as returned by `vesselbasics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VesselBasic {
    #[serde(rename = "VesselID")]
    pub vessel_id: i64,

    #[serde(rename = "VesselSubjectID")]
    pub vessel_subject_id: i64,

    pub vessel_name: String,

    pub vessel_abbrev: String,

    /// The class of vessel this ship belongs to.
    pub class: VesselClass,

    /// Raw operational status code. See [`VesselBasic::operational_status`].
    pub status: i32,

    #[serde(rename = "OwnedByWSF")]
    pub owned_by_wsf: bool,
}

impl VesselBasic {
    /// The status code as a typed value.
    pub fn operational_status(&self) -> VesselStatus {
        VesselStatus::from(self.status)
    }
}

/// Vessel class descriptor nested in [`VesselBasic`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VesselClass {
    #[serde(rename = "ClassID")]
    pub class_id: i64,

    #[serde(rename = "ClassSubjectID")]
    pub class_subject_id: i64,

    pub class_name: String,

    pub sort_seq: i32,

    pub drawing_img: Option<String>,

    pub silhouette_img: Option<String>,

    pub public_display_name: String,
}

/// Operational status of a vessel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VesselStatus {
    InService,
    Maintenance,
    OutOfService,
    Unknown(i32),
}

impl From<i32> for VesselStatus {
    fn from(code: i32) -> Self {
        match code {
            1 => VesselStatus::InService,
            2 => VesselStatus::Maintenance,
            3 => VesselStatus::OutOfService,
            other => VesselStatus::Unknown(other),
        }
    }
}

/// Live position of a vessel, as returned by `vessellocations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VesselLocation {
    #[serde(rename = "VesselID")]
    pub vessel_id: i64,

    pub vessel_name: String,

    /// Maritime Mobile Service Identity.
    pub mmsi: Option<i64>,

    #[serde(rename = "DepartingTerminalID")]
    pub departing_terminal_id: i64,

    pub departing_terminal_name: String,

    pub departing_terminal_abbrev: String,

    /// Absent while the vessel is docked or out of service.
    #[serde(rename = "ArrivingTerminalID")]
    pub arriving_terminal_id: Option<i64>,

    pub arriving_terminal_name: Option<String>,

    pub arriving_terminal_abbrev: Option<String>,

    pub latitude: f64,

    pub longitude: f64,

    /// Speed in knots.
    pub speed: f64,

    /// Heading in degrees.
    pub heading: i32,

    pub in_service: bool,

    pub at_dock: bool,

    pub left_dock: Option<String>,

    pub eta: Option<String>,

    /// How the ETA was derived.
    pub eta_basis: Option<String>,

    pub scheduled_departure: Option<String>,

    /// Route abbreviations the vessel is working.
    #[serde(default, deserialize_with = "null_as_default")]
    pub op_route_abbrev: Vec<String>,

    pub vessel_position_num: Option<i32>,

    pub sort_seq: i32,

    pub managed_by: i32,

    /// When this position was reported.
    pub time_stamp: Option<String>,

    #[serde(rename = "VesselWatchShutID")]
    pub vessel_watch_shut_id: i64,

    pub vessel_watch_shut_msg: Option<String>,

    pub vessel_watch_shut_flag: Option<String>,

    pub vessel_watch_status: Option<String>,

    pub vessel_watch_msg: Option<String>,
}

impl VesselLocation {
    /// When the vessel left dock. A malformed value is logged and returned as `None`.
    pub fn left_dock_utc(&self) -> Option<DateTime<Utc>> {
        normalize_optional(self.left_dock.as_deref(), "LeftDock")
    }

    /// Estimated arrival. A malformed value is logged and returned as `None`.
    pub fn eta_utc(&self) -> Option<DateTime<Utc>> {
        normalize_optional(self.eta.as_deref(), "Eta")
    }

    /// Scheduled departure. A malformed value is logged and returned as `None`.
    pub fn scheduled_departure_utc(&self) -> Option<DateTime<Utc>> {
        normalize_optional(self.scheduled_departure.as_deref(), "ScheduledDeparture")
    }

    /// When this position was reported. A malformed value is logged and returned as `None`.
    pub fn time_stamp_utc(&self) -> Option<DateTime<Utc>> {
        normalize_optional(self.time_stamp.as_deref(), "TimeStamp")
    }
}

/// A scheduled route, as returned by `schedroutes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RouteSchedule {
    #[serde(rename = "ScheduleID")]
    pub schedule_id: i64,

    #[serde(rename = "SchedRouteID")]
    pub sched_route_id: i64,

    /// True if this route only runs as a contingency.
    pub contingency_only: bool,

    #[serde(rename = "RouteID")]
    pub route_id: i64,

    pub route_abbrev: String,

    pub description: String,

    pub seasonal_route_notes: Option<String>,

    #[serde(rename = "RegionID")]
    pub region_id: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub service_disruptions: Vec<ServiceDisruption>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub contingency_adj: Vec<ContingencyAdjustment>,
}

/// A bulletin announcing a disruption on a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceDisruption {
    #[serde(rename = "BulletinID")]
    pub bulletin_id: i64,

    pub bulletin_flag: bool,

    pub publish_date: Option<String>,

    pub disruption_description: Option<String>,
}

impl ServiceDisruption {
    /// When the bulletin was published. A malformed value is logged and returned as `None`.
    pub fn publish_date_utc(&self) -> Option<DateTime<Utc>> {
        normalize_optional(self.publish_date.as_deref(), "PublishDate")
    }
}

/// A contingency adjustment to a route's schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContingencyAdjustment {
    pub date_from: Option<String>,

    pub date_thru: Option<String>,

    #[serde(rename = "EventID")]
    pub event_id: Option<i64>,

    pub event_description: Option<String>,

    pub adj_type: i32,

    /// Route that replaces this one while the adjustment is in effect.
    #[serde(rename = "ReplacedBySchedRouteID")]
    pub replaced_by_sched_route_id: Option<i64>,
}

impl ContingencyAdjustment {
    /// Start of the adjustment. A malformed value is logged and returned as `None`.
    pub fn date_from_utc(&self) -> Option<DateTime<Utc>> {
        normalize_optional(self.date_from.as_deref(), "DateFrom")
    }

    /// End of the adjustment. A malformed value is logged and returned as `None`.
    pub fn date_thru_utc(&self) -> Option<DateTime<Utc>> {
        normalize_optional(self.date_thru.as_deref(), "DateThru")
    }
}

/// Raw `scheduletoday` response. Converted into [`super::Schedule`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ScheduleDto {
    #[serde(rename = "ScheduleID")]
    pub schedule_id: i64,

    pub schedule_name: String,

    pub schedule_season: i32,

    #[serde(rename = "SchedulePDFUrl")]
    pub schedule_pdf_url: String,

    pub schedule_start: Option<String>,

    pub schedule_end: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub all_routes: Vec<i64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub terminal_combos: Vec<TerminalComboDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct TerminalComboDto {
    #[serde(rename = "DepartingTerminalID")]
    pub departing_terminal_id: i64,

    pub departing_terminal_name: String,

    #[serde(rename = "ArrivingTerminalID")]
    pub arriving_terminal_id: i64,

    pub arriving_terminal_name: String,

    pub sailing_notes: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub annotations: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub times: Vec<SailingTimeDto>,

    #[serde(
        rename = "AnnotationsIVR",
        default,
        deserialize_with = "null_as_default"
    )]
    pub annotations_ivr: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct SailingTimeDto {
    pub departing_time: Option<String>,

    pub arriving_time: Option<String>,

    pub loading_rule: i32,

    #[serde(rename = "VesselID")]
    pub vessel_id: i64,

    pub vessel_name: String,

    pub vessel_handicap_accessible: bool,

    pub vessel_position_num: Option<i32>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub routes: Vec<i64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub annotation_indexes: Vec<i32>,
}
