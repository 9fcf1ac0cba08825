//! Conversion from the raw `scheduletoday` response to [`Schedule`].
//!
//! Every timestamp is normalized field by field. A malformed one is logged
//! and left absent instead of failing the whole schedule.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::date::normalize_optional;

use super::types::{SailingTimeDto, ScheduleDto, TerminalComboDto};

/// Today's sailings on a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Schedule {
    #[serde(rename = "ScheduleID")]
    pub schedule_id: i64,
    pub schedule_name: String,
    pub schedule_season: i32,
    #[serde(rename = "SchedulePDFUrl")]
    pub schedule_pdf_url: String,
    pub schedule_start: Option<DateTime<Utc>>,
    pub schedule_end: Option<DateTime<Utc>>,
    pub all_routes: Vec<i64>,
    pub terminal_combos: Vec<TerminalCombo>,
}

/// Sailings between one departing and one arriving terminal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TerminalCombo {
    #[serde(rename = "DepartingTerminalID")]
    pub departing_terminal_id: i64,
    pub departing_terminal_name: String,
    #[serde(rename = "ArrivingTerminalID")]
    pub arriving_terminal_id: i64,
    pub arriving_terminal_name: String,
    pub sailing_notes: Option<String>,
    /// Footnotes referenced by [`SailingTime::annotation_indexes`].
    pub annotations: Vec<String>,
    pub times: Vec<SailingTime>,
    /// Annotations worded for the phone system.
    #[serde(rename = "AnnotationsIVR")]
    pub annotations_ivr: Vec<String>,
}

/// A single scheduled sailing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SailingTime {
    pub departing_time: Option<DateTime<Utc>>,
    pub arriving_time: Option<DateTime<Utc>>,
    /// Passenger/vehicle loading rule code.
    pub loading_rule: i32,
    #[serde(rename = "VesselID")]
    pub vessel_id: i64,
    pub vessel_name: String,
    pub vessel_handicap_accessible: bool,
    pub vessel_position_num: Option<i32>,
    pub routes: Vec<i64>,
    pub annotation_indexes: Vec<i32>,
}

impl TerminalCombo {
    /// Annotations that apply to `time`. Out-of-range indexes are skipped.
    pub fn annotations_for<'a>(&'a self, time: &'a SailingTime) -> impl Iterator<Item = &'a str> {
        time.annotation_indexes.iter().filter_map(move |&i| {
            usize::try_from(i)
                .ok()
                .and_then(|i| self.annotations.get(i))
                .map(String::as_str)
        })
    }
}

impl From<ScheduleDto> for Schedule {
    fn from(dto: ScheduleDto) -> Self {
        Self {
            schedule_id: dto.schedule_id,
            schedule_name: dto.schedule_name,
            schedule_season: dto.schedule_season,
            schedule_pdf_url: dto.schedule_pdf_url,
            schedule_start: normalize_optional(dto.schedule_start.as_deref(), "ScheduleStart"),
            schedule_end: normalize_optional(dto.schedule_end.as_deref(), "ScheduleEnd"),
            all_routes: dto.all_routes,
            terminal_combos: dto.terminal_combos.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<TerminalComboDto> for TerminalCombo {
    fn from(dto: TerminalComboDto) -> Self {
        Self {
            departing_terminal_id: dto.departing_terminal_id,
            departing_terminal_name: dto.departing_terminal_name,
            arriving_terminal_id: dto.arriving_terminal_id,
            arriving_terminal_name: dto.arriving_terminal_name,
            sailing_notes: dto.sailing_notes,
            annotations: dto.annotations,
            times: dto.times.into_iter().map(Into::into).collect(),
            annotations_ivr: dto.annotations_ivr,
        }
    }
}

impl From<SailingTimeDto> for SailingTime {
    fn from(dto: SailingTimeDto) -> Self {
        Self {
            departing_time: normalize_optional(dto.departing_time.as_deref(), "DepartingTime"),
            arriving_time: normalize_optional(dto.arriving_time.as_deref(), "ArrivingTime"),
            loading_rule: dto.loading_rule,
            vessel_id: dto.vessel_id,
            vessel_name: dto.vessel_name,
            vessel_handicap_accessible: dto.vessel_handicap_accessible,
            vessel_position_num: dto.vessel_position_num,
            routes: dto.routes,
            annotation_indexes: dto.annotation_indexes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEDULE_JSON: &str = r#"{
        "ScheduleID": 191,
        "ScheduleName": "Spring 2025",
        "ScheduleSeason": 1,
        "SchedulePDFUrl": "https://www.wsdot.com/ferries/schedule/pdf/spring2025.pdf",
        "ScheduleStart": "/Date(1742713200000-0700)/",
        "ScheduleEnd": null,
        "AllRoutes": [5],
        "TerminalCombos": [
            {
                "DepartingTerminalID": 7,
                "DepartingTerminalName": "Seattle",
                "ArrivingTerminalID": 3,
                "ArrivingTerminalName": "Bainbridge Island",
                "SailingNotes": "",
                "Annotations": ["Sunday only", "Holiday service"],
                "Times": [
                    {
                        "DepartingTime": "/Date(1742740500000-0700)/",
                        "ArrivingTime": "/Date(1742742600000-0700)/",
                        "LoadingRule": 3,
                        "VesselID": 38,
                        "VesselName": "Wenatchee",
                        "VesselHandicapAccessible": true,
                        "VesselPositionNum": 1,
                        "Routes": [5],
                        "AnnotationIndexes": [1, 7]
                    },
                    {
                        "DepartingTime": null,
                        "ArrivingTime": "not a date",
                        "LoadingRule": 3,
                        "VesselID": 25,
                        "VesselName": "Tacoma",
                        "VesselHandicapAccessible": true,
                        "VesselPositionNum": 2,
                        "Routes": [5],
                        "AnnotationIndexes": []
                    }
                ],
                "AnnotationsIVR": ["Sundays only"]
            }
        ]
    }"#;

    fn schedule() -> Schedule {
        let dto: ScheduleDto = serde_json::from_str(SCHEDULE_JSON).unwrap();
        dto.into()
    }

    #[test]
    fn converts_schedule_dates() {
        let schedule = schedule();

        assert_eq!(schedule.schedule_id, 191);
        assert_eq!(
            schedule.schedule_start.map(|t| t.timestamp_millis()),
            Some(1_742_713_200_000)
        );
        assert_eq!(schedule.schedule_end, None);
        assert_eq!(schedule.all_routes, vec![5]);
    }

    #[test]
    fn converts_sailing_times() {
        let schedule = schedule();
        let combo = &schedule.terminal_combos[0];

        assert_eq!(combo.departing_terminal_name, "Seattle");
        assert_eq!(combo.annotations_ivr, vec!["Sundays only".to_string()]);
        assert_eq!(combo.times.len(), 2);

        let first = &combo.times[0];
        assert_eq!(
            first.departing_time.map(|t| t.timestamp_millis()),
            Some(1_742_740_500_000)
        );
        assert_eq!(
            first.arriving_time.map(|t| t.timestamp_millis()),
            Some(1_742_742_600_000)
        );
        assert_eq!(first.vessel_name, "Wenatchee");
    }

    #[test]
    fn null_departure_is_absent() {
        let schedule = schedule();
        let second = &schedule.terminal_combos[0].times[1];

        assert_eq!(second.departing_time, None);
        // Malformed values are dropped without failing the schedule.
        assert_eq!(second.arriving_time, None);
        assert_eq!(second.vessel_name, "Tacoma");
    }

    #[test]
    fn annotations_skip_out_of_range_indexes() {
        let schedule = schedule();
        let combo = &schedule.terminal_combos[0];

        let notes: Vec<&str> = combo.annotations_for(&combo.times[0]).collect();
        assert_eq!(notes, vec!["Holiday service"]);
        assert_eq!(combo.annotations_for(&combo.times[1]).count(), 0);
    }

    #[test]
    fn serializes_timestamps_as_rfc3339() {
        let value = serde_json::to_value(schedule()).unwrap();

        assert_eq!(value["ScheduleStart"], "2025-03-23T07:00:00Z");
        assert!(value["ScheduleEnd"].is_null());
        assert!(value["TerminalCombos"][0]["Times"][1]["DepartingTime"].is_null());
    }
}
