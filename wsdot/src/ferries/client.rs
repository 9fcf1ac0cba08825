//! Ferries HTTP client.

use crate::client::{Api, WsdotClient};
use crate::error::WsdotError;

use super::convert::Schedule;
use super::types::{RouteSchedule, ScheduleDto, VesselBasic, VesselLocation};

const VESSEL_BASICS_PATH: &str = "Vessels/rest/vesselbasics";
const VESSEL_LOCATIONS_PATH: &str = "Vessels/rest/vessellocations";
const ROUTE_SCHEDULES_PATH: &str = "Schedule/rest/schedroutes";
const SCHEDULE_TODAY_PATH: &str = "Schedule/rest/scheduletoday";

/// Client for the ferries vessels and schedule APIs.
#[derive(Debug, Clone)]
pub struct FerriesClient {
    wsdot: WsdotClient,
}

impl FerriesClient {
    /// Create a ferries client sharing the given WSDOT client.
    pub fn new(wsdot: WsdotClient) -> Self {
        Self { wsdot }
    }

    /// Basic details of every vessel in the fleet.
    pub async fn get_vessel_basics(&self) -> Result<Vec<VesselBasic>, WsdotError> {
        self.wsdot
            .get_json(Api::Ferries, VESSEL_BASICS_PATH, &[], "list vessel basics")
            .await
    }

    /// Current position and status of every vessel.
    pub async fn get_vessel_locations(&self) -> Result<Vec<VesselLocation>, WsdotError> {
        self.wsdot
            .get_json(
                Api::Ferries,
                VESSEL_LOCATIONS_PATH,
                &[],
                "list vessel locations",
            )
            .await
    }

    /// Every scheduled route in the current season.
    pub async fn get_route_schedules(&self) -> Result<Vec<RouteSchedule>, WsdotError> {
        self.wsdot
            .get_json(
                Api::Ferries,
                ROUTE_SCHEDULES_PATH,
                &[],
                "list route schedules",
            )
            .await
    }

    /// Today's sailings for a route.
    ///
    /// With `only_remaining_times` set, sailings that have already left are
    /// omitted.
    pub async fn get_schedule_today_by_route(
        &self,
        route_id: i64,
        only_remaining_times: bool,
    ) -> Result<Schedule, WsdotError> {
        let path = schedule_today_path(route_id, only_remaining_times);

        let dto: ScheduleDto = self
            .wsdot
            .get_json(Api::Ferries, &path, &[], "get today's schedule by route")
            .await?;

        Ok(dto.into())
    }
}

impl TryFrom<Option<WsdotClient>> for FerriesClient {
    type Error = WsdotError;

    fn try_from(wsdot: Option<WsdotClient>) -> Result<Self, Self::Error> {
        wsdot.map(Self::new).ok_or(WsdotError::MissingClient)
    }
}

fn schedule_today_path(route_id: i64, only_remaining_times: bool) -> String {
    format!("{SCHEDULE_TODAY_PATH}/{route_id}/{only_remaining_times}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::WsdotConfig;

    #[test]
    fn schedule_today_path_interpolates_route_and_flag() {
        assert_eq!(
            schedule_today_path(5, true),
            "Schedule/rest/scheduletoday/5/true"
        );
        assert_eq!(
            schedule_today_path(13, false),
            "Schedule/rest/scheduletoday/13/false"
        );
    }

    #[test]
    fn missing_client_rejected() {
        let err = FerriesClient::try_from(None).unwrap_err();
        assert!(matches!(err, WsdotError::MissingClient));
    }

    #[test]
    fn present_client_accepted() {
        let wsdot = WsdotClient::new(WsdotConfig::new("test-key")).unwrap();
        assert!(FerriesClient::try_from(Some(wsdot)).is_ok());
    }
}
