//! Highway Cameras HTTP client.

use crate::client::{Api, WsdotClient};
use crate::error::WsdotError;

use super::types::Camera;

const GET_CAMERAS_PATH: &str = "GetCamerasAsJson";
const GET_CAMERA_PATH: &str = "GetCameraAsJson";

/// Query parameter naming the camera to fetch.
const PARAM_CAMERA_ID: &str = "CameraID";

/// Client for the Highway Cameras API.
#[derive(Debug, Clone)]
pub struct CamerasClient {
    wsdot: WsdotClient,
}

impl CamerasClient {
    /// Create a cameras client sharing the given WSDOT client.
    pub fn new(wsdot: WsdotClient) -> Self {
        Self { wsdot }
    }

    /// List every camera.
    pub async fn get_cameras(&self) -> Result<Vec<Camera>, WsdotError> {
        self.wsdot
            .get_json(Api::Cameras, GET_CAMERAS_PATH, &[], "list cameras")
            .await
    }

    /// Fetch a single camera by ID.
    pub async fn get_camera(&self, camera_id: i64) -> Result<Camera, WsdotError> {
        self.wsdot
            .get_json(
                Api::Cameras,
                GET_CAMERA_PATH,
                &[(PARAM_CAMERA_ID, camera_id.to_string())],
                "get camera",
            )
            .await
    }
}

impl TryFrom<Option<WsdotClient>> for CamerasClient {
    type Error = WsdotError;

    fn try_from(wsdot: Option<WsdotClient>) -> Result<Self, Self::Error> {
        wsdot.map(Self::new).ok_or(WsdotError::MissingClient)
    }
}
