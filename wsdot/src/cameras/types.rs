//! Highway Cameras response types.
//!
//! These map directly to the JSON the cameras API returns. Several string
//! fields come back as `null` for cameras WSDOT does not own, so they are
//! optional here.

use serde::{Deserialize, Serialize};

/// A traffic camera, as returned by `GetCamerasAsJson` and `GetCameraAsJson`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Camera {
    #[serde(rename = "CameraID")]
    pub camera_id: i64,

    /// Where the camera is mounted.
    pub camera_location: CameraLocation,

    /// Agency operating the camera, when not WSDOT.
    pub camera_owner: Option<String>,

    /// Free-text description. Usually absent.
    pub description: Option<String>,

    /// Latitude to use when plotting the camera on a map.
    pub display_latitude: f64,

    /// Longitude to use when plotting the camera on a map.
    pub display_longitude: f64,

    pub image_height: i32,

    /// URL of the latest still image.
    #[serde(rename = "ImageURL")]
    pub image_url: String,

    pub image_width: i32,

    pub is_active: bool,

    /// Website of the owning agency.
    #[serde(rename = "OwnerURL")]
    pub owner_url: Option<String>,

    /// WSDOT region code (e.g. "NW", "SC").
    pub region: String,

    pub sort_order: i32,

    /// Human-readable title, e.g. "I-405 at MP 0.3: Southcenter".
    pub title: String,
}

/// Physical location of a camera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CameraLocation {
    /// Sometimes a string, usually null.
    pub description: Option<String>,

    /// Direction the camera faces ("N", "S", "B" for both, ...).
    pub direction: Option<String>,

    pub latitude: f64,

    pub longitude: f64,

    /// Milepost along the road. Fractional on some routes.
    pub mile_post: f64,

    pub road_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_camera_with_nulls() {
        let json = r#"{
            "CameraID": 9818,
            "CameraLocation": {
                "Description": null,
                "Direction": "B",
                "Latitude": 47.464,
                "Longitude": -122.218,
                "MilePost": 0,
                "RoadName": "405"
            },
            "CameraOwner": null,
            "Description": null,
            "DisplayLatitude": 47.464,
            "DisplayLongitude": -122.218,
            "ImageHeight": 180,
            "ImageURL": "https://images.wsdot.wa.gov/nw/405vc00030.jpg",
            "ImageWidth": 335,
            "IsActive": true,
            "OwnerURL": null,
            "Region": "NW",
            "SortOrder": 3210,
            "Title": "I-405 at MP 0.3: Southcenter"
        }"#;

        let camera: Camera = serde_json::from_str(json).unwrap();

        assert_eq!(camera.camera_id, 9818);
        assert_eq!(camera.camera_location.road_name, "405");
        assert_eq!(camera.camera_location.direction.as_deref(), Some("B"));
        assert_eq!(camera.camera_location.description, None);
        assert_eq!(camera.description, None);
        assert_eq!(camera.camera_owner, None);
        assert!(camera.is_active);
        assert_eq!(
            camera.image_url,
            "https://images.wsdot.wa.gov/nw/405vc00030.jpg"
        );
    }

    #[test]
    fn deserialize_camera_with_descriptions() {
        let json = r#"{
            "CameraID": 1,
            "CameraLocation": {
                "Description": "Looking north",
                "Direction": "N",
                "Latitude": 47.0,
                "Longitude": -122.0,
                "MilePost": 12.5,
                "RoadName": "I-5"
            },
            "CameraOwner": "City of Seattle",
            "Description": "Mercer St",
            "DisplayLatitude": 47.0,
            "DisplayLongitude": -122.0,
            "ImageHeight": 240,
            "ImageURL": "https://example.test/cam.jpg",
            "ImageWidth": 320,
            "IsActive": false,
            "OwnerURL": "https://www.seattle.gov",
            "Region": "NW",
            "SortOrder": 1,
            "Title": "Mercer St",
            "SomethingNew": [1, 2, 3]
        }"#;

        let camera: Camera = serde_json::from_str(json).unwrap();

        assert_eq!(camera.description.as_deref(), Some("Mercer St"));
        assert_eq!(
            camera.camera_location.description.as_deref(),
            Some("Looking north")
        );
        assert_eq!(camera.camera_location.mile_post, 12.5);
        assert_eq!(camera.owner_url.as_deref(), Some("https://www.seattle.gov"));
        assert!(!camera.is_active);
    }

    #[test]
    fn missing_description_is_absent() {
        let json = r#"{
            "CameraID": 2,
            "CameraLocation": {
                "Latitude": 46.0,
                "Longitude": -120.0,
                "MilePost": 3,
                "RoadName": "US 97"
            },
            "DisplayLatitude": 46.0,
            "DisplayLongitude": -120.0,
            "ImageHeight": 240,
            "ImageURL": "https://example.test/cam2.jpg",
            "ImageWidth": 320,
            "IsActive": true,
            "Region": "SC",
            "SortOrder": 2,
            "Title": "US 97"
        }"#;

        let camera: Camera = serde_json::from_str(json).unwrap();
        assert_eq!(camera.description, None);
        assert_eq!(camera.camera_location.direction, None);
    }

    #[test]
    fn serializes_with_api_field_names() {
        let camera = Camera {
            camera_id: 7,
            camera_location: CameraLocation {
                description: None,
                direction: Some("S".into()),
                latitude: 1.0,
                longitude: 2.0,
                mile_post: 3.0,
                road_name: "SR 520".into(),
            },
            camera_owner: None,
            description: None,
            display_latitude: 1.0,
            display_longitude: 2.0,
            image_height: 10,
            image_url: "u".into(),
            image_width: 20,
            is_active: true,
            owner_url: None,
            region: "NW".into(),
            sort_order: 0,
            title: "t".into(),
        };

        let value = serde_json::to_value(&camera).unwrap();
        assert_eq!(value["CameraID"], 7);
        assert_eq!(value["ImageURL"], "u");
        assert_eq!(value["CameraLocation"]["RoadName"], "SR 520");
    }
}
