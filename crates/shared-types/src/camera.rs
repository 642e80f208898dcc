//! Camera records from the TfL JamCam directory

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

/// Prefix the directory puts in front of every camera identifier
pub const CAMERA_ID_PREFIX: &str = "JamCams_";

/// Where TfL publishes the latest still of each camera
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://s3-eu-west-1.amazonaws.com/jamcams.tfl.gov.uk";

/// Strip the directory prefix from a camera identifier.
///
/// The counts API, the popup image and the chart title all use the raw
/// form (`JamCams_00001.01234` -> `00001.01234`). Only the first occurrence
/// is removed; identifiers without the prefix are borrowed untouched.
pub fn strip_prefix(id: &str) -> Cow<'_, str> {
    match id.strip_prefix(CAMERA_ID_PREFIX) {
        Some(rest) => Cow::Borrowed(rest),
        None if id.contains(CAMERA_ID_PREFIX) => Cow::Owned(id.replacen(CAMERA_ID_PREFIX, "", 1)),
        None => Cow::Borrowed(id),
    }
}

/// One traffic camera as placed on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    pub id: String,
    pub raw_id: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
}

impl Camera {
    pub fn new(id: impl Into<String>, lat: f64, lon: f64) -> Self {
        let id = id.into();
        let raw_id = strip_prefix(&id).into_owned();
        Self {
            id,
            raw_id,
            lat,
            lon,
            common_name: None,
        }
    }

    pub fn with_common_name(mut self, name: impl Into<String>) -> Self {
        self.common_name = Some(name.into());
        self
    }

    /// Build a camera from one directory record.
    ///
    /// Returns `None` unless the record has a string `id` and finite
    /// `lat`/`lon`. Numeric strings are accepted for the coordinates.
    pub fn from_record(record: &Value) -> Option<Self> {
        let id = record.get("id")?.as_str()?;
        let lat = coordinate(record.get("lat")?)?;
        let lon = coordinate(record.get("lon")?)?;

        let camera = Self::new(id, lat, lon);
        match record.get("commonName").and_then(Value::as_str) {
            Some(name) => Some(camera.with_common_name(name)),
            None => Some(camera),
        }
    }
}

fn coordinate(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}

/// URL of the latest still published for a camera
pub fn image_url(image_base: &str, camera: &Camera) -> String {
    format!("{}/{}.jpg", image_base.trim_end_matches('/'), camera.raw_id)
}
