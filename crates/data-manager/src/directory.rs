//! Camera directory loader and marker placement

use std::rc::Rc;

use jamcam_shared::{popup_html, Camera, JamcamError, JamcamResult, MapView};
use serde_json::Value;

use crate::fetcher::{get_json, Fetcher};

/// Fetch the camera directory.
///
/// The body must be a JSON array. Records without a usable id or position
/// are skipped; the rest are returned in directory order.
pub async fn load_directory<F>(fetcher: &F, url: &str) -> JamcamResult<Vec<Camera>>
where
    F: Fetcher + ?Sized,
{
    let body: Value = get_json(fetcher, url).await?;
    let records = match body {
        Value::Array(records) => records,
        other => {
            return Err(JamcamError::parse(format!(
                "Camera directory is not a JSON array (got {})",
                json_kind(&other)
            )))
        }
    };

    let total = records.len();
    let cameras: Vec<Camera> = records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let camera = Camera::from_record(record);
            if camera.is_none() {
                log::warn!("Skipping directory record {index}: missing id or position");
            }
            camera
        })
        .collect();

    log::info!("Loaded {} of {total} cameras from {url}", cameras.len());
    Ok(cameras)
}

/// Load the directory and place one marker per camera.
///
/// `on_select` runs with the marker's camera when it is clicked. Returns the
/// number of markers placed; a failed load is logged and places none.
pub async fn populate_map<F, M, S>(
    fetcher: &F,
    map: &M,
    directory_url: &str,
    image_base: &str,
    on_select: S,
) -> usize
where
    F: Fetcher + ?Sized,
    M: MapView + ?Sized,
    S: Fn(&Camera) + 'static,
{
    let cameras = match load_directory(fetcher, directory_url).await {
        Ok(cameras) => cameras,
        Err(e) => {
            log::error!("Failed to load camera directory: {e}");
            return 0;
        }
    };

    let on_select = Rc::new(on_select);
    for camera in &cameras {
        let handler = Rc::clone(&on_select);
        let selected = camera.clone();
        map.add_camera(
            camera,
            &popup_html(camera, image_base),
            Box::new(move || handler(&selected)),
        );
    }

    cameras.len()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
