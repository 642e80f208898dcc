//! WASM Bridge crate for the JamCam map
//! Boots the page: Leaflet map with one marker per camera, Chart.js chart of
//! the selected camera's recent counts

use std::rc::Rc;

use jamcam_config::{ConfigParser, WidgetConfig};
use jamcam_data::{populate_map, Dashboard, FetchClient};
use jamcam_shared::{Camera, ChartConfig, ErrorResponse, JamcamError, JamcamResult};
use js_sys::Promise;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, spawn_local};

pub mod chartjs;
pub mod leaflet;

use chartjs::ChartJsView;
use leaflet::LeafletMap;

type CountsDashboard = Dashboard<FetchClient, ChartJsView>;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Map of traffic cameras linked to a chart of their recent counts
#[wasm_bindgen]
pub struct CameraMap {
    config: Rc<WidgetConfig>,
    fetcher: FetchClient,
    map: Rc<LeafletMap>,
    dashboard: Rc<CountsDashboard>,
}

#[wasm_bindgen]
impl CameraMap {
    /// Create the map in `map_container_id` and the chart on
    /// `chart_canvas_id`. `config_json` overrides the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(
        map_container_id: &str,
        chart_canvas_id: &str,
        config_json: Option<String>,
    ) -> Result<CameraMap, JsValue> {
        Self::build(map_container_id, chart_canvas_id, config_json.as_deref())
            .map_err(|e| rejection(e, "new").into_js())
    }

    /// Fetch the camera directory and place the markers.
    /// Resolves to the number of markers placed; never rejects.
    #[wasm_bindgen(js_name = loadCameras)]
    pub fn load_cameras(&self) -> Promise {
        let fetcher = self.fetcher.clone();
        let map = Rc::clone(&self.map);
        let config = Rc::clone(&self.config);
        let dashboard = Rc::clone(&self.dashboard);

        future_to_promise(async move {
            let on_select = move |camera: &Camera| {
                let dashboard = Rc::clone(&dashboard);
                let camera_id = camera.id.clone();
                spawn_local(async move {
                    report(dashboard.select_camera(&camera_id).await);
                });
            };

            let placed = populate_map(
                &fetcher,
                &*map,
                &config.endpoints.directory_url,
                &config.endpoints.image_base_url,
                on_select,
            )
            .await;
            Ok(JsValue::from(placed as u32))
        })
    }

    /// Select a camera as if its marker had been clicked.
    /// A selection superseded by a newer one resolves without error.
    #[wasm_bindgen(js_name = selectCamera)]
    pub fn select_camera(&self, camera_id: String) -> Promise {
        let dashboard = Rc::clone(&self.dashboard);
        future_to_promise(async move {
            match dashboard.select_camera(&camera_id).await {
                Err(e) if !e.is_stale() => Err(rejection(e, "selectCamera").into_js()),
                _ => Ok(JsValue::UNDEFINED),
            }
        })
    }

    /// Current chart configuration as JSON
    #[wasm_bindgen(js_name = chartConfigJson)]
    pub fn chart_config_json(&self) -> String {
        self.dashboard.chart_config().to_json()
    }
}

impl CameraMap {
    fn build(
        map_container_id: &str,
        chart_canvas_id: &str,
        config_json: Option<&str>,
    ) -> JamcamResult<CameraMap> {
        let config = ConfigParser::parse_json_or_default(config_json)?;

        // Already initialised when the page creates more than one map
        let _ = console_log::init_with_level(config.logging.level());

        let map = LeafletMap::new(map_container_id, &config.map, &config.tiles)?;
        let initial = ChartConfig::with_title(config.chart.idle_title.as_str());
        let chart = ChartJsView::new(chart_canvas_id, &initial)?;

        let fetcher = FetchClient::with_timeout(config.endpoints.timeout_ms);
        let dashboard = Rc::new(Dashboard::new(
            fetcher.clone(),
            chart,
            config.endpoints.counts_url.as_str(),
            initial,
        ));

        Ok(CameraMap {
            config: Rc::new(config),
            fetcher,
            map: Rc::new(map),
            dashboard,
        })
    }
}

fn report(result: JamcamResult<()>) {
    match result {
        Ok(()) => {}
        Err(e) if e.is_stale() => log::debug!("{e}"),
        Err(e) => log::error!("Failed to load counts: {e}"),
    }
}

/// Error report for a failed `CameraMap` call
fn rejection(err: JamcamError, operation: &str) -> ErrorResponse {
    ErrorResponse::new(err).with_context("CameraMap", operation)
}

/// Serialize into plain JavaScript objects and arrays
pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> JamcamResult<JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JamcamError::JsInterop {
            message: e.to_string(),
        })
}

/// Export version info
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use jamcam_shared::CountsResponse;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn get(target: &JsValue, key: &str) -> JsValue {
        js_sys::Reflect::get(target, &JsValue::from_str(key)).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_chart_config_is_plain_object() {
        let js = to_js(&ChartConfig::default()).unwrap();

        assert!(js.is_object());
        assert_eq!(get(&js, "type").as_string().as_deref(), Some("scatter"));
        let labels = get(&get(&js, "data"), "labels");
        assert!(js_sys::Array::is_array(&labels));
    }

    #[wasm_bindgen_test]
    fn test_populated_datasets_keep_order_and_nulls() {
        let response: CountsResponse = serde_json::from_str(
            r#"{"dates": ["01/01/2020 10:00", "bogus"], "counts": {"car": [3, null], "bus": [1, 2]}}"#,
        )
        .unwrap();
        let config = ChartConfig::default().populated("1234", &response);
        let js = to_js(&config).unwrap();

        let data = get(&js, "data");
        let labels = js_sys::Array::from(&get(&data, "labels"));
        assert!(labels.get(0).is_string());
        assert!(labels.get(1).is_null());

        let datasets = js_sys::Array::from(&get(&data, "datasets"));
        assert_eq!(datasets.length(), 2);
        assert_eq!(get(&datasets.get(0), "label").as_string().as_deref(), Some("car"));
        let values = js_sys::Array::from(&get(&datasets.get(0), "data"));
        assert_eq!(values.get(0).as_f64(), Some(3.0));
        assert!(values.get(1).is_null());
    }

    #[wasm_bindgen_test]
    fn test_missing_canvas_is_reported() {
        let result = ChartJsView::new("no-such-canvas", &ChartConfig::default());
        assert!(matches!(result, Err(JamcamError::JsInterop { .. })));
    }
}
