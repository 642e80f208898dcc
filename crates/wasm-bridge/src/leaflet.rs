//! Bindings to the page's Leaflet (`L`) global

use jamcam_config::{MapConfig, TileLayerConfig};
use jamcam_shared::{Camera, JamcamResult, MapView};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::to_js;

#[wasm_bindgen]
extern "C" {
    pub type Map;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn create_map(container_id: &str) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &Map, center: &JsValue, zoom: u8) -> Map;

    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &TileLayer, map: &Map) -> TileLayer;

    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn marker(lat_lng: &JsValue, options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Marker, map: &Map) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, html: &str) -> Marker;

    #[wasm_bindgen(method)]
    fn on(this: &Marker, event: &str, handler: &js_sys::Function) -> Marker;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileOptions<'a> {
    attribution: &'a str,
    max_zoom: u8,
    id: &'a str,
    tile_size: u32,
    zoom_offset: i8,
    access_token: &'a str,
}

#[derive(Serialize)]
struct MarkerOptions<'a> {
    id: &'a str,
    title: &'a str,
    alt: &'a str,
}

/// Leaflet map with its basemap layer
pub struct LeafletMap {
    map: Map,
}

impl LeafletMap {
    /// Create the map in `container_id`, centre it and add the tile layer
    pub fn new(container_id: &str, view: &MapConfig, tiles: &TileLayerConfig) -> JamcamResult<Self> {
        let map = create_map(container_id)?;
        map.set_view(&to_js(&[view.center_lat, view.center_lon])?, view.zoom);

        let options = TileOptions {
            attribution: &tiles.attribution,
            max_zoom: tiles.max_zoom,
            id: &tiles.style_id,
            tile_size: tiles.tile_size,
            zoom_offset: tiles.zoom_offset,
            access_token: &tiles.access_token,
        };
        tile_layer(&tiles.url_template, &to_js(&options)?).add_to(&map);

        log::info!(
            "Map initialised in #{container_id} at ({}, {}) zoom {}",
            view.center_lat,
            view.center_lon,
            view.zoom
        );
        Ok(Self { map })
    }
}

impl MapView for LeafletMap {
    fn add_camera(&self, camera: &Camera, popup_html: &str, on_click: Box<dyn Fn()>) {
        let options = MarkerOptions {
            id: &camera.id,
            title: camera.common_name.as_deref().unwrap_or(&camera.id),
            alt: &camera.id,
        };
        let (lat_lng, options) = match (to_js(&[camera.lat, camera.lon]), to_js(&options)) {
            (Ok(lat_lng), Ok(options)) => (lat_lng, options),
            (Err(e), _) | (_, Err(e)) => {
                log::error!("Cannot place marker for {}: {e}", camera.id);
                return;
            }
        };

        // Markers live as long as the page, so the handler is never dropped
        let handler = Closure::wrap(on_click);
        marker(&lat_lng, &options)
            .add_to(&self.map)
            .bind_popup(popup_html)
            .on("click", handler.as_ref().unchecked_ref());
        handler.forget();
    }
}
