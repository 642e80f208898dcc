//! Binding to the page's Chart.js (2.x) `Chart` global

use jamcam_shared::{ChartConfig, ChartView, JamcamError, JamcamResult};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::to_js;

#[wasm_bindgen]
extern "C" {
    pub type Chart;

    #[wasm_bindgen(catch, constructor)]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<Chart, JsValue>;

    #[wasm_bindgen(method, setter)]
    fn set_data(this: &Chart, data: &JsValue);

    #[wasm_bindgen(method, setter)]
    fn set_options(this: &Chart, options: &JsValue);

    #[wasm_bindgen(method)]
    fn update(this: &Chart);
}

/// Chart.js scatter chart drawing a `ChartConfig`
pub struct ChartJsView {
    chart: Chart,
}

impl ChartJsView {
    /// Create the chart on `canvas_id` showing `initial`
    pub fn new(canvas_id: &str, initial: &ChartConfig) -> JamcamResult<Self> {
        let canvas = find_canvas(canvas_id)?;
        let chart = Chart::new(&canvas, &to_js(initial)?)?;
        log::info!("Chart initialised on #{canvas_id}");
        Ok(Self { chart })
    }

    fn try_render(&self, config: &ChartConfig) -> JamcamResult<()> {
        self.chart.set_data(&to_js(&config.data)?);
        self.chart.set_options(&to_js(&config.options)?);
        self.chart.update();
        Ok(())
    }
}

impl ChartView for ChartJsView {
    fn render(&self, config: &ChartConfig) {
        if let Err(e) = self.try_render(config) {
            log::error!("Chart update failed: {e}");
        }
    }
}

fn find_canvas(canvas_id: &str) -> JamcamResult<HtmlCanvasElement> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JamcamError::JsInterop {
            message: "No document found".to_string(),
        })?;

    let element = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JamcamError::JsInterop {
            message: format!("Canvas #{canvas_id} not found"),
        })?;

    element.dyn_into::<HtmlCanvasElement>().map_err(|_| JamcamError::JsInterop {
        message: format!("#{canvas_id} is not a canvas"),
    })
}
