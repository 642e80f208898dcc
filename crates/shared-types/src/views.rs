//! Seams between the page logic and the widgets that draw it
//!
//! The browser build implements these over Leaflet and Chart.js; tests
//! implement them with recorders.

use crate::camera::Camera;
use crate::chart_config::ChartConfig;

/// The chart widget's redraw operation
pub trait ChartView {
    /// Replace what the chart shows with `config` and redraw
    fn render(&self, config: &ChartConfig);
}

/// The map widget's marker placement
pub trait MapView {
    /// Place one marker for `camera` with a popup and a click callback
    fn add_camera(&self, camera: &Camera, popup_html: &str, on_click: Box<dyn Fn()>);
}

impl<T: ChartView + ?Sized> ChartView for std::rc::Rc<T> {
    fn render(&self, config: &ChartConfig) {
        (**self).render(config)
    }
}

impl<T: MapView + ?Sized> MapView for std::rc::Rc<T> {
    fn add_camera(&self, camera: &Camera, popup_html: &str, on_click: Box<dyn Fn()>) {
        (**self).add_camera(camera, popup_html, on_click)
    }
}
