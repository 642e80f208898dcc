//! Shared types for the JamCam map
//!
//! This crate contains the domain model and the pure logic shared between
//! the data-manager and wasm-bridge crates: cameras and their identifiers,
//! the counts payload, the Chart.js configuration and the functions that
//! move it from one state to the next. Nothing in here touches the browser,
//! so all of it can be exercised by native tests.

pub mod camera;
pub mod chart_config;
pub mod colors;
pub mod counts;
pub mod errors;
pub mod popup;
pub mod timestamp;
pub mod views;

pub use camera::{image_url, strip_prefix, Camera, CAMERA_ID_PREFIX, DEFAULT_IMAGE_BASE_URL};
pub use chart_config::{ChartConfig, ChartPhase, Dataset};
pub use colors::{category_color, VehicleCategory};
pub use counts::{CategoryCounts, CategorySeries, CountsResponse};
pub use errors::{ErrorResponse, JamcamError, JamcamResult};
pub use popup::popup_html;
pub use timestamp::{parse_timestamp, Timestamp};
pub use views::{ChartView, MapView};
