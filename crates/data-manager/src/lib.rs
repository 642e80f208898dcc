//! Data Manager crate for the JamCam map
//! Fetches the camera directory and the recent counts, and drives the chart
//! when a camera is selected

pub mod counts;
pub mod dashboard;
pub mod directory;
pub mod fetcher;
pub mod request_tracker;
pub mod wasm_fetch;

pub use counts::{counts_url, fetch_counts};
pub use dashboard::Dashboard;
pub use directory::{load_directory, populate_map};
pub use fetcher::{get_json, Fetcher};
pub use request_tracker::RequestTracker;
pub use wasm_fetch::FetchClient;
