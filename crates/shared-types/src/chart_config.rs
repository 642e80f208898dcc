//! Chart.js configuration and the state transitions applied to it
//!
//! The structs serialize to the Chart.js 2.x configuration object, so the
//! bridge can hand them to the chart as-is. State changes never mutate a
//! live configuration: each transition takes the previous state and returns
//! the next one, which is then rendered in a single step.

use serde::{Deserialize, Serialize};

use crate::colors::category_color;
use crate::counts::CountsResponse;
use crate::timestamp::{parse_timestamp, Timestamp};

/// Title shown before any camera has been selected
pub const IDLE_TITLE: &str = "Click on a camera to see counts within last 12 hrs";

/// Title shown while the counts for `raw_id` are in flight
pub fn loading_title(raw_id: &str) -> String {
    format!("Loading {raw_id}...")
}

/// Title shown once the counts for `raw_id` are on screen
pub fn populated_title(raw_id: &str) -> String {
    format!("Counts for camera {raw_id} (last 12 hrs)")
}

/// Coarse view of what the chart is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartPhase {
    Idle,
    Loading,
    Populated,
}

/// Complete chart configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
    #[serde(skip)]
    phase: ChartPhase,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChartData {
    /// One label per sample; `None` where the date string was unparseable
    pub labels: Vec<Option<Timestamp>>,
    pub datasets: Vec<Dataset>,
}

/// One category's series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    pub data: Vec<Option<f64>>,
    pub fill: bool,
}

impl Dataset {
    /// Dataset for a payload category, colored from the category table
    pub fn for_category(category: &str, data: Vec<Option<f64>>) -> Self {
        let color = category_color(category).map(str::to_string);
        Self {
            label: category.to_string(),
            background_color: color.clone(),
            border_color: color,
            data,
            fill: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub title: TitleOptions,
    pub tooltips: TooltipOptions,
    pub hover: HoverOptions,
    pub scales: Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleOptions {
    pub display: bool,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipOptions {
    pub mode: &'static str,
    pub intersect: bool,
    pub body_font_color: &'static str,
    pub title_font_color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverOptions {
    pub mode: &'static str,
    pub intersect: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scales {
    pub x_axes: Vec<TimeAxis>,
    pub y_axes: Vec<CountAxis>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleLabel {
    pub display: bool,
    pub label_string: &'static str,
}

/// Time-based x axis with hourly ticks
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeAxis {
    pub display: bool,
    #[serde(rename = "scaleLabel")]
    pub scale_label: ScaleLabel,
    #[serde(rename = "type")]
    pub axis_type: &'static str,
    pub time: TimeOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeOptions {
    pub tooltip_format: &'static str,
    pub unit: &'static str,
    pub unit_step_size: u32,
    pub display_formats: DisplayFormats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayFormats {
    pub hour: &'static str,
}

/// Linear y axis counting whole vehicles from zero
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountAxis {
    pub display: bool,
    #[serde(rename = "scaleLabel")]
    pub scale_label: ScaleLabel,
    pub ticks: Ticks,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticks {
    pub min: u32,
    pub begin_at_zero: bool,
    pub step_size: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            title: TitleOptions {
                display: true,
                text: IDLE_TITLE.to_string(),
            },
            tooltips: TooltipOptions {
                mode: "index",
                intersect: false,
                body_font_color: "#000",
                title_font_color: "#000",
            },
            hover: HoverOptions {
                mode: "nearest",
                intersect: true,
            },
            scales: Scales {
                x_axes: vec![TimeAxis {
                    display: true,
                    scale_label: ScaleLabel {
                        display: true,
                        label_string: "Time",
                    },
                    axis_type: "time",
                    time: TimeOptions {
                        tooltip_format: "ll HH:mm",
                        unit: "hour",
                        unit_step_size: 1,
                        display_formats: DisplayFormats { hour: "HH:mm" },
                    },
                }],
                y_axes: vec![CountAxis {
                    display: true,
                    scale_label: ScaleLabel {
                        display: true,
                        label_string: "Counts",
                    },
                    ticks: Ticks {
                        min: 0,
                        begin_at_zero: true,
                        step_size: 1,
                    },
                }],
            },
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            chart_type: "scatter",
            data: ChartData::default(),
            options: ChartOptions::default(),
            phase: ChartPhase::Idle,
        }
    }
}

impl ChartConfig {
    /// Empty chart with a custom idle title
    pub fn with_title(title: impl Into<String>) -> Self {
        let mut config = Self::default();
        config.options.title.text = title.into();
        config
    }

    pub fn title(&self) -> &str {
        &self.options.title.text
    }

    pub fn labels(&self) -> &[Option<Timestamp>] {
        &self.data.labels
    }

    pub fn datasets(&self) -> &[Dataset] {
        &self.data.datasets
    }

    /// State shown while the counts for `raw_id` are being fetched
    pub fn loading(&self, raw_id: &str) -> Self {
        let mut next = self.clone();
        next.data = ChartData::default();
        next.options.title.text = loading_title(raw_id);
        next.phase = ChartPhase::Loading;
        next
    }

    /// State built from a counts payload for `raw_id`.
    ///
    /// One label per date and one dataset per category, in payload order.
    /// Series lengths are taken as they come.
    pub fn populated(&self, raw_id: &str, response: &CountsResponse) -> Self {
        let labels = response
            .dates
            .iter()
            .map(|d| {
                let parsed = parse_timestamp(d);
                if parsed.is_none() {
                    log::warn!("Unparseable date in counts for {raw_id}: {d:?}");
                }
                parsed
            })
            .collect();

        let datasets = response
            .counts
            .iter()
            .map(|series| Dataset::for_category(&series.category, series.values.clone()))
            .collect();

        let mut next = self.clone();
        next.data = ChartData { labels, datasets };
        next.options.title.text = populated_title(raw_id);
        next.phase = ChartPhase::Populated;
        next
    }

    pub fn phase(&self) -> ChartPhase {
        self.phase
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
