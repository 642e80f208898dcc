//! In-memory stand-ins for the browser: a scripted fetcher and recording
//! chart and map views

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use futures::channel::oneshot;
use futures::future::{FutureExt, LocalBoxFuture};
use jamcam_data::Fetcher;
use jamcam_shared::{Camera, ChartConfig, ChartView, JamcamError, JamcamResult, MapView};

pub const COUNTS_URL: &str = "http://localhost:8080/api/v1/cams/recent";
pub const DIRECTORY_URL: &str = "https://api.tfl.gov.uk/Place/Type/JamCam/";
pub const IMAGE_BASE: &str = "https://s3-eu-west-1.amazonaws.com/jamcams.tfl.gov.uk";

enum Reply {
    Body(String),
    Fail(JamcamError),
    Deferred(oneshot::Receiver<JamcamResult<String>>),
}

/// Answers each URL once with a scripted reply; unknown URLs get a 404
#[derive(Default)]
pub struct ScriptedFetcher {
    replies: RefCell<HashMap<String, Reply>>,
    requests: RefCell<Vec<String>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, url: &str, body: &str) {
        self.replies
            .borrow_mut()
            .insert(url.to_string(), Reply::Body(body.to_string()));
    }

    pub fn fail(&self, url: &str, error: JamcamError) {
        self.replies
            .borrow_mut()
            .insert(url.to_string(), Reply::Fail(error));
    }

    /// Reply later through the returned sender
    pub fn defer(&self, url: &str) -> oneshot::Sender<JamcamResult<String>> {
        let (tx, rx) = oneshot::channel();
        self.replies
            .borrow_mut()
            .insert(url.to_string(), Reply::Deferred(rx));
        tx
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Fetcher for ScriptedFetcher {
    fn get<'a>(&'a self, url: &'a str) -> LocalBoxFuture<'a, JamcamResult<String>> {
        self.requests.borrow_mut().push(url.to_string());
        let reply = self.replies.borrow_mut().remove(url);

        async move {
            match reply {
                Some(Reply::Body(body)) => Ok(body),
                Some(Reply::Fail(error)) => Err(error),
                Some(Reply::Deferred(rx)) => rx
                    .await
                    .unwrap_or_else(|_| Err(JamcamError::network("reply dropped"))),
                None => Err(JamcamError::HttpStatus {
                    status: 404,
                    url: url.to_string(),
                }),
            }
        }
        .boxed_local()
    }
}

/// Keeps every configuration the chart was asked to draw
#[derive(Default)]
pub struct RecordingChart {
    frames: RefCell<Vec<ChartConfig>>,
}

impl RecordingChart {
    pub fn frames(&self) -> Vec<ChartConfig> {
        self.frames.borrow().clone()
    }

    pub fn last(&self) -> ChartConfig {
        self.frames
            .borrow()
            .last()
            .cloned()
            .expect("chart was never rendered")
    }

    pub fn titles(&self) -> Vec<String> {
        self.frames
            .borrow()
            .iter()
            .map(|f| f.title().to_string())
            .collect()
    }
}

impl ChartView for RecordingChart {
    fn render(&self, config: &ChartConfig) {
        self.frames.borrow_mut().push(config.clone());
    }
}

pub struct PlacedMarker {
    pub camera: Camera,
    pub popup: String,
    pub on_click: Box<dyn Fn()>,
}

/// Keeps every marker placed on the map
#[derive(Default)]
pub struct RecordingMap {
    pub markers: RefCell<Vec<PlacedMarker>>,
}

impl RecordingMap {
    pub fn len(&self) -> usize {
        self.markers.borrow().len()
    }

    pub fn click(&self, index: usize) {
        (self.markers.borrow()[index].on_click)();
    }
}

impl MapView for RecordingMap {
    fn add_camera(&self, camera: &Camera, popup_html: &str, on_click: Box<dyn Fn()>) {
        self.markers.borrow_mut().push(PlacedMarker {
            camera: camera.clone(),
            popup: popup_html.to_string(),
            on_click,
        });
    }
}

pub fn counts_request(raw_id: &str) -> String {
    format!("{COUNTS_URL}?id={raw_id}")
}
