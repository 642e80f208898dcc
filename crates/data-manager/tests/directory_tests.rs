//! Integration tests for the camera directory loader

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{RecordingMap, ScriptedFetcher, DIRECTORY_URL, IMAGE_BASE};
use futures::executor::block_on;
use jamcam_data::{load_directory, populate_map};
use jamcam_shared::{Camera, JamcamError};

const DIRECTORY: &str = r#"[
    {"$type": "Tfl.Api.Presentation.Entities.Place", "id": "JamCams_00001.01251",
     "commonName": "Blackwall Tunnel Southern Approach", "placeType": "JamCam",
     "lat": 51.4972, "lon": 0.00049},
    {"id": "JamCams_00001.02151", "commonName": "Ludgate Circus", "lat": 51.5138, "lon": -0.1043},
    {"id": "JamCams_00002.00865", "lat": 51.4613, "lon": -0.1162}
]"#;

#[test]
fn test_one_marker_per_camera() {
    let fetcher = ScriptedFetcher::new();
    fetcher.reply(DIRECTORY_URL, DIRECTORY);
    let map = RecordingMap::default();

    let placed = block_on(populate_map(&fetcher, &map, DIRECTORY_URL, IMAGE_BASE, |_| {}));

    assert_eq!(placed, 3);
    assert_eq!(map.len(), 3);

    let markers = map.markers.borrow();
    assert_eq!(markers[0].camera.id, "JamCams_00001.01251");
    assert_eq!(markers[0].camera.lat, 51.4972);
    assert_eq!(markers[0].camera.lon, 0.00049);
    assert_eq!(markers[1].camera.id, "JamCams_00001.02151");
    assert_eq!(markers[1].camera.lat, 51.5138);
    assert_eq!(markers[1].camera.lon, -0.1043);
    assert_eq!(markers[2].camera.raw_id, "00002.00865");

    assert!(markers[1].popup.contains("<strong>JamCams_00001.02151</strong>"));
    assert!(markers[1].popup.contains(&format!("{IMAGE_BASE}/00001.02151.jpg")));
    assert_eq!(fetcher.requests(), vec![DIRECTORY_URL.to_string()]);
}

#[test]
fn test_marker_click_carries_camera() {
    let fetcher = ScriptedFetcher::new();
    fetcher.reply(DIRECTORY_URL, DIRECTORY);
    let map = RecordingMap::default();
    let selected: Rc<RefCell<Vec<Camera>>> = Rc::default();

    let sink = Rc::clone(&selected);
    block_on(populate_map(&fetcher, &map, DIRECTORY_URL, IMAGE_BASE, move |camera| {
        sink.borrow_mut().push(camera.clone())
    }));

    map.click(2);
    map.click(0);

    let ids: Vec<String> = selected.borrow().iter().map(|c| c.id.clone()).collect();
    assert_eq!(ids, vec!["JamCams_00002.00865", "JamCams_00001.01251"]);
}

#[test]
fn test_invalid_records_are_skipped() {
    let fetcher = ScriptedFetcher::new();
    fetcher.reply(
        DIRECTORY_URL,
        r#"[
            {"id": "JamCams_1", "lat": 51.5, "lon": -0.1},
            {"id": "JamCams_2", "lat": null, "lon": -0.1},
            {"commonName": "no id", "lat": 51.5, "lon": -0.1},
            {"id": "JamCams_3", "lat": 51.6, "lon": -0.2}
        ]"#,
    );

    let cameras = block_on(load_directory(&fetcher, DIRECTORY_URL)).unwrap();
    let ids: Vec<&str> = cameras.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["JamCams_1", "JamCams_3"]);
}

#[test]
fn test_empty_directory() {
    let fetcher = ScriptedFetcher::new();
    fetcher.reply(DIRECTORY_URL, "[]");
    let map = RecordingMap::default();

    assert_eq!(block_on(populate_map(&fetcher, &map, DIRECTORY_URL, IMAGE_BASE, |_| {})), 0);
    assert_eq!(map.len(), 0);
}

#[test]
fn test_failed_directory_places_nothing() {
    let fetcher = ScriptedFetcher::new();
    fetcher.fail(DIRECTORY_URL, JamcamError::network("connection refused"));
    let map = RecordingMap::default();

    let placed = block_on(populate_map(&fetcher, &map, DIRECTORY_URL, IMAGE_BASE, |_| {}));

    assert_eq!(placed, 0);
    assert_eq!(map.len(), 0);
}

#[test]
fn test_malformed_directory_places_nothing() {
    let fetcher = ScriptedFetcher::new();
    fetcher.reply(DIRECTORY_URL, "<html>Service Unavailable</html>");
    let map = RecordingMap::default();

    assert_eq!(block_on(populate_map(&fetcher, &map, DIRECTORY_URL, IMAGE_BASE, |_| {})), 0);
    assert_eq!(map.len(), 0);
}

#[test]
fn test_directory_must_be_an_array() {
    let fetcher = ScriptedFetcher::new();
    fetcher.reply(DIRECTORY_URL, r#"{"id": "JamCams_1", "lat": 51.5, "lon": -0.1}"#);

    let err = block_on(load_directory(&fetcher, DIRECTORY_URL)).unwrap_err();
    match err {
        JamcamError::Parse { message } => assert!(message.contains("an object")),
        other => panic!("Wrong error variant: {other:?}"),
    }
}
