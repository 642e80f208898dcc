//! Static popup content bound to each camera marker

use crate::camera::{image_url, Camera};

/// Popup for a marker: camera id, latest still and the calibration block.
///
/// Calibration values are not available yet, so the block only shows the
/// field names.
pub fn popup_html(camera: &Camera, image_base: &str) -> String {
    let id = escape_html(&camera.id);
    let src = escape_html(&image_url(image_base, camera));

    format!(
        "<strong>{id}</strong>\
         <br>\
         <img src='{src}' alt='{id}' width='281' height='230'>\
         <br><div class='mono'>\
         <span style='color: red'>Calibration in queue</span><br>\
         h &nbsp;&nbsp;&nbsp;&nbsp;&nbsp; | Height (metres): <br>\
         phi &nbsp;&nbsp;&nbsp; | Heading (degrees): <br>\
         u_0,v_0 | Vanishing point (pixels):  <br>\
         S &nbsp;&nbsp;&nbsp;&nbsp;&nbsp; | Scale factor (NA): </div>"
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
