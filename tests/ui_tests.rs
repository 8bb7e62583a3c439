// Host-side tests for the selection panel markup.

#![allow(dead_code)]
mod ui {
    include!("../src/ui.rs");
}

use diorama_core::ObjectInfo;
use glam::Vec3;

#[test]
fn info_markup_lists_position_then_size() {
    let html = ui::info_html(&ObjectInfo {
        position: Vec3::new(1.0, -2.5, 3.333),
        size: Vec3::new(0.5, 2.0, 1.25),
    });
    assert!(html.starts_with("<div><b>Position</b></div>"));
    let pos = html.find("<b>Position</b>").unwrap();
    let size = html.find("<b>Size</b>").unwrap();
    assert!(pos < size);
    for line in [
        "x: 1.00",
        "y: -2.50",
        "z: 3.33",
        "width: 0.50",
        "height: 2.00",
        "depth: 1.25",
    ] {
        assert!(html.contains(line), "missing {line} in {html}");
    }
    assert!(html.contains("<br/>"));
}
