// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Icon overlay on a headless scene, configured from JSON.
//!
//! This example shows how to:
//! - deserialize data points and options with the `serde` feature,
//! - attach handlers in code on top of the deserialized options,
//! - drive hover and click from pointer positions.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_icon_examples --example icon_overlay`

use kurbo::{Point, Rect, Size};
use log::info;
use understory_icon_layer::{DataPoint, IconEvent, IconLayer, PartialOptions};
use understory_icon_scene::{Equirectangular, Icon, PointerTracker, Rgba8, Scene};

const CITIES: &str = r#"[
    { "lat": 48.8566, "lng": 2.3522, "cssClass": "capital" },
    { "lat": 45.7640, "lng": 4.8357 },
    { "lat": 43.2965, "lng": 5.3698, "click": { "onClass": "port-selected" } }
]"#;

const OPTIONS: &str = r#"{
    "cssClass": "city",
    "hover": { "overClass": "lit" }
}"#;

fn dump(scene: &Scene, layer: &IconLayer<Scene>) {
    for (index, el) in layer.elements() {
        info!(
            "  #{index} at {:?}: class=\"{}\"",
            scene.world_bounds(el).map(|r| r.center()),
            scene.class_attr(el).unwrap_or_default()
        );
    }
}

fn main() -> Result<(), serde_json::Error> {
    env_logger::init();

    let mut scene = Scene::new();
    let cities = scene.add_layer("cities");
    let projection = Equirectangular::new(46.5, 3.5)
        .with_range(4.0)
        .with_screen(Rect::from_origin_size(Point::ZERO, Size::new(600.0, 600.0)));

    let mut data: Vec<DataPoint<Icon>> = serde_json::from_str(CITIES)?;
    data[0].icon = Some(Icon::circle(8.0).with_fill(Rgba8::rgb(200, 30, 30)));

    let options: PartialOptions<Scene> = serde_json::from_str(OPTIONS)?;
    let options = options
        .on_hover_over(|ev: &IconEvent<'_, Scene>| {
            info!("hover over #{} ({}, {})", ev.index, ev.datum.lat, ev.datum.lng);
        })
        .on_click_on(|ev: &IconEvent<'_, Scene>| info!("selected #{}", ev.index))
        .on_click_off(|ev: &IconEvent<'_, Scene>| info!("deselected #{}", ev.index));

    let mut layer = IconLayer::<Scene>::new(cities);
    let summary = layer.redraw(&mut scene, &projection, &data, options);
    info!("rendered {} of {} points", summary.rendered(), summary.total);
    dump(&scene, &layer);

    // Sweep the pointer from Paris to Lyon and off the map.
    let mut tracker = PointerTracker::new();
    for (lat, lng) in [(48.8566, 2.3522), (45.7640, 4.8357), (60.0, 20.0)] {
        let at = projection.geo_to_screen(lat, lng);
        tracker.move_to(&scene, at).dispatch(&layer, &mut scene);
    }

    // Select Lyon, then Marseille: the first selection is released.
    for index in [1, 2] {
        if let Some(el) = layer.element(index) {
            layer.click(&mut scene, el);
        }
    }
    info!("after clicks:");
    dump(&scene, &layer);

    // Drop Marseille; its element goes away with it.
    data.truncate(2);
    let summary = layer.redraw(&mut scene, &projection, &data, PartialOptions::new());
    info!(
        "redraw: {} updated, {} exited, {} elements left",
        summary.updated,
        summary.exited,
        scene.len()
    );
    Ok(())
}
