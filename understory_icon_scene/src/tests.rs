// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end behavior of an icon layer driven through a scene.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::RefCell;

use kurbo::{Point, Size, Vec2};
use understory_icon_layer::{
    Channel, ClickState, ConfigurationError, DataPoint, HoverState, IconEvent, IconLayer, Options,
    PartialOptions,
};

use crate::{Icon, LayerId, PointerTracker, Scene};

type Log = Rc<RefCell<Vec<(Channel, usize)>>>;

fn grid(lat: f64, lng: f64) -> Point {
    Point::new(100.0 + lng * 10.0, 100.0 - lat * 10.0)
}

fn setup() -> (Scene, LayerId, IconLayer<Scene>) {
    let mut scene = Scene::new();
    let id = scene.add_layer("icons");
    (scene, id, IconLayer::new(id))
}

fn recording(log: &Log) -> PartialOptions<Scene> {
    let record = |log: &Log| {
        let log = log.clone();
        move |ev: &IconEvent<'_, Scene>| log.borrow_mut().push((ev.channel, ev.index))
    };
    PartialOptions::new()
        .on_hover_over(record(log))
        .on_hover_out(record(log))
        .on_click_on(record(log))
        .on_click_off(record(log))
}

fn drain(log: &Log) -> Vec<(Channel, usize)> {
    core::mem::take(&mut *log.borrow_mut())
}

#[test]
fn two_points_with_defaults() {
    let (mut scene, id, mut layer) = setup();
    let data = [DataPoint::new(0.0, 0.0), DataPoint::new(10.0, 10.0)];
    let summary = layer.redraw(&mut scene, &grid, &data, PartialOptions::new());

    assert_eq!(summary.entered, 2);
    assert_eq!(scene.elements(id).len(), 2);
    for &el in scene.elements(id) {
        assert_eq!(scene.class_attr(el).as_deref(), Some("icon"));
    }
}

#[test]
fn redraw_is_idempotent() {
    let (mut scene, id, mut layer) = setup();
    let log: Log = Rc::default();
    let data = [
        DataPoint::new(1.0, 2.0).with_css_class("capital"),
        DataPoint::new(-3.0, 4.0),
    ];

    let _ = layer.redraw(&mut scene, &grid, &data, recording(&log));
    let snapshot = |scene: &Scene| {
        scene
            .elements(id)
            .iter()
            .map(|&el| (el, scene.translate(el), scene.class_attr(el)))
            .collect::<Vec<_>>()
    };
    let first = snapshot(&scene);

    let summary = layer.redraw(&mut scene, &grid, &data, recording(&log));
    assert_eq!((summary.entered, summary.updated, summary.exited), (0, 2, 0));
    assert_eq!(snapshot(&scene), first);
    assert_eq!(layer.dispatcher().installed(), 4);

    let el = layer.element(0).expect("bound");
    layer.pointer_enter(&mut scene, el);
    assert_eq!(drain(&log), [(Channel::HoverOver, 0)]);
}

#[test]
fn configuring_one_leaf_keeps_the_rest() {
    let (mut scene, _, mut layer) = setup();
    let _ = layer.redraw(
        &mut scene,
        &grid,
        &[DataPoint::new(0.0, 0.0)],
        PartialOptions::new().allow_multiple(true),
    );
    let options = layer.options();
    assert!(options.click.allow_multiple);
    assert_eq!(options.click.on_class, "click-on");
    assert_eq!(options.click.off_class, "click-off");
    assert_eq!(options.hover.over_class, "hover-over");
    assert_eq!(options.css_class, "icon");
    assert!(options.icon_fn.is_some());
}

#[test]
fn icons_are_centered_on_the_projected_point() {
    let (mut scene, _, mut layer) = setup();
    let data = [
        DataPoint::new(2.0, 3.0),
        DataPoint::new(2.0, 3.0).with_icon(Icon::rect(Size::new(20.0, 8.0))),
    ];
    let _ = layer.redraw(&mut scene, &grid, &data, PartialOptions::new());

    let p = grid(2.0, 3.0);
    let circle = layer.element(0).expect("bound");
    let rect = layer.element(1).expect("bound");
    assert_eq!(scene.translate(circle), Some(Vec2::new(p.x - 5.0, p.y - 5.0)));
    assert_eq!(scene.translate(rect), Some(Vec2::new(p.x - 10.0, p.y - 4.0)));
    assert_eq!(scene.world_bounds(rect).map(|r| r.center()), Some(p));
    assert_eq!(scene.hit_test_point(p), Some(rect));
}

#[test]
fn hover_classes_follow_the_pointer() {
    let (mut scene, _, mut layer) = setup();
    let log: Log = Rc::default();
    let _ = layer.redraw(
        &mut scene,
        &grid,
        &[DataPoint::new(0.0, 0.0)],
        recording(&log),
    );
    let el = layer.element(0).expect("bound");
    let mut tracker = PointerTracker::new();

    tracker.move_to(&scene, grid(0.0, 0.0)).dispatch(&layer, &mut scene);
    assert_eq!(layer.hover_state(&scene, el), Some(HoverState::Over));
    tracker.move_to(&scene, Point::new(-50.0, -50.0)).dispatch(&layer, &mut scene);

    assert!(scene.has_class(el, "hover-out"));
    assert!(!scene.has_class(el, "hover-over"));
    assert_eq!(drain(&log), [(Channel::HoverOver, 0), (Channel::HoverOut, 0)]);
}

#[test]
fn single_select_click_sequence() {
    let (mut scene, _, mut layer) = setup();
    let log: Log = Rc::default();
    let data = [DataPoint::new(0.0, 0.0), DataPoint::new(5.0, 5.0)];
    let _ = layer.redraw(&mut scene, &grid, &data, recording(&log));
    let a = layer.element(0).expect("bound");
    let b = layer.element(1).expect("bound");

    layer.click(&mut scene, a);
    assert_eq!(drain(&log), [(Channel::ClickOn, 0)]);

    layer.click(&mut scene, b);
    assert_eq!(drain(&log), [(Channel::ClickOff, 0), (Channel::ClickOn, 1)]);
    assert_eq!(layer.active_elements(&scene), [b]);

    assert_eq!(layer.click(&mut scene, b), Some(ClickState::Off));
    assert_eq!(drain(&log), [(Channel::ClickOff, 1)]);
    assert!(layer.active_elements(&scene).is_empty());
    assert!(!scene.has_class(a, "click-on"));
}

#[test]
fn multi_select_clicks_are_independent() {
    let (mut scene, _, mut layer) = setup();
    let log: Log = Rc::default();
    let data = [DataPoint::new(0.0, 0.0), DataPoint::new(5.0, 5.0)];
    let _ = layer.redraw(&mut scene, &grid, &data, recording(&log).allow_multiple(true));
    let a = layer.element(0).expect("bound");
    let b = layer.element(1).expect("bound");

    layer.click(&mut scene, a);
    layer.click(&mut scene, b);
    assert_eq!(drain(&log), [(Channel::ClickOn, 0), (Channel::ClickOn, 1)]);
    assert_eq!(layer.active_elements(&scene), [a, b]);
}

#[test]
fn missing_icon_skips_one_point() {
    let mut scene = Scene::new();
    let id = scene.add_layer("icons");
    let mut layer = IconLayer::<Scene>::with_defaults(id, Options::with_icon_fn(None));
    let data = [
        DataPoint::new(0.0, 0.0).with_icon(Icon::circle(3.0)),
        DataPoint::new(1.0, 1.0),
        DataPoint::new(2.0, 2.0).with_icon(Icon::circle(3.0)),
    ];

    let summary = layer.redraw(&mut scene, &grid, &data, PartialOptions::new());
    assert_eq!(summary.errors, vec![ConfigurationError::NoIcon { index: 1 }]);
    assert_eq!(scene.elements(id).len(), 2);
    assert!(summary.into_result().is_err());

    // The icon can be supplied on a later redraw.
    let summary = layer.redraw(
        &mut scene,
        &grid,
        &data,
        PartialOptions::<Scene>::new().icon_fn(|_, _| Icon::circle(1.0)),
    );
    assert_eq!((summary.entered, summary.updated), (1, 2));
    assert!(summary.into_result().is_ok());
}

#[test]
fn shrinking_data_removes_elements() {
    let (mut scene, id, mut layer) = setup();
    let data = [
        DataPoint::new(0.0, 0.0),
        DataPoint::new(1.0, 0.0),
        DataPoint::new(2.0, 0.0),
    ];
    let _ = layer.redraw(&mut scene, &grid, &data, PartialOptions::new());
    let gone = layer.element(2).expect("bound");

    let summary = layer.redraw(&mut scene, &grid, &data[..1], PartialOptions::new());
    assert_eq!(summary.exited, 2);
    assert!(!scene.is_alive(gone));
    assert_eq!(scene.elements(id).len(), 1);
    assert!(!layer.pointer_enter(&mut scene, gone));
}

#[test]
fn events_carry_the_bound_datum() {
    let (mut scene, _, mut layer) = setup();
    let seen: Rc<RefCell<Vec<(f64, Option<String>)>>> = Rc::default();
    let options = {
        let seen = seen.clone();
        PartialOptions::<Scene>::new().on_click_on(move |ev| {
            seen.borrow_mut()
                .push((ev.datum.lat, ev.datum.css_class.clone()));
        })
    };
    let data = [
        DataPoint::new(0.0, 0.0),
        DataPoint::new(7.0, 0.0).with_css_class("port"),
    ];
    let _ = layer.redraw(&mut scene, &grid, &data, options);
    let el = layer.element(1).expect("bound");
    layer.click(&mut scene, el);
    assert_eq!(*seen.borrow(), [(7.0, Some(String::from("port")))]);
}

#[test]
fn layers_do_not_interfere() {
    let mut scene = Scene::new();
    let cities = scene.add_layer("cities");
    let ports = scene.add_layer("ports");
    let mut city_layer = IconLayer::<Scene>::new(cities);
    let mut port_layer = IconLayer::<Scene>::new(ports);
    let city_data = [DataPoint::new(0.0, 0.0)];
    let port_data = [DataPoint::new(9.0, 9.0)];
    let _ = city_layer.redraw(&mut scene, &grid, &city_data, PartialOptions::new());
    let _ = port_layer.redraw(&mut scene, &grid, &port_data, PartialOptions::new());
    let city = city_layer.element(0).expect("bound");
    let port = port_layer.element(0).expect("bound");

    city_layer.click(&mut scene, city);
    port_layer.click(&mut scene, port);
    assert_eq!(city_layer.active_elements(&scene), [city]);
    assert_eq!(port_layer.active_elements(&scene), [port]);
    assert_eq!(city_layer.click(&mut scene, port), None);

    city_layer.clear(&mut scene);
    assert!(scene.elements(cities).is_empty());
    assert_eq!(scene.elements(ports), [port]);
}
