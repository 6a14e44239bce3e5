// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Icon Scene: a headless host for `understory_icon_layer`.
//!
//! The scene keeps icon elements in memory, grouped into layers, and implements
//! [`understory_icon_layer::Surface`] over them. It is small enough to reason
//! about in tests and complete enough to drive an icon layer from pointer
//! positions:
//!
//! - [`Scene`]: generational [`ElementId`]s, class lists, translations,
//!   [`ElementFlags`], world bounds and point hit testing.
//! - [`PointerTracker`]: turns pointer moves into [`PointerTransition`]s.
//! - [`Equirectangular`]: a [`understory_icon_layer::Projection`] from
//!   latitude/longitude to screen pixels.
//!
//! ## Example
//!
//! ```
//! use kurbo::Point;
//! use understory_icon_layer::{DataPoint, IconLayer, PartialOptions};
//! use understory_icon_scene::{Equirectangular, PointerTracker, Scene};
//!
//! let mut scene = Scene::new();
//! let layer_id = scene.add_layer("icons");
//! let projection = Equirectangular::new(0.0, 0.0);
//! let mut layer = IconLayer::<Scene>::new(layer_id);
//!
//! let data = [DataPoint::new(0.0, 0.0)];
//! let _ = layer.redraw(&mut scene, &projection, &data, PartialOptions::new());
//!
//! let mut tracker = PointerTracker::new();
//! let center = projection.geo_to_screen(0.0, 0.0);
//! tracker.move_to(&scene, center).dispatch(&layer, &mut scene);
//!
//! let el = layer.element(0).unwrap();
//! assert_eq!(scene.class_attr(el).as_deref(), Some("icon hover-over"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod pointer;
mod projection;
mod scene;
mod types;

#[cfg(test)]
mod tests;

pub use pointer::{PointerTracker, PointerTransition};
pub use projection::Equirectangular;
pub use scene::Scene;
pub use types::{ElementFlags, ElementId, Icon, IconShape, LayerId, Rgba8};
