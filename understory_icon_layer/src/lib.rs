// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Icon Layer: a data-bound icon overlay for map surfaces.
//!
//! The layer takes a list of geographic [`DataPoint`]s and keeps one icon element
//! per point on a host [`Surface`], positioned through a host [`Projection`] so the
//! icon is centered on the projected coordinate. On top of that it runs two small
//! interaction state machines per element and reports their transitions through
//! four single-slot event channels.
//!
//! - Binding is positional: data index `i` reuses the element created for index `i`
//!   on the previous redraw, surplus elements are removed, missing ones created.
//! - Hover state is `over`/`out`, click state is `on`/`off`. Both live on the
//!   surface as classes; the layer reads them back instead of keeping a shadow copy.
//! - Clicks follow a [`ClickPolicy`]: either each icon toggles independently, or at
//!   most one icon of the layer is on at a time.
//! - [`Options`] are merged leaf by leaf from caller [`PartialOptions`] over a
//!   default tree on every redraw.
//!
//! ## Where this fits
//!
//! The crate owns no rendering and no pointer input. The host renders elements,
//! decides which element the pointer is over, and forwards enter, leave and click
//! to [`IconLayer`]. `understory_icon_scene` is a headless host built for tests and
//! demos.
//!
//! ## API overview
//!
//! - [`IconLayer`]: per-layer controller; [`IconLayer::redraw`] binds data,
//!   [`IconLayer::pointer_enter`], [`IconLayer::pointer_leave`] and
//!   [`IconLayer::click`] drive the state machines.
//! - [`Surface`] and [`Projection`]: what the host provides.
//! - [`Options`], [`PartialOptions`]: configuration and the merge resolver.
//! - [`dispatch`]: [`Channel`], [`IconEvent`] and the [`Dispatcher`].
//! - [`position`]: centering math.
//! - [`RedrawSummary`]: enter/update/exit counts and skipped points.
//!
//! ## Minimal example
//!
//! ```
//! # use kurbo::{Point, Size, Vec2};
//! # use understory_icon_layer::Surface;
//! # #[derive(Debug, Default)] struct Host { next: u32 }
//! # impl Surface for Host {
//! #     type Layer = (); type Element = u32; type Icon = ();
//! #     fn append(&mut self, _: (), _: ()) -> u32 { self.next += 1; self.next }
//! #     fn remove(&mut self, _: u32) {}
//! #     fn has_class(&self, _: u32, _: &str) -> bool { false }
//! #     fn set_class(&mut self, _: u32, _: &str, _: bool) {}
//! #     fn bounding_box(&self, _: u32) -> Option<Size> { None }
//! #     fn set_translate(&mut self, _: u32, _: Vec2) {}
//! #     fn select_class(&self, _: (), _: &str) -> Vec<u32> { Vec::new() }
//! # }
//! use understory_icon_layer::{DataPoint, IconLayer, PartialOptions};
//!
//! let mut host = Host::default();
//! let projection = |lat: f64, lng: f64| Point::new(lng, -lat);
//! let mut layer = IconLayer::<Host>::new(());
//!
//! let data = [DataPoint::new(48.8, 2.3), DataPoint::new(51.5, -0.1)];
//! let summary = layer.redraw(&mut host, &projection, &data, PartialOptions::new());
//! assert_eq!(summary.entered, 2);
//! assert_eq!(layer.len(), 2);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwarded to `kurbo`.
//! - `libm`: floating point support for `no_std` builds, forwarded to `kurbo`.
//! - `serde`: `Deserialize` for [`DataPoint`] and [`PartialOptions`] (function
//!   leaves are skipped and must be set in code).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod binder;
mod click;
pub mod dispatch;
mod error;
mod host;
mod hover;
mod layer;
mod options;
mod point;
pub mod position;
mod style;

#[cfg(test)]
mod testing;

pub use binder::{Bindings, RedrawSummary, resolve_icon};
pub use click::{ClickPolicy, apply_click, click_state};
pub use dispatch::{Channel, Dispatcher, Handler, IconEvent};
pub use error::{ConfigurationError, RedrawError};
pub use host::{Projection, Surface};
pub use hover::{apply_hover, hover_state};
pub use layer::IconLayer;
pub use options::{
    ClickOptions, DEFAULT_CSS_CLASS, DEFAULT_OFF_CLASS, DEFAULT_ON_CLASS, DEFAULT_OUT_CLASS,
    DEFAULT_OVER_CLASS, HoverOptions, IconFn, Options, PartialClick, PartialHover, PartialOptions,
};
pub use point::{ClickClasses, DataPoint, HoverClasses};
pub use style::{ClickState, HoverState, base_classes, class_tokens, click_class, hover_class};
