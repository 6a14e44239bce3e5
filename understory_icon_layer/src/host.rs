// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interfaces consumed from the host: projection and render surface.
//!
//! The icon layer never renders anything itself. It asks a [`Projection`] where a
//! geographic coordinate lands on screen, and drives a [`Surface`] that owns the
//! actual visual nodes. Both are borrowed for the duration of a single operation.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use kurbo::{Point, Size, Vec2};

/// Maps geographic coordinates to screen coordinates.
///
/// Any `Fn(f64, f64) -> Point` closure taking `(lat, lng)` is a projection.
///
/// ```
/// use kurbo::Point;
/// use understory_icon_layer::Projection;
///
/// let flat = |lat: f64, lng: f64| Point::new(lng * 2.0, -lat * 2.0);
/// assert_eq!(flat.project(10.0, 20.0), Point::new(40.0, -20.0));
/// ```
pub trait Projection {
    /// Project `(lat, lng)` to a screen-space point.
    fn project(&self, lat: f64, lng: f64) -> Point;
}

impl<F> Projection for F
where
    F: Fn(f64, f64) -> Point,
{
    fn project(&self, lat: f64, lng: f64) -> Point {
        self(lat, lng)
    }
}

/// A render surface the layer can create, style, and position elements on.
///
/// Elements live inside a host-defined layer. Classes are individual tokens
/// (no whitespace); the surface is expected to keep each token at most once per
/// element.
pub trait Surface {
    /// Handle of a layer (group) elements are attached to.
    type Layer: Copy + Eq + Debug;
    /// Handle of a single element. Handles of removed elements must not compare
    /// equal to handles of live elements.
    type Element: Copy + Eq + Hash + Debug;
    /// Icon description the surface knows how to materialize.
    type Icon: Clone + Debug;

    /// Create an element from `icon` and attach it to `layer`.
    fn append(&mut self, layer: Self::Layer, icon: Self::Icon) -> Self::Element;

    /// Detach and destroy an element. Unknown handles are ignored.
    fn remove(&mut self, element: Self::Element);

    /// Whether `element` currently carries the class token `class`.
    fn has_class(&self, element: Self::Element, class: &str) -> bool;

    /// Add (`on = true`) or remove (`on = false`) a class token.
    fn set_class(&mut self, element: Self::Element, class: &str, on: bool);

    /// Rendered size of the element's bounding box, before translation.
    ///
    /// Returns `None` when the element is not attached.
    fn bounding_box(&self, element: Self::Element) -> Option<Size>;

    /// Translate the element so that its top-left corner lands at `offset`.
    fn set_translate(&mut self, element: Self::Element, offset: Vec2);

    /// All elements of `layer` carrying `class`, in document order.
    fn select_class(&self, layer: Self::Layer, class: &str) -> Vec<Self::Element>;
}
