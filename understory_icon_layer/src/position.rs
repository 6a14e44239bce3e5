// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Icon placement: project, then center the bounding box on the projected point.
//!
//! Surfaces position elements by their top-left corner, so an icon of size
//! `w × h` projected to `(px, py)` is translated to `(px - w/2, py - h/2)`.
//!
//! ```
//! use kurbo::{Point, Size, Vec2};
//! use understory_icon_layer::position::centered_origin;
//!
//! let origin = centered_origin(Point::new(100.0, 50.0), Size::new(10.0, 20.0));
//! assert_eq!(origin, Vec2::new(95.0, 40.0));
//! ```

use kurbo::{Point, Size, Vec2};

use crate::host::Projection;
use crate::point::DataPoint;

/// Translation that centers a box of `size` on `projected`.
pub fn centered_origin(projected: Point, size: Size) -> Vec2 {
    Vec2::new(
        projected.x - size.width / 2.0,
        projected.y - size.height / 2.0,
    )
}

/// Translation for `point` given the measured icon size.
///
/// The size must be measured after the element is attached; an unknown size
/// (`None`) places the top-left corner on the projected point.
pub fn place<P, I>(projection: &P, point: &DataPoint<I>, size: Option<Size>) -> Vec2
where
    P: Projection + ?Sized,
{
    let projected = projection.project(point.lat, point.lng);
    match size {
        Some(size) => centered_origin(projected, size),
        None => {
            log::trace!("no bounding box for ({}, {}), placing uncentered", point.lat, point.lng);
            projected.to_vec2()
        }
    }
}
