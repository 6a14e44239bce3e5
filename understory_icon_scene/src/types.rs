// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the scene: handles, flags, colors, and icons.

use kurbo::{Point, Rect, Size};

/// Handle to an element of a [`Scene`](crate::Scene).
///
/// A handle names an arena slot together with the generation the slot had when
/// the element was inserted. Once the element is removed the handle goes stale
/// and every scene query treats it as absent, even after the slot is reused.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ElementId {
    slot: u32,
    generation: u32,
}

impl ElementId {
    pub(crate) const fn new(slot: u32, generation: u32) -> Self {
        Self { slot, generation }
    }

    pub(crate) const fn idx(self) -> usize {
        self.slot as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.generation
    }
}

/// Identifier for a layer of the scene.
///
/// Layers are never removed, so the handle is a plain index.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub(crate) u32);

impl LayerId {
    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// How an element takes part in drawing and pointer hit testing.
    ///
    /// New elements get both flags. Clearing [`VISIBLE`](Self::VISIBLE) hides an
    /// icon; clearing only [`PICKABLE`](Self::PICKABLE) keeps it drawn but lets
    /// the pointer fall through to whatever lies beneath.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u8 {
        /// Drawn.
        const VISIBLE  = 0b0000_0001;
        /// Reachable by the pointer while visible.
        const PICKABLE = 0b0000_0010;
    }
}

impl ElementFlags {
    /// Whether a pointer over the element hits it.
    pub const fn is_hit_testable(self) -> bool {
        self.contains(Self::VISIBLE.union(Self::PICKABLE))
    }
}

impl Default for ElementFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// An 8-bit RGBA color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// An opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Geometry of an icon.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum IconShape {
    /// A circle of the given radius.
    Circle {
        /// Radius.
        radius: f64,
    },
    /// An axis-aligned rectangle.
    Rect {
        /// Width and height.
        size: Size,
    },
}

/// The visual of one element: a shape plus paint.
///
/// Local geometry has its origin at the top-left corner of the bounding box, so
/// a circle of radius `r` spans `(0, 0)..(2r, 2r)`. The stroke is not part of the
/// bounding box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Icon {
    /// Geometry.
    pub shape: IconShape,
    /// Fill color.
    pub fill: Rgba8,
    /// Stroke color.
    pub stroke: Rgba8,
    /// Stroke width in pixels.
    pub stroke_width: f64,
}

impl Default for Icon {
    /// A black circle of radius 5 with a 1px black stroke.
    fn default() -> Self {
        Self::circle(5.0)
    }
}

impl Icon {
    /// A circle of `radius`, painted black with a 1px stroke.
    pub const fn circle(radius: f64) -> Self {
        Self::painted(IconShape::Circle { radius })
    }

    /// A rectangle of `size`, painted black with a 1px stroke.
    pub const fn rect(size: Size) -> Self {
        Self::painted(IconShape::Rect { size })
    }

    const fn painted(shape: IconShape) -> Self {
        Self {
            shape,
            fill: Rgba8::BLACK,
            stroke: Rgba8::BLACK,
            stroke_width: 1.0,
        }
    }

    /// Replace the fill color.
    pub const fn with_fill(mut self, fill: Rgba8) -> Self {
        self.fill = fill;
        self
    }

    /// Replace the stroke.
    pub const fn with_stroke(mut self, stroke: Rgba8, width: f64) -> Self {
        self.stroke = stroke;
        self.stroke_width = width;
        self
    }

    /// Size of the bounding box.
    pub fn size(&self) -> Size {
        match self.shape {
            IconShape::Circle { radius } => Size::new(2.0 * radius, 2.0 * radius),
            IconShape::Rect { size } => size,
        }
    }

    /// Bounding box in local coordinates.
    pub fn local_bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.size())
    }

    /// Whether the local point `p` is inside the shape.
    pub fn contains(&self, p: Point) -> bool {
        match self.shape {
            IconShape::Circle { radius } => {
                let d = p - Point::new(radius, radius);
                d.hypot2() <= radius * radius
            }
            IconShape::Rect { .. } => {
                let r = self.local_bounds();
                p.x >= r.x0 && p.x <= r.x1 && p.y >= r.y0 && p.y <= r.y1
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_icon_is_black_circle() {
        let icon = Icon::default();
        assert_eq!(icon.shape, IconShape::Circle { radius: 5.0 });
        assert_eq!(icon.fill, Rgba8::BLACK);
        assert_eq!(icon.stroke, Rgba8::BLACK);
        assert_eq!(icon.stroke_width, 1.0);
        assert_eq!(icon.size(), Size::new(10.0, 10.0));
    }

    #[test]
    fn circle_hit_excludes_corners() {
        let icon = Icon::circle(5.0);
        assert!(icon.contains(Point::new(5.0, 5.0)));
        assert!(icon.contains(Point::new(5.0, 0.0)));
        assert!(!icon.contains(Point::new(0.5, 0.5)));
        assert!(!icon.contains(Point::new(11.0, 5.0)));
    }

    #[test]
    fn rect_hit_is_inclusive() {
        let icon = Icon::rect(Size::new(4.0, 2.0));
        assert!(icon.contains(Point::new(4.0, 2.0)));
        assert!(!icon.contains(Point::new(4.1, 1.0)));
        assert_eq!(icon.with_fill(Rgba8::WHITE).fill, Rgba8::WHITE);
    }

    #[test]
    fn only_visible_pickable_elements_are_hit() {
        assert!(ElementFlags::default().is_hit_testable());
        assert!(!ElementFlags::VISIBLE.is_hit_testable());
        assert!(!ElementFlags::PICKABLE.is_hit_testable());
        assert!(!ElementFlags::empty().is_hit_testable());
    }
}
