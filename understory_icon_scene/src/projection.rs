// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Equirectangular map projection.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size, Vec2};
use understory_icon_layer::Projection;

/// A simple equirectangular projection around a center coordinate.
///
/// Longitudes are scaled by the cosine of the center latitude, which keeps
/// shapes plausible over a few hundred kilometres. Screen y grows downward.
#[derive(Clone, Debug, PartialEq)]
pub struct Equirectangular {
    /// Latitude at the center of the screen.
    pub center_lat: f64,
    /// Longitude at the center of the screen.
    pub center_lng: f64,
    /// Degrees of latitude from the center to the nearest screen edge at zoom 1.
    pub range_deg: f64,
    /// Zoom factor; 2 halves the visible range.
    pub zoom: f64,
    /// Pan offset in screen pixels.
    pub pan: Vec2,
    /// Screen rectangle being projected onto.
    pub screen: Rect,
}

impl Default for Equirectangular {
    fn default() -> Self {
        Self {
            center_lat: 39.0,
            center_lng: -98.0,
            range_deg: 4.5,
            zoom: 1.0,
            pan: Vec2::ZERO,
            screen: Rect::from_origin_size(Point::ZERO, Size::new(800.0, 600.0)),
        }
    }
}

impl Equirectangular {
    /// A projection centered on `(center_lat, center_lng)`.
    pub fn new(center_lat: f64, center_lng: f64) -> Self {
        Self {
            center_lat,
            center_lng,
            ..Default::default()
        }
    }

    /// Replace the screen rectangle.
    pub fn with_screen(mut self, screen: Rect) -> Self {
        self.screen = screen;
        self
    }

    /// Replace the visible range.
    pub fn with_range(mut self, range_deg: f64) -> Self {
        self.range_deg = range_deg;
        self
    }

    /// Update the view state.
    pub fn update(&mut self, zoom: f64, pan: Vec2, screen: Rect) {
        self.zoom = zoom;
        self.pan = pan;
        self.screen = screen;
    }

    fn effective_range(&self) -> f64 {
        self.range_deg / self.zoom
    }

    fn lng_scale(&self) -> f64 {
        self.center_lat.to_radians().cos()
    }

    fn origin(&self) -> Point {
        self.screen.center() + self.pan
    }

    fn half_extent(&self) -> f64 {
        self.screen.size().min_side() / 2.0
    }

    /// Screen position of `(lat, lng)`.
    pub fn geo_to_screen(&self, lat: f64, lng: f64) -> Point {
        let range = self.effective_range();
        let nx = (lng - self.center_lng) * self.lng_scale() / range;
        let ny = -(lat - self.center_lat) / range;
        let half = self.half_extent();
        self.origin() + Vec2::new(nx * half, ny * half)
    }

    /// Geographic `(lat, lng)` of a screen position.
    pub fn screen_to_geo(&self, p: Point) -> (f64, f64) {
        let range = self.effective_range();
        let half = self.half_extent();
        let d = p - self.origin();
        let lng = self.center_lng + d.x / half * range / self.lng_scale();
        let lat = self.center_lat - d.y / half * range;
        (lat, lng)
    }

    /// Visible bounds as `(min_lat, min_lng, max_lat, max_lng)`.
    pub fn visible_bounds(&self) -> (f64, f64, f64, f64) {
        let (lat0, lng0) = self.screen_to_geo(Point::new(self.screen.x0, self.screen.y0));
        let (lat1, lng1) = self.screen_to_geo(Point::new(self.screen.x1, self.screen.y1));
        (lat0.min(lat1), lng0.min(lng1), lat0.max(lat1), lng0.max(lng1))
    }

    /// Whether `(lat, lng)` is on screen, allowing `margin_deg` slack.
    pub fn is_visible(&self, lat: f64, lng: f64, margin_deg: f64) -> bool {
        let (min_lat, min_lng, max_lat, max_lng) = self.visible_bounds();
        lat >= min_lat - margin_deg
            && lat <= max_lat + margin_deg
            && lng >= min_lng - margin_deg
            && lng <= max_lng + margin_deg
    }
}

impl Projection for Equirectangular {
    fn project(&self, lat: f64, lng: f64) -> Point {
        self.geo_to_screen(lat, lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn center_maps_to_screen_center() {
        let p = Equirectangular::new(10.0, 20.0);
        assert_eq!(p.geo_to_screen(10.0, 20.0), Point::new(400.0, 300.0));
    }

    #[test]
    fn north_is_up() {
        let p = Equirectangular::new(0.0, 0.0).with_range(10.0);
        let north = p.geo_to_screen(5.0, 0.0);
        assert!(close(north.x, 400.0));
        assert!(close(north.y, 150.0));
        let east = p.project(0.0, 5.0);
        assert!(close(east.x, 550.0));
    }

    #[test]
    fn screen_to_geo_inverts() {
        let mut p = Equirectangular::new(45.0, 7.0);
        p.update(2.0, Vec2::new(13.0, -4.0), p.screen);
        let (lat, lng) = p.screen_to_geo(p.geo_to_screen(46.5, 8.25));
        assert!(close(lat, 46.5));
        assert!(close(lng, 8.25));
    }

    #[test]
    fn visibility() {
        let p = Equirectangular::new(0.0, 0.0).with_range(10.0);
        assert!(p.is_visible(9.0, 9.0, 0.0));
        assert!(!p.is_visible(11.0, 0.0, 0.0));
        assert!(p.is_visible(11.0, 0.0, 1.5));
    }
}
