// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data binder: positional join of a data set against rendered elements.
//!
//! Index `i` of the new data set binds to the element in slot `i` when there is
//! one (update), or to a freshly created element (enter). Slots past the end of
//! the new data set are removed (exit). There is no key function: reordering
//! the data rebinds elements by position.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::error::{ConfigurationError, RedrawError};
use crate::host::{Projection, Surface};
use crate::options::Options;
use crate::point::DataPoint;
use crate::position::place;
use crate::style::{base_classes, class_tokens};

/// Element slots of a layer, indexed by data index.
///
/// A slot is empty when the point at that index could not be rendered.
#[derive(Clone, Debug)]
pub struct Bindings<E> {
    slots: Vec<Option<E>>,
    lookup: HashMap<E, usize>,
}

impl<E> Default for Bindings<E> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            lookup: HashMap::new(),
        }
    }
}

impl<E: Copy + Eq + Hash> Bindings<E> {
    /// No bound elements.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bound elements.
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    /// Whether no element is bound.
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    /// Element bound to data index `index`.
    pub fn element(&self, index: usize) -> Option<E> {
        self.slots.get(index).copied().flatten()
    }

    /// Data index `element` is bound to.
    pub fn index_of(&self, element: E) -> Option<usize> {
        self.lookup.get(&element).copied()
    }

    /// Bound `(index, element)` pairs in data order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, E)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|el| (i, el)))
    }

    fn replace(&mut self, slots: Vec<Option<E>>) {
        self.lookup.clear();
        for (i, slot) in slots.iter().enumerate() {
            if let Some(el) = slot {
                self.lookup.insert(*el, i);
            }
        }
        self.slots = slots;
    }

    /// Drop every slot, handing back the elements that were bound.
    pub(crate) fn take(&mut self) -> Vec<E> {
        self.lookup.clear();
        core::mem::take(&mut self.slots).into_iter().flatten().collect()
    }
}

/// Outcome of a redraw.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[must_use = "skipped data points are only reported here"]
pub struct RedrawSummary {
    /// Length of the data set.
    pub total: usize,
    /// Elements created.
    pub entered: usize,
    /// Existing elements rebound and restyled.
    pub updated: usize,
    /// Elements removed.
    pub exited: usize,
    /// Points that were skipped.
    pub errors: Vec<ConfigurationError>,
}

impl RedrawSummary {
    /// Number of points with an element after the redraw.
    pub fn rendered(&self) -> usize {
        self.entered + self.updated
    }

    /// Whether every point was rendered.
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    /// Turn skipped points into an error.
    pub fn into_result(self) -> Result<Self, RedrawError> {
        if self.errors.is_empty() {
            Ok(self)
        } else {
            Err(RedrawError {
                total: self.total,
                errors: self.errors,
            })
        }
    }
}

/// The icon for a newly entering point: its own, else the factory's.
pub fn resolve_icon<S: Surface>(
    point: &DataPoint<S::Icon>,
    index: usize,
    options: &Options<S>,
) -> Result<S::Icon, ConfigurationError> {
    if let Some(icon) = &point.icon {
        return Ok(icon.clone());
    }
    match &options.icon_fn {
        Some(icon_fn) => Ok(icon_fn(point, index)),
        None => Err(ConfigurationError::NoIcon { index }),
    }
}

fn apply_base_classes<S: Surface>(
    surface: &mut S,
    element: S::Element,
    layer_class: &str,
    point: &DataPoint<S::Icon>,
) {
    for token in base_classes(layer_class, point) {
        if !surface.has_class(element, token) {
            surface.set_class(element, token, true);
        }
    }
}

/// Reconcile `data` against `bindings` on `layer`.
///
/// Interaction classes already on updated elements are left untouched.
pub(crate) fn bind<S, P>(
    surface: &mut S,
    projection: &P,
    layer: S::Layer,
    bindings: &mut Bindings<S::Element>,
    data: &[DataPoint<S::Icon>],
    options: &Options<S>,
) -> RedrawSummary
where
    S: Surface,
    P: Projection + ?Sized,
{
    let mut summary = RedrawSummary {
        total: data.len(),
        ..RedrawSummary::default()
    };
    let mut previous = core::mem::take(&mut bindings.slots).into_iter();
    let mut slots = Vec::with_capacity(data.len());

    for (index, point) in data.iter().enumerate() {
        let element = match previous.next().flatten() {
            Some(element) => {
                summary.updated += 1;
                element
            }
            None => match resolve_icon(point, index, options) {
                Ok(icon) => {
                    let element = surface.append(layer, icon);
                    for token in class_tokens(&options.css_class) {
                        surface.set_class(element, token, true);
                    }
                    summary.entered += 1;
                    element
                }
                Err(err) => {
                    log::warn!("skipping data point: {err}");
                    summary.errors.push(err);
                    slots.push(None);
                    continue;
                }
            },
        };
        apply_base_classes(surface, element, &options.css_class, point);
        let offset = place(projection, point, surface.bounding_box(element));
        surface.set_translate(element, offset);
        slots.push(Some(element));
    }

    for element in previous.flatten() {
        surface.remove(element);
        summary.exited += 1;
    }

    bindings.replace(slots);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::PartialOptions;
    use crate::testing::{Mock, MockIcon, scaled};
    use alloc::vec;
    use kurbo::Vec2;

    fn bind_default(
        surface: &mut Mock,
        bindings: &mut Bindings<u32>,
        data: &[DataPoint<MockIcon>],
    ) -> RedrawSummary {
        bind(surface, &scaled, 0, bindings, data, &Options::default())
    }

    #[test]
    fn enter_update_exit() {
        let mut surface = Mock::default();
        let mut bindings = Bindings::new();
        let three = vec![
            DataPoint::new(0.0, 0.0),
            DataPoint::new(1.0, 1.0),
            DataPoint::new(2.0, 2.0),
        ];

        let first = bind_default(&mut surface, &mut bindings, &three);
        assert_eq!((first.entered, first.updated, first.exited), (3, 0, 0));
        assert_eq!(surface.live(), 3);
        let kept = bindings.element(0).expect("bound");

        let second = bind_default(&mut surface, &mut bindings, &three[..1]);
        assert_eq!((second.entered, second.updated, second.exited), (0, 1, 2));
        assert_eq!(surface.live(), 1);
        assert_eq!(bindings.element(0), Some(kept));
        assert_eq!(bindings.element(1), None);
        assert_eq!(bindings.len(), 1);
    }

    #[test]
    fn rebinding_is_positional() {
        let mut surface = Mock::default();
        let mut bindings = Bindings::new();
        let a = DataPoint::new(0.0, 0.0);
        let b = DataPoint::new(5.0, 5.0);
        let _ = bind_default(&mut surface, &mut bindings, &[a.clone(), b.clone()]);
        let first = bindings.element(0).expect("bound");

        let _ = bind_default(&mut surface, &mut bindings, &[b, a]);
        assert_eq!(bindings.element(0), Some(first));
        assert_eq!(bindings.index_of(first), Some(0));
        // The first element now sits where `b` projects to.
        let size = MockIcon::default().size;
        assert_eq!(
            surface.node(first).translate,
            Vec2::new(50.0 - size.width / 2.0, -50.0 - size.height / 2.0)
        );
    }

    #[test]
    fn explicit_icon_wins_over_factory() {
        let mut surface = Mock::default();
        let mut bindings = Bindings::new();
        let data = vec![
            DataPoint::new(0.0, 0.0).with_icon(MockIcon::square(4.0)),
            DataPoint::new(0.0, 0.0),
        ];
        let _ = bind_default(&mut surface, &mut bindings, &data);
        let explicit = bindings.element(0).expect("bound");
        let fallback = bindings.element(1).expect("bound");
        assert_eq!(surface.node(explicit).icon, MockIcon::square(4.0));
        assert_eq!(surface.node(fallback).icon, MockIcon::default());
        assert_eq!(surface.node(explicit).translate, Vec2::new(-2.0, -2.0));
    }

    #[test]
    fn factory_receives_the_index() {
        let mut surface = Mock::default();
        let mut bindings = Bindings::new();
        let options = Options::<Mock>::default()
            .merge(PartialOptions::<Mock>::new().icon_fn(|_, i| MockIcon::square((i + 1) as f64)));
        let data = vec![DataPoint::new(0.0, 0.0), DataPoint::new(0.0, 0.0)];
        let _ = bind(&mut surface, &scaled, 0, &mut bindings, &data, &options);
        let second = bindings.element(1).expect("bound");
        assert_eq!(surface.node(second).icon, MockIcon::square(2.0));
    }

    #[test]
    fn missing_icon_skips_only_that_point() {
        let mut surface = Mock::default();
        let mut bindings = Bindings::new();
        let options =
            Options::<Mock>::default().merge(PartialOptions::<Mock>::new().without_icon_fn());
        let data = vec![
            DataPoint::new(0.0, 0.0).with_icon(MockIcon::square(2.0)),
            DataPoint::new(1.0, 1.0),
            DataPoint::new(2.0, 2.0).with_icon(MockIcon::square(2.0)),
        ];

        let summary = bind(&mut surface, &scaled, 0, &mut bindings, &data, &options);
        assert_eq!(summary.errors, vec![ConfigurationError::NoIcon { index: 1 }]);
        assert_eq!(summary.entered, 2);
        assert!(!summary.is_complete());
        assert_eq!(bindings.element(1), None);
        assert!(bindings.element(2).is_some());
        assert_eq!(surface.live(), 2);

        let err = summary.into_result().expect_err("one point was skipped");
        assert_eq!(err.total, 3);
        assert_eq!(err.errors[0].index(), 1);
    }

    #[test]
    fn base_classes_are_applied_once() {
        let mut surface = Mock::default();
        let mut bindings = Bindings::new();
        let data = vec![DataPoint::new(0.0, 0.0).with_css_class("capital icon")];
        let _ = bind_default(&mut surface, &mut bindings, &data);
        let _ = bind_default(&mut surface, &mut bindings, &data);
        let el = bindings.element(0).expect("bound");
        assert_eq!(surface.classes(el), ["icon", "capital"]);
    }

    #[test]
    fn update_leaves_interaction_classes_alone() {
        let mut surface = Mock::default();
        let mut bindings = Bindings::new();
        let data = vec![DataPoint::new(0.0, 0.0)];
        let _ = bind_default(&mut surface, &mut bindings, &data);
        let el = bindings.element(0).expect("bound");
        surface.set_class(el, "click-on", true);

        let _ = bind_default(&mut surface, &mut bindings, &data);
        assert!(surface.has_class(el, "click-on"));
    }

    #[test]
    fn take_releases_every_element() {
        let mut surface = Mock::default();
        let mut bindings = Bindings::new();
        let _ = bind_default(
            &mut surface,
            &mut bindings,
            &[DataPoint::new(0.0, 0.0), DataPoint::new(1.0, 0.0)],
        );
        assert_eq!(bindings.take().len(), 2);
        assert!(bindings.is_empty());
        assert_eq!(bindings.iter().count(), 0);
    }
}
