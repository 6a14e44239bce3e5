// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-layer controller.

use alloc::vec::Vec;
use core::fmt;

use crate::binder::{Bindings, RedrawSummary, bind};
use crate::click::{self, ClickPolicy, Collection};
use crate::dispatch::{Channel, Dispatcher};
use crate::host::{Projection, Surface};
use crate::hover;
use crate::options::{Options, PartialOptions};
use crate::point::DataPoint;
use crate::style::{ClickState, HoverState, class_tokens, click_class, hover_class};

/// An icon overlay bound to one layer of a [`Surface`].
///
/// The controller owns its bindings, resolved options and event handlers; the
/// surface and projection are borrowed per call. Create one controller per
/// layer.
///
/// Calling [`redraw`](Self::redraw) again with new data rebinds by position,
/// re-resolves options against the defaults and replaces the handler of every
/// channel.
pub struct IconLayer<S: Surface> {
    layer: S::Layer,
    defaults: Options<S>,
    options: Options<S>,
    data: Vec<DataPoint<S::Icon>>,
    bindings: Bindings<S::Element>,
    dispatcher: Dispatcher<S>,
}

impl<S: Surface> fmt::Debug for IconLayer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconLayer")
            .field("layer", &self.layer)
            .field("options", &self.options)
            .field("data_len", &self.data.len())
            .field("bound", &self.bindings.len())
            .field("dispatcher", &self.dispatcher)
            .finish_non_exhaustive()
    }
}

impl<S> IconLayer<S>
where
    S: Surface,
    S::Icon: Default,
{
    /// A controller for `layer` using [`Options::default`] as the default tree.
    pub fn new(layer: S::Layer) -> Self {
        Self::with_defaults(layer, Options::default())
    }
}

impl<S: Surface> IconLayer<S> {
    /// A controller for `layer` that merges caller options over `defaults`.
    pub fn with_defaults(layer: S::Layer, defaults: Options<S>) -> Self {
        Self {
            layer,
            options: defaults.clone(),
            defaults,
            data: Vec::new(),
            bindings: Bindings::new(),
            dispatcher: Dispatcher::new(),
        }
    }

    /// Render `data` onto the layer.
    ///
    /// Points without a resolvable icon are skipped and reported in the
    /// returned summary; the remaining points are still drawn. An element that
    /// stays bound keeps its hover and click state even when the class names
    /// for that state change.
    pub fn redraw<P>(
        &mut self,
        surface: &mut S,
        projection: &P,
        data: &[DataPoint<S::Icon>],
        options: PartialOptions<S>,
    ) -> RedrawSummary
    where
        P: Projection + ?Sized,
    {
        let previous_options = core::mem::replace(&mut self.options, self.defaults.merge(options));
        let previous_data = core::mem::take(&mut self.data);
        let previous: Vec<(usize, S::Element)> = self.bindings.iter().collect();
        let summary = bind(
            surface,
            projection,
            self.layer,
            &mut self.bindings,
            data,
            &self.options,
        );
        self.data = data.to_vec();
        for (index, element) in previous {
            if self.bindings.element(index) != Some(element) {
                continue;
            }
            let (Some(old), Some(new)) = (previous_data.get(index), self.data.get(index)) else {
                continue;
            };
            rename_pair(
                surface,
                element,
                [HoverState::Over, HoverState::Out]
                    .map(|state| hover_class(old, state, &previous_options.hover)),
                [HoverState::Over, HoverState::Out]
                    .map(|state| hover_class(new, state, &self.options.hover)),
            );
            rename_pair(
                surface,
                element,
                [ClickState::On, ClickState::Off]
                    .map(|state| click_class(old, state, &previous_options.click)),
                [ClickState::On, ClickState::Off]
                    .map(|state| click_class(new, state, &self.options.click)),
            );
        }
        self.install();
        log::debug!(
            "redraw: {} entered, {} updated, {} exited, {} skipped",
            summary.entered,
            summary.updated,
            summary.exited,
            summary.errors.len()
        );
        summary
    }

    fn install(&mut self) {
        let hover = &self.options.hover;
        let click = &self.options.click;
        self.dispatcher.on(Channel::HoverOver, hover.over_fn.clone());
        self.dispatcher.on(Channel::HoverOut, hover.out_fn.clone());
        self.dispatcher.on(Channel::ClickOn, click.on_fn.clone());
        self.dispatcher.on(Channel::ClickOff, click.off_fn.clone());
    }

    /// Remove every element of this layer and drop the handlers.
    pub fn clear(&mut self, surface: &mut S) {
        for element in self.bindings.take() {
            surface.remove(element);
        }
        self.data.clear();
        self.dispatcher.clear();
    }

    /// The pointer entered `element`. Returns `false` if the element is not bound here.
    pub fn pointer_enter(&self, surface: &mut S, element: S::Element) -> bool {
        self.hover(surface, element, HoverState::Over)
    }

    /// The pointer left `element`. Returns `false` if the element is not bound here.
    pub fn pointer_leave(&self, surface: &mut S, element: S::Element) -> bool {
        self.hover(surface, element, HoverState::Out)
    }

    fn hover(&self, surface: &mut S, element: S::Element, to: HoverState) -> bool {
        let Some(index) = self.bindings.index_of(element) else {
            log::trace!("hover on unbound element {element:?}");
            return false;
        };
        hover::transition(
            surface,
            &self.dispatcher,
            &self.options.hover,
            element,
            &self.data[index],
            index,
            to,
        );
        true
    }

    /// `element` was clicked.
    ///
    /// Returns the element's click state afterwards, or `None` if the element
    /// is not bound here.
    pub fn click(&self, surface: &mut S, element: S::Element) -> Option<ClickState> {
        let Some(index) = self.bindings.index_of(element) else {
            log::trace!("click on unbound element {element:?}");
            return None;
        };
        let members = self.collection(surface);
        let collection = Collection {
            members: &members,
            data: &self.data,
        };
        Some(click::on_click(
            surface,
            &self.dispatcher,
            &self.options.click,
            &collection,
            element,
            index,
        ))
    }

    /// Bound elements carrying the layer class, in surface order.
    ///
    /// Selection uses the first token of the layer class; with no layer class
    /// every bound element takes part, in data order.
    fn collection(&self, surface: &S) -> Vec<(usize, S::Element)> {
        let Some(token) = class_tokens(&self.options.css_class).next() else {
            return self.bindings.iter().collect();
        };
        surface
            .select_class(self.layer, token)
            .into_iter()
            .filter_map(|el| self.bindings.index_of(el).map(|i| (i, el)))
            .collect()
    }

    /// The layer handle.
    pub fn layer(&self) -> S::Layer {
        self.layer
    }

    /// Options resolved by the last redraw.
    pub fn options(&self) -> &Options<S> {
        &self.options
    }

    /// The default tree options are merged over.
    pub fn defaults(&self) -> &Options<S> {
        &self.defaults
    }

    /// The click policy in effect.
    pub fn policy(&self) -> ClickPolicy {
        ClickPolicy::of(&self.options.click)
    }

    /// Data of the last redraw.
    pub fn data(&self) -> &[DataPoint<S::Icon>] {
        &self.data
    }

    /// Number of bound elements.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no element is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Element bound to data index `index`.
    pub fn element(&self, index: usize) -> Option<S::Element> {
        self.bindings.element(index)
    }

    /// Data index `element` is bound to.
    pub fn index_of(&self, element: S::Element) -> Option<usize> {
        self.bindings.index_of(element)
    }

    /// Bound `(index, element)` pairs in data order.
    pub fn elements(&self) -> impl Iterator<Item = (usize, S::Element)> + '_ {
        self.bindings.iter()
    }

    /// Hover state of a bound element.
    pub fn hover_state(&self, surface: &S, element: S::Element) -> Option<HoverState> {
        let index = self.bindings.index_of(element)?;
        Some(hover::hover_state(
            surface,
            element,
            &self.data[index],
            &self.options.hover,
        ))
    }

    /// Click state of a bound element.
    pub fn click_state(&self, surface: &S, element: S::Element) -> Option<ClickState> {
        let index = self.bindings.index_of(element)?;
        Some(click::click_state(
            surface,
            element,
            &self.data[index],
            &self.options.click,
        ))
    }

    /// Bound elements that are clicked on, in data order.
    pub fn active_elements(&self, surface: &S) -> Vec<S::Element> {
        self.bindings
            .iter()
            .filter(|&(i, el)| {
                click::click_state(surface, el, &self.data[i], &self.options.click)
                    == ClickState::On
            })
            .map(|(_, el)| el)
            .collect()
    }

    /// The dispatcher holding the current handlers.
    pub fn dispatcher(&self) -> &Dispatcher<S> {
        &self.dispatcher
    }
}

/// Move the state classes of `element` from the `old` names to the `new` ones.
///
/// Each old token that is present carries over to the new token at the same
/// position, so an element that carried neither class still carries neither.
fn rename_pair<S: Surface>(surface: &mut S, element: S::Element, old: [&str; 2], new: [&str; 2]) {
    if old == new {
        return;
    }
    let carried = old.map(|class| surface.has_class(element, class));
    for class in old {
        surface.set_class(element, class, false);
    }
    for (class, present) in new.into_iter().zip(carried) {
        if present {
            surface.set_class(element, class, true);
        }
    }
}
