// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state machine.
//!
//! Each element is either [`HoverState::Over`] or [`HoverState::Out`]. The state
//! lives on the surface as a class: pointer-enter sets the over class and clears
//! the out class, pointer-leave does the opposite. Classes change first; the
//! `hoverOver`/`hoverOut` event is emitted afterwards so handlers observe the
//! final classes.

use crate::dispatch::{Channel, Dispatcher};
use crate::host::Surface;
use crate::options::HoverOptions;
use crate::point::DataPoint;
use crate::style::{HoverState, hover_class};

/// Hover state of `element`, read back from its classes.
///
/// An element that never saw a pointer carries neither class and reads as
/// [`HoverState::Out`].
pub fn hover_state<S: Surface>(
    surface: &S,
    element: S::Element,
    point: &DataPoint<S::Icon>,
    options: &HoverOptions<S>,
) -> HoverState {
    if surface.has_class(element, hover_class(point, HoverState::Over, options)) {
        HoverState::Over
    } else {
        HoverState::Out
    }
}

/// Set the classes of `state` on `element`, clearing those of the other state.
pub fn apply_hover<S: Surface>(
    surface: &mut S,
    element: S::Element,
    point: &DataPoint<S::Icon>,
    options: &HoverOptions<S>,
    state: HoverState,
) {
    let over = hover_class(point, HoverState::Over, options);
    let out = hover_class(point, HoverState::Out, options);
    surface.set_class(element, over, state == HoverState::Over);
    surface.set_class(element, out, state == HoverState::Out);
}

/// Move `element` to `to` and emit the matching event.
pub(crate) fn transition<S: Surface>(
    surface: &mut S,
    dispatcher: &Dispatcher<S>,
    options: &HoverOptions<S>,
    element: S::Element,
    point: &DataPoint<S::Icon>,
    index: usize,
    to: HoverState,
) {
    apply_hover(surface, element, point, options, to);
    let channel = match to {
        HoverState::Over => Channel::HoverOver,
        HoverState::Out => Channel::HoverOut,
    };
    dispatcher.emit(channel, element, point, index);
}
