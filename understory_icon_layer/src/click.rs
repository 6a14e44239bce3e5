// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click state machine.
//!
//! Each element is [`ClickState::On`] or [`ClickState::Off`], read back from the
//! presence of its resolved on class. What a click does depends on the
//! [`ClickPolicy`]:
//!
//! - [`ClickPolicy::Multiple`]: the clicked element toggles; nothing else changes.
//! - [`ClickPolicy::Exclusive`]: at most one element of the collection is on.
//!   Clicking an inactive element first turns the active one off (emitting
//!   `clickOff`), then turns the clicked one on (emitting `clickOn`). Clicking the
//!   active element only turns it off.
//!
//! Every step writes classes before emitting its event.

use smallvec::SmallVec;

use crate::dispatch::{Channel, Dispatcher};
use crate::host::Surface;
use crate::options::ClickOptions;
use crate::point::DataPoint;
use crate::style::{ClickState, click_class};

/// Selection policy of a layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ClickPolicy {
    /// Every element toggles independently.
    Multiple,
    /// At most one element is on.
    #[default]
    Exclusive,
}

impl ClickPolicy {
    /// The policy for an `allow_multiple` setting.
    pub const fn from_allow_multiple(allow_multiple: bool) -> Self {
        if allow_multiple {
            Self::Multiple
        } else {
            Self::Exclusive
        }
    }

    /// The policy configured in `options`.
    pub const fn of<S: Surface>(options: &ClickOptions<S>) -> Self {
        Self::from_allow_multiple(options.allow_multiple)
    }
}

/// Click state of `element`, read back from its classes.
pub fn click_state<S: Surface>(
    surface: &S,
    element: S::Element,
    point: &DataPoint<S::Icon>,
    options: &ClickOptions<S>,
) -> ClickState {
    if surface.has_class(element, click_class(point, ClickState::On, options)) {
        ClickState::On
    } else {
        ClickState::Off
    }
}

/// Set the classes of `state` on `element`, clearing those of the other state.
pub fn apply_click<S: Surface>(
    surface: &mut S,
    element: S::Element,
    point: &DataPoint<S::Icon>,
    options: &ClickOptions<S>,
    state: ClickState,
) {
    let on = click_class(point, ClickState::On, options);
    let off = click_class(point, ClickState::Off, options);
    surface.set_class(element, on, state == ClickState::On);
    surface.set_class(element, off, state == ClickState::Off);
}

/// The elements a click is resolved against, with the data they are bound to.
pub(crate) struct Collection<'a, S: Surface> {
    /// `(index, element)` in collection order.
    pub(crate) members: &'a [(usize, S::Element)],
    pub(crate) data: &'a [DataPoint<S::Icon>],
}

impl<S: Surface> Collection<'_, S> {
    fn active(
        &self,
        surface: &S,
        options: &ClickOptions<S>,
    ) -> SmallVec<[(usize, S::Element); 2]> {
        self.members
            .iter()
            .copied()
            .filter(|&(i, el)| click_state(surface, el, &self.data[i], options) == ClickState::On)
            .collect()
    }
}

fn set<S: Surface>(
    surface: &mut S,
    dispatcher: &Dispatcher<S>,
    options: &ClickOptions<S>,
    element: S::Element,
    point: &DataPoint<S::Icon>,
    index: usize,
    state: ClickState,
) {
    apply_click(surface, element, point, options, state);
    let channel = match state {
        ClickState::On => Channel::ClickOn,
        ClickState::Off => Channel::ClickOff,
    };
    dispatcher.emit(channel, element, point, index);
}

/// Handle a click on `target` (bound to data index `index`).
///
/// Returns the clicked element's state afterwards.
pub(crate) fn on_click<S: Surface>(
    surface: &mut S,
    dispatcher: &Dispatcher<S>,
    options: &ClickOptions<S>,
    collection: &Collection<'_, S>,
    target: S::Element,
    index: usize,
) -> ClickState {
    let point = &collection.data[index];
    match ClickPolicy::of(options) {
        ClickPolicy::Multiple => {
            let next = click_state(surface, target, point, options).opposite();
            set(surface, dispatcher, options, target, point, index, next);
            next
        }
        ClickPolicy::Exclusive => {
            // Normally a single element; several can be on after switching
            // from `Multiple`, and all of them are turned off.
            let active = collection.active(surface, options);
            let was_active = active.iter().any(|&(_, el)| el == target)
                || click_state(surface, target, point, options) == ClickState::On;
            for (i, el) in active {
                set(
                    surface,
                    dispatcher,
                    options,
                    el,
                    &collection.data[i],
                    i,
                    ClickState::Off,
                );
            }
            if was_active {
                if click_state(surface, target, point, options) == ClickState::On {
                    set(surface, dispatcher, options, target, point, index, ClickState::Off);
                }
                ClickState::Off
            } else {
                set(surface, dispatcher, options, target, point, index, ClickState::On);
                ClickState::On
            }
        }
    }
}
