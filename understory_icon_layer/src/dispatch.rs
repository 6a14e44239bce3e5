// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event dispatcher: four named channels, one handler slot each.
//!
//! Registering a handler on a channel replaces whatever was there before, so
//! repeated redraws never accumulate listeners:
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::{Size, Vec2};
//! use understory_icon_layer::dispatch::{Channel, Dispatcher, Handler, IconEvent};
//! # use understory_icon_layer::Surface;
//! # #[derive(Debug)] struct Host;
//! # impl Surface for Host {
//! #     type Layer = (); type Element = u32; type Icon = ();
//! #     fn append(&mut self, _: (), _: ()) -> u32 { 0 }
//! #     fn remove(&mut self, _: u32) {}
//! #     fn has_class(&self, _: u32, _: &str) -> bool { false }
//! #     fn set_class(&mut self, _: u32, _: &str, _: bool) {}
//! #     fn bounding_box(&self, _: u32) -> Option<Size> { None }
//! #     fn set_translate(&mut self, _: u32, _: Vec2) {}
//! #     fn select_class(&self, _: (), _: &str) -> Vec<u32> { Vec::new() }
//! # }
//!
//! let calls = Rc::new(Cell::new(0));
//! let mut dispatcher: Dispatcher<Host> = Dispatcher::new();
//! for _ in 0..3 {
//!     let calls = calls.clone();
//!     let handler: Handler<Host> =
//!         Rc::new(move |_: &IconEvent<'_, Host>| calls.set(calls.get() + 1));
//!     dispatcher.on(Channel::ClickOn, Some(handler));
//! }
//! assert_eq!(dispatcher.installed(), 1);
//! ```

use alloc::rc::Rc;
use core::fmt;

use crate::host::Surface;
use crate::point::DataPoint;

/// Output channel of the icon layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// The pointer entered an icon.
    HoverOver,
    /// The pointer left an icon.
    HoverOut,
    /// An icon was clicked on.
    ClickOn,
    /// An icon was clicked off.
    ClickOff,
}

impl Channel {
    /// Every channel, in slot order.
    pub const ALL: [Self; 4] = [Self::HoverOver, Self::HoverOut, Self::ClickOn, Self::ClickOff];

    const fn slot(self) -> usize {
        match self {
            Self::HoverOver => 0,
            Self::HoverOut => 1,
            Self::ClickOn => 2,
            Self::ClickOff => 3,
        }
    }

    /// Conventional channel name (`hoverOver`, `hoverOut`, `clickOn`, `clickOff`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::HoverOver => "hoverOver",
            Self::HoverOut => "hoverOut",
            Self::ClickOn => "clickOn",
            Self::ClickOff => "clickOff",
        }
    }
}

/// Payload delivered to a channel handler.
///
/// `element` is the originating element, the receiver of the event.
pub struct IconEvent<'a, S: Surface> {
    /// Channel the event was emitted on.
    pub channel: Channel,
    /// Element that produced the event.
    pub element: S::Element,
    /// Data point bound to the element.
    pub datum: &'a DataPoint<S::Icon>,
    /// Index of the data point in the current data set.
    pub index: usize,
}

impl<S: Surface> fmt::Debug for IconEvent<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconEvent")
            .field("channel", &self.channel)
            .field("element", &self.element)
            .field("datum", self.datum)
            .field("index", &self.index)
            .finish()
    }
}

/// A channel handler.
pub type Handler<S> = Rc<dyn Fn(&IconEvent<'_, S>)>;

/// Fixed table from [`Channel`] to at most one [`Handler`].
pub struct Dispatcher<S: Surface> {
    slots: [Option<Handler<S>>; 4],
}

impl<S: Surface> fmt::Debug for Dispatcher<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_map();
        for channel in Channel::ALL {
            list.entry(&channel.name(), &self.handler(channel).is_some());
        }
        list.finish()
    }
}

impl<S: Surface> Default for Dispatcher<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Surface> Dispatcher<S> {
    /// A dispatcher with no handlers.
    pub fn new() -> Self {
        Self {
            slots: [None, None, None, None],
        }
    }

    /// Install `handler` on `channel`, replacing the previous one.
    ///
    /// Passing `None` clears the slot. Returns the handler that was replaced.
    pub fn on(&mut self, channel: Channel, handler: Option<Handler<S>>) -> Option<Handler<S>> {
        core::mem::replace(&mut self.slots[channel.slot()], handler)
    }

    /// The handler currently installed on `channel`.
    pub fn handler(&self, channel: Channel) -> Option<&Handler<S>> {
        self.slots[channel.slot()].as_ref()
    }

    /// Number of channels with a handler.
    pub fn installed(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Remove every handler.
    pub fn clear(&mut self) {
        self.slots = [None, None, None, None];
    }

    /// Deliver an event to the handler of `channel`.
    ///
    /// Returns `true` if a handler ran.
    pub fn emit(
        &self,
        channel: Channel,
        element: S::Element,
        datum: &DataPoint<S::Icon>,
        index: usize,
    ) -> bool {
        log::trace!("{} on {element:?} (index {index})", channel.name());
        let Some(handler) = self.handler(channel) else {
            return false;
        };
        handler(&IconEvent {
            channel,
            element,
            datum,
            index,
        });
        true
    }
}
