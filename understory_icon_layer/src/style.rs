// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Class resolution: base classes plus per-point hover and click overrides.

use smallvec::SmallVec;

use crate::host::Surface;
use crate::options::{ClickOptions, HoverOptions};
use crate::point::DataPoint;

/// Hover phase of an icon.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum HoverState {
    /// The pointer is over the icon.
    Over,
    /// The pointer is not over the icon.
    #[default]
    Out,
}

impl HoverState {
    /// The other state.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Over => Self::Out,
            Self::Out => Self::Over,
        }
    }
}

/// Click phase of an icon.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ClickState {
    /// The icon is selected.
    On,
    /// The icon is not selected.
    #[default]
    Off,
}

impl ClickState {
    /// The other state.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }
}

/// Split a class attribute into tokens.
pub fn class_tokens(classes: &str) -> impl Iterator<Item = &str> {
    classes.split_ascii_whitespace()
}

/// Class tokens an element bound to `point` must carry: the layer class first,
/// then the point's own classes, without duplicates.
///
/// Applying the result is idempotent as long as the surface skips tokens that
/// are already present.
pub fn base_classes<'a, I>(
    layer_class: &'a str,
    point: &'a DataPoint<I>,
) -> SmallVec<[&'a str; 4]> {
    let mut out: SmallVec<[&'a str; 4]> = SmallVec::new();
    let point_classes = point.css_class.as_deref().unwrap_or_default();
    for token in class_tokens(layer_class).chain(class_tokens(point_classes)) {
        if !out.contains(&token) {
            out.push(token);
        }
    }
    out
}

/// Empty overrides fall back to the default, like an unset one.
fn pick<'a>(point_class: Option<&'a str>, default: &'a str) -> &'a str {
    point_class.filter(|c| !c.is_empty()).unwrap_or(default)
}

/// The hover class for `state`, honoring the point's override.
pub fn hover_class<'a, S: Surface>(
    point: &'a DataPoint<S::Icon>,
    state: HoverState,
    options: &'a HoverOptions<S>,
) -> &'a str {
    let hover = point.hover.as_ref();
    match state {
        HoverState::Over => pick(
            hover.and_then(|h| h.over_class.as_deref()),
            &options.over_class,
        ),
        HoverState::Out => pick(
            hover.and_then(|h| h.out_class.as_deref()),
            &options.out_class,
        ),
    }
}

/// The click class for `state`, honoring the point's override.
pub fn click_class<'a, S: Surface>(
    point: &'a DataPoint<S::Icon>,
    state: ClickState,
    options: &'a ClickOptions<S>,
) -> &'a str {
    let click = point.click.as_ref();
    match state {
        ClickState::On => pick(click.and_then(|c| c.on_class.as_deref()), &options.on_class),
        ClickState::Off => pick(
            click.and_then(|c| c.off_class.as_deref()),
            &options.off_class,
        ),
    }
}
