// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer configuration and the default-merging resolver.
//!
//! [`Options`] is the fully populated tree the layer runs with. Callers pass a
//! [`PartialOptions`] where every leaf and every branch is optional; [`Options::merge`]
//! fills whatever was left unset from a default tree, branch by branch.
//!
//! ```
//! # use kurbo::{Size, Vec2};
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
//! use understory_icon_layer::{Options, PartialOptions};
//!
//! let defaults = Options::<Host>::default();
//! let resolved = defaults.merge(PartialOptions::new().allow_multiple(true));
//!
//! assert!(resolved.click.allow_multiple);
//! assert_eq!(resolved.click.on_class, "click-on");
//! assert_eq!(resolved.hover.over_class, "hover-over");
//! assert_eq!(resolved.css_class, "icon");
//! ```
//!
//! Function leaves (the icon factory and the four handlers) are opaque: they are
//! taken or defaulted as a whole, never looked into.

use alloc::rc::Rc;
use alloc::string::String;
use core::fmt;

use crate::dispatch::Handler;
use crate::host::Surface;
use crate::point::DataPoint;

/// Default layer class.
pub const DEFAULT_CSS_CLASS: &str = "icon";
/// Default class while hovered.
pub const DEFAULT_OVER_CLASS: &str = "hover-over";
/// Default class after the pointer left.
pub const DEFAULT_OUT_CLASS: &str = "hover-out";
/// Default class while clicked on.
pub const DEFAULT_ON_CLASS: &str = "click-on";
/// Default class after being clicked off.
pub const DEFAULT_OFF_CLASS: &str = "click-off";

/// Icon factory: builds the icon for a point that has none, given its index.
pub type IconFn<S> = Rc<dyn Fn(&DataPoint<<S as Surface>::Icon>, usize) -> <S as Surface>::Icon>;

/// Substitute `default` when `user` left the leaf unset.
fn leaf<T: Clone>(default: &T, user: Option<T>) -> T {
    user.unwrap_or_else(|| default.clone())
}

/// Like [`leaf`] for leaves whose default may itself be absent.
fn optional_leaf<T: Clone>(default: &Option<T>, user: Option<T>) -> Option<T> {
    user.or_else(|| default.clone())
}

/// Hover branch of [`Options`].
pub struct HoverOptions<S: Surface> {
    /// Handler for the `hoverOver` channel.
    pub over_fn: Option<Handler<S>>,
    /// Class applied while hovered.
    pub over_class: String,
    /// Handler for the `hoverOut` channel.
    pub out_fn: Option<Handler<S>>,
    /// Class applied after the pointer left.
    pub out_class: String,
}

/// Click branch of [`Options`].
pub struct ClickOptions<S: Surface> {
    /// Whether several icons may be clicked on at once.
    pub allow_multiple: bool,
    /// Handler for the `clickOn` channel.
    pub on_fn: Option<Handler<S>>,
    /// Class applied while clicked on.
    pub on_class: String,
    /// Handler for the `clickOff` channel.
    pub off_fn: Option<Handler<S>>,
    /// Class applied after being clicked off.
    pub off_class: String,
}

/// Fully resolved layer configuration.
pub struct Options<S: Surface> {
    /// Class every icon of the layer carries; also selects the layer's icons.
    pub css_class: String,
    /// Factory for points without an explicit icon. `None` disables the fallback.
    pub icon_fn: Option<IconFn<S>>,
    /// Hover configuration.
    pub hover: HoverOptions<S>,
    /// Click configuration.
    pub click: ClickOptions<S>,
}

impl<S: Surface> Default for HoverOptions<S> {
    fn default() -> Self {
        Self {
            over_fn: None,
            over_class: DEFAULT_OVER_CLASS.into(),
            out_fn: None,
            out_class: DEFAULT_OUT_CLASS.into(),
        }
    }
}

impl<S: Surface> Default for ClickOptions<S> {
    fn default() -> Self {
        Self {
            allow_multiple: false,
            on_fn: None,
            on_class: DEFAULT_ON_CLASS.into(),
            off_fn: None,
            off_class: DEFAULT_OFF_CLASS.into(),
        }
    }
}

impl<S> Default for Options<S>
where
    S: Surface,
    S::Icon: Default,
{
    /// The default tree; the icon factory returns `S::Icon::default()`.
    fn default() -> Self {
        let icon_fn: IconFn<S> = Rc::new(|_: &DataPoint<S::Icon>, _: usize| S::Icon::default());
        Self::with_icon_fn(Some(icon_fn))
    }
}

impl<S: Surface> Options<S> {
    /// Default tree with a caller-chosen icon factory.
    ///
    /// Use this when the host icon type has no sensible `Default`.
    pub fn with_icon_fn(icon_fn: Option<IconFn<S>>) -> Self {
        Self {
            css_class: DEFAULT_CSS_CLASS.into(),
            icon_fn,
            hover: HoverOptions::default(),
            click: ClickOptions::default(),
        }
    }

    /// Merge `user` over `self`, treating `self` as the default tree.
    pub fn merge(&self, user: PartialOptions<S>) -> Self {
        Self {
            css_class: leaf(&self.css_class, user.css_class),
            icon_fn: leaf(&self.icon_fn, user.icon_fn),
            hover: match user.hover {
                Some(hover) => self.hover.merge(hover),
                None => self.hover.clone(),
            },
            click: match user.click {
                Some(click) => self.click.merge(click),
                None => self.click.clone(),
            },
        }
    }
}

impl<S: Surface> HoverOptions<S> {
    /// Merge a hover branch over `self`.
    pub fn merge(&self, user: PartialHover<S>) -> Self {
        Self {
            over_fn: optional_leaf(&self.over_fn, user.over_fn),
            over_class: leaf(&self.over_class, user.over_class),
            out_fn: optional_leaf(&self.out_fn, user.out_fn),
            out_class: leaf(&self.out_class, user.out_class),
        }
    }
}

impl<S: Surface> ClickOptions<S> {
    /// Merge a click branch over `self`.
    pub fn merge(&self, user: PartialClick<S>) -> Self {
        Self {
            allow_multiple: leaf(&self.allow_multiple, user.allow_multiple),
            on_fn: optional_leaf(&self.on_fn, user.on_fn),
            on_class: leaf(&self.on_class, user.on_class),
            off_fn: optional_leaf(&self.off_fn, user.off_fn),
            off_class: leaf(&self.off_class, user.off_class),
        }
    }
}

impl<S: Surface> Clone for HoverOptions<S> {
    fn clone(&self) -> Self {
        Self {
            over_fn: self.over_fn.clone(),
            over_class: self.over_class.clone(),
            out_fn: self.out_fn.clone(),
            out_class: self.out_class.clone(),
        }
    }
}

impl<S: Surface> Clone for ClickOptions<S> {
    fn clone(&self) -> Self {
        Self {
            allow_multiple: self.allow_multiple,
            on_fn: self.on_fn.clone(),
            on_class: self.on_class.clone(),
            off_fn: self.off_fn.clone(),
            off_class: self.off_class.clone(),
        }
    }
}

impl<S: Surface> Clone for Options<S> {
    fn clone(&self) -> Self {
        Self {
            css_class: self.css_class.clone(),
            icon_fn: self.icon_fn.clone(),
            hover: self.hover.clone(),
            click: self.click.clone(),
        }
    }
}

impl<S: Surface> fmt::Debug for HoverOptions<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HoverOptions")
            .field("over_fn", &self.over_fn.is_some())
            .field("over_class", &self.over_class)
            .field("out_fn", &self.out_fn.is_some())
            .field("out_class", &self.out_class)
            .finish()
    }
}

impl<S: Surface> fmt::Debug for ClickOptions<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickOptions")
            .field("allow_multiple", &self.allow_multiple)
            .field("on_fn", &self.on_fn.is_some())
            .field("on_class", &self.on_class)
            .field("off_fn", &self.off_fn.is_some())
            .field("off_class", &self.off_class)
            .finish()
    }
}

impl<S: Surface> fmt::Debug for Options<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("css_class", &self.css_class)
            .field("icon_fn", &self.icon_fn.is_some())
            .field("hover", &self.hover)
            .field("click", &self.click)
            .finish()
    }
}

/// Caller-side hover branch; unset leaves come from the defaults.
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(default, rename_all = "camelCase", bound = "")
)]
pub struct PartialHover<S: Surface> {
    /// See [`HoverOptions::over_fn`].
    #[cfg_attr(feature = "serde", serde(skip))]
    pub over_fn: Option<Handler<S>>,
    /// See [`HoverOptions::over_class`].
    pub over_class: Option<String>,
    /// See [`HoverOptions::out_fn`].
    #[cfg_attr(feature = "serde", serde(skip))]
    pub out_fn: Option<Handler<S>>,
    /// See [`HoverOptions::out_class`].
    pub out_class: Option<String>,
}

/// Caller-side click branch; unset leaves come from the defaults.
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(default, rename_all = "camelCase", bound = "")
)]
pub struct PartialClick<S: Surface> {
    /// See [`ClickOptions::allow_multiple`].
    pub allow_multiple: Option<bool>,
    /// See [`ClickOptions::on_fn`].
    #[cfg_attr(feature = "serde", serde(skip))]
    pub on_fn: Option<Handler<S>>,
    /// See [`ClickOptions::on_class`].
    pub on_class: Option<String>,
    /// See [`ClickOptions::off_fn`].
    #[cfg_attr(feature = "serde", serde(skip))]
    pub off_fn: Option<Handler<S>>,
    /// See [`ClickOptions::off_class`].
    pub off_class: Option<String>,
}

/// Caller-side configuration passed to [`IconLayer::redraw`](crate::IconLayer::redraw).
///
/// With the `serde` feature the string and boolean leaves deserialize from the
/// usual camelCase keys:
///
/// ```json
/// { "cssClass": "station", "click": { "allowMultiple": true } }
/// ```
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(default, rename_all = "camelCase", bound = "")
)]
pub struct PartialOptions<S: Surface> {
    /// See [`Options::css_class`].
    pub css_class: Option<String>,
    /// `None` keeps the default factory, `Some(None)` disables it.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub icon_fn: Option<Option<IconFn<S>>>,
    /// Hover branch.
    pub hover: Option<PartialHover<S>>,
    /// Click branch.
    pub click: Option<PartialClick<S>>,
}

impl<S: Surface> Default for PartialHover<S> {
    fn default() -> Self {
        Self {
            over_fn: None,
            over_class: None,
            out_fn: None,
            out_class: None,
        }
    }
}

impl<S: Surface> Default for PartialClick<S> {
    fn default() -> Self {
        Self {
            allow_multiple: None,
            on_fn: None,
            on_class: None,
            off_fn: None,
            off_class: None,
        }
    }
}

impl<S: Surface> Default for PartialOptions<S> {
    fn default() -> Self {
        Self {
            css_class: None,
            icon_fn: None,
            hover: None,
            click: None,
        }
    }
}

impl<S: Surface> fmt::Debug for PartialOptions<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartialOptions")
            .field("css_class", &self.css_class)
            .field("icon_fn", &self.icon_fn.as_ref().map(Option::is_some))
            .field("hover", &self.hover)
            .field("click", &self.click)
            .finish()
    }
}

impl<S: Surface> fmt::Debug for PartialHover<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartialHover")
            .field("over_fn", &self.over_fn.is_some())
            .field("over_class", &self.over_class)
            .field("out_fn", &self.out_fn.is_some())
            .field("out_class", &self.out_class)
            .finish()
    }
}

impl<S: Surface> fmt::Debug for PartialClick<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartialClick")
            .field("allow_multiple", &self.allow_multiple)
            .field("on_fn", &self.on_fn.is_some())
            .field("on_class", &self.on_class)
            .field("off_fn", &self.off_fn.is_some())
            .field("off_class", &self.off_class)
            .finish()
    }
}

impl<S: Surface> PartialOptions<S> {
    /// Nothing set: every leaf comes from the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    fn hover_mut(&mut self) -> &mut PartialHover<S> {
        self.hover.get_or_insert_with(PartialHover::default)
    }

    fn click_mut(&mut self) -> &mut PartialClick<S> {
        self.click.get_or_insert_with(PartialClick::default)
    }

    /// Set the layer class.
    #[must_use]
    pub fn css_class(mut self, class: impl Into<String>) -> Self {
        self.css_class = Some(class.into());
        self
    }

    /// Set the icon factory.
    #[must_use]
    pub fn icon_fn(
        mut self,
        f: impl Fn(&DataPoint<S::Icon>, usize) -> S::Icon + 'static,
    ) -> Self {
        self.icon_fn = Some(Some(Rc::new(f)));
        self
    }

    /// Disable the icon factory; points must then carry their own icon.
    #[must_use]
    pub fn without_icon_fn(mut self) -> Self {
        self.icon_fn = Some(None);
        self
    }

    /// Set the hover classes.
    #[must_use]
    pub fn hover_classes(mut self, over: impl Into<String>, out: impl Into<String>) -> Self {
        let hover = self.hover_mut();
        hover.over_class = Some(over.into());
        hover.out_class = Some(out.into());
        self
    }

    /// Set the click classes.
    #[must_use]
    pub fn click_classes(mut self, on: impl Into<String>, off: impl Into<String>) -> Self {
        let click = self.click_mut();
        click.on_class = Some(on.into());
        click.off_class = Some(off.into());
        self
    }

    /// Allow or forbid several icons to be clicked on at once.
    #[must_use]
    pub fn allow_multiple(mut self, allow: bool) -> Self {
        self.click_mut().allow_multiple = Some(allow);
        self
    }

    /// Handler for the `hoverOver` channel.
    #[must_use]
    pub fn on_hover_over(mut self, f: impl Fn(&crate::IconEvent<'_, S>) + 'static) -> Self {
        self.hover_mut().over_fn = Some(Rc::new(f));
        self
    }

    /// Handler for the `hoverOut` channel.
    #[must_use]
    pub fn on_hover_out(mut self, f: impl Fn(&crate::IconEvent<'_, S>) + 'static) -> Self {
        self.hover_mut().out_fn = Some(Rc::new(f));
        self
    }

    /// Handler for the `clickOn` channel.
    #[must_use]
    pub fn on_click_on(mut self, f: impl Fn(&crate::IconEvent<'_, S>) + 'static) -> Self {
        self.click_mut().on_fn = Some(Rc::new(f));
        self
    }

    /// Handler for the `clickOff` channel.
    #[must_use]
    pub fn on_click_off(mut self, f: impl Fn(&crate::IconEvent<'_, S>) + 'static) -> Self {
        self.click_mut().off_fn = Some(Rc::new(f));
        self
    }
}
