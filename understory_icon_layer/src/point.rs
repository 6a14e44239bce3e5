// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input data: one [`DataPoint`] per icon.

use alloc::string::String;

/// Per-point override of the hover classes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct HoverClasses {
    /// Class applied while the pointer is over the icon.
    pub over_class: Option<String>,
    /// Class applied after the pointer leaves the icon.
    pub out_class: Option<String>,
}

/// Per-point override of the click classes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct ClickClasses {
    /// Class applied while the icon is clicked on.
    pub on_class: Option<String>,
    /// Class applied after the icon is clicked off.
    pub off_class: Option<String>,
}

/// A geographic data point rendered as one icon.
///
/// `I` is the host's icon type ([`Surface::Icon`](crate::Surface::Icon)). When
/// `icon` is `None`, the layer asks `Options::icon_fn` for one.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "camelCase", bound = "")
)]
pub struct DataPoint<I> {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Explicit icon for this point.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub icon: Option<I>,
    /// Extra class tokens (whitespace separated) added to the element.
    #[cfg_attr(feature = "serde", serde(default))]
    pub css_class: Option<String>,
    /// Hover class overrides.
    #[cfg_attr(feature = "serde", serde(default))]
    pub hover: Option<HoverClasses>,
    /// Click class overrides.
    #[cfg_attr(feature = "serde", serde(default))]
    pub click: Option<ClickClasses>,
}

impl<I> DataPoint<I> {
    /// A point at `(lat, lng)` with no icon and no overrides.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            icon: None,
            css_class: None,
            hover: None,
            click: None,
        }
    }

    /// Use `icon` for this point instead of the layer's icon factory.
    #[must_use]
    pub fn with_icon(mut self, icon: I) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Add extra class tokens to the element.
    #[must_use]
    pub fn with_css_class(mut self, class: impl Into<String>) -> Self {
        self.css_class = Some(class.into());
        self
    }

    /// Override the hover classes for this point.
    #[must_use]
    pub fn with_hover_classes(
        mut self,
        over_class: Option<String>,
        out_class: Option<String>,
    ) -> Self {
        self.hover = Some(HoverClasses {
            over_class,
            out_class,
        });
        self
    }

    /// Override the click classes for this point.
    #[must_use]
    pub fn with_click_classes(
        mut self,
        on_class: Option<String>,
        off_class: Option<String>,
    ) -> Self {
        self.click = Some(ClickClasses {
            on_class,
            off_class,
        });
        self
    }
}
