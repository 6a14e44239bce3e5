// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use alloc::vec::Vec;

/// A data point could not be rendered with the current configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// Neither the point's `icon` nor `Options::icon_fn` provides an icon.
    #[error(
        "no icon resolvable for data point {index}: set `DataPoint::icon` or provide `Options::icon_fn`"
    )]
    NoIcon {
        /// Index of the point in the data set.
        index: usize,
    },
}

impl ConfigurationError {
    /// Index of the affected data point.
    pub const fn index(&self) -> usize {
        match self {
            Self::NoIcon { index } => *index,
        }
    }
}

/// A redraw skipped some data points.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{count} of {total} data points could not be rendered", count = .errors.len())]
pub struct RedrawError {
    /// Length of the data set passed to the redraw.
    pub total: usize,
    /// One entry per skipped point, in data order.
    pub errors: Vec<ConfigurationError>,
}
