// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-crate test surface.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Point, Size, Vec2};

use crate::host::Surface;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct MockIcon {
    pub(crate) size: Size,
}

impl MockIcon {
    pub(crate) const fn square(side: f64) -> Self {
        Self {
            size: Size::new(side, side),
        }
    }
}

impl Default for MockIcon {
    fn default() -> Self {
        Self::square(10.0)
    }
}

#[derive(Debug)]
pub(crate) struct MockNode {
    pub(crate) layer: u8,
    pub(crate) icon: MockIcon,
    pub(crate) classes: Vec<String>,
    pub(crate) translate: Vec2,
}

/// Element handles are slot indices and never reused.
#[derive(Debug, Default)]
pub(crate) struct Mock {
    pub(crate) nodes: Vec<Option<MockNode>>,
}

impl Mock {
    pub(crate) fn node(&self, el: u32) -> &MockNode {
        self.nodes[el as usize].as_ref().expect("live element")
    }

    pub(crate) fn live(&self) -> usize {
        self.nodes.iter().flatten().count()
    }

    pub(crate) fn classes(&self, el: u32) -> Vec<&str> {
        self.node(el).classes.iter().map(String::as_str).collect()
    }
}

impl Surface for Mock {
    type Layer = u8;
    type Element = u32;
    type Icon = MockIcon;

    fn append(&mut self, layer: u8, icon: MockIcon) -> u32 {
        self.nodes.push(Some(MockNode {
            layer,
            icon,
            classes: Vec::new(),
            translate: Vec2::ZERO,
        }));
        (self.nodes.len() - 1) as u32
    }

    fn remove(&mut self, el: u32) {
        if let Some(slot) = self.nodes.get_mut(el as usize) {
            *slot = None;
        }
    }

    fn has_class(&self, el: u32, class: &str) -> bool {
        self.nodes
            .get(el as usize)
            .and_then(Option::as_ref)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    fn set_class(&mut self, el: u32, class: &str, on: bool) {
        let Some(Some(node)) = self.nodes.get_mut(el as usize) else {
            return;
        };
        let present = node.classes.iter().position(|c| c == class);
        match (on, present) {
            (true, None) => node.classes.push(class.to_string()),
            (false, Some(i)) => {
                node.classes.remove(i);
            }
            _ => {}
        }
    }

    fn bounding_box(&self, el: u32) -> Option<Size> {
        self.nodes
            .get(el as usize)
            .and_then(Option::as_ref)
            .map(|n| n.icon.size)
    }

    fn set_translate(&mut self, el: u32, offset: Vec2) {
        if let Some(Some(node)) = self.nodes.get_mut(el as usize) {
            node.translate = offset;
        }
    }

    fn select_class(&self, layer: u8, class: &str) -> Vec<u32> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, n)| {
                let n = n.as_ref()?;
                (n.layer == layer && n.classes.iter().any(|c| c == class)).then_some(i as u32)
            })
            .collect()
    }
}

/// Projection that scales degrees by ten and flips latitude.
pub(crate) fn scaled(lat: f64, lng: f64) -> Point {
    Point::new(lng * 10.0, -lat * 10.0)
}
