// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory scene: layers of icon elements with classes and translations.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size, Vec2};
use smallvec::SmallVec;
use understory_icon_layer::Surface;

use crate::types::{ElementFlags, ElementId, Icon, LayerId};

#[derive(Clone, Debug)]
struct Layer {
    name: String,
    /// Draw order, bottom to top.
    elements: Vec<ElementId>,
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    layer: LayerId,
    icon: Icon,
    classes: SmallVec<[String; 4]>,
    translate: Vec2,
    flags: ElementFlags,
}

/// A flat scene of icon elements grouped into layers.
///
/// Later layers draw above earlier ones; within a layer, later elements draw
/// above earlier ones. Element handles are generational: removing an element
/// makes its handle stale, and a reused slot hands out a newer handle.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    layers: Vec<Layer>,
    nodes: Vec<Option<Node>>,
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl Scene {
    /// An empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a layer on top of the existing ones.
    pub fn add_layer(&mut self, name: impl Into<String>) -> LayerId {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "LayerId uses 32-bit indices by design."
        )]
        let id = LayerId(self.layers.len() as u32);
        self.layers.push(Layer {
            name: name.into(),
            elements: Vec::new(),
        });
        id
    }

    /// Name a layer was created with.
    pub fn layer_name(&self, layer: LayerId) -> Option<&str> {
        self.layers.get(layer.idx()).map(|l| l.name.as_str())
    }

    /// Layers, bottom to top.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "LayerId uses 32-bit indices by design."
    )]
    pub fn layers(&self) -> impl Iterator<Item = LayerId> + '_ {
        (0..self.layers.len()).map(|i| LayerId(i as u32))
    }

    /// Elements of `layer` in draw order.
    pub fn elements(&self, layer: LayerId) -> &[ElementId] {
        self.layers
            .get(layer.idx())
            .map(|l| l.elements.as_slice())
            .unwrap_or(&[])
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.nodes.iter().flatten().count()
    }

    /// Whether the scene holds no live element.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert `icon` on top of `layer`.
    ///
    /// An element inserted into an unknown layer is live but never drawn or hit.
    pub fn insert(&mut self, layer: LayerId, icon: Icon) -> ElementId {
        let node = |generation| Node {
            generation,
            layer,
            icon,
            classes: SmallVec::new(),
            translate: Vec2::ZERO,
            flags: ElementFlags::default(),
        };
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(node(generation));
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(node(generation)));
            self.generations.push(generation);
            (self.nodes.len() - 1, generation)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "ElementId uses 32-bit indices by design."
        )]
        let id = ElementId::new(idx as u32, generation);
        match self.layers.get_mut(layer.idx()) {
            Some(l) => l.elements.push(id),
            None => log::warn!("element {id:?} inserted into unknown layer {layer:?}"),
        }
        id
    }

    /// Remove an element. Stale handles are ignored.
    pub fn remove(&mut self, id: ElementId) {
        let Some(layer) = self.layer_of(id) else {
            return;
        };
        if let Some(l) = self.layers.get_mut(layer.idx()) {
            l.elements.retain(|&e| e != id);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Returns true if `id` refers to a live element.
    pub fn is_alive(&self, id: ElementId) -> bool {
        self.node(id).is_some()
    }

    fn node(&self, id: ElementId) -> Option<&Node> {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .filter(|n| n.generation == id.generation())
    }

    fn node_mut(&mut self, id: ElementId) -> Option<&mut Node> {
        self.nodes
            .get_mut(id.idx())
            .and_then(|n| n.as_mut())
            .filter(|n| n.generation == id.generation())
    }

    /// Layer of a live element.
    pub fn layer_of(&self, id: ElementId) -> Option<LayerId> {
        self.node(id).map(|n| n.layer)
    }

    /// Icon of a live element.
    pub fn icon(&self, id: ElementId) -> Option<&Icon> {
        self.node(id).map(|n| &n.icon)
    }

    /// Replace the icon of a live element.
    pub fn set_icon(&mut self, id: ElementId, icon: Icon) {
        if let Some(n) = self.node_mut(id) {
            n.icon = icon;
        }
    }

    /// Translation of a live element.
    pub fn translate(&self, id: ElementId) -> Option<Vec2> {
        self.node(id).map(|n| n.translate)
    }

    /// Flags of a live element.
    pub fn flags(&self, id: ElementId) -> Option<ElementFlags> {
        self.node(id).map(|n| n.flags)
    }

    /// Replace the flags of a live element.
    pub fn set_flags(&mut self, id: ElementId, flags: ElementFlags) {
        if let Some(n) = self.node_mut(id) {
            n.flags = flags;
        }
    }

    /// Class tokens of an element in insertion order; empty for stale handles.
    pub fn classes(&self, id: ElementId) -> impl Iterator<Item = &str> + '_ {
        self.node(id)
            .into_iter()
            .flat_map(|n| n.classes.iter().map(String::as_str))
    }

    /// The class list joined by spaces, as a `class` attribute would read.
    pub fn class_attr(&self, id: ElementId) -> Option<String> {
        let node = self.node(id)?;
        Some(node.classes.join(" "))
    }

    /// Add a class token. Adding a present token does nothing.
    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if let Some(n) = self.node_mut(id) {
            if !n.classes.iter().any(|c| c == class) {
                n.classes.push(class.to_string());
            }
        }
    }

    /// Remove a class token.
    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        if let Some(n) = self.node_mut(id) {
            n.classes.retain(|c| c != class);
        }
    }

    /// World-space bounding box of a live element.
    pub fn world_bounds(&self, id: ElementId) -> Option<Rect> {
        self.node(id).map(|n| n.icon.local_bounds() + n.translate)
    }

    /// Topmost visible, pickable element whose shape contains `point`.
    pub fn hit_test_point(&self, point: Point) -> Option<ElementId> {
        self.layers.iter().rev().find_map(|layer| {
            layer.elements.iter().rev().copied().find(|&id| {
                self.node(id).is_some_and(|n| {
                    n.flags.is_hit_testable() && n.icon.contains(point - n.translate)
                })
            })
        })
    }

    /// Live elements of `layer` carrying `class`, in draw order.
    pub fn select_class(&self, layer: LayerId, class: &str) -> Vec<ElementId> {
        self.elements(layer)
            .iter()
            .copied()
            .filter(|&id| self.has_class(id, class))
            .collect()
    }

    /// Whether a live element carries `class`.
    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.node(id)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }
}

impl Surface for Scene {
    type Layer = LayerId;
    type Element = ElementId;
    type Icon = Icon;

    fn append(&mut self, layer: LayerId, icon: Icon) -> ElementId {
        self.insert(layer, icon)
    }

    fn remove(&mut self, element: ElementId) {
        Self::remove(self, element);
    }

    fn has_class(&self, element: ElementId, class: &str) -> bool {
        Self::has_class(self, element, class)
    }

    fn set_class(&mut self, element: ElementId, class: &str, on: bool) {
        if on {
            self.add_class(element, class);
        } else {
            self.remove_class(element, class);
        }
    }

    fn bounding_box(&self, element: ElementId) -> Option<Size> {
        self.icon(element).map(Icon::size)
    }

    fn set_translate(&mut self, element: ElementId, offset: Vec2) {
        if let Some(n) = self.node_mut(element) {
            n.translate = offset;
        }
    }

    fn select_class(&self, layer: LayerId, class: &str) -> Vec<ElementId> {
        Self::select_class(self, layer, class)
    }
}
