// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer tracking: turns pointer positions into enter/leave pairs.

use kurbo::Point;
use understory_icon_layer::IconLayer;

use crate::scene::Scene;
use crate::types::ElementId;

/// The hover change caused by one pointer update.
///
/// `leave` is delivered before `enter`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PointerTransition {
    /// Element the pointer left.
    pub leave: Option<ElementId>,
    /// Element the pointer entered.
    pub enter: Option<ElementId>,
}

impl PointerTransition {
    /// Whether nothing changed.
    pub fn is_empty(&self) -> bool {
        self.leave.is_none() && self.enter.is_none()
    }

    /// Forward the transition to `layer`, leave first.
    ///
    /// Elements bound to other layers are ignored by `layer`, so a transition
    /// can be forwarded to every layer of the scene.
    pub fn dispatch(self, layer: &IconLayer<Scene>, scene: &mut Scene) {
        if let Some(el) = self.leave {
            layer.pointer_leave(scene, el);
        }
        if let Some(el) = self.enter {
            layer.pointer_enter(scene, el);
        }
    }
}

/// Tracks which element is under the pointer.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    current: Option<ElementId>,
}

impl PointerTracker {
    /// A tracker with the pointer outside every element.
    pub fn new() -> Self {
        Self::default()
    }

    /// The element under the pointer after the last update.
    pub fn current(&self) -> Option<ElementId> {
        self.current
    }

    /// The pointer moved to `point`.
    ///
    /// An element removed since the last update produces no leave.
    pub fn move_to(&mut self, scene: &Scene, point: Point) -> PointerTransition {
        let hit = scene.hit_test_point(point);
        if hit == self.current {
            return PointerTransition::default();
        }
        let previous = core::mem::replace(&mut self.current, hit);
        PointerTransition {
            leave: previous.filter(|&el| scene.is_alive(el)),
            enter: hit,
        }
    }

    /// The pointer left the surface.
    pub fn pointer_left(&mut self, scene: &Scene) -> PointerTransition {
        PointerTransition {
            leave: self.current.take().filter(|&el| scene.is_alive(el)),
            enter: None,
        }
    }
}
