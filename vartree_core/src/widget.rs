// Copyright 2026 the Vartree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-facing variation tree instance.
//!
//! [`VariationTree`] owns one [`TreeStore`] and one [`Presenter`]. Every host
//! mutation is evaluated immediately and presented only when something
//! changed. Pointer events are hit tested against the current layout: hover
//! changes are reported back as [`CursorHint`]s, and clicks on a hovered node
//! are forwarded to registered listeners in registration order.
//!
//! There is no global state; independent instances can coexist freely.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;

use crate::backend::Presenter;
use crate::error::TreeError;
use crate::position::PositionRef;
use crate::trace::{
    ActiveChangedEvent, ClickEvent, HoverEvent, LayoutEvent, NodeAddedEvent, TraceSink, Tracer,
};
use crate::tree::{NodeId, TreeChanges, TreeStore};

/// Handle returned by [`VariationTree::on_click`], used to unregister.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

impl fmt::Debug for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ListenerId({})", self.0)
    }
}

/// Cursor affordance the host should show over the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CursorHint {
    /// The pointer is not over any node.
    Default,
    /// The pointer is over a clickable node.
    Pointer,
}

/// Result of [`VariationTree::click`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickOutcome {
    /// Position of the clicked node, if the click landed on one.
    pub position: Option<PositionRef>,
    /// Cursor change caused by refreshing hover at the click point.
    pub cursor: Option<CursorHint>,
}

type ClickListener = Box<dyn FnMut(PositionRef)>;

/// A variation tree bound to a presenter.
pub struct VariationTree<P> {
    store: TreeStore,
    presenter: P,
    changes: TreeChanges,
    hovered: Option<NodeId>,
    pointer: Option<Point>,
    pending_cursor: Option<CursorHint>,
    listeners: Vec<(ListenerId, ClickListener)>,
    next_listener: u32,
    sink: Option<Box<dyn TraceSink>>,
}

impl<P: fmt::Debug> fmt::Debug for VariationTree<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariationTree")
            .field("store", &self.store)
            .field("presenter", &self.presenter)
            .field("hovered", &self.hovered)
            .field("pointer", &self.pointer)
            .field("listeners", &self.listeners.len())
            .field("traced", &self.sink.is_some())
            .finish_non_exhaustive()
    }
}

impl<P: Presenter> VariationTree<P> {
    /// Creates an instance with standard spacing. Nothing is drawn until
    /// [`new_game`](Self::new_game).
    #[must_use]
    pub fn new(presenter: P) -> Self {
        Self::with_store(TreeStore::new(), presenter)
    }

    /// Creates an instance around an existing (typically empty) store.
    #[must_use]
    pub fn with_store(store: TreeStore, presenter: P) -> Self {
        Self {
            store,
            presenter,
            changes: TreeChanges::default(),
            hovered: None,
            pointer: None,
            pending_cursor: None,
            listeners: Vec::new(),
            next_listener: 0,
            sink: None,
        }
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &TreeStore {
        &self.store
    }

    /// Returns the presenter.
    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Returns the presenter mutably (e.g. to update the device pixel ratio).
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Routes trace events to `sink`, replacing any previous sink.
    pub fn set_trace_sink(&mut self, sink: Box<dyn TraceSink>) {
        self.sink = Some(sink);
    }

    /// Stops tracing and returns the previous sink, if any.
    pub fn take_trace_sink(&mut self) -> Option<Box<dyn TraceSink>> {
        self.sink.take()
    }

    // -- Host mutations --

    /// Discards the current tree and starts a new game at `root`.
    ///
    /// Hover is re-evaluated against the new tree at the last pointer
    /// position.
    pub fn new_game(&mut self, root: PositionRef) {
        self.store.new_game(root);
        tracer(&mut self.sink).new_game(root);
        self.refresh();
    }

    /// Adds `child` under `parent`, makes it active, and redraws if anything
    /// changed.
    ///
    /// # Errors
    ///
    /// Propagates [`TreeStore::add_child`] errors; the tree is unchanged.
    pub fn add_child(&mut self, parent: PositionRef, child: PositionRef) -> Result<(), TreeError> {
        let before = self.store.len();
        let id = self.store.add_child(parent, child)?;
        tracer(&mut self.sink).node_added(&NodeAddedEvent {
            position: child,
            parent,
            mainline: self.store.is_mainline(id),
            reused: self.store.len() == before,
        });
        self.refresh();
        Ok(())
    }

    /// Makes `position` the active node and redraws if it changed.
    ///
    /// # Errors
    ///
    /// Propagates [`TreeStore::set_active`] errors; the tree is unchanged.
    pub fn set_active(&mut self, position: PositionRef) -> Result<(), TreeError> {
        self.store.set_active(position)?;
        self.refresh();
        Ok(())
    }

    // -- Listeners --

    /// Registers a listener invoked with the clicked node's position.
    ///
    /// Listeners run synchronously, in registration order.
    pub fn on_click(&mut self, listener: impl FnMut(PositionRef) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Unregisters a click listener. Returns `false` if it was not registered.
    pub fn remove_click_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(registered, _)| *registered != id);
        self.listeners.len() != before
    }

    // -- Pointer input --

    /// Returns the position of the hovered node, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<PositionRef> {
        self.hovered.map(|id| self.store.position(id))
    }

    /// Updates hover state for a pointer at `point` (surface logical units).
    ///
    /// Returns the new cursor affordance when the pointer entered or left a
    /// node, and `None` when the affordance is unchanged.
    pub fn pointer_move(&mut self, point: Point) -> Option<CursorHint> {
        self.pointer = Some(point);
        self.pending_cursor = None;
        let hit = self.store.hit_test(point);
        self.set_hovered(hit)
    }

    /// Clears hover state when the pointer leaves the surface.
    pub fn pointer_leave(&mut self) -> Option<CursorHint> {
        self.pointer = None;
        self.pending_cursor = None;
        self.set_hovered(None)
    }

    /// Takes the cursor change caused by a relayout moving nodes under a
    /// stationary pointer.
    ///
    /// Mutations re-run the hit test at the last pointer position; hosts
    /// should apply this hint after each mutation.
    pub fn take_cursor_hint(&mut self) -> Option<CursorHint> {
        self.pending_cursor.take()
    }

    /// Handles a click at `point`.
    ///
    /// Hover is refreshed at `point` first, and the resulting cursor change
    /// is reported in the outcome. If a node is hovered, every listener is
    /// notified with its position.
    pub fn click(&mut self, point: Point) -> ClickOutcome {
        let cursor = self.pointer_move(point);
        let Some(position) = self.hovered() else {
            return ClickOutcome {
                position: None,
                cursor,
            };
        };
        for (_, listener) in &mut self.listeners {
            listener(position);
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "listener count is tiny"
        )]
        let listeners = self.listeners.len() as u32;
        tracer(&mut self.sink).click(&ClickEvent {
            position,
            listeners,
        });
        ClickOutcome {
            position: Some(position),
            cursor,
        }
    }

    // -- Internal helpers --

    fn set_hovered(&mut self, hit: Option<NodeId>) -> Option<CursorHint> {
        if hit == self.hovered {
            return None;
        }
        let was_over = self.hovered.is_some();
        self.hovered = hit;
        let position = self.hovered();
        tracer(&mut self.sink).hover(&HoverEvent { position });
        match (was_over, hit.is_some()) {
            (false, true) => Some(CursorHint::Pointer),
            (true, false) => Some(CursorHint::Default),
            _ => None,
        }
    }

    /// Evaluates pending mutations, presents them if anything changed, and
    /// re-runs the hit test if nodes may have moved.
    fn refresh(&mut self) {
        if !self.present_changes() || !self.changes.topology_changed {
            return;
        }
        let hit = self.pointer.and_then(|p| self.store.hit_test(p));
        if let Some(hint) = self.set_hovered(hit) {
            self.pending_cursor = Some(hint);
        }
    }

    /// Returns `false` if there was nothing to present.
    fn present_changes(&mut self) -> bool {
        let Self {
            store,
            presenter,
            changes,
            sink,
            ..
        } = self;
        store.evaluate_into(changes);
        if changes.is_empty() {
            return false;
        }

        let mut tracer = tracer(sink);
        if changes.topology_changed {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "node count is bounded by game length"
            )]
            let nodes = store.len() as u32;
            tracer.layout(&LayoutEvent {
                nodes,
                depth_levels: store.depth_levels(),
                required: store.required_size(),
            });
        }
        if changes.active_changed
            && let Some(active) = store.active()
        {
            tracer.active_changed(&ActiveChangedEvent {
                position: store.position(active),
            });
        }
        presenter.present(store, changes, &mut tracer);
        true
    }
}

fn tracer(sink: &mut Option<Box<dyn TraceSink>>) -> Tracer<'_> {
    match sink {
        Some(sink) => Tracer::new(sink.as_mut()),
        None => Tracer::none(),
    }
}
