use std::io::Write;

use crate::classify::Classifier;
use crate::config::DropConfig;
use crate::item::DroppedItem;
use crate::payload::TransferPayload;

/// Receives the items of every successful drop.
pub trait DropTargetObserver {
    fn on_items_dropped(&mut self, items: &[DroppedItem]);
}

impl<F> DropTargetObserver for F
where
    F: FnMut(&[DroppedItem]),
{
    fn on_items_dropped(&mut self, items: &[DroppedItem]) {
        self(items)
    }
}

/// Writes one line per dropped item.
pub struct PrintObserver<W: Write> {
    out: W,
}

impl<W: Write> PrintObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DropTargetObserver for PrintObserver<W> {
    fn on_items_dropped(&mut self, items: &[DroppedItem]) {
        for item in items {
            if let Err(e) = writeln!(self.out, "{}", item) {
                log::error!("failed to print dropped item: {}", e);
                return;
            }
        }
    }
}

/// Hover state of a target. A completed drop is reported to the observer
/// and leaves the target idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropState {
    Idle,
    Hovering,
}

/// The operation a target offers for the current drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOperation {
    None,
    Copy,
}

/// Caller side of a drop: tracks hover state, classifies the payload on
/// drop and notifies the observer.
pub struct DropTarget<O: DropTargetObserver> {
    classifier: Classifier,
    observer: Option<O>,
    state: DropState,
}

impl<O: DropTargetObserver> DropTarget<O> {
    pub fn new(config: DropConfig) -> Self {
        Self {
            classifier: Classifier::new(config),
            observer: None,
            state: DropState::Idle,
        }
    }

    pub fn with_observer(mut self, observer: O) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn set_observer(&mut self, observer: O) {
        self.observer = Some(observer);
    }

    pub fn take_observer(&mut self) -> Option<O> {
        self.observer.take()
    }

    pub fn state(&self) -> DropState {
        self.state
    }

    /// Highlight flag for the hosting view.
    pub fn is_dragging(&self) -> bool {
        self.state == DropState::Hovering
    }

    pub fn drag_entered<P: TransferPayload + ?Sized>(
        &mut self,
        payload: &P,
    ) -> DragOperation {
        let registered = payload
            .types()
            .iter()
            .any(|t| self.classifier.config().is_registered(t));
        let allow = registered && self.classifier.can_accept(payload);
        log::debug!("drag entered, registered: {}, allowed: {}", registered, allow);

        self.state = if allow {
            DropState::Hovering
        } else {
            DropState::Idle
        };
        self.operation()
    }

    pub fn drag_updated<P: TransferPayload + ?Sized>(
        &mut self,
        _payload: &P,
    ) -> DragOperation {
        self.operation()
    }

    pub fn drag_exited(&mut self) {
        self.state = DropState::Idle;
    }

    /// Returns whether the drop was taken.
    pub fn perform_drop<P: TransferPayload + ?Sized>(&mut self, payload: &P) -> bool {
        self.state = DropState::Idle;

        let items = self.classifier.classify(payload);
        if items.is_empty() {
            log::info!("drop rejected");
            return false;
        }

        log::info!("dropped {} item(s)", items.len());
        match self.observer.as_mut() {
            Some(observer) => observer.on_items_dropped(&items),
            None => log::warn!("no observer registered, dropping items"),
        }
        true
    }

    fn operation(&self) -> DragOperation {
        match self.state {
            DropState::Hovering => DragOperation::Copy,
            DropState::Idle => DragOperation::None,
        }
    }
}

impl<O: DropTargetObserver> Default for DropTarget<O> {
    fn default() -> Self {
        Self::new(DropConfig::default())
    }
}
