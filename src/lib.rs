//! Drop target core: decides whether a drag payload is acceptable and
//! breaks it down into dropped files, in-memory images or remote URLs.

pub mod classify;
pub mod config;
pub mod decode;
mod errors;
pub mod item;
pub mod payload;
pub mod target;
pub mod type_hint;

pub use classify::{can_accept, classify, Classifier};
pub use config::DropConfig;
pub use errors::{DropError, Result};
pub use item::{DroppedItem, Resource};
pub use payload::{
    Pasteboard, PasteboardItem, ReadableKind, Representation, TransferPayload,
};
pub use target::{
    DragOperation, DropState, DropTarget, DropTargetObserver, PrintObserver,
};
