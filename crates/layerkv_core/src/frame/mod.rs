//! Copy-on-write snapshot layers.
//!
//! Every open transaction is a [`Frame`] holding only the keys and value
//! counts touched since it was opened. Frames live in a [`FrameStack`]:
//! - index 0 is the root and always exists
//! - the top of the stack is the current frame, the only one ever mutated
//! - a frame's parent is the frame just below it
//!
//! Reads that miss the current frame walk toward the root and copy what they
//! find into the current frame, so each key is walked at most once per frame.

mod entry;
mod layer;
mod stack;

pub use entry::Entry;
pub use layer::Frame;
pub use stack::FrameStack;
