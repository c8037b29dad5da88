//! Landing-page animation models. These are pure state machines; the views
//! decide how to paint them.
pub mod cursor;
pub mod frame_loop;
pub mod mesh;

pub use cursor::{CursorFrame, CursorTracker};
pub use frame_loop::{FrameHandle, FrameLoop};
pub use mesh::{Connection, NeuralMesh};
