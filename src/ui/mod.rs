//! UI-Layer mit egui: Fenster-Input, Klick-Durchlass und Overlay-Painting.

pub mod input;
mod keyboard;
pub mod overlay;

pub use input::{update_cursor, CursorSource, InputState, SystemCursor};
pub use keyboard::collect_keyboard_intents;
pub use overlay::paint_overlay;
