mod controls;
mod keyboard;
mod pointer;

pub use controls::{wire_auto_rotate_checkbox, wire_resize};
pub use keyboard::wire_global_keydown;
pub use pointer::wire_input_handlers;
