pub mod scroll;

pub use scroll::{wire_scroll_and_resize, ScrollState};
