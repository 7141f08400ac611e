pub mod lifecycle;
pub mod pointer;

pub use lifecycle::wire_page_hide;
pub use pointer::wire_pointer_tracking;
