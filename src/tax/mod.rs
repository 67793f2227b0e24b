//! GST computation and place-of-supply rules

pub mod gst;
pub mod state;

pub use gst::*;
pub use state::*;
