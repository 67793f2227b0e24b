//! Document recomputation: line aggregation, totals and editing

pub mod aggregate;
pub mod editor;
pub mod totals;

pub use aggregate::*;
pub use editor::*;
pub use totals::*;
