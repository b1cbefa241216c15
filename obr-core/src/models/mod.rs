mod breakdown;
mod line_item;

pub use breakdown::LineItemBreakdown;
pub use line_item::{LineItemInput, RawLineItem};
