// Strip assembly: the single-row composite handed to the exporter.

pub mod compose;
pub mod layout;

pub use compose::{compose, Strip};
pub use layout::{caption, layout_cells, StripCell, PRODUCT_LABEL};
