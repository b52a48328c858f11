//! Weft Tags - HTML tag constructor catalogue
//!
//! Factories producing correctly-categorized `weft-dom` nodes, one per
//! HTML tag, plus shorthand helpers for common patterns.

pub mod helpers;
pub mod tags;

pub use weft_dom as dom;
