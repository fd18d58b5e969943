//! ctprix Geo - great-circle distance and display formatting
//!
//! Pure helpers: no state, no IO. Distance sorting and the "X km away" labels
//! in the query output both go through here.

mod distance;

pub use distance::{distance_km, format_distance};
