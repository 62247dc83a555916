//! Main content panels, one per view.
//!
//! - [`entry`] - Title screen with the way in
//! - [`map`] - Floor plan of the categories
//! - [`category`] - Exhibit listing of one gallery
//! - [`exhibit`] - Code frame and placard of one exhibit

pub mod category;
pub mod entry;
pub mod exhibit;
pub mod map;
