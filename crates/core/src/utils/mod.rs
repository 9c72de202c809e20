//! Shared helpers with no I/O.

pub mod normalize_utils;

pub use normalize_utils::{flatten_inclusions, flatten_locations, normalize_image_list};
