/// Review-summary source discriminator for attraction listings
pub const SOURCE_TYPE_ATTRACTION: &str = "attraction";

/// Review-summary source discriminator for land package listings
pub const SOURCE_TYPE_LAND: &str = "land";

/// Default number of entries returned by featured-listing queries
pub const DEFAULT_FEATURED_LIMIT: usize = 4;
