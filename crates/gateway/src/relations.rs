//! Relation names of the hosted schema.
//!
//! Keeping every relation name here is the single place the rest of the
//! crate agrees with the remote schema. Column names are carried by the
//! serde field names of the row types.

pub const PACKAGES: &str = "packages";
pub const PACKAGE_DETAILS: &str = "package_details";
pub const PACKAGE_DATES: &str = "package_dates";

pub const ATTRACTIONS: &str = "attractions";
pub const LANDS: &str = "lands";
pub const ACCOMMODATIONS: &str = "accommodations";
pub const CAR_RENTALS: &str = "car_rentals";

pub const REVIEW_SUMMARY: &str = "review_summary";

pub const BOOKINGS: &str = "bookings";
pub const CUSTOMERS: &str = "customers";
pub const AGENTS: &str = "agents";
