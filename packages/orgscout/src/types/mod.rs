//! Domain types for organization discovery.

pub mod ein;
pub mod organization;
pub mod page;
pub mod profile;
