//! Art learning catalog: resources, the community gallery and skill-level
//! learning paths.

pub mod handlers;
pub mod routes;
