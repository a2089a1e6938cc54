pub mod aggregate;

pub use aggregate::{fields, CreateOrphanageRequest, GeoPoint, ABOUT_MAX_CHARS, ENDPOINT};
