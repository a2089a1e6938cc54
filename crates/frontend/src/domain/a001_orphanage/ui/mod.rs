pub mod create;
pub mod landing;
