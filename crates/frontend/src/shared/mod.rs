pub mod api_utils;
pub mod components;
pub mod icons;
pub mod map;
pub mod preview_url;
