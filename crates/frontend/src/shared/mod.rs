pub mod api_utils;
pub mod date_utils;
pub mod http;
pub mod icons;
pub mod search_box;
pub mod status_badge;
