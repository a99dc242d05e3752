pub mod api_utils;
pub mod date_utils;
pub mod page_frame;
pub mod page_standard;
