pub mod api_utils;
pub mod components;
pub mod format;
pub mod icons;
pub mod modal;
pub mod notices;
pub mod page_data;
pub mod storage;
