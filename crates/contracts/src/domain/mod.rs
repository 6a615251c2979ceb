pub mod a101_cart;
pub mod a102_client;
pub mod a103_sale;
pub mod a104_catalog;
