pub mod catalog_service;
pub mod order_service;
pub mod report_service;
pub mod staff_auth;
