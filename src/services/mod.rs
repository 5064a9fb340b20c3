pub mod apartment_service;
pub mod auth_service;
pub mod booking_service;
pub mod filter_service;
pub mod http;
pub mod review_service;
pub mod user_service;

pub use http::ApiError;
