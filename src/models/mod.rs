pub mod apartment;
pub mod auth;
pub mod booking;
pub mod filter;
pub mod review;
pub mod stats;
pub mod user;

pub use apartment::{Apartment, ApartmentPage, ApartmentSearchQuery};
pub use auth::{ApiMessage, LoginRequest, RegisterRequest};
pub use booking::{Booking, BookingState, CreateBookingRequest, UpdateBookingStateRequest};
pub use filter::{CreateFilterRequest, FilterMode, PriceFilter};
pub use review::{average_rating, CreateReviewRequest, Review};
pub use stats::{bar_width_percent, BookingStats, MonthlyPoint, StateCount, TopApartment};
pub use user::{User, UserRole};
