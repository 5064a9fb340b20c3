pub mod admin;
pub mod apartment_card;
pub mod apartment_detail;
pub mod apartment_list;
pub mod app;
pub mod booking_confirm;
pub mod calendar;
pub mod error_page;
pub mod header;
pub mod login;
pub mod my_bookings;
pub mod profile;
pub mod reviews;
pub mod toast;

pub use apartment_card::ApartmentCard;
pub use apartment_detail::ApartmentDetail;
pub use apartment_list::ApartmentList;
pub use app::App;
pub use booking_confirm::BookingConfirm;
pub use calendar::Calendar;
pub use error_page::ErrorPage;
pub use header::Header;
pub use login::Login;
pub use my_bookings::MyBookings;
pub use profile::Profile;
pub use reviews::Reviews;
pub use toast::{ToastProvider, use_toast};
