pub mod session_provider;
pub mod use_apartment_search;
pub mod use_session;

pub use session_provider::SessionProvider;
pub use use_apartment_search::{use_apartment_search, UseApartmentSearchHandle};
pub use use_session::{use_session, UseSessionHandle};
