pub mod bookings_tab;
pub mod filters_tab;
pub mod stats_tab;

pub use bookings_tab::BookingsTab;
pub use filters_tab::FiltersTab;
pub use stats_tab::StatsTab;
