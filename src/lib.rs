// Hotel room booking desk: catalog, bookings, history and the admin panel

pub mod admin;
pub mod booking;
pub mod catalog;
pub mod config;
pub mod console;
pub mod credentials;
pub mod error;
pub mod export;
pub mod ledger;
pub mod state;

// Re-export key types for convenience
pub use admin::{AdminCommand, AdminSession, AdminState};
pub use booking::{book, booking_total, BookingRecord, DISCOUNT_RATE};
pub use catalog::{RoomCatalog, RoomType};
pub use config::{AppConfig, ConfigError};
pub use console::{Console, FrontDesk};
pub use credentials::{CredentialVerifier, DisabledCredentials, Sha256Credentials};
pub use error::HotelError;
pub use export::{export_state, ExportFormat};
pub use ledger::HistoryLedger;
pub use state::HotelState;
