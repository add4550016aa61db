// Error types shared by the booking desk
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HotelError {
    #[error("Invalid room type: {0}")]
    InvalidRoomType(String),

    #[error("Only {available} rooms available")]
    NotEnoughAvailability { available: u32 },

    #[error("Room '{0}' not found")]
    RoomNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid admin credentials")]
    InvalidCredentials,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export error: {0}")]
    Export(String),
}

impl HotelError {
    // Errors that the interactive loops report and then carry on from
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, HotelError::Io(_))
    }
}
