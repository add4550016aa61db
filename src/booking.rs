// Booking engine: validates a request against the catalog and takes the rooms
use crate::catalog::{normalize_room_name, RoomCatalog};
use crate::error::HotelError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Flat discount taken off the unit price of every booking (10%).
pub const DISCOUNT_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub reference: String,
    pub room_type: String,
    pub quantity: u32,
    pub price: Decimal,
    pub booked_at: DateTime<Utc>,
}

impl fmt::Display for BookingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] room_type={}, quantity={}, price={}",
            self.reference, self.room_type, self.quantity, self.price
        )
    }
}

// Unit price after the discount
pub fn discounted_unit_price(unit_price: u32) -> Decimal {
    Decimal::from(unit_price) * (Decimal::ONE - DISCOUNT_RATE)
}

pub fn booking_total(unit_price: u32, quantity: u32) -> Decimal {
    discounted_unit_price(unit_price) * Decimal::from(quantity)
}

fn new_reference() -> String {
    format!("BK{:08X}", rand::random::<u32>())
}

/// Books `quantity` rooms of `room_type`.
///
/// The catalog is only touched once every check has passed, so a failed
/// booking leaves availability exactly as it was.
#[tracing::instrument(level = "info", skip(catalog))]
pub fn book(
    catalog: &mut RoomCatalog,
    room_type: &str,
    quantity: u32,
) -> Result<BookingRecord, HotelError> {
    let room_type = normalize_room_name(room_type);
    let room = match catalog.lookup_mut(&room_type) {
        Some(room) => room,
        None => {
            tracing::warn!("rejected booking for unknown room type");
            return Err(HotelError::InvalidRoomType(room_type));
        }
    };

    if quantity == 0 {
        return Err(HotelError::InvalidInput(
            "quantity must be a positive integer".to_string(),
        ));
    }

    if quantity > room.available {
        tracing::warn!(available = room.available, "not enough rooms available");
        return Err(HotelError::NotEnoughAvailability {
            available: room.available,
        });
    }

    let price = booking_total(room.price, quantity);
    room.available -= quantity;

    let record = BookingRecord {
        reference: new_reference(),
        room_type,
        quantity,
        price,
        booked_at: Utc::now(),
    };
    tracing::info!(reference = %record.reference, price = %record.price, "booking confirmed");

    Ok(record)
}
