// Export of the catalog and booking history to a file
use crate::catalog::RoomCatalog;
use crate::error::HotelError;
use crate::ledger::HistoryLedger;
use crate::state::HotelState;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub const DEFAULT_EXPORT_PATH: &str = "hotel_data.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Xml,
}

impl ExportFormat {
    // Picks the format from the file extension, falling back to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("xml") => ExportFormat::Xml,
            _ => ExportFormat::Json,
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "xml" => Ok(ExportFormat::Xml),
            other => Err(format!("unknown export format '{}'", other)),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Xml => write!(f, "xml"),
        }
    }
}

// JSON document: struct field order is the key order
#[derive(Debug, Serialize)]
struct JsonExport<'a> {
    exported_at: DateTime<Utc>,
    rooms: &'a RoomCatalog,
    bookings: &'a HistoryLedger,
}

// XML document
#[derive(Debug, Serialize)]
#[serde(rename = "HotelData")]
struct XmlExport {
    #[serde(rename = "@exportedAt")]
    exported_at: String,
    #[serde(rename = "Rooms")]
    rooms: XmlRooms,
    #[serde(rename = "Bookings")]
    bookings: XmlBookings,
}

#[derive(Debug, Serialize)]
struct XmlRooms {
    #[serde(rename = "Room")]
    rooms: Vec<XmlRoom>,
}

#[derive(Debug, Serialize)]
struct XmlRoom {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@available")]
    available: u32,
    #[serde(rename = "@price")]
    price: u32,
}

#[derive(Debug, Serialize)]
struct XmlBookings {
    #[serde(rename = "Booking")]
    bookings: Vec<XmlBooking>,
}

#[derive(Debug, Serialize)]
struct XmlBooking {
    #[serde(rename = "@reference")]
    reference: String,
    #[serde(rename = "@roomType")]
    room_type: String,
    #[serde(rename = "@quantity")]
    quantity: u32,
    #[serde(rename = "@price")]
    price: String,
    #[serde(rename = "@bookedAt")]
    booked_at: String,
}

impl XmlExport {
    fn new(state: &HotelState, exported_at: DateTime<Utc>) -> Self {
        let rooms = state
            .catalog
            .iter()
            .map(|(name, room)| XmlRoom {
                name: name.to_string(),
                available: room.available,
                price: room.price,
            })
            .collect();

        let bookings = state
            .ledger
            .all()
            .map(|record| XmlBooking {
                reference: record.reference.clone(),
                room_type: record.room_type.clone(),
                quantity: record.quantity,
                price: record.price.to_string(),
                booked_at: record.booked_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            })
            .collect();

        Self {
            exported_at: exported_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            rooms: XmlRooms { rooms },
            bookings: XmlBookings { bookings },
        }
    }
}

// Renders the whole state in the requested format
pub fn render(
    state: &HotelState,
    format: ExportFormat,
    exported_at: DateTime<Utc>,
) -> Result<String, HotelError> {
    match format {
        ExportFormat::Json => {
            let document = JsonExport {
                exported_at,
                rooms: &state.catalog,
                bookings: &state.ledger,
            };
            serde_json::to_string_pretty(&document).map_err(|e| HotelError::Export(e.to_string()))
        }
        ExportFormat::Xml => {
            let document = XmlExport::new(state, exported_at);
            let body = quick_xml::se::to_string(&document)
                .map_err(|e| HotelError::Export(e.to_string()))?;
            Ok(format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}", body))
        }
    }
}

/// Writes the catalog and history to `path`, replacing whatever was there.
pub async fn export_state(
    state: &HotelState,
    path: &Path,
    format: ExportFormat,
) -> Result<(), HotelError> {
    let contents = render(state, format, Utc::now())?;
    tokio::fs::write(path, contents).await?;

    tracing::info!(
        path = %path.display(),
        %format,
        rooms = state.catalog.len(),
        bookings = state.ledger.len(),
        "exported hotel data"
    );
    Ok(())
}
