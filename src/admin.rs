// Admin panel: login state machine, menu selection and catalog maintenance
use crate::catalog::{normalize_room_name, RoomCatalog};
use crate::credentials::CredentialVerifier;
use crate::error::HotelError;
use crate::ledger::HistoryLedger;
use std::fmt::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminState {
    #[default]
    LoggedOut,
    Authenticating,
    Menu,
    Exited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminCommand {
    ViewRooms,
    ViewHistory,
    AddRoomType,
    DeleteRoomType,
    UpdateAvailability,
    ExportState,
    Exit,
}

impl FromStr for AdminCommand {
    type Err = HotelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(AdminCommand::ViewRooms),
            "2" => Ok(AdminCommand::ViewHistory),
            "3" => Ok(AdminCommand::AddRoomType),
            "4" => Ok(AdminCommand::DeleteRoomType),
            "5" => Ok(AdminCommand::UpdateAvailability),
            "6" => Ok(AdminCommand::ExportState),
            "7" => Ok(AdminCommand::Exit),
            other => Err(HotelError::InvalidInput(format!("invalid option '{}'", other))),
        }
    }
}

#[derive(Debug, Default)]
pub struct AdminSession {
    state: AdminState,
}

impl AdminSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AdminState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == AdminState::Menu
    }

    /// Moves the session into the menu if the verifier accepts the pair.
    /// A rejected login leaves the session logged out.
    pub async fn login(
        &mut self,
        verifier: &dyn CredentialVerifier,
        username: &str,
        password: &str,
    ) -> Result<(), HotelError> {
        self.state = AdminState::Authenticating;

        if verifier.verify(username, password).await {
            tracing::info!(username, "admin logged in");
            self.state = AdminState::Menu;
            Ok(())
        } else {
            tracing::warn!(username, "admin login rejected");
            self.state = AdminState::LoggedOut;
            Err(HotelError::InvalidCredentials)
        }
    }

    // Parses a menu selector; only valid while the menu is showing
    pub fn select(&mut self, input: &str) -> Result<AdminCommand, HotelError> {
        if self.state != AdminState::Menu {
            return Err(HotelError::InvalidCredentials);
        }

        let command = input.parse::<AdminCommand>()?;
        if command == AdminCommand::Exit {
            tracing::info!("admin logged out");
            self.state = AdminState::Exited;
        }
        Ok(command)
    }
}

pub fn parse_count(field: &str, input: &str) -> Result<u32, HotelError> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| HotelError::InvalidInput(format!("{} must be a non-negative integer", field)))
}

pub fn view_rooms(catalog: &RoomCatalog) -> String {
    let mut out = String::from("--- Rooms ---");
    for (name, room) in catalog.iter() {
        let _ = write!(out, "\n{}: {}", name, room);
    }
    out
}

pub fn view_history(ledger: &HistoryLedger) -> String {
    let mut out = String::from("--- Booking History ---");
    if ledger.is_empty() {
        out.push_str("\n(no bookings yet)");
    }
    for record in ledger.all() {
        let _ = write!(out, "\n{}", record);
    }
    out
}

/// Adds a room type, or replaces it if the name is already taken.
/// Returns the normalized room name.
pub fn add_room_type(
    catalog: &mut RoomCatalog,
    name: &str,
    price: &str,
    available: &str,
) -> Result<String, HotelError> {
    let name = normalize_room_name(name);
    if name.is_empty() {
        return Err(HotelError::InvalidInput(
            "room name must not be empty".to_string(),
        ));
    }

    let price = parse_count("price", price)?;
    if price == 0 {
        return Err(HotelError::InvalidInput(
            "price must be a positive integer".to_string(),
        ));
    }
    let available = parse_count("availability", available)?;

    let replaced = catalog.insert(&name, price, available).is_some();
    tracing::info!(room = %name, price, available, replaced, "room type saved");
    Ok(name)
}

pub fn delete_room_type(catalog: &mut RoomCatalog, name: &str) -> Result<(), HotelError> {
    match catalog.remove(name) {
        Some(_) => {
            tracing::info!(room = %normalize_room_name(name), "room type deleted");
            Ok(())
        }
        None => Err(HotelError::RoomNotFound(normalize_room_name(name))),
    }
}

pub fn update_availability(
    catalog: &mut RoomCatalog,
    name: &str,
    quantity: &str,
) -> Result<(), HotelError> {
    if !catalog.contains(name) {
        return Err(HotelError::RoomNotFound(normalize_room_name(name)));
    }

    let quantity = parse_count("quantity", quantity)?;
    catalog.set_available(name, quantity);
    tracing::info!(room = %normalize_room_name(name), available = quantity, "availability updated");
    Ok(())
}
