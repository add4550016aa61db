// Line-oriented front desk: the customer loop and the admin panel loop
use crate::admin::{self, AdminCommand, AdminSession};
use crate::config::AppConfig;
use crate::credentials::CredentialVerifier;
use crate::error::HotelError;
use crate::export::export_state;
use crate::state::HotelState;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};

const CUSTOMER_BANNER: &str = "\nType 'admin' for admin login.\nType 'exit' to exit.\n";
const CUSTOMER_PROMPT: &str = "Enter your name (or 'admin' / 'exit'): ";

const ADMIN_MENU: &str = "
--- Admin Menu ---
1. View all rooms
2. View booking history
3. Add new room type
4. Delete room type
5. Update room availability
6. Save data to file
7. Exit admin
";

// Prompted text I/O over any async reader/writer pair
pub struct Console<R, W> {
    lines: Lines<R>,
    out: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, out: W) -> Self {
        Self {
            lines: input.lines(),
            out,
        }
    }

    pub async fn say(&mut self, text: &str) -> Result<(), HotelError> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.write_all(b"\n").await?;
        self.out.flush().await?;
        Ok(())
    }

    // None once the input is exhausted
    pub async fn ask(&mut self, prompt: &str) -> Result<Option<String>, HotelError> {
        self.out.write_all(prompt.as_bytes()).await?;
        self.out.flush().await?;
        Ok(self.lines.next_line().await?)
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    InputClosed,
}

// Reads a line or bails out of the current handler when input has ended
macro_rules! ask_or_close {
    ($console:expr, $prompt:expr) => {
        match $console.ask($prompt).await? {
            Some(line) => line,
            None => return Ok(Flow::InputClosed),
        }
    };
}

pub fn parse_quantity(input: &str) -> Result<u32, HotelError> {
    match input.trim().parse::<u32>() {
        Ok(quantity) if quantity > 0 => Ok(quantity),
        _ => Err(HotelError::InvalidInput(
            "quantity must be a positive integer".to_string(),
        )),
    }
}

/// The customer-facing desk. Owns the hotel state for the whole session.
pub struct FrontDesk {
    state: HotelState,
    config: AppConfig,
    verifier: Box<dyn CredentialVerifier>,
}

impl FrontDesk {
    pub fn new(state: HotelState, config: AppConfig, verifier: Box<dyn CredentialVerifier>) -> Self {
        Self {
            state,
            config,
            verifier,
        }
    }

    pub fn state(&self) -> &HotelState {
        &self.state
    }

    pub fn into_state(self) -> HotelState {
        self.state
    }

    /// Runs until the operator types `exit` or the input ends, then prints
    /// the customers seen during the session.
    pub async fn run<R, W>(&mut self, console: &mut Console<R, W>) -> Result<(), HotelError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        tracing::info!(rooms = self.state.catalog.len(), "front desk open");

        loop {
            console.say(CUSTOMER_BANNER).await?;
            let input = match console.ask(CUSTOMER_PROMPT).await? {
                Some(line) => line,
                None => {
                    tracing::info!("input closed, shutting down");
                    break;
                }
            };

            let command = input.trim();
            let flow = if command.is_empty() {
                Flow::Continue
            } else if command.eq_ignore_ascii_case("exit") {
                break;
            } else if command.eq_ignore_ascii_case("admin") {
                self.admin_entry(console).await?
            } else {
                self.take_booking(console, command).await?
            };

            if flow == Flow::InputClosed {
                tracing::info!("input closed, shutting down");
                break;
            }
        }

        self.shutdown(console).await
    }

    async fn take_booking<R, W>(
        &mut self,
        console: &mut Console<R, W>,
        customer: &str,
    ) -> Result<Flow, HotelError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        self.state.register_customer(customer);

        let room_type = ask_or_close!(console, "Enter room type: ");
        let quantity = ask_or_close!(console, "Number of rooms: ");

        let result = parse_quantity(&quantity).and_then(|quantity| self.state.book(&room_type, quantity));
        match result {
            Ok(record) => console.say(&format!("Booking successful: {}", record)).await?,
            Err(e) => console.say(&format!("Error: {}", e)).await?,
        }
        Ok(Flow::Continue)
    }

    async fn admin_entry<R, W>(&mut self, console: &mut Console<R, W>) -> Result<Flow, HotelError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let username = ask_or_close!(console, "\nAdmin username: ");
        let password = ask_or_close!(console, "Admin password: ");

        let mut session = AdminSession::new();
        match session
            .login(self.verifier.as_ref(), username.trim(), &password)
            .await
        {
            Ok(()) => self.admin_panel(console, &mut session).await,
            Err(e) => {
                console.say(&e.to_string()).await?;
                Ok(Flow::Continue)
            }
        }
    }

    async fn admin_panel<R, W>(
        &mut self,
        console: &mut Console<R, W>,
        session: &mut AdminSession,
    ) -> Result<Flow, HotelError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        while session.is_active() {
            console.say(ADMIN_MENU).await?;
            let choice = ask_or_close!(console, "Enter choice: ");

            let command = match session.select(&choice) {
                Ok(command) => command,
                Err(_) => {
                    console.say("Invalid option").await?;
                    continue;
                }
            };

            if self.run_admin_command(console, command).await? == Flow::InputClosed {
                return Ok(Flow::InputClosed);
            }
        }
        Ok(Flow::Continue)
    }

    async fn run_admin_command<R, W>(
        &mut self,
        console: &mut Console<R, W>,
        command: AdminCommand,
    ) -> Result<Flow, HotelError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let catalog = &mut self.state.catalog;

        let result = match command {
            AdminCommand::ViewRooms => Ok(admin::view_rooms(catalog)),
            AdminCommand::ViewHistory => Ok(admin::view_history(&self.state.ledger)),
            AdminCommand::AddRoomType => {
                let name = ask_or_close!(console, "Enter new room name: ");
                let price = ask_or_close!(console, "Enter price: ");
                let available = ask_or_close!(console, "Enter availability: ");
                admin::add_room_type(catalog, &name, &price, &available)
                    .map(|name| format!("Room '{}' added!", name))
            }
            AdminCommand::DeleteRoomType => {
                let name = ask_or_close!(console, "Enter room name to delete: ");
                admin::delete_room_type(catalog, &name)
                    .map(|()| format!("Room '{}' deleted!", name.trim().to_lowercase()))
            }
            AdminCommand::UpdateAvailability => {
                let name = ask_or_close!(console, "Enter room type: ");
                if catalog.contains(&name) {
                    let quantity = ask_or_close!(console, "Enter new quantity: ");
                    admin::update_availability(catalog, &name, &quantity)
                        .map(|()| "Updated successfully.".to_string())
                } else {
                    Err(HotelError::RoomNotFound(name.trim().to_lowercase()))
                }
            }
            AdminCommand::ExportState => {
                let path = &self.config.export_path;
                export_state(&self.state, path, self.config.export_format)
                    .await
                    .map(|()| format!("Data saved to {}", path.display()))
            }
            AdminCommand::Exit => Ok("Leaving admin panel.".to_string()),
        };

        match result {
            Ok(message) => console.say(&message).await?,
            Err(e) if e.is_recoverable() || matches!(command, AdminCommand::ExportState) => {
                console.say(&format!("Error: {}", e)).await?
            }
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }

    async fn shutdown<R, W>(&mut self, console: &mut Console<R, W>) -> Result<(), HotelError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        if self.config.export_on_exit {
            let path = &self.config.export_path;
            match export_state(&self.state, path, self.config.export_format).await {
                Ok(()) => console.say(&format!("Data saved to {}", path.display())).await?,
                Err(e) => {
                    tracing::error!(error = %e, "export on exit failed");
                    console.say(&format!("Error: {}", e)).await?
                }
            }
        }

        let customers: Vec<&str> = self.state.customers().collect();
        let customers = if customers.is_empty() {
            "(none)".to_string()
        } else {
            customers.join(", ")
        };

        console.say("\nSystem closed.").await?;
        console.say(&format!("Customers: {}", customers)).await?;
        tracing::info!(bookings = self.state.ledger.len(), "front desk closed");
        Ok(())
    }
}
