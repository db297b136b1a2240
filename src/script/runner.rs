use super::{Command, ScriptLine};
use crate::domain::{Car, Ticket};
use crate::error::ParkingError;
use crate::lot::{EventRecorder, LotStatus, Notifiable, ParkingLot};
use std::collections::HashMap;
use std::rc::Rc;
use tracing::warn;

/// Result of a single successful command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Parked { ticket: u64, slot: usize },
    Unparked(Car),
    Answer(bool),
    Count(usize),
    Status(LotStatus),
}

/// Runs script commands against one lot
///
/// Ticket ids printed by `park` are the only handles a script has, so the
/// runner keeps the tickets it was issued and looks them up by id.
pub struct Runner {
    lot: ParkingLot,
    issued: HashMap<u64, Ticket>,
    events: Rc<EventRecorder>,
    json: bool,
}

impl Runner {
    pub fn new(mut lot: ParkingLot) -> Self {
        let events = Rc::new(EventRecorder::new());
        lot.register_notifiable(events.clone());
        Self {
            lot,
            issued: HashMap::new(),
            events,
            json: false,
        }
    }

    /// Render status snapshots as JSON instead of text
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn lot(&self) -> &ParkingLot {
        &self.lot
    }

    pub fn register_notifiable(&mut self, notifiable: Rc<dyn Notifiable>) {
        self.lot.register_notifiable(notifiable);
    }

    pub fn execute(&mut self, command: &Command) -> Result<Outcome, ParkingError> {
        match command {
            Command::Park {
                registration,
                color,
            } => {
                let car = match registration {
                    Some(r) => Car::new(r.as_str(), *color),
                    None => Car::unregistered(*color),
                };
                let (ticket, slot) = self.lot.park_with_slot(car)?;
                let id = ticket.id().value();
                self.issued.insert(id, ticket);
                Ok(Outcome::Parked { ticket: id, slot })
            }
            Command::Unpark { ticket } => {
                // unknown ids get a ticket no lot has issued
                let handle = self.issued.get(ticket).copied().unwrap_or_default();
                let car = self.lot.unpark(&handle)?;
                self.issued.remove(ticket);
                Ok(Outcome::Unparked(car))
            }
            Command::Parked { registration } => self
                .lot
                .is_car_with_registration_number_parked(registration.as_deref())
                .map(Outcome::Answer),
            Command::Count { color } => Ok(Outcome::Count(self.lot.count_cars_by_color(*color))),
            Command::Full => Ok(Outcome::Answer(self.lot.is_full())),
            Command::Occupancy => Ok(Outcome::Count(self.lot.count_parked_cars())),
            Command::Status => Ok(Outcome::Status(self.lot.status())),
        }
    }

    /// Run every line and collect printable output
    ///
    /// A refused command prints an `error:` line and the script carries on.
    /// Capacity transitions print as `notice:` lines after the command that
    /// caused them.
    pub fn run(&mut self, script: &[ScriptLine]) -> Vec<String> {
        let mut output = Vec::new();

        for line in script {
            match self.execute(&line.command) {
                Ok(outcome) => output.push(self.render(&outcome)),
                Err(e) => {
                    warn!(line = line.line, command = ?line.command, "{}", e);
                    output.push(format!("error: {}", e));
                }
            }
            output.extend(
                self.events
                    .drain()
                    .into_iter()
                    .map(|event| format!("notice: {}", event)),
            );
        }

        output
    }

    fn render(&self, outcome: &Outcome) -> String {
        match outcome {
            Outcome::Parked { ticket, slot } => format!("ticket {} slot {}", ticket, slot),
            Outcome::Unparked(car) => format!(
                "unparked {} ({})",
                car.registration_number().unwrap_or("-"),
                car.color()
            ),
            Outcome::Answer(answer) => answer.to_string(),
            Outcome::Count(count) => count.to_string(),
            Outcome::Status(status) if self.json => {
                serde_json::to_string(status).unwrap_or_else(|_| status.to_string())
            }
            Outcome::Status(status) => status.to_string(),
        }
    }
}
