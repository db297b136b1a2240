//! parkade - Single-facility parking lot allocation engine

pub mod config;
pub mod domain;
pub mod error;
pub mod lot;
pub mod script;

pub use domain::{Car, Color, LotId, OwnerId, Ticket, TicketId};
pub use error::{ParkingError, Result};
pub use lot::{CapacityEvent, LotStatus, Notifiable, Owner, ParkingLot, Slot};
