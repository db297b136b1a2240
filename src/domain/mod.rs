pub mod car;
pub mod ids;
pub mod ticket;

pub use car::{Car, Color, UnknownColor};
pub use ids::{LotId, OwnerId, TicketId};
pub use ticket::Ticket;
