use super::ids::TicketId;

/// Opaque token correlating a parked car to the slot it was assigned
///
/// Every call to [`Ticket::new`] mints an identity no other ticket shares, so a
/// ticket built outside a lot never resolves to a parked car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    id: TicketId,
}

impl Ticket {
    pub fn new() -> Self {
        Self {
            id: TicketId::next(),
        }
    }

    pub fn id(&self) -> TicketId {
        self.id
    }
}

impl Default for Ticket {
    fn default() -> Self {
        Self::new()
    }
}
