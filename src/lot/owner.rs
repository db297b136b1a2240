use super::ParkingLot;
use crate::domain::OwnerId;
use crate::error::Result;

/// The party lots are built for
#[derive(Debug)]
pub struct Owner {
    id: OwnerId,
}

impl Owner {
    pub fn new() -> Self {
        Self {
            id: OwnerId::next(),
        }
    }

    pub fn id(&self) -> OwnerId {
        self.id
    }

    /// Build a lot with `capacity` slots owned by this owner
    pub fn create_parking_lot(&self, capacity: i64) -> Result<ParkingLot> {
        ParkingLot::new(capacity, Some(self))
    }
}

impl Default for Owner {
    fn default() -> Self {
        Self::new()
    }
}
