//! Error types for parking lot operations.

/// Result type for parking lot operations
pub type Result<T> = std::result::Result<T, ParkingError>;

/// Every way a lot, slot, or owner operation can be refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParkingError {
    #[error("Parking lot size must be positive.")]
    InvalidCapacity(i64),

    #[error(
        "Parking lot size {0} is larger than the maximum of {max}.",
        max = crate::lot::MAX_CAPACITY
    )]
    CapacityTooLarge(i64),

    #[error("Parking lot cannot be created without an owner.")]
    OwnerRequired,

    #[error("Parking lot is full.")]
    LotFull,

    #[error("Car is already parked")]
    AlreadyParked,

    #[error("Slot {0} is already occupied.")]
    SlotOccupied(usize),

    #[error("Invalid ticket.")]
    InvalidTicket,

    #[error("Car not found in the slot.")]
    CarNotFound,

    #[error("Car needs registration number.")]
    RegistrationNumberRequired,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ParkingError::InvalidCapacity(0).to_string(),
            "Parking lot size must be positive."
        );
        assert_eq!(
            ParkingError::CapacityTooLarge(2_000_000).to_string(),
            "Parking lot size 2000000 is larger than the maximum of 1000000."
        );
        assert_eq!(ParkingError::LotFull.to_string(), "Parking lot is full.");
        assert_eq!(
            ParkingError::AlreadyParked.to_string(),
            "Car is already parked"
        );
        assert_eq!(
            ParkingError::CarNotFound.to_string(),
            "Car not found in the slot."
        );
        assert_eq!(
            ParkingError::RegistrationNumberRequired.to_string(),
            "Car needs registration number."
        );
    }
}
