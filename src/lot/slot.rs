use crate::domain::{Car, Color, Ticket};
use crate::error::{ParkingError, Result};

/// A single parking space holding at most one car
#[derive(Debug, Clone)]
pub struct Slot {
    index: usize,
    occupancy: Option<Occupancy>,
}

#[derive(Debug, Clone)]
struct Occupancy {
    car: Car,
    ticket: Ticket,
}

impl Slot {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            occupancy: None,
        }
    }

    /// Position of this slot in the lot's priority order (0 = nearest)
    pub fn index(&self) -> usize {
        self.index
    }

    /// Assign a car to this slot and issue a fresh ticket for it
    pub fn park(&mut self, car: Car) -> Result<Ticket> {
        if self.occupancy.is_some() {
            return Err(ParkingError::SlotOccupied(self.index));
        }
        let ticket = Ticket::new();
        self.occupancy = Some(Occupancy { car, ticket });
        Ok(ticket)
    }

    /// Release the car held here if `ticket` is the one this slot issued
    pub fn unpark(&mut self, ticket: &Ticket) -> Result<Car> {
        match self.occupancy.take() {
            Some(occ) if occ.ticket == *ticket => Ok(occ.car),
            other => {
                self.occupancy = other;
                Err(ParkingError::InvalidTicket)
            }
        }
    }

    pub fn is_free(&self) -> bool {
        self.occupancy.is_none()
    }

    pub fn occupant(&self) -> Option<&Car> {
        self.occupancy.as_ref().map(|o| &o.car)
    }

    pub fn ticket(&self) -> Option<Ticket> {
        self.occupancy.as_ref().map(|o| o.ticket)
    }

    pub fn has_car_of_color(&self, color: Color) -> bool {
        self.occupant().is_some_and(|car| car.color() == color)
    }

    pub fn has_car_with_registration_number(&self, value: &str) -> bool {
        self.occupant()
            .is_some_and(|car| car.has_registration_number(value))
    }

    pub fn matches_occupant(&self, car: &Car) -> bool {
        self.occupant().is_some_and(|parked| parked.is_same_vehicle(car))
    }
}
