//! Slot allocation engine
//!
//! A [`ParkingLot`] owns a fixed row of [`Slot`]s ordered by distance from the
//! entrance. Arriving cars take the lowest-index free slot. Tickets resolve
//! back to their slot through an explicit ticket -> index map, so a ticket from
//! another lot (or one built by hand) never matches.

use super::{Notifiable, Owner, Slot};
use crate::domain::{Car, Color, LotId, OwnerId, Ticket};
use crate::error::{ParkingError, Result};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Largest lot that can be built. Slots are allocated up front.
pub const MAX_CAPACITY: i64 = 1_000_000;

pub struct ParkingLot {
    id: LotId,
    owner: OwnerId,
    slots: Vec<Slot>,
    tickets: HashMap<Ticket, usize>,
    /// Last fullness reported to observers
    full: bool,
    notifiables: Vec<Rc<dyn Notifiable>>,
}

impl ParkingLot {
    /// Create a lot with `capacity` free slots for `owner`
    ///
    /// # Errors
    /// * `InvalidCapacity` - capacity is zero or negative
    /// * `CapacityTooLarge` - capacity above [`MAX_CAPACITY`] or more than can be allocated
    /// * `OwnerRequired` - no owner supplied
    pub fn new(capacity: i64, owner: Option<&Owner>) -> Result<Self> {
        if capacity <= 0 {
            return Err(ParkingError::InvalidCapacity(capacity));
        }
        if capacity > MAX_CAPACITY {
            return Err(ParkingError::CapacityTooLarge(capacity));
        }
        let owner = owner.ok_or(ParkingError::OwnerRequired)?;
        let too_large = ParkingError::CapacityTooLarge(capacity);
        let size = usize::try_from(capacity).map_err(|_| too_large.clone())?;

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(size)
            .map_err(|_| too_large.clone())?;
        slots.extend((0..size).map(Slot::new));
        let mut tickets = HashMap::new();
        tickets.try_reserve(size).map_err(|_| too_large)?;

        let lot = Self {
            id: LotId::next(),
            owner: owner.id(),
            slots,
            tickets,
            full: false,
            notifiables: Vec::new(),
        };
        debug!(lot = %lot.id, owner = %lot.owner, capacity, "created parking lot");
        Ok(lot)
    }

    pub fn id(&self) -> LotId {
        self.id
    }

    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slots in priority order, nearest first
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    fn find_nearest_slot(&self) -> Option<usize> {
        self.slots.iter().position(Slot::is_free)
    }

    /// Park `car` in the nearest free slot and return its ticket
    ///
    /// Observers are told when this park fills the last slot.
    pub fn park(&mut self, car: Car) -> Result<Ticket> {
        self.park_with_slot(car).map(|(ticket, _)| ticket)
    }

    /// Same as [`park`](Self::park), also reporting the slot index assigned
    pub fn park_with_slot(&mut self, car: Car) -> Result<(Ticket, usize)> {
        if self.is_full() {
            return Err(ParkingError::LotFull);
        }
        if self.is_car_already_parked(&car) {
            return Err(ParkingError::AlreadyParked);
        }
        let index = self.find_nearest_slot().ok_or(ParkingError::LotFull)?;

        debug!(
            lot = %self.id,
            slot = index,
            registration = car.registration_number().unwrap_or("-"),
            color = %car.color(),
            "parking car"
        );
        let ticket = self.slots[index].park(car)?;
        self.tickets.insert(ticket, index);

        if !self.full && self.is_full() {
            self.full = true;
            info!(lot = %self.id, "parking lot is now full");
            self.notify_full();
        }
        Ok((ticket, index))
    }

    /// Release the car `ticket` was issued for
    ///
    /// Observers are told when this frees a slot in a full lot.
    pub fn unpark(&mut self, ticket: &Ticket) -> Result<Car> {
        let index = *self.tickets.get(ticket).ok_or(ParkingError::CarNotFound)?;
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(ParkingError::CarNotFound)?;
        let car = slot.unpark(ticket).map_err(|_| ParkingError::CarNotFound)?;
        self.tickets.remove(ticket);
        debug!(lot = %self.id, slot = index, "released car");

        if self.full && !self.is_full() {
            self.full = false;
            info!(lot = %self.id, "parking lot has space available");
            self.notify_available();
        }
        Ok(car)
    }

    pub fn is_car_already_parked(&self, car: &Car) -> bool {
        self.slots.iter().any(|slot| slot.matches_occupant(car))
    }

    pub fn is_full(&self) -> bool {
        !self.slots.iter().any(Slot::is_free)
    }

    pub fn count_cars_by_color(&self, color: Color) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.has_car_of_color(color))
            .count()
    }

    /// Whether a car with this registration number is parked here
    ///
    /// Fails with `RegistrationNumberRequired` for a missing or blank number,
    /// whatever the lot holds.
    pub fn is_car_with_registration_number_parked(
        &self,
        registration_number: Option<&str>,
    ) -> Result<bool> {
        let registration_number = registration_number
            .filter(|r| !r.trim().is_empty())
            .ok_or(ParkingError::RegistrationNumberRequired)?;
        Ok(self
            .slots
            .iter()
            .any(|slot| slot.has_car_with_registration_number(registration_number)))
    }

    pub fn count_parked_cars(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_free()).count()
    }

    pub fn free_slots(&self) -> usize {
        self.capacity() - self.count_parked_cars()
    }

    /// Index of the slot a live ticket resolves to
    pub fn slot_of(&self, ticket: &Ticket) -> Option<usize> {
        self.tickets.get(ticket).copied()
    }

    /// Add an observer; registering the same handle twice has no effect
    pub fn register_notifiable(&mut self, notifiable: Rc<dyn Notifiable>) {
        if !self
            .notifiables
            .iter()
            .any(|existing| Rc::ptr_eq(existing, &notifiable))
        {
            self.notifiables.push(notifiable);
        }
    }

    fn notify_full(&self) {
        self.notify_each("full", |n| n.notify_full(self.id));
    }

    fn notify_available(&self) {
        self.notify_each("available", |n| n.notify_available(self.id));
    }

    /// Call every observer in turn. A panicking observer is logged and skipped
    /// so the park or unpark that triggered it still returns normally.
    fn notify_each(&self, event: &str, notify: impl Fn(&dyn Notifiable)) {
        for notifiable in &self.notifiables {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| notify(notifiable.as_ref())));
            if outcome.is_err() {
                warn!(lot = %self.id, event, "observer panicked during notification");
            }
        }
    }

    /// Point-in-time summary of occupancy
    pub fn status(&self) -> LotStatus {
        let mut by_color = BTreeMap::new();
        for car in self.slots.iter().filter_map(Slot::occupant) {
            *by_color.entry(car.color()).or_insert(0) += 1;
        }
        let parked = self.count_parked_cars();
        LotStatus {
            id: self.id,
            capacity: self.capacity(),
            parked,
            free: self.capacity() - parked,
            full: self.is_full(),
            by_color,
        }
    }
}

impl fmt::Debug for ParkingLot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParkingLot")
            .field("id", &self.id)
            .field("owner", &self.owner)
            .field("slots", &self.slots)
            .field("full", &self.full)
            .field("notifiables", &self.notifiables.len())
            .finish()
    }
}

/// Occupancy snapshot of one lot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LotStatus {
    pub id: LotId,
    pub capacity: usize,
    pub parked: usize,
    pub free: usize,
    pub full: bool,
    /// Parked cars per color; colors with no cars are left out
    pub by_color: BTreeMap<Color, usize>,
}

impl fmt::Display for LotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}/{} parked, {} free{}",
            self.id,
            self.parked,
            self.capacity,
            self.free,
            if self.full { " (full)" } else { "" }
        )?;
        if !self.by_color.is_empty() {
            let colors: Vec<String> = self
                .by_color
                .iter()
                .map(|(color, count)| format!("{}={}", color, count))
                .collect();
            write!(f, " [{}]", colors.join(", "))?;
        }
        Ok(())
    }
}
