pub mod notify;
pub mod owner;
pub mod parking_lot;
pub mod slot;

pub use notify::{CapacityEvent, EventRecorder, LoggingNotifier, Notifiable};
pub use owner::Owner;
pub use parking_lot::{LotStatus, MAX_CAPACITY, ParkingLot};
pub use slot::Slot;
