use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_LOT_ID: AtomicU64 = AtomicU64::new(1);
static NEXT_OWNER_ID: AtomicU64 = AtomicU64::new(1);
static NEXT_TICKET_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a parking lot, passed to observers on capacity transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LotId(u64);

/// Identity of the owner a lot was created for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct OwnerId(u64);

/// Raw identity carried by a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TicketId(u64);

impl LotId {
    pub(crate) fn next() -> Self {
        Self(NEXT_LOT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl OwnerId {
    pub(crate) fn next() -> Self {
        Self(NEXT_OWNER_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl TicketId {
    pub(crate) fn next() -> Self {
        Self(NEXT_TICKET_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lot-{}", self.0)
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "owner-{}", self.0)
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = LotId::next();
        let b = LotId::next();
        assert_ne!(a, b);
        assert!(b > a);

        let t1 = TicketId::next();
        let t2 = TicketId::next();
        assert_ne!(t1, t2);
    }

    #[test]
    fn test_id_display() {
        let lot = LotId(7);
        assert_eq!(lot.to_string(), "lot-7");
        assert_eq!(TicketId(42).to_string(), "42");
    }
}
