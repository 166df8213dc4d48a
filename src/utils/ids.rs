use uuid::Uuid;
use crate::core::domain::IdStrategy;

// IdGenerator hands out book ids. It is owned by the store and only touched while
// the store lock is held.
#[derive(Debug)]
pub enum IdGenerator {
    Sequence { next: u64 },
    Uuid,
}

impl IdGenerator {
    pub fn new(strategy: IdStrategy) -> Self {
        match strategy {
            IdStrategy::Sequence => IdGenerator::Sequence { next: 1 },
            IdStrategy::Uuid => IdGenerator::Uuid,
        }
    }

    // an exhausted sequence falls back to uuids instead of wrapping around
    pub fn next_id(&mut self) -> String {
        if let IdGenerator::Sequence { next } = *self {
            *self = match next.checked_add(1) {
                Some(after) => IdGenerator::Sequence { next: after },
                None => IdGenerator::Uuid,
            };
            return next.to_string();
        }
        Uuid::new_v4().to_string()
    }

    // moves the sequence past an id that entered the store from outside the
    // generator so it is never handed out again
    pub fn observe(&mut self, id: &str) {
        if let IdGenerator::Sequence { next } = self {
            if let Ok(n) = id.parse::<u64>() {
                if n >= *next {
                    *next = n.saturating_add(1);
                }
            }
        }
    }
}
