use std::sync::atomic::{AtomicU64, Ordering};

static GLOBAL_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Opaque handle naming one layer for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(u64);

impl LayerId {
    pub fn get(self) -> u64 {
        self.0
    }
}

pub fn gen_id() -> LayerId {
    LayerId(GLOBAL_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
}
