//! Engine and bus builders for tests

use crate::fakes::NullTransport;
use cork_config::Config;
use cork_core::{BoardEngine, MemoryStore};
use cork_sync::SyncBus;

/// Engine with no peers and in-memory persistence
pub fn solo_engine() -> BoardEngine {
    BoardEngine::new(
        &Config::default(),
        Box::new(NullTransport),
        Box::new(MemoryStore::new()),
    )
}

/// Engine subscribed to `bus`, persisting in memory
pub fn engine_on(bus: &SyncBus) -> BoardEngine {
    BoardEngine::new(
        &Config::default(),
        Box::new(bus.subscribe()),
        Box::new(MemoryStore::new()),
    )
}

/// Two engines ("tabs") sharing one bus
pub fn engine_pair(bus: &SyncBus) -> (BoardEngine, BoardEngine) {
    (engine_on(bus), engine_on(bus))
}
