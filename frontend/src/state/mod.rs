pub mod in_flight;
pub mod session;

pub use in_flight::{InFlightGuard, RequestDedup};
pub use session::{use_session, KeyValueStore, MemoryStore, Session, SessionContext};
