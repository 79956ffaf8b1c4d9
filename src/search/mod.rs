pub mod client;
pub mod gate;
pub mod watch;

pub use client::{HttpBackend, PendingSearch, SearchBackend, SearchClient, SearchKind};
pub use gate::RequestGate;
pub use watch::{InputWatcher, ScrollMetrics, ScrollWatcher};
