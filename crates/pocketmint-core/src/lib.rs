//! pocketmint-core
//!
//! Storage abstraction, record repositories, aggregation helpers, and the
//! canned chat advisor. Depends on pocketmint-domain. No terminal I/O and
//! no UI concerns; frontends own validation and formatting.

pub mod advisor;
pub mod chat_history;
pub mod error;
pub mod repository;
pub mod store;
pub mod summary;

pub use advisor::respond;
pub use chat_history::{export_transcript, ChatHistoryService};
pub use error::CoreError;
pub use repository::{
    CollectionRecord, ExpenseRepository, InvestmentRepository, Placement, ReminderRepository,
    Repository,
};
pub use store::{KeyValueStore, MemoryStore};
pub use summary::SummaryService;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("pocketmint_core=info".parse().unwrap());
        fmt().with_env_filter(filter).init();
        tracing::info!("Pocketmint tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
