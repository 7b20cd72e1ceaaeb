//! Freelancer dashboard core
//!
//! Sample data, entity filtering, earnings metrics, display formatting and the
//! persisted application state. Nothing here touches browser APIs; the web
//! crate plugs `localStorage` in through [`KeyValueStore`].

mod config;
pub mod client;
pub mod earnings;
pub mod error;
pub mod filter;
pub mod format;
pub mod metrics;
pub mod notice;
pub mod persist;
pub mod priority;
pub mod profile;
pub mod project;
pub mod report;
pub mod sample;
pub mod settings;
pub mod state;
pub mod storage;
pub mod validation;

pub use config::{CONFIG, Config, NavEntry, StorageKeys};
pub use error::{Error, Result};
pub use filter::{Searchable, StatusFacet, filter};
pub use metrics::{DerivedMetrics, aggregate};
pub use notice::{Notice, NoticeLevel};
pub use state::AppState;
pub use storage::{KeyValueStore, MemoryStore};
