//! Lotto core - data model, game catalog and scan history storage
//!
//! Games and their winning draws are read-only reference data held in a
//! [`GameCatalog`]. Each checked ticket becomes a [`ScanRecord`], kept in a
//! bounded newest-first [`History`] behind the [`HistoryPort`] trait.

pub mod catalog;
pub mod error;
pub mod storage;
pub mod types;

pub use catalog::GameCatalog;
pub use error::{LottoError, Result};
pub use storage::{HistoryPort, HistoryStore, MemorySlots, SlotStore, SqliteSlots};
pub use types::{
    GameDefinition, History, HistorySummary, LottoNumber, ScanRecord, WinningDraw,
    HISTORY_LIMIT,
};
