//! Leaderboard save/load
//!
//! Features:
//! - Flat fixed-record binary format compatible with existing `leaderboard.dat` files
//! - Pluggable storage (disk file or shared in-memory buffer)
//! - Atomic replace on write (tmp file, then rename)

pub mod record;
pub mod store;

pub use record::RecordLayout;
pub use store::{FileStore, MemoryStore, ScoreStore};
