//! High score leaderboard
//!
//! Fixed-size table ranked by score, persisted after every change.

use std::io;

use serde::{Deserialize, Serialize};

use crate::consts::PLACEHOLDER_NAME;
use crate::persistence::{FileStore, RecordLayout, ScoreStore};

/// A single leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    /// Player initials
    pub name: String,
    pub score: u32,
}

/// How a submission is merged into the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UpdatePolicy {
    /// Every submission is a new row, inserted above the first strictly lower score
    #[default]
    DisplaceByRank,
    /// A name already on the board has its score raised in place, then the table is re-sorted
    UpdateExistingName,
}

impl UpdatePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdatePolicy::DisplaceByRank => "displace",
            UpdatePolicy::UpdateExistingName => "update-existing",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "displace" | "rank" => Some(UpdatePolicy::DisplaceByRank),
            "update-existing" | "update" => Some(UpdatePolicy::UpdateExistingName),
            _ => None,
        }
    }
}

/// Normalize player input into stored initials: ASCII letters only, uppercased,
/// at most `max_len` long. Empty input becomes the placeholder name.
pub fn normalize_name(raw: &str, max_len: usize) -> String {
    let name: String = raw
        .trim()
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .take(max_len)
        .collect();
    if name.is_empty() {
        PLACEHOLDER_NAME.chars().take(max_len).collect()
    } else {
        name
    }
}

/// High score leaderboard
#[derive(Debug)]
pub struct Leaderboard<S: ScoreStore = FileStore> {
    /// Always exactly `capacity` rows, highest score first
    entries: Vec<PlayerScore>,
    capacity: usize,
    layout: RecordLayout,
    policy: UpdatePolicy,
    store: S,
}

impl<S: ScoreStore> Leaderboard<S> {
    /// Create a leaderboard holding placeholder rows; storage is not touched
    /// until `load_or_initialize`. Panics if `capacity` is zero.
    pub fn new(store: S, capacity: usize, name_len: usize, policy: UpdatePolicy) -> Self {
        assert!(capacity > 0, "leaderboard capacity must be non-zero");
        Self {
            entries: Self::default_entries(capacity, name_len),
            capacity,
            layout: RecordLayout::new(name_len),
            policy,
            store,
        }
    }

    /// Create and immediately `load_or_initialize`
    pub fn open(store: S, capacity: usize, name_len: usize, policy: UpdatePolicy) -> Self {
        let mut board = Self::new(store, capacity, name_len, policy);
        board.load_or_initialize();
        board
    }

    fn default_entries(capacity: usize, name_len: usize) -> Vec<PlayerScore> {
        let placeholder = normalize_name("", name_len);
        vec![
            PlayerScore {
                name: placeholder,
                score: 0,
            };
            capacity
        ]
    }

    /// Load the stored table, or reset to placeholders and save them when
    /// storage is missing or unreadable. Never fails.
    pub fn load_or_initialize(&mut self) {
        let loaded = self
            .store
            .read()
            .and_then(|bytes| self.layout.decode_table(&bytes, self.capacity));

        match loaded {
            Ok(entries) => {
                log::info!("Loaded leaderboard ({} entries)", entries.len());
                self.entries = entries;
            }
            Err(e) => {
                if e.kind() == io::ErrorKind::NotFound {
                    log::info!("No leaderboard found, starting fresh");
                } else {
                    log::warn!("Leaderboard unreadable ({e}), starting fresh");
                }
                self.entries = Self::default_entries(self.capacity, self.layout.name_len());
                self.persist();
            }
        }
    }

    /// Current table, highest score first
    pub fn get_entries(&self) -> &[PlayerScore] {
        &self.entries
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn policy(&self) -> UpdatePolicy {
        self.policy
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Top score on the board
    pub fn top_score(&self) -> u32 {
        self.entries.first().map(|e| e.score).unwrap_or(0)
    }

    /// Check if a score would earn a new row (ties with last place do not)
    pub fn qualifies(&self, score: u32) -> bool {
        self.potential_rank(score).is_some()
    }

    /// Get the rank a new row with this score would take (1-indexed)
    pub fn potential_rank(&self, score: u32) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| score > e.score)
            .map(|i| i + 1)
    }

    /// Merge a finished round into the table.
    /// Returns the rank achieved (1-indexed) or None if the table is unchanged.
    pub fn submit_score(&mut self, name: &str, score: u32) -> Option<usize> {
        let name = normalize_name(name, self.layout.name_len());

        let rank = match self.policy {
            UpdatePolicy::DisplaceByRank => self.insert_by_rank(name, score),
            UpdatePolicy::UpdateExistingName => {
                match self.entries.iter().position(|e| e.name == name) {
                    Some(existing) => self.raise_existing(existing, score),
                    None => self.insert_by_rank(name, score),
                }
            }
        };

        if let Some(rank) = rank {
            log::info!("Score {score} entered the leaderboard at rank {rank}");
            self.persist();
        }
        rank
    }

    fn insert_by_rank(&mut self, name: String, score: u32) -> Option<usize> {
        let pos = self.entries.iter().position(|e| score > e.score)?;
        self.entries.insert(pos, PlayerScore { name, score });
        self.entries.truncate(self.capacity);
        Some(pos + 1)
    }

    fn raise_existing(&mut self, existing: usize, score: u32) -> Option<usize> {
        if score <= self.entries[existing].score {
            return None;
        }
        self.entries[existing].score = score;

        // Where a stable descending sort will put it
        let above = self
            .entries
            .iter()
            .enumerate()
            .filter(|&(i, e)| e.score > score || (e.score == score && i < existing))
            .count();
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        Some(above + 1)
    }

    /// Write the whole table to storage; failures are logged and the in-memory table kept
    fn persist(&mut self) {
        let bytes = self.layout.encode_table(&self.entries);
        match self.store.write(&bytes) {
            Ok(()) => log::info!("Leaderboard saved ({} entries)", self.entries.len()),
            Err(e) => log::warn!("Failed to save leaderboard: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{LEADERBOARD_SIZE, MAX_NAME_LENGTH};
    use crate::persistence::MemoryStore;
    use proptest::prelude::*;

    fn board(store: &MemoryStore, policy: UpdatePolicy) -> Leaderboard<MemoryStore> {
        Leaderboard::open(store.clone(), LEADERBOARD_SIZE, MAX_NAME_LENGTH, policy)
    }

    fn scores(board: &Leaderboard<MemoryStore>) -> Vec<u32> {
        board.get_entries().iter().map(|e| e.score).collect()
    }

    fn names(board: &Leaderboard<MemoryStore>) -> Vec<&str> {
        board.get_entries().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_missing_storage_initializes_and_saves_defaults() {
        let store = MemoryStore::new();
        let lb = board(&store, UpdatePolicy::DisplaceByRank);

        assert_eq!(lb.get_entries().len(), 6);
        assert!(lb.get_entries().iter().all(|e| e.name == "AAA" && e.score == 0));
        assert_eq!(store.write_count(), 1);
        assert_eq!(store.bytes().map(|b| b.len()), Some(48));
    }

    #[test]
    fn test_corrupt_storage_falls_back_to_defaults() {
        let store = MemoryStore::with_bytes(vec![1, 2, 3]);
        let lb = board(&store, UpdatePolicy::DisplaceByRank);
        assert_eq!(scores(&lb), vec![0; 6]);
        assert_eq!(store.bytes().map(|b| b.len()), Some(48));
    }

    #[test]
    fn test_loaded_table_is_trusted_as_is() {
        let layout = RecordLayout::new(3);
        let unsorted: Vec<PlayerScore> = [5, 90, 0, 0, 0, 0]
            .iter()
            .map(|&score| PlayerScore {
                name: "XYZ".into(),
                score,
            })
            .collect();
        let store = MemoryStore::with_bytes(layout.encode_table(&unsorted));
        let lb = board(&store, UpdatePolicy::DisplaceByRank);
        assert_eq!(scores(&lb), vec![5, 90, 0, 0, 0, 0]);
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_insert_shifts_lower_entries_down() {
        let store = MemoryStore::new();
        let mut lb = board(&store, UpdatePolicy::DisplaceByRank);
        for (name, score) in [("AMY", 500), ("BOB", 300), ("CAT", 100)] {
            lb.submit_score(name, score);
        }
        assert_eq!(lb.submit_score("DAN", 400), Some(2));
        assert_eq!(names(&lb), vec!["AMY", "DAN", "BOB", "CAT", "AAA", "AAA"]);
        assert_eq!(scores(&lb), vec![500, 400, 300, 100, 0, 0]);
    }

    #[test]
    fn test_full_table_drops_last_place() {
        let store = MemoryStore::new();
        let mut lb = board(&store, UpdatePolicy::DisplaceByRank);
        for (i, score) in [60, 50, 40, 30, 20, 10].iter().enumerate() {
            lb.submit_score(&format!("P{i}"), *score);
        }
        assert_eq!(lb.submit_score("NEW", 15), Some(6));
        assert_eq!(scores(&lb), vec![60, 50, 40, 30, 20, 15]);
        assert_eq!(lb.get_entries().len(), 6);
    }

    #[test]
    fn test_tie_with_last_place_changes_nothing() {
        let store = MemoryStore::new();
        let mut lb = board(&store, UpdatePolicy::DisplaceByRank);
        for score in [60, 50, 40, 30, 20, 10] {
            lb.submit_score("ZED", score);
        }
        let writes = store.write_count();
        let before = lb.get_entries().to_vec();

        assert_eq!(lb.submit_score("TIE", 10), None);
        assert_eq!(lb.get_entries(), &before[..]);
        assert_eq!(store.write_count(), writes);
    }

    #[test]
    fn test_tie_inserts_below_existing_holder() {
        let store = MemoryStore::new();
        let mut lb = board(&store, UpdatePolicy::DisplaceByRank);
        lb.submit_score("OLD", 200);
        assert_eq!(lb.submit_score("NEW", 200), Some(2));
        assert_eq!(names(&lb)[..2], ["OLD", "NEW"]);
    }

    #[test]
    fn test_zero_score_never_qualifies_on_fresh_board() {
        let store = MemoryStore::new();
        let mut lb = board(&store, UpdatePolicy::DisplaceByRank);
        assert!(!lb.qualifies(0));
        assert_eq!(lb.submit_score("ABC", 0), None);
    }

    #[test]
    fn test_potential_rank_matches_submit() {
        let store = MemoryStore::new();
        let mut lb = board(&store, UpdatePolicy::DisplaceByRank);
        lb.submit_score("AAA", 100);
        lb.submit_score("BBB", 50);
        let predicted = lb.potential_rank(75);
        assert_eq!(predicted, Some(2));
        assert_eq!(lb.submit_score("CCC", 75), predicted);
        assert_eq!(lb.top_score(), 100);
    }

    #[test]
    fn test_reload_reproduces_table() {
        let store = MemoryStore::new();
        let mut lb = board(&store, UpdatePolicy::DisplaceByRank);
        lb.submit_score("ABC", 640);
        lb.submit_score("XYZ", 125);

        let reloaded = board(&store, UpdatePolicy::DisplaceByRank);
        assert_eq!(reloaded.get_entries(), lb.get_entries());
    }

    #[test]
    fn test_failed_save_keeps_memory_table() {
        let store = MemoryStore::new();
        let mut lb = board(&store, UpdatePolicy::DisplaceByRank);
        store.set_fail_writes(true);

        assert_eq!(lb.submit_score("ABC", 10), Some(1));
        assert_eq!(lb.get_entries()[0].name, "ABC");

        // Lost across a restart
        store.set_fail_writes(false);
        let reloaded = board(&store, UpdatePolicy::DisplaceByRank);
        assert_eq!(reloaded.top_score(), 0);
    }

    #[test]
    fn test_names_are_normalized() {
        assert_eq!(normalize_name(" abc ", 3), "ABC");
        assert_eq!(normalize_name("jo-e99x", 3), "JOE");
        assert_eq!(normalize_name("", 3), "AAA");
        assert_eq!(normalize_name("123", 2), "AA");

        let store = MemoryStore::new();
        let mut lb = board(&store, UpdatePolicy::DisplaceByRank);
        lb.submit_score("quinn", 5);
        assert_eq!(lb.get_entries()[0].name, "QUI");
    }

    #[test]
    fn test_displace_policy_keeps_duplicate_names() {
        let store = MemoryStore::new();
        let mut lb = board(&store, UpdatePolicy::DisplaceByRank);
        lb.submit_score("ABC", 100);
        lb.submit_score("ABC", 300);
        assert_eq!(names(&lb)[..2], ["ABC", "ABC"]);
        assert_eq!(scores(&lb)[..2], [300, 100]);
    }

    #[test]
    fn test_update_policy_raises_existing_and_resorts() {
        let store = MemoryStore::new();
        let mut lb = board(&store, UpdatePolicy::UpdateExistingName);
        lb.submit_score("AMY", 500);
        lb.submit_score("BOB", 300);
        lb.submit_score("CAT", 100);

        assert_eq!(lb.submit_score("CAT", 400), Some(2));
        assert_eq!(names(&lb)[..3], ["AMY", "CAT", "BOB"]);
        assert_eq!(scores(&lb)[..3], [500, 400, 300]);
        assert_eq!(lb.get_entries().iter().filter(|e| e.name == "CAT").count(), 1);
    }

    #[test]
    fn test_update_policy_ignores_lower_repeat() {
        let store = MemoryStore::new();
        let mut lb = board(&store, UpdatePolicy::UpdateExistingName);
        lb.submit_score("BOB", 300);
        let writes = store.write_count();

        assert_eq!(lb.submit_score("BOB", 300), None);
        assert_eq!(lb.submit_score("BOB", 200), None);
        assert_eq!(scores(&lb)[0], 300);
        assert_eq!(store.write_count(), writes);
    }

    #[test]
    fn test_update_policy_new_name_inserts_by_rank() {
        let store = MemoryStore::new();
        let mut lb = board(&store, UpdatePolicy::UpdateExistingName);
        lb.submit_score("BOB", 300);
        assert_eq!(lb.submit_score("EVE", 350), Some(1));
        assert_eq!(names(&lb)[..2], ["EVE", "BOB"]);
    }

    #[test]
    fn test_update_policy_stable_for_ties() {
        let store = MemoryStore::new();
        let mut lb = board(&store, UpdatePolicy::UpdateExistingName);
        lb.submit_score("AMY", 300);
        lb.submit_score("BOB", 200);
        // BOB rises to tie AMY; AMY stays ahead
        assert_eq!(lb.submit_score("BOB", 300), Some(2));
        assert_eq!(names(&lb)[..2], ["AMY", "BOB"]);
    }

    #[test]
    fn test_policy_names() {
        for p in [UpdatePolicy::DisplaceByRank, UpdatePolicy::UpdateExistingName] {
            assert_eq!(UpdatePolicy::from_str(p.as_str()), Some(p));
        }
        assert_eq!(UpdatePolicy::from_str("nope"), None);
    }

    #[test]
    #[should_panic(expected = "capacity")]
    fn test_zero_capacity_panics() {
        Leaderboard::new(MemoryStore::new(), 0, 3, UpdatePolicy::DisplaceByRank);
    }

    proptest! {
        #[test]
        fn prop_table_stays_sorted_and_full(
            subs in proptest::collection::vec(("[A-C]{3}", 0u32..1000), 0..40),
            update in any::<bool>(),
        ) {
            let policy = if update { UpdatePolicy::UpdateExistingName } else { UpdatePolicy::DisplaceByRank };
            let store = MemoryStore::new();
            let mut lb = board(&store, policy);
            for (name, score) in &subs {
                let predicted = lb.get_entries().iter().filter(|e| e.score >= *score).count();
                if let Some(rank) = lb.submit_score(name, *score) {
                    prop_assert!(rank <= LEADERBOARD_SIZE);
                    prop_assert_eq!(lb.get_entries()[rank - 1].score, *score);
                    if policy == UpdatePolicy::DisplaceByRank {
                        prop_assert_eq!(rank, predicted + 1);
                    }
                }
                prop_assert_eq!(lb.get_entries().len(), LEADERBOARD_SIZE);
                prop_assert!(lb.get_entries().windows(2).all(|w| w[0].score >= w[1].score));
            }
        }
    }
}
