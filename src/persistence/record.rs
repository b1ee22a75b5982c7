//! Fixed-size leaderboard record codec
//!
//! The save file is a flat array of C structs `{ char name[N + 1]; int32 score; }`
//! with no header. The name field is NUL-padded and aligned to 4 bytes, the
//! score is little-endian.

use std::io;

use crate::highscores::PlayerScore;

const SCORE_BYTES: usize = 4;
const FIELD_ALIGN: usize = 4;

/// Byte layout of one record for a given name length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordLayout {
    name_len: usize,
}

impl RecordLayout {
    pub fn new(name_len: usize) -> Self {
        Self { name_len }
    }

    pub fn name_len(&self) -> usize {
        self.name_len
    }

    /// Bytes reserved for the name, terminator and struct padding
    pub fn name_field_size(&self) -> usize {
        (self.name_len + 1).next_multiple_of(FIELD_ALIGN)
    }

    pub fn record_size(&self) -> usize {
        self.name_field_size() + SCORE_BYTES
    }

    /// Exact file size for a table of `capacity` rows
    pub fn table_size(&self, capacity: usize) -> usize {
        self.record_size() * capacity
    }

    fn encode_record(&self, entry: &PlayerScore, out: &mut Vec<u8>) {
        let name_bytes = entry.name.as_bytes();
        // Keep at least one trailing NUL
        let copy = name_bytes.len().min(self.name_len);
        let start = out.len();
        out.resize(start + self.name_field_size(), 0);
        out[start..start + copy].copy_from_slice(&name_bytes[..copy]);

        let score = i32::try_from(entry.score).unwrap_or(i32::MAX);
        out.extend_from_slice(&score.to_le_bytes());
    }

    fn decode_record(&self, record: &[u8]) -> PlayerScore {
        let field = self.name_field_size();
        let name_bytes = &record[..self.name_len.min(field)];
        let end = name_bytes.iter().position(|&b| b == 0).unwrap_or(name_bytes.len());
        let name = String::from_utf8_lossy(&name_bytes[..end]).into_owned();

        let mut score_bytes = [0u8; SCORE_BYTES];
        score_bytes.copy_from_slice(&record[field..field + SCORE_BYTES]);
        let raw = i32::from_le_bytes(score_bytes);
        if raw < 0 {
            log::warn!("Stored score {raw} for {name:?} is negative, reading as 0");
        }

        PlayerScore {
            name,
            score: raw.max(0) as u32,
        }
    }

    /// Serialize a table; every entry becomes exactly one record
    pub fn encode_table(&self, entries: &[PlayerScore]) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.table_size(entries.len()));
        for entry in entries {
            self.encode_record(entry, &mut out);
        }
        out
    }

    /// Parse a table of exactly `capacity` records
    pub fn decode_table(&self, bytes: &[u8], capacity: usize) -> io::Result<Vec<PlayerScore>> {
        let expected = self.table_size(capacity);
        if bytes.len() != expected {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "leaderboard data is {} bytes, expected {expected} ({capacity} x {})",
                    bytes.len(),
                    self.record_size()
                ),
            ));
        }
        Ok(bytes
            .chunks_exact(self.record_size())
            .map(|record| self.decode_record(record))
            .collect())
    }
}
