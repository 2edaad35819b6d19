//! Bang table with a lowercase token index

use std::collections::HashMap;
use std::path::Path;

use crate::error::BangError;
use crate::record::BangRecord;
use crate::Result;

const EMBEDDED_BANGS: &str = include_str!("../data/bangs.json");

/// Ordered, read-only collection of bang records.
///
/// Lookups go through an index from lowercased token to position, built
/// once at load time. When two records share a token the earlier one wins.
#[derive(Debug, Clone)]
pub struct BangTable {
    records: Vec<BangRecord>,
    index: HashMap<String, usize>,
}

impl BangTable {
    pub fn from_records(records: Vec<BangRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(BangError::Empty);
        }

        let mut index = HashMap::with_capacity(records.len());
        let mut duplicates = 0usize;
        for (position, record) in records.iter().enumerate() {
            let key = record.token.to_lowercase();
            if index.contains_key(&key) {
                duplicates += 1;
                continue;
            }
            index.insert(key, position);
        }

        if duplicates > 0 {
            tracing::warn!(duplicates, "Bang table contains duplicate tokens; first entry wins");
        }

        Ok(Self { records, index })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<BangRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| BangError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let table = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), bangs = table.len(), "Loaded bang table");
        Ok(table)
    }

    /// The table compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json_str(EMBEDDED_BANGS)
    }

    /// Case-insensitive exact token lookup.
    pub fn get(&self, token: &str) -> Option<&BangRecord> {
        self.index
            .get(&token.to_lowercase())
            .map(|&position| &self.records[position])
    }

    pub fn contains(&self, token: &str) -> bool {
        self.get(token).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BangRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find engines for the default-engine picker.
    ///
    /// Matches token, short name or domain by substring (case-insensitive);
    /// a leading `!` in the term also matches against tokens. Results are
    /// ordered by token length, shortest first, and truncated to `limit`.
    pub fn search(&self, term: &str, limit: usize) -> Vec<&BangRecord> {
        let term = term.to_lowercase();
        let bare = term.strip_prefix('!');

        let mut matches: Vec<&BangRecord> = self
            .records
            .iter()
            .filter(|record| {
                let token = record.token.to_lowercase();
                token.contains(&term)
                    || bare.is_some_and(|rest| token.contains(rest))
                    || record.short_name.to_lowercase().contains(&term)
                    || record.domain.to_lowercase().contains(&term)
            })
            .collect();

        // Stable sort keeps table order among equal lengths
        matches.sort_by_key(|record| record.token.chars().count());
        matches.truncate(limit);
        matches
    }
}
