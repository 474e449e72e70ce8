use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use crate::domain::stats::GameStat;
use crate::error::Result;

/// Durable home of the frequency ledger.
///
/// The aggregation logic receives a store handle instead of reaching into
/// ambient state, so tests can swap in [`MemoryStore`].
pub trait StatsStore {
    /// Fetch the entry recorded under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<GameStat>>;

    /// Insert or replace the entry keyed by its `game_name`.
    fn put(&mut self, stat: GameStat) -> Result<()>;

    /// Every recorded entry, in insertion order.
    fn entries(&self) -> Result<Vec<GameStat>>;

    /// Drop all entries. Returns how many were removed.
    fn clear(&mut self) -> Result<usize>;
}

/// Ledger persisted as a JSON array of entries at a fixed path.
///
/// A missing file reads as an empty ledger; a malformed file is an error
/// rather than something to silently overwrite.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_all(&self) -> Result<Vec<GameStat>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let reader = BufReader::new(File::open(&self.path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    fn write_all(&self, stats: &[GameStat]) -> Result<()> {
        let writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(writer, stats)?;
        Ok(())
    }
}

impl StatsStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<GameStat>> {
        Ok(self.read_all()?.into_iter().find(|s| s.game_name == key))
    }

    fn put(&mut self, stat: GameStat) -> Result<()> {
        let mut stats = self.read_all()?;
        match stats.iter_mut().find(|s| s.game_name == stat.game_name) {
            Some(existing) => *existing = stat,
            None => stats.push(stat),
        }
        self.write_all(&stats)
    }

    fn entries(&self) -> Result<Vec<GameStat>> {
        self.read_all()
    }

    fn clear(&mut self) -> Result<usize> {
        let removed = self.read_all().map(|s| s.len()).unwrap_or(0);
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(removed)
    }
}

/// In-memory store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Vec<GameStat>,
}

impl StatsStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<GameStat>> {
        Ok(self.entries.iter().find(|s| s.game_name == key).cloned())
    }

    fn put(&mut self, stat: GameStat) -> Result<()> {
        match self.entries.iter_mut().find(|s| s.game_name == stat.game_name) {
            Some(existing) => *existing = stat,
            None => self.entries.push(stat),
        }
        Ok(())
    }

    fn entries(&self) -> Result<Vec<GameStat>> {
        Ok(self.entries.clone())
    }

    fn clear(&mut self) -> Result<usize> {
        let removed = self.entries.len();
        self.entries.clear();
        Ok(removed)
    }
}
