use crate::error::{LottoError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// A single ball number on a ticket or in a draw.
pub type LottoNumber = u32;

/// Maximum number of scans kept in history.
pub const HISTORY_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDefinition {
    pub id: String,
    pub name: String,
    pub number_count: usize,
    pub range: LottoNumber,
}

impl GameDefinition {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        number_count: usize,
        range: LottoNumber,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            number_count,
            range,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.range == 0 {
            return Err(LottoError::config(format!(
                "Game {} must have a range of at least 1",
                self.id
            )));
        }

        if self.number_count as u64 > u64::from(self.range) {
            return Err(LottoError::config(format!(
                "Game {} draws {} numbers from a range of only {}",
                self.id, self.number_count, self.range
            )));
        }

        Ok(())
    }

    pub fn contains(&self, number: LottoNumber) -> bool {
        (1..=self.range).contains(&number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinningDraw {
    pub game_id: String,
    pub date: String,
    pub numbers: Vec<LottoNumber>,
    pub jackpot: String,
}

impl WinningDraw {
    /// Check the draw numbers fit the game they belong to.
    pub fn validate_for(&self, game: &GameDefinition) -> Result<()> {
        if self.game_id != game.id {
            return Err(LottoError::config(format!(
                "Draw for {} checked against game {}",
                self.game_id, game.id
            )));
        }

        if self.numbers.len() != game.number_count {
            return Err(LottoError::config(format!(
                "Draw for {} has {} numbers, expected {}",
                self.game_id,
                self.numbers.len(),
                game.number_count
            )));
        }

        if let Some(out) = self.numbers.iter().find(|n| !game.contains(**n)) {
            return Err(LottoError::config(format!(
                "Draw for {} contains {} outside 1..={}",
                self.game_id, out, game.range
            )));
        }

        let distinct: HashSet<_> = self.numbers.iter().collect();
        if distinct.len() != self.numbers.len() {
            return Err(LottoError::config(format!(
                "Draw for {} contains duplicate numbers",
                self.game_id
            )));
        }

        if !self.numbers.windows(2).all(|w| w[0] < w[1]) {
            return Err(LottoError::config(format!(
                "Draw for {} must list numbers in ascending order",
                self.game_id
            )));
        }

        Ok(())
    }
}

/// Outcome of checking one ticket, as stored in history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRecord {
    pub id: String,
    pub game_id: String,
    pub scanned_numbers: Vec<LottoNumber>,
    pub winning_numbers: Vec<LottoNumber>,
    pub match_count: usize,
    pub prize: String,
    pub is_winner: bool,
    pub date: DateTime<Utc>,
}

impl ScanRecord {
    pub fn new(
        game_id: impl Into<String>,
        scanned_numbers: Vec<LottoNumber>,
        winning_numbers: Vec<LottoNumber>,
        match_count: usize,
        prize: impl Into<String>,
        is_winner: bool,
    ) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            game_id: game_id.into(),
            scanned_numbers,
            winning_numbers,
            match_count,
            prize: prize.into(),
            is_winner,
            date: Utc::now(),
        }
    }

    /// Both number lists strictly ascending and the match count equal to
    /// their intersection size.
    pub fn is_consistent(&self) -> bool {
        let ascending = |numbers: &[LottoNumber]| numbers.windows(2).all(|w| w[0] < w[1]);
        if !ascending(&self.scanned_numbers) || !ascending(&self.winning_numbers) {
            return false;
        }

        let winning: HashSet<_> = self.winning_numbers.iter().collect();
        let matches = self
            .scanned_numbers
            .iter()
            .filter(|n| winning.contains(n))
            .count();
        matches == self.match_count
    }
}

/// Scan history, newest first, never longer than [`HISTORY_LIMIT`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    records: Vec<ScanRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from records already ordered newest first. Anything past the
    /// retention cap is dropped.
    pub fn from_records(mut records: Vec<ScanRecord>) -> Self {
        records.truncate(HISTORY_LIMIT);
        Self { records }
    }

    /// Insert as the newest entry, evicting the oldest past the cap.
    pub fn push_newest(&mut self, record: ScanRecord) {
        self.records.insert(0, record);
        self.records.truncate(HISTORY_LIMIT);
    }

    pub fn records(&self) -> &[ScanRecord] {
        &self.records
    }

    pub fn newest(&self) -> Option<&ScanRecord> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScanRecord> {
        self.records.iter()
    }

    pub fn summary(&self) -> HistorySummary {
        let winners = self.records.iter().filter(|r| r.is_winner).count();
        HistorySummary {
            total: self.records.len(),
            winners,
            non_winners: self.records.len() - winners,
        }
    }
}

/// Counts derived from a loaded history. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub total: usize,
    pub winners: usize,
    pub non_winners: usize,
}
