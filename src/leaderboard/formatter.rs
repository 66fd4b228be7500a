use crate::domain::{ColorTag, DisplayEntry, PlayerRecord};

use super::palette::Palette;

/// Number of top ranks highlighted as `good`
const PODIUM_SIZE: usize = 3;

/// Turns an unordered set of player records into a ranked, decorated board
#[derive(Debug, Clone, Default)]
pub struct LeaderboardFormatter {
    palette: Palette,
}

impl LeaderboardFormatter {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Rank records by score (highest first) and attach decoration and color.
    ///
    /// Equal scores keep their input order. The output always has one entry
    /// per input record, in ascending rank order.
    pub fn rank_and_decorate(&self, records: &[PlayerRecord]) -> Vec<DisplayEntry> {
        Self::sort_by_score(records)
            .into_iter()
            .enumerate()
            .map(|(rank_index, record)| self.decorate(rank_index, record))
            .collect()
    }

    // --- Helper Methods ---

    fn sort_by_score(records: &[PlayerRecord]) -> Vec<&PlayerRecord> {
        let mut sorted: Vec<&PlayerRecord> = records.iter().collect();
        // sort_by is stable
        sorted.sort_by(|a, b| b.score.cmp(&a.score));
        sorted
    }

    fn decorate(&self, rank_index: usize, record: &PlayerRecord) -> DisplayEntry {
        DisplayEntry {
            rank_index,
            decoration: self.palette.decoration(rank_index).to_string(),
            color_tag: color_for(rank_index, record.score),
            name: record.name.clone(),
            score: record.score,
        }
    }
}

/// Top three with points are `good`, anyone without points is `danger`
pub fn color_for(rank_index: usize, score: i64) -> ColorTag {
    if rank_index < PODIUM_SIZE && score != 0 {
        ColorTag::Good
    } else if score == 0 {
        ColorTag::Danger
    } else {
        ColorTag::Default
    }
}
