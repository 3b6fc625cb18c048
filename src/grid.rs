//! Hour-by-track timetable projection.
//!
//! Lays a [`SelectionResult`] out as a grid: one row per hour in
//! `[first_hour, last_hour)`, one column per track. An accepted event fills
//! every hour slot in `[start, end)` on every one of its tracks. Events on
//! tracks outside the column set are skipped.
//!
//! The projection is pure: building it twice from the same selection gives
//! equal grids.

use serde::{Deserialize, Serialize};

use crate::models::SelectionResult;

/// Separator used when two names land in the same cell.
pub const CELL_SEPARATOR: &str = " / ";

/// A weekly timetable grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    /// First hour row (inclusive).
    pub first_hour: i64,
    /// Last hour row (exclusive).
    pub last_hour: i64,
    /// Column headers (tracks), in display order.
    pub tracks: Vec<String>,
    /// `cells[row][column]`: names occupying that hour on that track.
    pub cells: Vec<Vec<Vec<String>>>,
}

impl Timetable {
    /// Builds the grid for the accepted events of `selection`.
    pub fn build<I, S>(
        selection: &SelectionResult,
        first_hour: i64,
        last_hour: i64,
        tracks: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tracks: Vec<String> = tracks.into_iter().map(Into::into).collect();
        let rows = (last_hour - first_hour).max(0) as usize;
        let mut cells = vec![vec![Vec::new(); tracks.len()]; rows];

        for event in &selection.accepted {
            for (col, track) in tracks.iter().enumerate() {
                if !event.occupies(track) {
                    continue;
                }
                for (row, hour) in (first_hour..last_hour).enumerate() {
                    if event.interval().contains(hour) {
                        cells[row][col].push(event.name.clone());
                    }
                }
            }
        }

        Self {
            first_hour,
            last_hour,
            tracks,
            cells,
        }
    }

    /// Number of hour rows.
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    /// Hours covered by the rows, in order.
    pub fn hours(&self) -> impl Iterator<Item = i64> {
        self.first_hour..self.last_hour.max(self.first_hour)
    }

    /// Row label for an hour, e.g. `8h-9h`.
    pub fn row_label(hour: i64) -> String {
        format!("{}h-{}h", hour, hour + 1)
    }

    /// Cell text for a track and hour (`None` if free or out of range).
    pub fn cell(&self, track: &str, hour: i64) -> Option<String> {
        let col = self.tracks.iter().position(|t| t == track)?;
        let row = usize::try_from(hour - self.first_hour).ok()?;
        let names = self.cells.get(row)?.get(col)?;
        if names.is_empty() {
            None
        } else {
            Some(names.join(CELL_SEPARATOR))
        }
    }

    /// Number of occupied cells.
    pub fn occupied_cells(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|names| !names.is_empty())
            .count()
    }

    /// Rows as labelled text, one string per track column.
    pub fn rows(&self) -> Vec<(String, Vec<String>)> {
        self.hours()
            .zip(&self.cells)
            .map(|(hour, row)| {
                let texts = row.iter().map(|names| names.join(CELL_SEPARATOR)).collect();
                (Self::row_label(hour), texts)
            })
            .collect()
    }
}
