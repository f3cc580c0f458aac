use crate::error::HistoryError;

/// One snapshot in a game's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry<B, C> {
    pub board: B,
    /// Coordinate placed to reach this board; `None` for the starting board.
    pub placed: Option<C>,
}

/// Ordered board snapshots, index 0 being the starting board.
///
/// Both operations return a new history and leave `self` untouched, so a
/// caller holding an older session keeps a consistent view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History<B, C> {
    entries: Vec<HistoryEntry<B, C>>,
}

impl<B: Copy, C: Copy> History<B, C> {
    /// History holding only the starting board.
    pub fn new(initial: B) -> Self {
        History {
            entries: vec![HistoryEntry {
                board: initial,
                placed: None,
            }],
        }
    }

    pub fn append(&self, entry: HistoryEntry<B, C>) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.extend_from_slice(&self.entries);
        entries.push(entry);
        History { entries }
    }

    /// Keep entries `0..=index`.
    pub fn truncate(&self, index: usize) -> Result<Self, HistoryError> {
        if index >= self.entries.len() {
            return Err(HistoryError::OutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(History {
            entries: self.entries[..=index].to_vec(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: the starting board is always present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of placements since the starting board.
    pub fn moves(&self) -> usize {
        self.entries.len() - 1
    }

    pub fn latest_index(&self) -> usize {
        self.entries.len() - 1
    }

    pub fn latest(&self) -> &HistoryEntry<B, C> {
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[HistoryEntry<B, C>] {
        &self.entries
    }

    /// Navigation labels, one per entry.
    pub fn labels(&self) -> Vec<String> {
        (0..self.entries.len()).map(move_label).collect()
    }
}

/// Label for the history entry at `index`.
pub fn move_label(index: usize) -> String {
    if index == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{index}")
    }
}
