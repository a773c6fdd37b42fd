use crate::{EntryId, EntryStatus, SessionState, SubmitError};

/// Aggregate counts, always recomputed from the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchStats {
    pub total: usize,
    pub pending: usize,
    pub indexed: usize,
    pub not_indexed: usize,
    pub errors: usize,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub session: SessionState,
    pub candidate_count: usize,
    pub entries: Vec<EntryRowView>,
    pub stats: BatchStats,
    /// Resolved fraction in [0, 1]; exactly 1.0 only once the last entry
    /// is terminal.
    pub progress: f64,
    pub last_error: Option<SubmitError>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRowView {
    pub id: EntryId,
    pub url: String,
    pub status: EntryStatus,
    pub title: Option<String>,
}

/// Result-tab categories for the per-entry breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Indexed,
    NotIndexed,
    Error,
}

impl StatusFilter {
    fn matches(self, status: EntryStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Indexed => status == EntryStatus::Indexed,
            StatusFilter::NotIndexed => status == EntryStatus::NotIndexed,
            StatusFilter::Error => status == EntryStatus::Error,
        }
    }
}

impl AppViewModel {
    /// Rows in input order, restricted to one status category.
    pub fn rows(&self, filter: StatusFilter) -> Vec<&EntryRowView> {
        self.entries
            .iter()
            .filter(|row| filter.matches(row.status))
            .collect()
    }

    /// Progress as a whole percentage, rounded half-up.
    pub fn progress_percent(&self) -> u8 {
        (self.progress * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: EntryId, status: EntryStatus) -> EntryRowView {
        EntryRowView {
            id,
            url: format!("https://example.com/{id}"),
            status,
            title: None,
        }
    }

    #[test]
    fn rows_filter_by_status_and_keep_order() {
        let view = AppViewModel {
            entries: vec![
                row(1, EntryStatus::Indexed),
                row(2, EntryStatus::Error),
                row(3, EntryStatus::Indexed),
                row(4, EntryStatus::Pending),
            ],
            ..AppViewModel::default()
        };

        let indexed: Vec<EntryId> = view
            .rows(StatusFilter::Indexed)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(indexed, vec![1, 3]);
        assert_eq!(view.rows(StatusFilter::Error).len(), 1);
        assert_eq!(view.rows(StatusFilter::All).len(), 4);
    }

    #[test]
    fn progress_percent_rounds_half_up() {
        let view = AppViewModel {
            progress: 1.0 / 3.0,
            ..AppViewModel::default()
        };
        assert_eq!(view.progress_percent(), 33);

        let view = AppViewModel {
            progress: 0.675,
            ..AppViewModel::default()
        };
        assert_eq!(view.progress_percent(), 68);

        let view = AppViewModel {
            progress: 1.0,
            ..AppViewModel::default()
        };
        assert_eq!(view.progress_percent(), 100);
    }
}
