//! Pure projection of store state into renderable rows.
//!
//! Projection is separated from any side-effecting render step so the filter
//! and the derived labels can be tested on their own.

use crate::record::Record;

/// One row of the projected table.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    /// 1-based position within the filtered view.
    pub position: usize,
    /// Index into the unfiltered list; edit and delete actions address this.
    pub source_index: usize,
    pub record: &'a Record,
}

/// A filtered view over a record snapshot.
///
/// The query is normalized once (trimmed, lowercased); `rows` can be called
/// any number of times and restarts the sequence from the top.
#[derive(Debug)]
pub struct Projection<'a> {
    records: &'a [Record],
    query: String,
}

impl<'a> Projection<'a> {
    pub fn new(records: &'a [Record], query: &str) -> Self {
        Self { records, query: query.trim().to_lowercase() }
    }

    /// Lazy, restartable sequence of matching rows in original order.
    ///
    /// A record matches when the query is a case-insensitive substring of
    /// its name or its student id; the empty query matches everything.
    pub fn rows(&self) -> impl Iterator<Item = Row<'a>> + '_ {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.matches(record))
            .enumerate()
            .map(|(filtered, (source_index, record))| Row {
                position: filtered + 1,
                source_index,
                record,
            })
    }

    /// Number of records the current query matches.
    pub fn count(&self) -> usize {
        self.rows().count()
    }

    /// Counter text, singular for exactly one record.
    pub fn count_label(&self) -> String {
        let count = self.count();
        if count == 1 {
            "1 record".to_string()
        } else {
            format!("{count} records")
        }
    }

    fn matches(&self, record: &Record) -> bool {
        if self.query.is_empty() {
            return true;
        }
        record.name.to_lowercase().contains(&self.query)
            || record.student_id.to_lowercase().contains(&self.query)
    }
}

/// Whether the rendered table needs a scroll affordance.
///
/// True only when content strictly exceeds the visible area; recompute after
/// every render, since rendering can change the content height.
pub fn overflow_affordance(content_height: u32, visible_height: u32) -> bool {
    content_height > visible_height
}
