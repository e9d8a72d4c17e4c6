use moco::TimeEntry;

/// All entries booked on one day.
#[derive(Debug, Clone, PartialEq)]
pub struct DateBucket {
    pub date: String,
    pub entries: Vec<TimeEntry>,
    pub total_hours: f64,
}

impl DateBucket {
    pub fn total_label(&self) -> String {
        format!("{:.2}", self.total_hours)
    }
}

/// Group entries by day, most recent day first. Entries keep fetch order within a day.
pub fn group_entries_by_date(entries: &[TimeEntry]) -> Vec<DateBucket> {
    let mut buckets: Vec<DateBucket> = Vec::new();

    for entry in entries {
        match buckets.iter_mut().find(|b| b.date == entry.date) {
            Some(bucket) => bucket.entries.push(entry.clone()),
            None => buckets.push(DateBucket {
                date: entry.date.clone(),
                entries: vec![entry.clone()],
                total_hours: 0.0,
            }),
        }
    }

    for bucket in &mut buckets {
        bucket.total_hours = bucket.entries.iter().map(|e| e.hours).sum();
    }
    // YYYY-MM-DD compares correctly as a string
    buckets.sort_by(|a, b| b.date.cmp(&a.date));
    buckets
}

/// The grouped entries shown in the table, plus the table cursor.
///
/// The cursor indexes entries in display order (day by day), never header
/// or total rows.
#[derive(Debug, Clone, Default)]
pub struct EntriesTable {
    buckets: Vec<DateBucket>,
    cursor: Option<usize>,
}

impl EntriesTable {
    pub fn buckets(&self) -> &[DateBucket] {
        &self.buckets
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(|b| b.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn display_entries(&self) -> impl Iterator<Item = &TimeEntry> {
        self.buckets.iter().flat_map(|b| b.entries.iter())
    }

    pub fn entry_at(&self, index: usize) -> Option<&TimeEntry> {
        self.display_entries().nth(index)
    }

    /// Replace the rows. The cursor is kept if it still points at an entry.
    pub fn replace(&mut self, entries: &[TimeEntry]) {
        self.buckets = group_entries_by_date(entries);
        if self.cursor.is_some_and(|i| i >= self.len()) {
            self.cursor = None;
        }
    }

    pub fn move_down(&mut self) {
        if self.is_empty() {
            return;
        }
        self.cursor = Some(match self.cursor {
            Some(i) => (i + 1).min(self.len() - 1),
            None => 0,
        });
    }

    pub fn move_up(&mut self) {
        if self.is_empty() {
            return;
        }
        self.cursor = Some(match self.cursor {
            Some(i) => i.saturating_sub(1),
            None => self.len() - 1,
        });
    }

    pub fn clear_cursor(&mut self) {
        self.cursor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, date: &str, hours: f64) -> TimeEntry {
        TimeEntry {
            id,
            date: date.to_string(),
            hours,
            description: format!("entry {}", id),
            ..Default::default()
        }
    }

    #[test]
    fn days_are_sorted_most_recent_first() {
        let buckets = group_entries_by_date(&[
            entry(1, "2024-01-01", 1.0),
            entry(2, "2024-01-03", 2.0),
        ]);

        let dates: Vec<_> = buckets.iter().map(|b| b.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-03", "2024-01-01"]);
    }

    #[test]
    fn bucket_keeps_fetch_order_and_sums_hours() {
        let buckets = group_entries_by_date(&[
            entry(1, "2024-01-02", 1.5),
            entry(2, "2024-01-01", 8.0),
            entry(3, "2024-01-02", 0.25),
        ]);

        let day = &buckets[0];
        assert_eq!(day.date, "2024-01-02");
        assert_eq!(
            day.entries.iter().map(|e| e.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert_eq!(day.total_hours, 1.75);
        assert_eq!(day.total_label(), "1.75");
        assert_eq!(buckets[1].total_label(), "8.00");
    }

    #[test]
    fn no_entries_no_buckets() {
        assert!(group_entries_by_date(&[]).is_empty());
    }

    #[test]
    fn cursor_walks_display_order() {
        let mut table = EntriesTable::default();
        table.replace(&[
            entry(1, "2024-01-01", 1.0),
            entry(2, "2024-01-03", 1.0),
            entry(3, "2024-01-03", 1.0),
        ]);

        table.move_down();
        assert_eq!(table.entry_at(table.cursor().unwrap()).unwrap().id, 2);
        table.move_down();
        table.move_down();
        assert_eq!(table.entry_at(table.cursor().unwrap()).unwrap().id, 1);
        table.move_down();
        assert_eq!(table.cursor(), Some(2));
        table.move_up();
        assert_eq!(table.cursor(), Some(1));
    }

    #[test]
    fn replace_drops_cursor_past_the_end() {
        let mut table = EntriesTable::default();
        table.replace(&[entry(1, "2024-01-01", 1.0), entry(2, "2024-01-01", 1.0)]);
        table.move_up();
        assert_eq!(table.cursor(), Some(1));

        table.replace(&[entry(1, "2024-01-01", 1.0)]);

        assert_eq!(table.cursor(), None);
    }

    #[test]
    fn empty_table_has_no_cursor() {
        let mut table = EntriesTable::default();
        table.move_down();
        assert_eq!(table.cursor(), None);
    }
}
