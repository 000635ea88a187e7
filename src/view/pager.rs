/// Zero-based pagination over an already-filtered row list.
///
/// The page index is clamped against the current row count at slice time, so
/// shrinking the visible set (e.g. after applying a stricter filter) can
/// never leave the pager pointing past the end.
#[derive(Debug, Clone, Copy)]
pub struct Pager {
    page_index: usize,
    page_size: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The clamped page index for a row count.
    pub fn page_index(&self, total_rows: usize) -> usize {
        self.page_index.min(self.last_page(total_rows))
    }

    pub fn total_pages(&self, total_rows: usize) -> usize {
        total_rows.div_ceil(self.page_size).max(1)
    }

    fn last_page(&self, total_rows: usize) -> usize {
        self.total_pages(total_rows) - 1
    }

    pub fn next(&mut self, total_rows: usize) {
        self.page_index = (self.page_index(total_rows) + 1).min(self.last_page(total_rows));
    }

    pub fn prev(&mut self, total_rows: usize) {
        self.page_index = self.page_index(total_rows).saturating_sub(1);
    }

    /// Jump to a one-based page number, clamped into range.
    pub fn jump(&mut self, page_number: usize, total_rows: usize) {
        self.page_index = page_number.saturating_sub(1).min(self.last_page(total_rows));
    }

    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let start = self.page_index(rows.len()) * self.page_size;
        let end = (start + self.page_size).min(rows.len());
        if start >= rows.len() { &[] } else { &rows[start..end] }
    }

    /// Footer line in "Page X of Y (N records)" form.
    pub fn footer(&self, total_rows: usize) -> String {
        format!(
            "Page {} of {} ({} record{})",
            self.page_index(total_rows) + 1,
            self.total_pages(total_rows),
            total_rows,
            if total_rows == 1 { "" } else { "s" }
        )
    }
}
