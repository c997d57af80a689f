//! Pure list/form state of the generic CRUD table.
//!
//! Nothing here touches the DOM or the network: the view feeds rows and
//! columns in, and gets back the visible page or a [`SaveAction`] to hand to
//! the owning screen.

use contracts::shared::{row_id, Row};
use serde_json::Value;

use super::schema::{Column, ColumnType};

// ============================================================================
// List: search + pagination
// ============================================================================

/// Rows whose declared columns contain `query` (case-insensitive).
pub fn filter_rows<'a>(rows: &'a [Row], columns: &[Column], query: &str) -> Vec<&'a Row> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return rows.iter().collect();
    }
    rows.iter()
        .filter(|row| {
            columns
                .iter()
                .any(|col| col.raw_text(row).to_lowercase().contains(&needle))
        })
        .collect()
}

/// Position of the visible page inside the filtered list. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlice {
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
    pub start: usize,
    pub end: usize,
}

impl PageSlice {
    pub fn new(total: usize, page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total.div_ceil(page_size).max(1);
        let page = page.clamp(1, total_pages);
        let start = ((page - 1) * page_size).min(total);
        let end = (start + page_size).min(total);
        Self {
            page,
            total_pages,
            total,
            start,
            end,
        }
    }

    /// "Mostrando 6-10 de 12"
    pub fn summary(&self) -> String {
        if self.total == 0 {
            return "Mostrando 0 de 0".to_string();
        }
        format!("Mostrando {}-{} de {}", self.start + 1, self.end, self.total)
    }

    /// Page numbers to show: at most `max_visible`, centered on the current page.
    pub fn window(&self, max_visible: usize) -> Vec<usize> {
        let max_visible = max_visible.max(1);
        if self.total_pages <= max_visible {
            return (1..=self.total_pages).collect();
        }
        let half = max_visible / 2;
        let first = self
            .page
            .saturating_sub(half)
            .max(1)
            .min(self.total_pages - max_visible + 1);
        (first..first + max_visible).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub query: String,
    pub page: usize,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
        }
    }
}

impl ListState {
    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.page = 1;
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Visible rows and their page position. The stored page is clamped when
    /// the filtered list has shrunk.
    pub fn visible<'a>(
        &mut self,
        rows: &'a [Row],
        columns: &[Column],
        page_size: usize,
    ) -> (Vec<&'a Row>, PageSlice) {
        let filtered = filter_rows(rows, columns, &self.query);
        let slice = PageSlice::new(filtered.len(), self.page, page_size);
        self.page = slice.page;
        let visible = filtered[slice.start..slice.end].to_vec();
        (visible, slice)
    }
}

// ============================================================================
// Form: add / edit / delete confirmation
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Closed,
    Add,
    Edit { id: Option<i64> },
}

/// What the owning screen should do with the submitted values.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveAction {
    Create(Row),
    Update { id: i64, values: Row },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub mode: FormMode,
    pub values: Row,
    pending_delete: Option<(i64, Row)>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            mode: FormMode::Closed,
            values: Row::new(),
            pending_delete: None,
        }
    }
}

impl FormState {
    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Closed
    }

    /// Empty record pre-filled with each column's default value.
    pub fn open_add(&mut self, columns: &[Column]) {
        let mut values = Row::new();
        for col in columns {
            match (&col.default_value, &col.kind) {
                (Some(v), _) => {
                    values.insert(col.key.clone(), v.clone());
                }
                (None, ColumnType::Checkbox) => {
                    values.insert(col.key.clone(), Value::Bool(false));
                }
                _ => {}
            }
        }
        self.values = values;
        self.mode = FormMode::Add;
    }

    /// Form pre-filled with the row; locked columns keep their context default.
    pub fn open_edit(&mut self, row: &Row, columns: &[Column]) {
        let mut values = row.clone();
        for col in columns.iter().filter(|c| c.disabled) {
            if let Some(v) = &col.default_value {
                values.insert(col.key.clone(), v.clone());
            }
        }
        self.values = values;
        self.mode = FormMode::Edit { id: row_id(row) };
    }

    pub fn close(&mut self) {
        self.mode = FormMode::Closed;
        self.values = Row::new();
    }

    /// Drop any in-progress form and pending delete (context changed).
    pub fn reset(&mut self) {
        self.close();
        self.pending_delete = None;
    }

    pub fn set_field(&mut self, column: &Column, raw: &str) {
        if column.disabled {
            return;
        }
        let value = match &column.kind {
            ColumnType::Select(source) => source.resolve_choice(raw),
            _ => Value::String(raw.to_string()),
        };
        self.values.insert(column.key.clone(), value);
    }

    pub fn set_checked(&mut self, column: &Column, checked: bool) {
        if column.disabled {
            return;
        }
        self.values.insert(column.key.clone(), Value::Bool(checked));
    }

    /// Input text for a field. Dates are cut to `YYYY-MM-DD`.
    pub fn field_text(&self, column: &Column) -> String {
        let text = column.raw_text(&self.values);
        match column.kind {
            ColumnType::Date => text.split('T').next().unwrap_or_default().to_string(),
            _ => text,
        }
    }

    pub fn is_checked(&self, column: &Column) -> bool {
        match self.values.get(&column.key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
            _ => false,
        }
    }

    /// Create when adding, update when editing. The form stays open until the
    /// screen reports success.
    pub fn save(&self) -> Option<SaveAction> {
        match self.mode {
            FormMode::Closed => None,
            FormMode::Add => Some(SaveAction::Create(self.values.clone())),
            FormMode::Edit { id: Some(id) } => Some(SaveAction::Update {
                id,
                values: self.values.clone(),
            }),
            FormMode::Edit { id: None } => {
                log::warn!("Edited row has no PKID, update skipped");
                None
            }
        }
    }

    pub fn request_delete(&mut self, row: &Row) -> bool {
        match row_id(row) {
            Some(id) => {
                self.pending_delete = Some((id, row.clone()));
                true
            }
            None => false,
        }
    }

    pub fn pending_delete(&self) -> Option<&Row> {
        self.pending_delete.as_ref().map(|(_, row)| row)
    }

    /// Id to delete once the user confirmed.
    pub fn confirm_delete(&mut self) -> Option<i64> {
        self.pending_delete.take().map(|(id, _)| id)
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }
}
