//! Column descriptors and the pure filter → sort → paginate pipeline behind
//! [`DataTable`](super::DataTable).

use crate::shared::list_utils::contains_ignore_case;
use leptos::prelude::AnyView;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Rows per page
pub const PAGE_SIZE: usize = 10;

type TextFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;
type CellFn<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;
type CompareFn<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;
type FilterFn<T> = Arc<dyn Fn(&T, &str) -> bool + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

pub enum FilterRule<T> {
    /// Case-insensitive substring match on the column text
    Text,
    Custom(FilterFn<T>),
    Disabled,
}

impl<T> Clone for FilterRule<T> {
    fn clone(&self) -> Self {
        match self {
            FilterRule::Text => FilterRule::Text,
            FilterRule::Custom(f) => FilterRule::Custom(f.clone()),
            FilterRule::Disabled => FilterRule::Disabled,
        }
    }
}

/// One table column: header, text value, optional cell view, sort and filter rules
pub struct ColumnDef<T> {
    pub id: &'static str,
    pub header: String,
    pub align_right: bool,
    text: TextFn<T>,
    cell: Option<CellFn<T>>,
    compare: Option<CompareFn<T>>,
    filter: FilterRule<T>,
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            header: self.header.clone(),
            align_right: self.align_right,
            text: self.text.clone(),
            cell: self.cell.clone(),
            compare: self.compare.clone(),
            filter: self.filter.clone(),
        }
    }
}

impl<T: 'static> ColumnDef<T> {
    /// Text column, filterable by substring, not sortable
    pub fn new(
        id: &'static str,
        header: impl Into<String>,
        text: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            id,
            header: header.into(),
            align_right: false,
            text: Arc::new(text),
            cell: None,
            compare: None,
            filter: FilterRule::Text,
        }
    }

    /// Column without a value (row actions): no sort, no filter
    pub fn actions(
        id: &'static str,
        header: impl Into<String>,
        cell: impl Fn(&T) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        Self::new(id, header, |_: &T| String::new()).cell(cell).no_filter()
    }

    /// Sort by the column text, case-insensitive
    pub fn sortable(mut self) -> Self {
        let text = self.text.clone();
        self.compare = Some(Arc::new(move |a, b| {
            text(a).to_lowercase().cmp(&text(b).to_lowercase())
        }));
        self
    }

    pub fn sort_by(mut self, compare: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static) -> Self {
        self.compare = Some(Arc::new(compare));
        self
    }

    pub fn cell(mut self, cell: impl Fn(&T) -> AnyView + Send + Sync + 'static) -> Self {
        self.cell = Some(Arc::new(cell));
        self
    }

    pub fn filter_with(mut self, predicate: impl Fn(&T, &str) -> bool + Send + Sync + 'static) -> Self {
        self.filter = FilterRule::Custom(Arc::new(predicate));
        self
    }

    pub fn no_filter(mut self) -> Self {
        self.filter = FilterRule::Disabled;
        self
    }

    pub fn right(mut self) -> Self {
        self.align_right = true;
        self
    }

    pub fn is_sortable(&self) -> bool {
        self.compare.is_some()
    }

    pub fn is_filterable(&self) -> bool {
        !matches!(self.filter, FilterRule::Disabled)
    }

    pub fn text(&self, row: &T) -> String {
        (self.text)(row)
    }

    /// Custom cell view, `None` renders the text value
    pub fn render(&self, row: &T) -> Option<AnyView> {
        self.cell.as_ref().map(|cell| cell(row))
    }

    fn matches(&self, row: &T, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return true;
        }
        match &self.filter {
            FilterRule::Text => contains_ignore_case(&(self.text)(row), query),
            FilterRule::Custom(predicate) => predicate(row, query),
            FilterRule::Disabled => true,
        }
    }
}

/// Filter values, active sort and current page of one table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableState {
    pub filters: BTreeMap<&'static str, String>,
    pub sort: Option<(&'static str, SortDirection)>,
    /// 0-indexed
    pub page: usize,
}

/// Rows visible on the current page plus the numbers the pager needs
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<T> {
    pub rows: Vec<T>,
    /// Row count after filtering
    pub total: usize,
    pub total_pages: usize,
    /// Current page after clamping
    pub page: usize,
}

impl TableState {
    /// unsorted → ascending → descending → ascending; other columns lose their sort
    pub fn toggle_sort(&mut self, column: &'static str) {
        self.sort = match self.sort {
            Some((current, SortDirection::Ascending)) if current == column => {
                Some((column, SortDirection::Descending))
            }
            _ => Some((column, SortDirection::Ascending)),
        };
    }

    pub fn sort_direction(&self, column: &str) -> Option<SortDirection> {
        self.sort
            .filter(|(current, _)| *current == column)
            .map(|(_, direction)| direction)
    }

    /// Changing a filter goes back to the first page
    pub fn set_filter(&mut self, column: &'static str, value: String) {
        if self.filters.get(column).map(String::as_str).unwrap_or("") == value {
            return;
        }
        if value.is_empty() {
            self.filters.remove(column);
        } else {
            self.filters.insert(column, value);
        }
        self.page = 0;
    }

    pub fn filter_value(&self, column: &str) -> String {
        self.filters.get(column).cloned().unwrap_or_default()
    }

    pub fn apply<T: Clone + 'static>(&self, columns: &[ColumnDef<T>], rows: &[T]) -> TableView<T> {
        let mut filtered: Vec<&T> = rows
            .iter()
            .filter(|row| {
                columns.iter().all(|column| {
                    self.filters
                        .get(column.id)
                        .map_or(true, |query| column.matches(row, query))
                })
            })
            .collect();

        if let Some((id, direction)) = self.sort {
            if let Some(compare) = columns
                .iter()
                .find(|c| c.id == id)
                .and_then(|c| c.compare.as_ref())
            {
                filtered.sort_by(|a, b| {
                    let ord = compare(a, b);
                    match direction {
                        SortDirection::Ascending => ord,
                        SortDirection::Descending => ord.reverse(),
                    }
                });
            }
        }

        let total = filtered.len();
        let total_pages = total.div_ceil(PAGE_SIZE).max(1);
        let page = self.page.min(total_pages - 1);
        let rows = filtered
            .into_iter()
            .skip(page * PAGE_SIZE)
            .take(PAGE_SIZE)
            .cloned()
            .collect();

        TableView {
            rows,
            total,
            total_pages,
            page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        name: String,
        stock: i32,
    }

    fn rows(n: i64) -> Vec<Row> {
        (1..=n)
            .map(|id| Row {
                id,
                name: format!("Producto {id:02}"),
                stock: (id * 3) as i32,
            })
            .collect()
    }

    fn columns() -> Vec<ColumnDef<Row>> {
        vec![
            ColumnDef::new("name", "Nombre", |r: &Row| r.name.clone()).sortable(),
            ColumnDef::new("stock", "Stock", |r: &Row| r.stock.to_string())
                .sort_by(|a: &Row, b: &Row| a.stock.cmp(&b.stock))
                .filter_with(|r: &Row, q| r.stock.to_string() == q),
            ColumnDef::new("id", "Id", |r: &Row| r.id.to_string()).no_filter(),
        ]
    }

    fn ids(view: &TableView<Row>) -> Vec<i64> {
        view.rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_pages_of_ten() {
        let data = rows(23);
        let mut state = TableState::default();

        let view = state.apply(&columns(), &data);
        assert_eq!(view.total, 23);
        assert_eq!(view.total_pages, 3);
        assert_eq!(ids(&view), (1..=10).collect::<Vec<_>>());

        state.page = 2;
        assert_eq!(ids(&state.apply(&columns(), &data)), vec![21, 22, 23]);
    }

    #[test]
    fn test_page_clamped_when_rows_shrink() {
        let mut state = TableState::default();
        state.page = 2;

        let view = state.apply(&columns(), &rows(15));
        assert_eq!(view.page, 1);
        assert_eq!(ids(&view), (11..=15).collect::<Vec<_>>());

        let empty = state.apply(&columns(), &[]);
        assert_eq!(empty.page, 0);
        assert_eq!(empty.total_pages, 1);
        assert!(empty.rows.is_empty());
    }

    #[test]
    fn test_sort_toggle_cycle() {
        let mut state = TableState::default();
        assert_eq!(state.sort_direction("name"), None);

        state.toggle_sort("name");
        assert_eq!(state.sort_direction("name"), Some(SortDirection::Ascending));
        state.toggle_sort("name");
        assert_eq!(state.sort_direction("name"), Some(SortDirection::Descending));
        state.toggle_sort("name");
        assert_eq!(state.sort_direction("name"), Some(SortDirection::Ascending));

        state.toggle_sort("stock");
        assert_eq!(state.sort_direction("name"), None);
        assert_eq!(state.sort_direction("stock"), Some(SortDirection::Ascending));
    }

    #[test]
    fn test_sort_descending_by_comparator() {
        let mut state = TableState::default();
        state.toggle_sort("stock");
        state.toggle_sort("stock");

        let view = state.apply(&columns(), &rows(12));
        assert_eq!(ids(&view), (3..=12).rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_default_filter_is_case_insensitive_substring() {
        let mut state = TableState::default();
        state.set_filter("name", "PRODUCTO 1".into());

        let view = state.apply(&columns(), &rows(23));
        assert_eq!(ids(&view), (10..=19).collect::<Vec<_>>());
    }

    #[test]
    fn test_custom_and_disabled_filters() {
        let mut state = TableState::default();
        state.set_filter("stock", "9".into());
        assert_eq!(ids(&state.apply(&columns(), &rows(10))), vec![3]);

        let mut state = TableState::default();
        state.set_filter("id", "nothing matches this".into());
        assert_eq!(state.apply(&columns(), &rows(5)).total, 5);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut state = TableState::default();
        state.page = 3;
        state.set_filter("name", "producto".into());
        assert_eq!(state.page, 0);

        state.page = 1;
        state.set_filter("name", "producto".into());
        assert_eq!(state.page, 1);

        state.set_filter("name", String::new());
        assert_eq!(state.page, 0);
        assert!(state.filters.is_empty());
    }

    #[test]
    fn test_no_matches_yields_empty_page() {
        let mut state = TableState::default();
        state.set_filter("name", "zzz".into());
        let view = state.apply(&columns(), &rows(5));
        assert_eq!(view.total, 0);
        assert!(view.rows.is_empty());
    }
}
