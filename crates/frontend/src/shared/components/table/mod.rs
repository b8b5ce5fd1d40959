mod data_table;
pub mod model;
pub mod number_format;
mod row_actions;
pub mod sortable_header_cell;

pub use data_table::DataTable;
pub use model::{ColumnDef, SortDirection, TableState, TableView, PAGE_SIZE};
pub use number_format::*;
pub use row_actions::row_actions;
pub use sortable_header_cell::SortableHeaderCell;
