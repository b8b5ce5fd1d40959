use super::model::{ColumnDef, TableState};
use super::SortableHeaderCell;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Generic resource table: per-column filters, single-column sort, pages of 10.
///
/// Rows are owned by the caller; the table only keeps its own view state.
#[component]
pub fn DataTable<T>(
    columns: Vec<ColumnDef<T>>,
    #[prop(into)] rows: Signal<Vec<T>>,
    /// Label of the "create new" button; the button is hidden without `on_create`
    #[prop(optional, into)]
    create_label: MaybeProp<String>,
    #[prop(optional)] on_create: Option<Callback<()>>,
    #[prop(optional, into)] loading: MaybeProp<bool>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let state = RwSignal::new(TableState::default());
    let columns = StoredValue::new(columns);
    let view_model = Signal::derive(move || {
        rows.with(|rows| columns.with_value(|cols| state.with(|s| s.apply(cols, rows))))
    });
    let column_count = columns.with_value(Vec::len);
    let has_filters = columns.with_value(|cols| cols.iter().any(ColumnDef::is_filterable));

    let header_cells = columns.with_value(|cols| {
        cols.iter()
            .map(|column| {
                let id = column.id;
                let align = if column.align_right { "right" } else { "left" };
                if column.is_sortable() {
                    view! {
                        <SortableHeaderCell
                            label=column.header.clone()
                            direction=Signal::derive(move || state.with(|s| s.sort_direction(id)))
                            on_sort=Callback::new(move |_| state.update(|s| s.toggle_sort(id)))
                            align=align
                        />
                    }
                    .into_any()
                } else {
                    let header = column.header.clone();
                    view! { <TableHeaderCell resizable=false>{header}</TableHeaderCell> }.into_any()
                }
            })
            .collect_view()
    });

    let filter_cells = move || {
        columns.with_value(|cols| {
            cols.iter()
                .map(|column| {
                    let id = column.id;
                    if column.is_filterable() {
                        let placeholder = format!("Filtrar {}", column.header.to_lowercase());
                        view! {
                            <TableHeaderCell resizable=false>
                                <input
                                    class="form__input form__input--small"
                                    type="search"
                                    placeholder=placeholder
                                    prop:value=move || state.with(|s| s.filter_value(id))
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        state.update(|s| s.set_filter(id, value));
                                    }
                                />
                            </TableHeaderCell>
                        }
                        .into_any()
                    } else {
                        view! { <TableHeaderCell resizable=false>""</TableHeaderCell> }.into_any()
                    }
                })
                .collect_view()
        })
    };

    let body = move || {
        let current = view_model.get();
        if current.rows.is_empty() {
            let text = if loading.get().unwrap_or(false) { "Cargando..." } else { "Sin resultados." };
            return view! {
                <TableRow>
                    <TableCell attr:colspan=column_count.to_string() class="table__empty">
                        {text}
                    </TableCell>
                </TableRow>
            }
            .into_any();
        }
        current
            .rows
            .into_iter()
            .map(|row| {
                let cells = columns.with_value(|cols| {
                    cols.iter()
                        .map(|column| {
                            let content = column
                                .render(&row)
                                .unwrap_or_else(|| column.text(&row).into_any());
                            let class = if column.align_right { "table__cell--right" } else { "" };
                            view! {
                                <TableCell class=class>
                                    <TableCellLayout truncate=true>{content}</TableCellLayout>
                                </TableCell>
                            }
                        })
                        .collect_view()
                });
                view! { <TableRow>{cells}</TableRow> }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="data-table">
            <div class="data-table__toolbar">
                <PaginationControls
                    current_page=Signal::derive(move || view_model.with(|v| v.page))
                    total_pages=Signal::derive(move || view_model.with(|v| v.total_pages))
                    total_count=Signal::derive(move || view_model.with(|v| v.total))
                    on_page_change=Callback::new(move |page| state.update(|s| s.page = page))
                />
                {on_create.map(|on_create| view! {
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| on_create.run(())>
                        {icon("plus")}
                        {move || create_label.get().unwrap_or_else(|| "Crear".to_string())}
                    </Button>
                })}
            </div>
            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>{header_cells}</TableRow>
                        <Show when=move || has_filters>
                            <TableRow class="data-table__filters">{filter_cells}</TableRow>
                        </Show>
                    </TableHeader>
                    <TableBody>{body}</TableBody>
                </Table>
            </div>
        </div>
    }
}
