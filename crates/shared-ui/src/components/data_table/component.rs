use dioxus::prelude::*;

/// Generic table: one header cell per header, one row per entry of `rows`
/// and one cell per value in each row.
///
/// Header text never picks values out of a row. A row with more or fewer
/// cells than there are headers renders as-is.
#[component]
pub fn Table(headers: &'static [&'static str], rows: Vec<Vec<String>>) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                for header in headers.iter() {
                    DataTableColumn { "{header}" }
                }
            }
            DataTableBody {
                for row in rows.iter() {
                    DataTableRow {
                        for cell in row.iter() {
                            DataTableCell { "{cell}" }
                        }
                    }
                }
            }
        }
    }
}

/// Scrollable table wrapper with co-located styles.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                {children}
            }
        }
    }
}

/// Wraps `th` elements in a `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

#[component]
pub fn DataTableColumn(children: Element) -> Element {
    rsx! {
        th { {children} }
    }
}

/// Table row, clickable when `onclick` is set.
#[component]
pub fn DataTableRow(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let has_click = onclick.is_some();
    rsx! {
        tr {
            class: if has_click { "data-table-row clickable" } else { "data-table-row" },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}

/// Shown in place of a table that has nothing to list.
#[component]
pub fn DataTableEmpty(message: String) -> Element {
    rsx! {
        p { class: "data-table-empty", "{message}" }
    }
}
