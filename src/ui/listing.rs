use dioxus::prelude::*;
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

use crate::domain::entities::enums::FilterEnums;
use crate::domain::entities::listing::{
    ListingFilter, ListingVariables, SortDirection, SortSpec, Stage,
};
use crate::domain::entities::records::{stage_columns, ColumnSpec};
use crate::ui::figures::{KeyFigures, SourceChart};
use crate::ui::filters::FilterBar;
use crate::ui::state::filter_state::FilterState;
use crate::ui::state::selection::SelectionState;
use crate::Services;

pub const PAGE_SIZE: i64 = 20;

/// Per-stage wiring for the one listing screen implementation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListingConfig {
    pub stage: Stage,
    pub heading: &'static str,
    pub page_size: i64,
    pub show_item_type_filter: bool,
}

impl ListingConfig {
    pub fn for_stage(stage: Stage) -> Self {
        match stage {
            Stage::Extraction => ListingConfig {
                stage,
                heading: "All Extraction",
                page_size: PAGE_SIZE,
                show_item_type_filter: false,
            },
            Stage::Transform => ListingConfig {
                stage,
                heading: "All Transformation",
                page_size: PAGE_SIZE,
                show_item_type_filter: false,
            },
            Stage::Load => ListingConfig {
                stage,
                heading: "All Load",
                page_size: PAGE_SIZE,
                show_item_type_filter: true,
            },
        }
    }

    pub fn columns(&self) -> &'static [ColumnSpec] {
        stage_columns(self.stage)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Notice {
    message: String,
    success: bool,
}

/// One stage's listing screen: key figures, per-source chart, filter bar,
/// selectable table, pager and the retrigger banner. Mounted fresh per tab,
/// so filter and selection state never leak across stages.
#[component]
pub fn ListingScreen(config: ListingConfig) -> Element {
    let services = use_context::<Services>();
    let mut filter = use_signal(|| FilterState::<ListingFilter>::new(config.page_size));
    let mut selection = use_signal(SelectionState::new);
    let mut notice = use_signal(|| None::<Notice>);
    let mut retrigger_pending = use_signal(|| false);

    let listing_service = services.listing.clone();
    let fetched = use_resource(move || {
        let service = listing_service.clone();
        let variables = {
            let state = filter.read();
            ListingVariables::compose(
                state.applied_filter(),
                state.offset(),
                state.limit(),
                state.sort(),
            )
        };
        async move { service.fetch_stage(config.stage, variables).await }
    });

    let enum_service = services.listing.clone();
    let enum_tables = use_resource(move || {
        let service = enum_service.clone();
        async move { service.filter_enums().await }
    });

    // Any change to the derived query variables invalidates the selection.
    use_effect(move || {
        let _ = filter.read();
        selection.write().clear();
    });

    let data_snapshot = fetched.read().as_ref().cloned();
    let enum_snapshot = match enum_tables.read().as_ref() {
        Some(Ok(tables)) => tables.clone(),
        _ => FilterEnums::default(),
    };
    let selection_snapshot = selection.read().clone();
    let pending = retrigger_pending();
    let page = filter.read().page();
    let sort_snapshot = filter.read().sort().cloned();

    let heading_text = match data_snapshot.as_ref() {
        Some(Ok(data)) => format!("{} ({})", config.heading, data.total_count()),
        _ => config.heading.to_string(),
    };

    let notice_view = notice.read().clone().map(|current| {
        let (color, background) = if current.success {
            ("#0f5132", "#d1e7dd")
        } else {
            ("#842029", "#f8d7da")
        };
        rsx! {
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin: 12px 0; padding: 10px 12px; border-radius: 4px; color: {color}; background: {background};",
                span { "{current.message}" }
                button {
                    style: "border: none; background: transparent; cursor: pointer; font-size: 14px; color: {color};",
                    onclick: move |_| notice.set(None),
                    "✕"
                }
            }
        }
    });

    let summary_view = data_snapshot
        .as_ref()
        .and_then(|outcome| outcome.as_ref().ok())
        .map(|data| {
            let figures = data.key_figures();
            let counts = data.source_counts().to_vec();
            rsx! {
                KeyFigures { figures }
                SourceChart { counts }
            }
        });

    let columns = config.columns();
    let column_span = columns.len() + 1;
    let table_view = match &data_snapshot {
        None => rsx! {
            div { style: "{status_panel_style()}", "Loading records…" }
        },
        Some(Err(error)) => rsx! {
            div { style: "{status_panel_style()} color: #842029;",
                "Failed to load records: {error}"
            }
        },
        Some(Ok(data)) => {
            let page_ids = data.page_ids();
            let rows = data.rows(&enum_snapshot);
            let all_selected = selection_snapshot.is_page_selected(&page_ids);
            let total_pages = ((data.total_count() + config.page_size - 1) / config.page_size).max(1);
            rsx! {
                div {
                    style: "{table_container_style()}",
                    table { style: "border-collapse: collapse; width: 100%; background: #fff;",
                        thead {
                            tr {
                                th { style: "{table_header_cell_style()}",
                                    input {
                                        r#type: "checkbox",
                                        checked: all_selected,
                                        onclick: move |_| {
                                            let select = !selection.read().is_page_selected(&page_ids);
                                            selection.write().select_page(&page_ids, select);
                                        },
                                    }
                                }
                                {columns.iter().copied().map(|column| {
                                    let indicator = sort_indicator(sort_snapshot.as_ref(), column.field);
                                    if column.sortable {
                                        rsx! {
                                            th {
                                                style: "{table_header_cell_style()} cursor: pointer;",
                                                onclick: move |_| filter.write().toggle_sort(column.field),
                                                "{column.label}{indicator}"
                                            }
                                        }
                                    } else {
                                        rsx! {
                                            th { style: "{table_header_cell_style()}", "{column.label}" }
                                        }
                                    }
                                })}
                            }
                        }
                        tbody {
                            if rows.is_empty() {
                                tr {
                                    td {
                                        style: "{table_cell_style()} text-align: center; color: #777;",
                                        colspan: "{column_span}",
                                        "No records found."
                                    }
                                }
                            }
                            {rows.iter().map(|row| {
                                let key = row.id.clone();
                                let row_id = row.id.clone();
                                let checked = selection_snapshot.contains(&row.id);
                                let cell_views = row.cells.iter().map(|cell| match cell.href.clone() {
                                    Some(href) => rsx! {
                                        td { style: "{table_cell_style()}",
                                            a { href: "{href}", "{cell.text}" }
                                        }
                                    },
                                    None => rsx! {
                                        td { style: "{table_cell_style()}", "{cell.text}" }
                                    },
                                });
                                rsx! {
                                    tr { key: "{key}",
                                        td { style: "{table_cell_style()}",
                                            input {
                                                r#type: "checkbox",
                                                checked,
                                                onclick: move |_| {
                                                    let select = !selection.read().contains(&row_id);
                                                    selection.write().toggle(&row_id, select);
                                                },
                                            }
                                        }
                                        {cell_views}
                                    }
                                }
                            })}
                        }
                    }
                }
                div { style: "display: flex; gap: 12px; align-items: center; justify-content: flex-end; margin: 12px 0;",
                    button {
                        style: "{pager_button_style()}",
                        disabled: page <= 1,
                        onclick: move |_| filter.write().set_page(page - 1),
                        "Previous"
                    }
                    span { style: "font-size: 13px; color: #444;", "Page {page} of {total_pages}" }
                    button {
                        style: "{pager_button_style()}",
                        disabled: page >= total_pages,
                        onclick: move |_| filter.write().set_page(page + 1),
                        "Next"
                    }
                }
            }
        }
    };

    let retrigger_service = services.retrigger.clone();
    let banner_count = selection_snapshot.len();
    let show_banner = selection_snapshot.banner_visible();

    rsx! {
        div { style: "display: flex; flex-direction: column; flex: 1; min-height: 0;",
            h2 { style: "margin: 0 0 4px 0; font-size: 18px;", "{heading_text}" }
            {notice_view}
            {summary_view}
            FilterBar { config, filter, enums: enum_snapshot }
            {table_view}
            if show_banner {
                div { style: "{banner_style()}",
                    span { "{banner_count} items selected." }
                    div { style: "display: flex; gap: 8px; align-items: center;",
                        button {
                            style: "{banner_action_style()}",
                            disabled: pending,
                            onclick: move |_| {
                                if retrigger_pending() {
                                    return;
                                }
                                let ids = selection.read().id_list();
                                if ids.is_empty() {
                                    return;
                                }
                                let prompt = format!(
                                    "Retrigger the pipeline for {} selected item(s)?",
                                    ids.len()
                                );
                                if MessageDialog::new()
                                    .set_level(MessageLevel::Warning)
                                    .set_title("Retrigger pipeline")
                                    .set_description(prompt.as_str())
                                    .set_buttons(MessageButtons::YesNo)
                                    .show()
                                    != MessageDialogResult::Yes
                                {
                                    return;
                                }
                                retrigger_pending.set(true);
                                notice.set(None);
                                let service = retrigger_service.clone();
                                spawn(async move {
                                    let outcome = service.execute(&ids).await;
                                    if outcome.clears_selection() {
                                        selection.write().clear();
                                    }
                                    notice.set(Some(Notice {
                                        message: outcome.message(),
                                        success: outcome.is_success(),
                                    }));
                                    retrigger_pending.set(false);
                                });
                            },
                            if pending { "Retriggering…" } else { "Retrigger selected items" }
                        }
                        button {
                            style: "border: none; background: transparent; cursor: pointer; font-size: 14px; color: #fff;",
                            onclick: move |_| selection.write().dismiss_banner(),
                            "✕"
                        }
                    }
                }
            }
        }
    }
}

fn sort_indicator(sort: Option<&SortSpec>, field: &str) -> &'static str {
    match sort {
        Some(spec) if spec.field == field => match spec.direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        },
        _ => "",
    }
}

pub fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; border: 1px solid #ddd; border-radius: 4px;"
}

pub fn table_header_cell_style() -> &'static str {
    "position: sticky; top: 0; z-index: 5; background: #f4f4f4; border: 1px solid #bbb; padding: 6px; text-align: left; white-space: nowrap;"
}

fn table_cell_style() -> &'static str {
    "border: 1px solid #ddd; padding: 4px 6px; white-space: nowrap;"
}

fn status_panel_style() -> &'static str {
    "padding: 24px; text-align: center; border: 1px solid #ddd; border-radius: 4px; background: #fff; color: #555;"
}

fn pager_button_style() -> &'static str {
    "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;"
}

fn banner_style() -> &'static str {
    "position: fixed; bottom: 16px; left: 50%; transform: translateX(-50%); display: flex; gap: 16px; align-items: center; background: #222; color: #fff; padding: 10px 16px; border-radius: 6px; box-shadow: 0 10px 24px rgba(0,0,0,0.25); z-index: 1100;"
}

fn banner_action_style() -> &'static str {
    "border: 1px solid #fff; background: transparent; color: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;"
}
