use dioxus::prelude::*;

use crate::domain::entities::enums::{EnumOption, FilterEnums};
use crate::domain::entities::listing::{non_empty, ListingFilter};
use crate::ui::listing::ListingConfig;
use crate::ui::state::filter_state::FilterState;

/// Filter controls for one listing view. The filter store handle comes in as
/// a plain parameter; every edit applies immediately and lands on page 1.
#[component]
pub fn FilterBar(
    config: ListingConfig,
    mut filter: Signal<FilterState<ListingFilter>>,
    enums: FilterEnums,
) -> Element {
    let current = filter.read().raw_filter().clone();
    let filtered = filter.read().filtered();

    rsx! {
        div { style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end; background: #fff; border: 1px solid #ddd; border-radius: 4px; padding: 12px; margin: 12px 0;",
            label { style: "{field_label_style()}",
                "Created From"
                input {
                    r#type: "date",
                    style: "{field_input_style()}",
                    value: current.created_at_start.clone().unwrap_or_default(),
                    onchange: move |event| {
                        filter.write().update_filter(|f| f.created_at_start = non_empty(event.value()));
                    },
                }
            }
            label { style: "{field_label_style()}",
                "Created To"
                input {
                    r#type: "date",
                    style: "{field_input_style()}",
                    value: current.created_at_end.clone().unwrap_or_default(),
                    onchange: move |event| {
                        filter.write().update_filter(|f| f.created_at_end = non_empty(event.value()));
                    },
                }
            }
            SelectField {
                label: "Source",
                placeholder: "Any source",
                value: current.source.clone(),
                options: enums.source.clone(),
                on_change: move |value| filter.write().update_filter(|f| f.source = value),
            }
            SelectField {
                label: "Status",
                placeholder: "Any status",
                value: current.status.clone(),
                options: enums.status_options(config.stage).to_vec(),
                on_change: move |value| filter.write().update_filter(|f| f.status = value),
            }
            if config.show_item_type_filter {
                SelectField {
                    label: "Item Type",
                    placeholder: "Any item type",
                    value: current.item_type.clone(),
                    options: enums.item_type.clone(),
                    on_change: move |value| filter.write().update_filter(|f| f.item_type = value),
                }
            }
            label { style: "{field_label_style()}",
                "Trace ID"
                input {
                    style: "{field_input_style()}",
                    placeholder: "Trace id",
                    value: current.trace_id.clone().unwrap_or_default(),
                    oninput: move |event| {
                        filter.write().update_filter(|f| f.trace_id = non_empty(event.value()));
                    },
                }
            }
            button {
                style: "padding: 6px 14px; border: 1px solid #bbb; border-radius: 3px; background: #fff; cursor: pointer;",
                disabled: !filtered,
                onclick: move |_| filter.write().reset_filter(),
                "Clear"
            }
        }
    }
}

#[component]
fn SelectField(
    label: &'static str,
    placeholder: &'static str,
    value: Option<String>,
    options: Vec<EnumOption>,
    on_change: EventHandler<Option<String>>,
) -> Element {
    rsx! {
        label { style: "{field_label_style()}",
            "{label}"
            select {
                style: "{field_input_style()}",
                value: value.clone().unwrap_or_default(),
                onchange: move |event| on_change.call(non_empty(event.value())),
                option { value: "", "{placeholder}" }
                for item in options {
                    option { value: "{item.key}", "{item.label}" }
                }
            }
        }
    }
}

fn field_label_style() -> &'static str {
    "display: flex; flex-direction: column; gap: 4px; font-size: 12px; color: #444;"
}

fn field_input_style() -> &'static str {
    "min-width: 160px; padding: 6px; border: 1px solid #bbb; border-radius: 3px; font-size: 13px;"
}
