use dioxus::prelude::*;

use crate::domain::entities::records::{KeyFigure, SourceStatusCount};

const FAILED_COLOR: &str = "#a56eff";
const IN_PROGRESS_COLOR: &str = "#009d9a";
const PENDING_COLOR: &str = "#002d9c";
const SUCCESS_COLOR: &str = "#fa4d56";

const LEGEND: &[(&str, &str)] = &[
    ("Failed", FAILED_COLOR),
    ("In Progress", IN_PROGRESS_COLOR),
    ("Pending", PENDING_COLOR),
    ("Succeeded", SUCCESS_COLOR),
];

#[component]
pub fn KeyFigures(figures: Vec<KeyFigure>) -> Element {
    rsx! {
        div { style: "display: flex; gap: 12px; margin: 12px 0;",
            for figure in figures {
                div { style: "flex: 1; background: #fff; border: 1px solid #ddd; border-radius: 4px; padding: 12px;",
                    div { style: "font-size: 28px; font-weight: 600;", "{figure.value}" }
                    div { style: "color: #666; margin-top: 4px; font-size: 13px;", "{figure.label}" }
                }
            }
        }
    }
}

/// One stacked horizontal bar per source, segment widths proportional to the
/// four status counts.
#[component]
pub fn SourceChart(counts: Vec<SourceStatusCount>) -> Element {
    if counts.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { style: "background: #fff; border: 1px solid #ddd; border-radius: 4px; padding: 12px; margin: 12px 0;",
            div { style: "display: flex; gap: 16px; margin-bottom: 8px;",
                for (label, color) in LEGEND.iter().copied() {
                    span { style: "display: inline-flex; align-items: center; gap: 4px; font-size: 12px; color: #444;",
                        span { style: "width: 10px; height: 10px; background: {color}; display: inline-block;" }
                        "{label}"
                    }
                }
            }
            {counts.iter().map(|row| {
                let total = row.total();
                let segments = [
                    (row.failed_count, FAILED_COLOR),
                    (row.in_progress_count, IN_PROGRESS_COLOR),
                    (row.pending_count, PENDING_COLOR),
                    (row.success_count, SUCCESS_COLOR),
                ];
                rsx! {
                    div { style: "display: flex; align-items: center; gap: 8px; margin: 4px 0;",
                        span { style: "width: 160px; font-size: 13px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                            "{row.source}"
                        }
                        div { style: "flex: 1; display: flex; height: 18px; background: #f4f4f4;",
                            {segments.iter().filter(|(count, _)| *count > 0).map(|(count, color)| {
                                let width = (*count as f64) * 100.0 / (total.max(1) as f64);
                                rsx! {
                                    div {
                                        style: "width: {width}%; background: {color};",
                                        title: "{count}",
                                    }
                                }
                            })}
                        }
                        span { style: "width: 64px; text-align: right; font-size: 13px;", "{total}" }
                    }
                }
            })}
        }
    }
}
