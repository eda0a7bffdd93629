use std::sync::Arc;

use dioxus::prelude::*;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::domain::entities::listing::Stage;
use crate::infra::graphql::client::GraphqlClient;
use crate::platform::desktop::webview::default_webview_data_dir;
use crate::ui::listing::{ListingConfig, ListingScreen};
use crate::usecase::ports::backend::PipelineBackend;
use crate::usecase::services::listing_service::ListingService;
use crate::usecase::services::retrigger_service::RetriggerService;

mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;

#[cfg(test)]
mod tests;

const GRAPHQL_ENDPOINT_VAR: &str = "ETL_DASHBOARD_GRAPHQL_ENDPOINT";
const DEFAULT_GRAPHQL_ENDPOINT: &str = "http://localhost:8000/graphql/";

/// Shared service handles, provided once at the root and consumed by every
/// listing screen through context.
#[derive(Clone)]
pub struct Services {
    pub listing: Arc<ListingService>,
    pub retrigger: Arc<RetriggerService>,
}

fn graphql_endpoint() -> String {
    std::env::var(GRAPHQL_ENDPOINT_VAR).unwrap_or_else(|_| DEFAULT_GRAPHQL_ENDPOINT.to_string())
}

fn build_services() -> Services {
    let endpoint = graphql_endpoint();
    info!(endpoint = %endpoint, "connecting to pipeline backend");
    let backend: Arc<dyn PipelineBackend> = Arc::new(GraphqlClient::new(endpoint));
    Services {
        listing: Arc::new(ListingService::new(backend.clone())),
        retrigger: Arc::new(RetriggerService::new(backend)),
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let webview_data_dir =
        default_webview_data_dir().expect("should resolve and create webview data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("ETL Dashboard"))
                .with_data_directory(webview_data_dir),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(build_services);
    let mut active_stage = use_signal(|| Stage::Extraction);

    let stage = active_stage();

    rsx! {
        div { style: "font-family: 'Segoe UI', sans-serif; padding: 12px; background: #f6f6f6; min-height: 100vh; height: 100vh; overflow: auto; display: flex; flex-direction: column;",
            div { style: "display: flex; gap: 8px; align-items: center; margin-bottom: 12px;",
                h1 { style: "margin: 0 12px 0 0; font-size: 20px;", "ETL Dashboard" }
                for tab in [Stage::Extraction, Stage::Transform, Stage::Load] {
                    button {
                        style: tab_style(tab == stage),
                        onclick: move |_| active_stage.set(tab),
                        "{tab.title()}"
                    }
                }
            }
            // Distinct branches so switching tabs drops the old screen's state.
            if stage == Stage::Extraction {
                ListingScreen { config: ListingConfig::for_stage(Stage::Extraction) }
            }
            if stage == Stage::Transform {
                ListingScreen { config: ListingConfig::for_stage(Stage::Transform) }
            }
            if stage == Stage::Load {
                ListingScreen { config: ListingConfig::for_stage(Stage::Load) }
            }
        }
    }
}

fn tab_style(active: bool) -> String {
    let (background, color, border) = if active {
        ("#00538e", "#fff", "#00538e")
    } else {
        ("#fff", "#333", "#bbb")
    };
    format!(
        "border: 1px solid {border}; background: {background}; color: {color}; padding: 4px 14px; border-radius: 6px; cursor: pointer;"
    )
}
