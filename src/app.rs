use std::sync::Arc;

use dioxus::prelude::*;
use rfd::FileDialog;

use crate::config::AppConfig;
use crate::domain::entities::dataset::GroupingField;
use crate::infra::import::SPREADSHEET_EXTENSIONS;
use crate::infra::sqlite::store::SqliteStore;
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::components::legend::Legend;
use crate::ui::components::notice::{Notice, NoticeLevel};
use crate::ui::components::ring_chart::RingChart;
use crate::ui::state::app_state::AppState;
use crate::usecase::ports::store::DatasetStore;
use crate::usecase::services::report_service::{build_report, GroupingView};
use crate::usecase::services::session_service::{SessionService, SessionState};

pub const EMPTY_GROUPING_NOTICE: &str = "Nenhum dado para exibir.";
pub const NO_DATA_NOTICE: &str = "Por favor, envie um arquivo Excel para visualizar o gráfico.";

pub fn tab_button_style(active: bool) -> &'static str {
    if active {
        "border: none; border-bottom: 2px solid #4A90E2; background: transparent; padding: 8px 16px; cursor: pointer; font-weight: 600; color: #1f1f1f;"
    } else {
        "border: none; border-bottom: 2px solid transparent; background: transparent; padding: 8px 16px; cursor: pointer; color: #666;"
    }
}

#[component]
fn GroupingPanel(view: GroupingView) -> Element {
    match view.chart {
        Some(chart) => rsx! {
            RingChart { layout: chart.ring }
            hr { style: "border: none; border-top: 1px solid #e5e5e5; margin: 12px 0;" }
            Legend { rows: chart.legend }
        },
        None => rsx! {
            Notice { level: NoticeLevel::Warning, message: EMPTY_GROUPING_NOTICE.to_string() }
        },
    }
}

/// Session service backed by the SQLite file named in `config`.
pub fn open_session_service(config: &AppConfig) -> Arc<SessionService> {
    let store: Arc<dyn DatasetStore> = Arc::new(SqliteStore::new(config.data_file.clone()));
    Arc::new(SessionService::new(store))
}

#[component]
pub fn App() -> Element {
    let AppState {
        mut session,
        mut active_tab,
        mut busy,
    } = AppState::new();

    // Resolved once inside the hook so every render calls the same hooks.
    let session_service = use_hook(|| {
        AppConfig::from_env()
            .map(|config| open_session_service(&config))
            .map_err(|err| err.to_string())
    });

    let service_for_init = session_service.clone();
    use_effect(move || {
        let Ok(service) = &service_for_init else {
            return;
        };
        *busy.write() = true;
        let state = run_blocking("load persisted dataset", || service.start());
        *session.write() = state;
        *busy.write() = false;
    });

    let service_for_upload = match session_service {
        Ok(service) => service,
        Err(err) => {
            return rsx! {
                div {
                    p { "Não foi possível localizar a pasta de dados: {err}" }
                }
            };
        }
    };

    let (report, meta, failure, is_empty) = match &*session.read() {
        SessionState::Ready(stored) => (
            Some(build_report(&stored.dataset)),
            Some(stored.meta.clone()),
            None,
            false,
        ),
        SessionState::Failed(message) => (None, None, Some(message.clone()), false),
        SessionState::Empty => (None, None, None, true),
    };

    let body = match report {
        Some(report) => {
            let active = active_tab();
            let active_view = report.view(active).cloned();
            rsx! {
                div {
                    style: "text-align: center; margin-top: 8px; margin-bottom: 20px;",
                    h4 { style: "font-weight: normal; margin-bottom: 0;", "Total da carteira" }
                    h2 { style: "margin-top: 0;", "{report.total_label}" }
                }
                div {
                    style: "display: flex; gap: 4px; border-bottom: 1px solid #e5e5e5;",
                    for field in GroupingField::ALL {
                        button {
                            style: tab_button_style(field == active),
                            onclick: move |_| active_tab.set(field),
                            "{field.tab_label()}"
                        }
                    }
                }
                if let Some(view) = active_view {
                    GroupingPanel { view }
                }
            }
        }
        None if is_empty && !busy() => rsx! {
            Notice { level: NoticeLevel::Info, message: NO_DATA_NOTICE.to_string() }
        },
        None => rsx! {},
    };

    rsx! {
        div {
            style: "max-width: 720px; margin: 0 auto; padding: 16px; font-family: sans-serif;",
            nav {
                style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; padding: 8px 0;",
                button {
                    disabled: busy(),
                    title: "Excel com colunas: Empresa, Tipo de Investimento, Valor",
                    onclick: move |_| {
                        if busy() {
                            return;
                        }

                        let Some(file_path) = FileDialog::new()
                            .add_filter("Planilha", &SPREADSHEET_EXTENSIONS)
                            .pick_file() else {
                            return;
                        };

                        *busy.write() = true;
                        let state = run_blocking("upload spreadsheet", || service_for_upload.upload(&file_path));
                        *session.write() = state;
                        *busy.write() = false;
                    },
                    "📁 Upload Excel"
                }
                if let Some(meta) = meta {
                    span {
                        style: "color: #666; font-size: 13px;",
                        "{meta.source_name} · {meta.imported_at}"
                    }
                }
            }

            if let Some(message) = failure {
                Notice { level: NoticeLevel::Error, message }
            }

            {body}
        }
    }
}
