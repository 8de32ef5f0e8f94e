use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::dataset::GroupingField;
use crate::usecase::services::session_service::SessionState;

pub struct AppState {
    pub session: Signal<SessionState>,
    pub active_tab: Signal<GroupingField>,
    pub busy: Signal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: use_signal(|| SessionState::Empty),
            active_tab: use_signal(|| GroupingField::InvestmentType),
            busy: use_signal(|| false),
        }
    }
}
