//! Drives a [`ViewState`] against the command surface.

use super::state::{transition, Effect, UiEvent, ViewState};
use crate::app::{DrugNameCreateReq, DrugNameUpdateReq};
use crate::commands::{
    cmd_drug_name_create, cmd_drug_name_delete, cmd_drug_name_list_paged, cmd_drug_name_update,
    ActionResult, DrugNameIdReq, DrugNameListReq, ListPagedResult,
};
use crate::infra::DbPool;

pub struct Session<'p> {
    pool: &'p DbPool,
    page_size: i64,
    state: ViewState,
}

impl<'p> Session<'p> {
    /// Open the view on page 1.
    pub fn open(pool: &'p DbPool, page_size: i64) -> Self {
        let mut session = Self {
            pool,
            page_size,
            state: ViewState::default(),
        };
        session.run(Effect::Fetch(1));
        session
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn dispatch(&mut self, event: UiEvent) {
        let (next, effect) = transition(std::mem::take(&mut self.state), event);
        self.state = next;
        if let Some(effect) = effect {
            self.run(effect);
        }
    }

    fn run(&mut self, effect: Effect) {
        // Failures are logged only; the view keeps its previous state.
        let follow_up = match effect {
            Effect::Fetch(page) => {
                let req = DrugNameListReq {
                    page: Some(page),
                    page_size: Some(self.page_size),
                };
                match cmd_drug_name_list_paged(self.pool, Some(req), self.page_size) {
                    ListPagedResult::Page(p) => Some(UiEvent::PageLoaded(p)),
                    ListPagedResult::Error { error } => {
                        log::error!("{}", error);
                        None
                    }
                }
            }
            Effect::Create { drug_name } => {
                let res = cmd_drug_name_create(self.pool, DrugNameCreateReq { drug_name });
                on_success(res, UiEvent::Created)
            }
            Effect::Update { id, drug_name } => {
                let res = cmd_drug_name_update(self.pool, DrugNameUpdateReq { id, drug_name });
                on_success(res, UiEvent::Updated)
            }
            Effect::Delete { id } => {
                let res = cmd_drug_name_delete(self.pool, DrugNameIdReq { id });
                on_success(res, UiEvent::Deleted)
            }
        };
        if let Some(event) = follow_up {
            self.dispatch(event);
        }
    }
}

fn on_success(res: ActionResult, event: UiEvent) -> Option<UiEvent> {
    match res {
        ActionResult::Success { .. } => Some(event),
        ActionResult::Error { error } => {
            log::error!("{}", error);
            None
        }
    }
}
