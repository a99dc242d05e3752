//! Perk Details - ViewModel
//!
//! Load and delete lifecycle of the details page.
//!
//! `PerkDetailsState` holds the transitions as plain methods; `PerkDetailsVm`
//! drives them from async API calls through a [`StateStore`], which is an
//! `RwSignal` in the app and an `Rc<RefCell<_>>` in tests.

use super::model::{ApiError, Confirm, Navigator, PerkApi};
use contracts::domain::a001_perk::aggregate::{Perk, PerkId};
use contracts::shared::routes::PERKS_PATH;
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub const LOAD_FALLBACK_MESSAGE: &str = "Failed to load perk";
pub const DELETE_FALLBACK_MESSAGE: &str = "Failed to delete perk";
pub const DELETE_CONFIRM_MESSAGE: &str =
    "Are you sure you want to delete this perk? This action cannot be undone.";

/// State of one mounted details page.
#[derive(Debug, Clone, PartialEq)]
pub struct PerkDetailsState {
    pub id: Option<PerkId>,
    pub loading: bool,
    /// Empty string means "no error".
    pub error: String,
    pub perk: Option<Perk>,
    pub deleting: bool,
    /// Bumped on every identifier change; in-flight calls carry the value
    /// they were issued under.
    generation: u64,
}

impl Default for PerkDetailsState {
    fn default() -> Self {
        Self {
            id: None,
            loading: true,
            error: String::new(),
            perk: None,
            deleting: false,
            generation: 0,
        }
    }
}

/// Issued read; its result only applies while the generation is current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub id: PerkId,
    generation: u64,
}

/// Issued delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTicket {
    pub id: PerkId,
    generation: u64,
}

impl PerkDetailsState {
    /// Resets the page for `id`. Returns the ticket for the read to issue,
    /// or `None` when there is nothing to fetch.
    pub fn begin_load(&mut self, id: Option<PerkId>) -> Option<LoadTicket> {
        self.generation += 1;
        self.id = id.filter(|id| !id.is_empty());
        self.error.clear();
        self.perk = None;
        self.deleting = false;

        match &self.id {
            Some(id) => {
                self.loading = true;
                Some(LoadTicket {
                    id: id.clone(),
                    generation: self.generation,
                })
            }
            None => {
                self.loading = false;
                None
            }
        }
    }

    /// Applies a read result. Returns `false` if the ticket is stale and the
    /// result was dropped.
    pub fn apply_load(&mut self, ticket: &LoadTicket, result: Result<Perk, ApiError>) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.loading = false;
        match result {
            Ok(perk) => {
                self.perk = Some(perk);
                self.error.clear();
            }
            Err(e) => {
                self.perk = None;
                self.error = e
                    .user_message()
                    .unwrap_or_else(|| LOAD_FALLBACK_MESSAGE.to_string());
            }
        }
        true
    }

    /// Delete is offered only for a loaded perk with no delete in flight.
    pub fn can_delete(&self) -> bool {
        !self.loading && !self.deleting && self.perk.is_some() && self.id.is_some()
    }

    /// Takes the delete lock. `None` if a delete is not allowed right now.
    pub fn begin_delete(&mut self) -> Option<DeleteTicket> {
        if !self.can_delete() {
            return None;
        }
        let id = self.id.clone()?;
        self.deleting = true;
        self.error.clear();
        Some(DeleteTicket {
            id,
            generation: self.generation,
        })
    }

    pub fn is_current(&self, ticket: &DeleteTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Records a failed delete. The perk itself is left as loaded.
    pub fn apply_delete_failure(&mut self, ticket: &DeleteTicket, error: &ApiError) {
        if !self.is_current(ticket) {
            return;
        }
        self.error = error
            .user_message()
            .unwrap_or_else(|| DELETE_FALLBACK_MESSAGE.to_string());
    }

    /// Releases the delete lock taken by `ticket`.
    pub fn release_delete(&mut self, ticket: &DeleteTicket) {
        if self.is_current(ticket) {
            self.deleting = false;
        }
    }
}

/// Reactive cell holding the page state.
///
/// Both methods return `None` once the underlying cell is gone (page
/// disposed); callers treat that as "nothing to update".
pub trait StateStore: Clone + 'static {
    fn read_state<R>(&self, f: impl FnOnce(&PerkDetailsState) -> R) -> Option<R>;
    fn write_state<R>(&self, f: impl FnOnce(&mut PerkDetailsState) -> R) -> Option<R>;
}

impl StateStore for RwSignal<PerkDetailsState> {
    fn read_state<R>(&self, f: impl FnOnce(&PerkDetailsState) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn write_state<R>(&self, f: impl FnOnce(&mut PerkDetailsState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl StateStore for Rc<RefCell<PerkDetailsState>> {
    fn read_state<R>(&self, f: impl FnOnce(&PerkDetailsState) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn write_state<R>(&self, f: impl FnOnce(&mut PerkDetailsState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// ViewModel for the perk details page.
#[derive(Clone)]
pub struct PerkDetailsVm<S: StateStore> {
    pub state: S,
    api: Rc<dyn PerkApi>,
    navigator: Rc<dyn Navigator>,
    confirm: Rc<dyn Confirm>,
}

impl<S: StateStore> PerkDetailsVm<S> {
    pub fn new(
        state: S,
        api: Rc<dyn PerkApi>,
        navigator: Rc<dyn Navigator>,
        confirm: Rc<dyn Confirm>,
    ) -> Self {
        Self {
            state,
            api,
            navigator,
            confirm,
        }
    }

    /// Load the perk for `id` (called on mount and on every id change).
    pub async fn load(&self, id: Option<PerkId>) {
        let Some(ticket) = self.state.write_state(|s| s.begin_load(id)).flatten() else {
            log::debug!("perk details: no id, nothing to load");
            return;
        };

        log::debug!("perk details: loading {}", ticket.id);
        let result = self.api.read(&ticket.id).await;
        if let Err(e) = &result {
            log::warn!("perk details: failed to load {}: {}", ticket.id, e);
        }

        let applied = self
            .state
            .write_state(|s| s.apply_load(&ticket, result))
            .unwrap_or(false);
        if !applied {
            log::debug!("perk details: dropped stale response for {}", ticket.id);
        }
    }

    /// Confirm, delete, and leave for the list on success.
    ///
    /// Ignored while a delete is already in flight.
    pub async fn delete(&self) {
        if !self.state.read_state(|s| s.can_delete()).unwrap_or(false) {
            log::debug!("perk details: delete ignored");
            return;
        }
        if !self.confirm.confirm(DELETE_CONFIRM_MESSAGE) {
            return;
        }
        let Some(ticket) = self.state.write_state(|s| s.begin_delete()).flatten() else {
            return;
        };

        log::info!("perk details: deleting {}", ticket.id);
        match self.api.remove(&ticket.id).await {
            Ok(()) => {
                if self.state.read_state(|s| s.is_current(&ticket)).unwrap_or(false) {
                    self.navigator.go_to(PERKS_PATH);
                } else {
                    log::debug!("perk details: {} deleted after page changed", ticket.id);
                }
            }
            Err(e) => {
                log::warn!("perk details: failed to delete {}: {}", ticket.id, e);
                self.state.write_state(|s| s.apply_delete_failure(&ticket, &e));
            }
        }
        self.state.write_state(|s| s.release_delete(&ticket));
    }
}
