// 🧭 Coordinator - UI events -> store mutations -> view updates -> storage sync
//
// The only component that talks to all of storage, store and view. Every
// handler runs to completion before the next event is read.

use crate::items::{parse_row_id, Calories, CaloriesError, ItemStore};
use crate::storage::ItemStorage;
use crate::view::{FormInput, UiMode, View};
use anyhow::Result;
use log::{debug, info, warn};

/// Discrete user actions the coordinator reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Add button
    AddSubmit,
    /// Edit affordance of the row with this identifier (`item-<id>`)
    EditClick(String),
    UpdateSubmit,
    DeleteSubmit,
    /// Back / cancel editing
    Back,
    ClearAll,
}

pub struct App {
    store: ItemStore,
    storage: ItemStorage,
    view: View,
    mode: UiMode,
    listening: bool,
}

impl App {
    /// Loads the persisted collection into a fresh store
    pub fn new(storage: ItemStorage) -> Self {
        let items = storage.load_all();
        info!(
            "event=collection_load module=app status=ok items={}",
            items.len()
        );

        Self {
            store: ItemStore::new(items),
            storage,
            view: View::new(),
            mode: UiMode::Default,
            listening: false,
        }
    }

    /// Startup: default controls, initial list and total, then start
    /// accepting events. Only the first call has any effect.
    pub fn init(&mut self) {
        if self.listening {
            warn!("event=app_init module=app status=skipped reason=already_initialized");
            return;
        }

        self.clear_edit_state();

        if self.store.is_empty() {
            self.view.hide_list();
        } else {
            self.view.render_list(self.store.list());
        }
        self.refresh_total();

        self.listening = true;
        info!(
            "event=app_init module=app status=ok items={} total={}",
            self.store.len(),
            self.store.total_calories()
        );
    }

    pub fn handle(&mut self, event: UiEvent) {
        if !self.listening {
            debug!("event=ui_event module=app status=ignored reason=not_initialized");
            return;
        }

        match event {
            UiEvent::AddSubmit => self.item_add_submit(),
            UiEvent::EditClick(row_id) => self.item_edit_click(&row_id),
            UiEvent::UpdateSubmit => self.item_update_submit(),
            UiEvent::DeleteSubmit => self.item_delete_submit(),
            UiEvent::Back => self.clear_edit_state(),
            UiEvent::ClearAll => self.clear_all_items(),
        }
    }

    pub fn mode(&self) -> UiMode {
        self.mode
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn storage(&self) -> &ItemStorage {
        &self.storage
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    // ========================================================================
    // HANDLERS
    // ========================================================================

    fn item_add_submit(&mut self) {
        let Some((name, calories)) = validated_input(self.view.read_input()) else {
            return;
        };

        let Some(item) = self.store.create(name, calories) else {
            warn!("event=item_add module=app status=ignored reason=id_space_exhausted");
            return;
        };
        self.view.append_row(&item);
        self.refresh_total();
        log_storage_failure("save", self.storage.save(&item));
        self.view.clear_inputs();

        info!(
            "event=item_add module=app status=ok id={} calories={}",
            item.id, item.calories
        );
    }

    fn item_edit_click(&mut self, row_id: &str) {
        let Some(id) = parse_row_id(row_id) else {
            debug!("event=item_edit module=app status=ignored row_id={}", row_id);
            return;
        };
        let Some(item) = self.store.find_by_id(id).cloned() else {
            debug!("event=item_edit module=app status=miss id={}", id);
            return;
        };

        self.store.set_selected(&item);
        self.view.fill_form_for_edit(&item);
        self.set_mode(UiMode::Editing);

        debug!("event=item_edit module=app status=ok id={}", id);
    }

    fn item_update_submit(&mut self) {
        if self.store.get_selected().is_none() {
            debug!("event=item_update module=app status=ignored reason=no_selection");
            return;
        }
        let Some((name, calories)) = validated_input(self.view.read_input()) else {
            return;
        };
        let Some(updated) = self.store.update_selected(name, calories) else {
            return;
        };

        self.view.update_row(&updated);
        self.refresh_total();
        log_storage_failure("update", self.storage.update(&updated));
        self.clear_edit_state();

        info!(
            "event=item_update module=app status=ok id={} calories={}",
            updated.id, updated.calories
        );
    }

    fn item_delete_submit(&mut self) {
        let Some(id) = self.store.get_selected().map(|item| item.id) else {
            debug!("event=item_delete module=app status=ignored reason=no_selection");
            return;
        };

        self.store.remove(id);
        self.view.remove_row(id);
        self.refresh_total();
        log_storage_failure("remove", self.storage.remove(id));
        if self.store.is_empty() {
            self.view.hide_list();
        }
        self.clear_edit_state();

        info!("event=item_delete module=app status=ok id={}", id);
    }

    fn clear_all_items(&mut self) {
        let removed = self.store.len();

        self.store.clear();
        self.refresh_total();
        self.view.remove_rows();
        log_storage_failure("clear", self.storage.clear());
        self.view.hide_list();
        self.clear_edit_state();

        info!("event=items_clear module=app status=ok removed={}", removed);
    }

    // ========================================================================
    // HELPERS
    // ========================================================================

    /// Back to Default: no selection, empty form, add-only controls
    fn clear_edit_state(&mut self) {
        self.store.clear_selected();
        self.view.clear_inputs();
        self.set_mode(UiMode::Default);
    }

    fn set_mode(&mut self, mode: UiMode) {
        self.mode = mode;
        self.view.render_controls(mode);
    }

    fn refresh_total(&mut self) {
        let total = self.store.total_calories();
        self.view.set_total_display(total);
    }
}

/// Both fields present and calories a whole non-negative number.
/// Anything else is dropped without a user-visible message.
fn validated_input(input: FormInput) -> Option<(String, Calories)> {
    if input.name.is_empty() || input.calories.is_empty() {
        debug!("event=input_check module=app status=ignored reason=empty_field");
        return None;
    }

    match input.calories.parse::<Calories>() {
        Ok(calories) => Some((input.name, calories)),
        Err(CaloriesError::Empty) => {
            debug!("event=input_check module=app status=ignored reason=empty_field");
            None
        }
        Err(err) => {
            warn!(
                "event=input_check module=app status=rejected reason=invalid_calories error={}",
                err
            );
            None
        }
    }
}

fn log_storage_failure(operation: &str, result: Result<()>) {
    if let Err(err) = result {
        warn!(
            "event=storage_{} module=app status=error error={:#}",
            operation, err
        );
    }
}

// ============================================================================
// TESTS
// ============================================================================
