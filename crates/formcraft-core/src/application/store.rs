//! Form store
//!
//! In-memory authority over the form being edited. All builder mutations go
//! through here; durable writes happen only in `save_form` and `delete_form`
//! (directly, or through the debounced autosave).
//!
//! Session lifecycle:
//! - `init(None)` starts a fresh untitled form, `init(Some(id))` loads one
//! - mutations restart the autosave window
//! - `poll_autosave` saves once the window has elapsed
//! - `end_session` flushes, `abandon_session` drops pending work

use parking_lot::Mutex;
use std::sync::Arc;

use crate::application::debounce::Debouncer;
use crate::application::repository::FormRepository;
use crate::config::{AutosaveConfig, FormcraftConfig};
use crate::domain::aggregates::{Field, FieldPatch, FormDefinition};
use crate::domain::events::BuilderEvent;
use crate::domain::services::reorder::{reorder, DragSession, HoverGeometry};
use crate::domain::value_objects::{FieldId, FieldOption, FieldType, FormId};
use crate::error::{FormsError, Result};
use crate::infrastructure::{open_storage, SystemClock};
use crate::ports::clock::Clock;

/// Store shared between the presentation layer and the autosave driver
pub type SharedFormStore = Arc<Mutex<FormStore>>;

/// Persistence state shown next to the editor
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveStatus {
    /// Durable copy matches memory
    Saved,
    /// Edited, no save scheduled (autosave off)
    Unsaved,
    /// Autosave window running
    Saving,
    /// Last save failed; memory still holds the edits
    Error(String),
}

pub struct FormStore {
    repo: FormRepository,
    clock: Arc<dyn Clock>,
    form: FormDefinition,
    selected: Option<FieldId>,
    autosave: Option<Debouncer>,
    dirty: bool,
    status: SaveStatus,
    events: Vec<BuilderEvent>,
}

impl FormStore {
    /// Store holding a fresh untitled form
    pub fn new(repo: FormRepository, clock: Arc<dyn Clock>, autosave: &AutosaveConfig) -> Self {
        Self {
            repo,
            clock,
            form: FormDefinition::untitled(),
            selected: None,
            autosave: autosave.enabled.then(|| Debouncer::new(autosave.window())),
            dirty: false,
            status: SaveStatus::Saved,
            events: Vec::new(),
        }
    }

    /// Store over the configured storage backend with the system clock
    pub fn from_config(config: &FormcraftConfig) -> Result<Self> {
        let storage = open_storage(&config.storage)?;
        let repo = FormRepository::with_config(storage, &config.storage);
        Ok(Self::new(repo, Arc::new(SystemClock), &config.autosave))
    }

    pub fn into_shared(self) -> SharedFormStore {
        Arc::new(Mutex::new(self))
    }

    // =========================================================================
    // Session lifecycle
    // =========================================================================

    /// Start a session on `form_id`, or on a fresh form
    ///
    /// An id that is not persisted starts a fresh form. Returns whether an
    /// existing definition was loaded.
    pub fn init(&mut self, form_id: Option<&FormId>) -> Result<bool> {
        let found = match form_id {
            Some(id) => {
                let found = self.repo.find_form(id)?;
                if found.is_none() {
                    tracing::warn!(form_id = %id, "form not found, starting a new one");
                }
                found
            }
            None => None,
        };
        let loaded = found.is_some();
        self.start_session(found.unwrap_or_default(), loaded);
        Ok(loaded)
    }

    /// Start a session on an existing definition; unknown ids are an error
    pub fn load(&mut self, form_id: &FormId) -> Result<()> {
        let form = self
            .repo
            .find_form(form_id)?
            .ok_or_else(|| FormsError::FormNotFound(form_id.clone()))?;
        self.start_session(form, true);
        Ok(())
    }

    /// Flush unsaved edits and close the session
    pub fn end_session(mut self) -> Result<Option<FormId>> {
        if self.dirty {
            return self.save_form().map(Some);
        }
        self.cancel_pending();
        Ok(None)
    }

    /// Drop any pending autosave without writing it
    pub fn abandon_session(&mut self) -> bool {
        let cancelled = self.cancel_pending();
        if cancelled {
            tracing::debug!(form_id = %self.form.id, "pending autosave dropped");
        }
        cancelled
    }

    fn start_session(&mut self, form: FormDefinition, loaded: bool) {
        self.cancel_pending();
        tracing::debug!(form_id = %form.id, loaded, "builder session started");
        self.events.push(BuilderEvent::SessionStarted {
            form_id: form.id.clone(),
            loaded,
        });
        self.form = form;
        self.selected = None;
        self.dirty = false;
        self.status = SaveStatus::Saved;
    }

    // =========================================================================
    // Snapshot access
    // =========================================================================

    pub fn form(&self) -> &FormDefinition {
        &self.form
    }

    pub fn id(&self) -> &FormId {
        &self.form.id
    }

    pub fn title(&self) -> &str {
        &self.form.title
    }

    pub fn fields(&self) -> &[Field] {
        &self.form.fields
    }

    pub fn field(&self, id: &FieldId) -> Option<&Field> {
        self.form.field(id)
    }

    /// The selected field, looked up in the current field list
    pub fn selected_field(&self) -> Option<&Field> {
        self.selected.as_ref().and_then(|id| self.form.field(id))
    }

    pub fn save_status(&self) -> &SaveStatus {
        &self.status
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn has_pending_save(&self) -> bool {
        self.autosave.as_ref().is_some_and(Debouncer::is_pending)
    }

    pub fn repository(&self) -> &FormRepository {
        &self.repo
    }

    pub fn take_events(&mut self) -> Vec<BuilderEvent> {
        std::mem::take(&mut self.events)
    }

    /// Path a filler opens: `/fill/<id>`
    pub fn share_path(&self) -> String {
        format!("/fill/{}", self.form.id)
    }

    /// Path of the submissions view: `/submissions/<id>`
    pub fn submissions_path(&self) -> String {
        format!("/submissions/{}", self.form.id)
    }

    pub fn share_url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.share_path())
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        if title == self.form.title {
            return;
        }
        self.form.title = title.clone();
        self.events.push(BuilderEvent::TitleChanged {
            form_id: self.form.id.clone(),
            title,
        });
        self.touch();
    }

    /// Append a field with type defaults and select it
    pub fn add_field(&mut self, field_type: FieldType) -> FieldId {
        let field = Field::create(field_type);
        let id = field.id().clone();
        let index = self.form.fields.len();
        self.form.fields.push(field);
        tracing::debug!(field_id = %id, %field_type, index, "field added");

        self.events.push(BuilderEvent::FieldAdded {
            field_id: id.clone(),
            field_type,
            index,
        });
        self.set_selection(Some(id.clone()));
        self.touch();
        id
    }

    /// `add_field` from a palette name such as `"dropdown"`
    pub fn add_field_named(&mut self, field_type: &str) -> Result<FieldId> {
        let field_type: FieldType = field_type.parse()?;
        Ok(self.add_field(field_type))
    }

    /// Merge `patch` into the field with `id`
    pub fn update_field(&mut self, id: &FieldId, patch: FieldPatch) -> Result<()> {
        let field = self
            .form
            .field_mut(id)
            .ok_or_else(|| FormsError::FieldNotFound(id.clone()))?;
        patch.apply_to(field)?;
        tracing::debug!(field_id = %id, "field updated");
        self.events.push(BuilderEvent::FieldUpdated {
            field_id: id.clone(),
        });
        self.touch();
        Ok(())
    }

    /// Remove the field with `id`; selection is cleared only if it pointed there
    pub fn delete_field(&mut self, id: &FieldId) -> Result<Field> {
        let index = self
            .form
            .position(id)
            .ok_or_else(|| FormsError::FieldNotFound(id.clone()))?;
        let removed = self.form.fields.remove(index);
        tracing::debug!(field_id = %id, index, "field removed");

        self.events.push(BuilderEvent::FieldRemoved {
            field_id: id.clone(),
            index,
        });
        if self.selected.as_ref() == Some(id) {
            self.set_selection(None);
        }
        self.touch();
        Ok(removed)
    }

    pub fn move_field(&mut self, from: usize, to: usize) -> Result<()> {
        let fields = reorder(&self.form.fields, from, to)?;
        if from == to {
            return Ok(());
        }
        let field_id = fields[to].id().clone();
        self.form.fields = fields;
        tracing::debug!(field_id = %field_id, from, to, "field moved");

        self.events.push(BuilderEvent::FieldMoved { field_id, from, to });
        self.touch();
        Ok(())
    }

    /// Apply one hover event of a drag; returns whether the fields moved
    pub fn hover_drag(
        &mut self,
        drag: &mut DragSession,
        hover_index: usize,
        pointer_y: f64,
        geometry: HoverGeometry,
    ) -> Result<bool> {
        let len = self.form.fields.len();
        if hover_index >= len {
            return Err(FormsError::IndexOutOfRange {
                index: hover_index,
                len,
            });
        }
        match drag.hover(hover_index, pointer_y, geometry) {
            Some((from, to)) => self.move_field(from, to).map(|_| true),
            None => Ok(false),
        }
    }

    pub fn select_field(&mut self, id: Option<&FieldId>) -> Result<()> {
        if let Some(id) = id {
            if self.form.field(id).is_none() {
                return Err(FormsError::FieldNotFound(id.clone()));
            }
        }
        self.set_selection(id.cloned());
        Ok(())
    }

    pub fn add_option(&mut self, id: &FieldId) -> Result<usize> {
        let index = self.field_mut(id)?.add_option()?;
        self.option_changed(id);
        Ok(index)
    }

    pub fn update_option(&mut self, id: &FieldId, index: usize, option: FieldOption) -> Result<()> {
        self.field_mut(id)?.update_option(index, option)?;
        self.option_changed(id);
        Ok(())
    }

    pub fn remove_option(&mut self, id: &FieldId, index: usize) -> Result<FieldOption> {
        let removed = self.field_mut(id)?.remove_option(index)?;
        self.option_changed(id);
        Ok(removed)
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Persist the current form now, cancelling any pending autosave
    pub fn save_form(&mut self) -> Result<FormId> {
        self.cancel_pending();
        let saved_at = self.clock.now();
        let mut record = self.form.clone();
        record.last_saved = Some(saved_at);

        match self.repo.upsert_form(&record) {
            Ok(()) => {
                self.form.last_saved = Some(saved_at);
                self.dirty = false;
                self.status = SaveStatus::Saved;
                tracing::info!(form_id = %record.id, fields = record.fields.len(), "form saved");
                self.events.push(BuilderEvent::FormSaved {
                    form_id: record.id.clone(),
                    saved_at,
                });
                Ok(record.id)
            }
            Err(err) => {
                let reason = err.to_string();
                tracing::warn!(form_id = %record.id, error = %reason, "form save failed");
                self.status = SaveStatus::Error(reason.clone());
                self.events.push(BuilderEvent::SaveFailed {
                    form_id: record.id,
                    reason,
                });
                // retry on the next window
                if let Some(debouncer) = self.autosave.as_mut() {
                    debouncer.schedule(saved_at);
                }
                Err(err)
            }
        }
    }

    /// Remove a definition and its submission log
    ///
    /// Deleting the form open in the editor resets the editor to a fresh form.
    /// On a storage error nothing is removed and the editor keeps its form.
    pub fn delete_form(&mut self, id: &FormId) -> Result<()> {
        let (removed, had_submissions) = self.repo.remove_form_with_submissions(id)?;
        tracing::info!(form_id = %id, removed, had_submissions, "form deleted");

        let was_current = &self.form.id == id;
        self.events.push(BuilderEvent::FormDeleted {
            form_id: id.clone(),
            was_current,
        });
        if was_current {
            self.start_session(FormDefinition::untitled(), false);
        }
        Ok(())
    }

    /// Save if the autosave window has elapsed
    pub fn poll_autosave(&mut self) -> Result<Option<FormId>> {
        let now = self.clock.now();
        let due = self
            .autosave
            .as_mut()
            .is_some_and(|debouncer| debouncer.take_due(now));
        if due {
            self.save_form().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Save now if an autosave is pending
    pub fn flush_pending_save(&mut self) -> Result<Option<FormId>> {
        if self.has_pending_save() {
            self.save_form().map(Some)
        } else {
            Ok(None)
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn field_mut(&mut self, id: &FieldId) -> Result<&mut Field> {
        self.form
            .field_mut(id)
            .ok_or_else(|| FormsError::FieldNotFound(id.clone()))
    }

    fn option_changed(&mut self, id: &FieldId) {
        self.events.push(BuilderEvent::FieldUpdated {
            field_id: id.clone(),
        });
        self.touch();
    }

    fn set_selection(&mut self, id: Option<FieldId>) {
        if self.selected != id {
            self.selected = id.clone();
            self.events.push(BuilderEvent::SelectionChanged { field_id: id });
        }
    }

    fn touch(&mut self) {
        self.dirty = true;
        match self.autosave.as_mut() {
            Some(debouncer) => {
                debouncer.schedule(self.clock.now());
                self.status = SaveStatus::Saving;
            }
            None => self.status = SaveStatus::Unsaved,
        }
    }

    fn cancel_pending(&mut self) -> bool {
        self.autosave.as_mut().is_some_and(Debouncer::cancel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::repository::test_support::FailingKeyStorage;
    use crate::config::DEFAULT_SUBMISSIONS_KEY;
    use crate::domain::aggregates::Submission;
    use crate::infrastructure::{InMemoryStorage, ManualClock};
    use crate::ports::storage::KeyValueStorage;
    use chrono::Duration;

    struct Harness {
        storage: Arc<InMemoryStorage>,
        clock: Arc<ManualClock>,
        store: FormStore,
    }

    fn harness() -> Harness {
        let storage = Arc::new(InMemoryStorage::new());
        let clock = Arc::new(ManualClock::default());
        let store = FormStore::new(
            FormRepository::new(storage.clone()),
            clock.clone(),
            &AutosaveConfig::default(),
        );
        Harness {
            storage,
            clock,
            store,
        }
    }

    #[test]
    fn test_add_field_appends_and_selects() {
        let mut h = harness();
        for t in FieldType::ALL {
            let before = h.store.fields().len();
            let id = h.store.add_field(t);
            assert_eq!(h.store.fields().len(), before + 1);
            let last = h.store.fields().last().unwrap();
            assert_eq!(last.id(), &id);
            assert_eq!(last.field_type(), t);
            assert_eq!(last.label, t.default_label());
            assert_eq!(h.store.selected_field().map(|f| f.id()), Some(&id));
        }
        let mut ids: Vec<_> = h.store.fields().iter().map(|f| f.id().clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), FieldType::ALL.len());
    }

    #[test]
    fn test_add_field_named_rejects_unknown_type() {
        let mut h = harness();
        assert_eq!(
            h.store.add_field_named("signature"),
            Err(FormsError::InvalidFieldType("signature".into()))
        );
        assert!(h.store.fields().is_empty());
        assert!(h.store.add_field_named("radio").is_ok());
    }

    #[test]
    fn test_update_field_reflects_in_selection() {
        let mut h = harness();
        let id = h.store.add_field(FieldType::Text);
        h.store
            .update_field(&id, FieldPatch::label("Full name"))
            .unwrap();
        assert_eq!(h.store.selected_field().unwrap().label, "Full name");

        let missing = FieldId::new();
        assert_eq!(
            h.store.update_field(&missing, FieldPatch::required(true)),
            Err(FormsError::FieldNotFound(missing))
        );
    }

    #[test]
    fn test_update_leaves_other_fields_untouched() {
        let mut h = harness();
        let a = h.store.add_field(FieldType::Text);
        let b = h.store.add_field(FieldType::Email);
        let before = h.store.field(&a).cloned();
        h.store.update_field(&b, FieldPatch::required(true)).unwrap();
        assert_eq!(h.store.field(&a).cloned(), before);
        assert!(h.store.field(&b).unwrap().required);
    }

    #[test]
    fn test_delete_field_twice() {
        let mut h = harness();
        let a = h.store.add_field(FieldType::Text);
        h.store.add_field(FieldType::Date);
        h.store.delete_field(&a).unwrap();
        assert_eq!(h.store.fields().len(), 1);
        assert!(matches!(
            h.store.delete_field(&a),
            Err(FormsError::FieldNotFound(_))
        ));
        assert_eq!(h.store.fields().len(), 1);
    }

    #[test]
    fn test_delete_field_keeps_unrelated_selection() {
        let mut h = harness();
        let a = h.store.add_field(FieldType::Text);
        let b = h.store.add_field(FieldType::Text);
        h.store.delete_field(&a).unwrap();
        assert_eq!(h.store.selected_field().map(|f| f.id()), Some(&b));
        h.store.delete_field(&b).unwrap();
        assert!(h.store.selected_field().is_none());
    }

    #[test]
    fn test_move_field() {
        let mut h = harness();
        let ids: Vec<_> = (0..3).map(|_| h.store.add_field(FieldType::Text)).collect();
        h.store.move_field(0, 2).unwrap();
        let order: Vec<_> = h.store.fields().iter().map(|f| f.id().clone()).collect();
        assert_eq!(order, vec![ids[1].clone(), ids[2].clone(), ids[0].clone()]);

        h.store.move_field(2, 0).unwrap();
        let order: Vec<_> = h.store.fields().iter().map(|f| f.id().clone()).collect();
        assert_eq!(order, ids);

        assert_eq!(
            h.store.move_field(0, 3),
            Err(FormsError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_hover_drag_moves_once() {
        let mut h = harness();
        let first = h.store.add_field(FieldType::Text);
        h.store.add_field(FieldType::Text);
        let g = HoverGeometry::new(0.0, 40.0);
        let mut drag = DragSession::start(0);

        assert!(!h.store.hover_drag(&mut drag, 1, 10.0, g).unwrap());
        assert!(h.store.hover_drag(&mut drag, 1, 30.0, g).unwrap());
        assert!(!h.store.hover_drag(&mut drag, 1, 30.0, g).unwrap());
        assert_eq!(h.store.fields()[1].id(), &first);
    }

    #[test]
    fn test_save_twice_keeps_single_record() {
        let mut h = harness();
        h.store.add_field(FieldType::Text);
        let id1 = h.store.save_form().unwrap();
        let first_saved = h.store.form().last_saved.unwrap();

        h.clock.advance(Duration::seconds(5));
        let id2 = h.store.save_form().unwrap();

        assert_eq!(id1, id2);
        let forms = h.store.repository().list_forms().unwrap();
        assert_eq!(forms.len(), 1);
        assert!(forms[0].last_saved.unwrap() > first_saved);
        assert_eq!(h.store.save_status(), &SaveStatus::Saved);
    }

    #[test]
    fn test_autosave_debounce() {
        let mut h = harness();
        h.store.set_title("Survey");
        assert_eq!(h.store.save_status(), &SaveStatus::Saving);

        h.clock.advance(Duration::milliseconds(600));
        h.store.add_field(FieldType::Text);
        h.clock.advance(Duration::milliseconds(600));
        assert_eq!(h.store.poll_autosave().unwrap(), None);

        h.clock.advance(Duration::milliseconds(400));
        assert_eq!(h.store.poll_autosave().unwrap(), Some(h.store.id().clone()));
        assert_eq!(h.store.repository().list_forms().unwrap()[0].title, "Survey");
        assert_eq!(h.store.poll_autosave().unwrap(), None);
    }

    #[test]
    fn test_flush_pending_save() {
        let mut h = harness();
        assert_eq!(h.store.flush_pending_save().unwrap(), None);
        h.store.add_field(FieldType::Date);
        assert!(h.store.has_pending_save());
        assert!(h.store.flush_pending_save().unwrap().is_some());
        assert!(!h.store.has_pending_save());
        assert_eq!(h.store.repository().list_forms().unwrap().len(), 1);
    }

    #[test]
    fn test_save_failure_keeps_memory_and_retries() {
        let mut h = harness();
        let field = h.store.add_field(FieldType::Text);
        h.storage.set_enabled(false);

        assert!(matches!(
            h.store.save_form(),
            Err(FormsError::StorageUnavailable(_))
        ));
        assert!(matches!(h.store.save_status(), SaveStatus::Error(_)));
        assert!(h.store.field(&field).is_some());
        assert!(h.store.form().last_saved.is_none());
        assert!(h.store.has_pending_save());

        h.storage.set_enabled(true);
        h.clock.advance(Duration::seconds(2));
        assert!(h.store.poll_autosave().unwrap().is_some());
        assert_eq!(h.store.save_status(), &SaveStatus::Saved);
    }

    #[test]
    fn test_abandon_session_drops_pending_save() {
        let mut h = harness();
        h.store.add_field(FieldType::Text);
        assert!(h.store.abandon_session());
        h.clock.advance(Duration::seconds(10));
        assert_eq!(h.store.poll_autosave().unwrap(), None);
        assert!(h.storage.get("formBuilderForms").unwrap().is_none());
    }

    #[test]
    fn test_end_session_flushes() {
        let mut h = harness();
        h.store.add_field(FieldType::Text);
        let id = h.store.id().clone();
        let repo = h.store.repository().clone();
        assert_eq!(h.store.end_session().unwrap(), Some(id.clone()));
        assert!(repo.find_form(&id).unwrap().is_some());
    }

    #[test]
    fn test_init_loads_or_starts_fresh() {
        let mut h = harness();
        h.store.set_title("Saved one");
        let id = h.store.save_form().unwrap();

        assert!(!h.store.init(None).unwrap());
        assert_ne!(h.store.id(), &id);
        assert_eq!(h.store.title(), "Untitled Form");

        assert!(h.store.init(Some(&id)).unwrap());
        assert_eq!(h.store.title(), "Saved one");

        assert!(!h.store.init(Some(&FormId::new())).unwrap());
        assert_eq!(h.store.title(), "Untitled Form");
        assert!(matches!(
            h.store.load(&FormId::new()),
            Err(FormsError::FormNotFound(_))
        ));
    }

    #[test]
    fn test_delete_current_form_resets_editor() {
        let mut h = harness();
        h.store.add_field(FieldType::Text);
        let id = h.store.save_form().unwrap();

        h.store.delete_form(&id).unwrap();
        assert_ne!(h.store.id(), &id);
        assert!(h.store.fields().is_empty());
        assert!(h.store.selected_field().is_none());
        assert!(h.store.repository().find_form(&id).unwrap().is_none());
    }

    #[test]
    fn test_failed_delete_keeps_form_and_log() {
        let storage = Arc::new(FailingKeyStorage::default());
        let repo = FormRepository::new(storage.clone());
        let mut store = FormStore::new(
            repo.clone(),
            Arc::new(ManualClock::default()),
            &AutosaveConfig::default(),
        );
        store.add_field(FieldType::Text);
        let id = store.save_form().unwrap();
        repo.append_submission(
            &id,
            Submission::create(store.form().blank_form_data(), chrono::Utc::now()),
        )
        .unwrap();

        storage.fail_writes_to(DEFAULT_SUBMISSIONS_KEY);
        assert!(matches!(
            store.delete_form(&id),
            Err(FormsError::StorageUnavailable(_))
        ));
        assert_eq!(store.id(), &id);
        assert_eq!(store.fields().len(), 1);
        assert!(repo.find_form(&id).unwrap().is_some());
        assert_eq!(repo.submissions_for(&id).unwrap().len(), 1);
    }

    #[test]
    fn test_option_editing_through_store() {
        let mut h = harness();
        let id = h.store.add_field(FieldType::Dropdown);
        assert_eq!(h.store.add_option(&id).unwrap(), 1);
        h.store
            .update_option(&id, 0, FieldOption::new("red", "Red"))
            .unwrap();
        assert_eq!(h.store.remove_option(&id, 1).unwrap().label, "Option 2");
        assert_eq!(
            h.store.field(&id).unwrap().options,
            vec![FieldOption::new("red", "Red")]
        );

        let text = h.store.add_field(FieldType::Text);
        assert!(matches!(
            h.store.add_option(&text),
            Err(FormsError::InapplicableProperty { .. })
        ));
    }

    #[test]
    fn test_events_and_share_paths() {
        let mut h = harness();
        let id = h.store.add_field(FieldType::Text);
        let events = h.store.take_events();
        assert!(events.contains(&BuilderEvent::SelectionChanged {
            field_id: Some(id)
        }));
        assert!(h.store.take_events().is_empty());

        let form_id = h.store.id().clone();
        assert_eq!(h.store.share_path(), format!("/fill/{}", form_id));
        assert_eq!(h.store.submissions_path(), format!("/submissions/{}", form_id));
        assert_eq!(
            h.store.share_url("https://forms.example.com/"),
            format!("https://forms.example.com/fill/{}", form_id)
        );
    }

    #[test]
    fn test_autosave_disabled_marks_unsaved() {
        let storage = Arc::new(InMemoryStorage::new());
        let mut store = FormStore::new(
            FormRepository::new(storage),
            Arc::new(ManualClock::default()),
            &AutosaveConfig::disabled(),
        );
        store.add_field(FieldType::Text);
        assert_eq!(store.save_status(), &SaveStatus::Unsaved);
        assert!(!store.has_pending_save());
        assert!(store.end_session().unwrap().is_some());
    }
}
