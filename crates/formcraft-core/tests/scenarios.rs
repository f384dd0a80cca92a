//! End-to-end builder and filler flows over in-memory storage

use std::sync::Arc;

use formcraft_core::config::AutosaveConfig;
use formcraft_core::domain::FieldOption;
use formcraft_core::infrastructure::{InMemoryStorage, ManualClock};
use formcraft_core::ports::KeyValueStorage;
use formcraft_core::{
    FieldPatch, FieldType, FieldValue, FormFiller, FormRepository, FormStore, FormsError,
    SubmissionRecorder, ValidationPolicy,
};

struct World {
    storage: Arc<InMemoryStorage>,
    clock: Arc<ManualClock>,
    repo: FormRepository,
}

impl World {
    fn new() -> Self {
        let storage = Arc::new(InMemoryStorage::new());
        Self {
            repo: FormRepository::new(storage.clone()),
            storage,
            clock: Arc::new(ManualClock::default()),
        }
    }

    fn store(&self) -> FormStore {
        FormStore::new(self.repo.clone(), self.clock.clone(), &AutosaveConfig::default())
    }

    fn recorder(&self) -> SubmissionRecorder {
        SubmissionRecorder::new(self.repo.clone(), self.clock.clone(), ValidationPolicy::default())
    }
}

#[test]
fn required_text_field_rejects_empty_then_accepts() {
    let world = World::new();
    let mut store = world.store();
    let field_id = store.add_field(FieldType::Text);
    store
        .update_field(&field_id, FieldPatch::required(true))
        .unwrap();
    let form_id = store.save_form().unwrap();

    let mut filler = FormFiller::open(&world.repo, world.recorder(), &form_id).unwrap();
    match filler.submit() {
        Err(FormsError::RequiredFieldEmpty { field_id: id, .. }) => assert_eq!(id, field_id),
        other => panic!("expected RequiredFieldEmpty, got {other:?}"),
    }
    assert!(world.repo.submissions_for(&form_id).unwrap().is_empty());

    filler.set_value(&field_id, "hello").unwrap();
    filler.submit().unwrap();
    let log = world.repo.submissions_for(&form_id).unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].form_data[&field_id], FieldValue::from("hello"));
}

#[test]
fn required_checkbox_needs_a_selection() {
    let world = World::new();
    let mut store = world.store();
    let field_id = store.add_field(FieldType::Checkbox);
    let patch = FieldPatch {
        required: Some(true),
        options: Some(vec![FieldOption::new("a", "A"), FieldOption::new("b", "B")]),
        ..FieldPatch::default()
    };
    store.update_field(&field_id, patch).unwrap();
    let form_id = store.save_form().unwrap();

    let mut filler = FormFiller::open(&world.repo, world.recorder(), &form_id).unwrap();
    assert!(matches!(
        filler.submit(),
        Err(FormsError::RequiredFieldEmpty { .. })
    ));

    filler.toggle_option(&field_id, "a", true).unwrap();
    let submission = filler.submit().unwrap();
    assert_eq!(
        submission.form_data[&field_id],
        FieldValue::Multiple(vec!["a".to_string()])
    );
    assert_eq!(world.repo.submissions_for(&form_id).unwrap().len(), 1);
}

#[test]
fn move_first_field_to_end() {
    let world = World::new();
    let mut store = world.store();
    let ids: Vec<_> = (0..3).map(|_| store.add_field(FieldType::Text)).collect();

    store.move_field(0, 2).unwrap();
    let order: Vec<_> = store.fields().iter().map(|f| f.id().clone()).collect();
    assert_eq!(order, vec![ids[1].clone(), ids[2].clone(), ids[0].clone()]);
}

#[test]
fn saving_twice_keeps_one_record() {
    let world = World::new();
    let mut store = world.store();
    store.set_title("Survey");
    let first = store.save_form().unwrap();
    store.set_title("Survey v2");
    let second = store.save_form().unwrap();

    assert_eq!(first, second);
    let forms = world.repo.list_forms().unwrap();
    assert_eq!(forms.len(), 1);
    assert_eq!(forms[0].title, "Survey v2");
    assert!(forms[0].last_saved.is_some());
}

#[test]
fn deleting_a_form_drops_its_submissions() {
    let world = World::new();
    let mut store = world.store();
    store.add_field(FieldType::Text);
    let form_id = store.save_form().unwrap();

    let recorder = world.recorder();
    let data = store.form().blank_form_data();
    recorder.record_submission(&form_id, data.clone()).unwrap();
    recorder.record_submission(&form_id, data.clone()).unwrap();

    store.delete_form(&form_id).unwrap();
    assert!(world.repo.find_form(&form_id).unwrap().is_none());
    assert!(world.repo.submissions_for(&form_id).unwrap().is_empty());
    assert_ne!(store.id(), &form_id);

    recorder.record_submission(&form_id, data).unwrap();
    assert_eq!(world.repo.submissions_for(&form_id).unwrap().len(), 1);
}

#[test]
fn added_fields_carry_type_defaults() {
    let world = World::new();
    let mut store = world.store();

    let text = store.add_field(FieldType::Text);
    let text = store.field(&text).unwrap();
    assert_eq!(text.label, "New Text");
    assert_eq!(text.placeholder.as_deref(), Some("Enter text..."));
    assert_eq!(text.min_length, Some(0));
    assert_eq!(text.max_length, Some(255));
    assert!(!text.required);

    let radio = store.add_field(FieldType::Radio);
    let radio = store.field(&radio).unwrap();
    assert_eq!(radio.options, vec![FieldOption::new("Option 1", "Option 1")]);
    assert!(radio.placeholder.is_none());
    assert_eq!(store.selected_field().map(|f| f.id()), Some(radio.id()));
}

#[test]
fn autosave_writes_under_the_forms_key() {
    let world = World::new();
    let mut store = world.store();
    store.add_field(FieldType::Email);
    assert!(store.poll_autosave().unwrap().is_none());

    world.clock.advance(chrono::Duration::milliseconds(1000));
    let saved = store.poll_autosave().unwrap();
    assert_eq!(saved.as_ref(), Some(store.id()));
    assert!(world.storage.get("formBuilderForms").unwrap().is_some());
}
