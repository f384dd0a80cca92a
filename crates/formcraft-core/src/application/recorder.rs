//! Submission recorder
//!
//! Appends filled-form responses to the per-form submission log.
//! Recorded submissions are never modified or removed here.

use std::sync::Arc;

use crate::application::repository::FormRepository;
use crate::domain::aggregates::{FormData, FormDefinition, Submission};
use crate::domain::services::validation::{SubmissionValidator, ValidationPolicy};
use crate::domain::value_objects::FormId;
use crate::error::Result;
use crate::ports::clock::Clock;

#[derive(Clone)]
pub struct SubmissionRecorder {
    repo: FormRepository,
    clock: Arc<dyn Clock>,
    validator: SubmissionValidator,
}

impl SubmissionRecorder {
    pub fn new(repo: FormRepository, clock: Arc<dyn Clock>, policy: ValidationPolicy) -> Self {
        Self {
            repo,
            clock,
            validator: SubmissionValidator::new(policy),
        }
    }

    pub fn validator(&self) -> &SubmissionValidator {
        &self.validator
    }

    /// Append a submission without validating it; creates the log if absent
    pub fn record_submission(&self, form_id: &FormId, form_data: FormData) -> Result<Submission> {
        let submission = Submission::create(form_data, self.clock.now());
        self.repo.append_submission(form_id, submission.clone())?;
        tracing::info!(
            form_id = %form_id,
            submission_id = %submission.submission_id,
            "submission recorded"
        );
        Ok(submission)
    }

    /// Validate against `definition`, then record
    ///
    /// Nothing is written when validation fails.
    pub fn submit(&self, definition: &FormDefinition, form_data: FormData) -> Result<Submission> {
        if let Err(err) = self.validator.validate(definition, &form_data) {
            tracing::debug!(form_id = %definition.id, error = %err, "submission rejected");
            return Err(err);
        }
        self.record_submission(&definition.id, form_data)
    }

    pub fn submissions(&self, form_id: &FormId) -> Result<Vec<Submission>> {
        self.repo.submissions_for(form_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregates::{Field, FieldValue};
    use crate::domain::value_objects::FieldType;
    use crate::error::FormsError;
    use crate::infrastructure::{InMemoryStorage, ManualClock};

    fn recorder() -> (Arc<InMemoryStorage>, SubmissionRecorder) {
        let storage = Arc::new(InMemoryStorage::new());
        let recorder = SubmissionRecorder::new(
            FormRepository::new(storage.clone()),
            Arc::new(ManualClock::default()),
            ValidationPolicy::default(),
        );
        (storage, recorder)
    }

    #[test]
    fn test_record_appends_in_order() {
        let (_, recorder) = recorder();
        let id = FormId::new();
        let first = recorder.record_submission(&id, FormData::new()).unwrap();
        let second = recorder.record_submission(&id, FormData::new()).unwrap();
        let log = recorder.submissions(&id).unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].submission_id, first.submission_id);
        assert_eq!(log[1].submission_id, second.submission_id);
        assert_ne!(first.submission_id, second.submission_id);
    }

    #[test]
    fn test_rejected_submission_writes_nothing() {
        let (_, recorder) = recorder();
        let mut form = FormDefinition::untitled();
        let mut field = Field::create(FieldType::Text);
        field.required = true;
        form.fields.push(field);

        let data = form.blank_form_data();
        assert!(matches!(
            recorder.submit(&form, data),
            Err(FormsError::RequiredFieldEmpty { .. })
        ));
        assert!(recorder.submissions(&form.id).unwrap().is_empty());
    }

    #[test]
    fn test_storage_failure_propagates() {
        let (storage, recorder) = recorder();
        storage.set_enabled(false);
        let mut data = FormData::new();
        data.insert("f".into(), FieldValue::from("x"));
        assert!(matches!(
            recorder.record_submission(&FormId::new(), data),
            Err(FormsError::StorageUnavailable(_))
        ));
    }
}
