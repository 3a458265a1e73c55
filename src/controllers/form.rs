use crate::{
    controllers::{StatusBanner, View},
    data::{
        RecordStore,
        student::{Student, StudentField, StudentFields, StudentId},
    },
    error::TransportError,
    validation::{ValidationErrors, validate},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed, nothing was sent.
    Invalid,
    /// An earlier write has not come back yet, nothing was sent.
    Busy,
    Saved,
    /// The write failed, the draft is kept for another go.
    Failed,
}

/// A validated snapshot of the draft, taken when the write starts so the
/// store call can run without the form borrowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingWrite {
    editing: Option<StudentId>,
    fields: StudentFields,
}

impl PendingWrite {
    pub async fn send(&self, store: &impl RecordStore) -> Result<(), TransportError> {
        match &self.editing {
            Some(id) => store.update(id, &self.fields).await,
            None => store.create(&self.fields).await,
        }
    }
}

/// Draft state for the add/update form. Present `editing` means the next
/// submit is an update of that record.
#[derive(Debug, Default)]
pub struct FormController {
    draft: StudentFields,
    errors: ValidationErrors,
    editing: Option<StudentId>,
    busy: bool,
}

impl FormController {
    pub const fn draft(&self) -> &StudentFields {
        &self.draft
    }

    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub const fn editing(&self) -> Option<&StudentId> {
        self.editing.as_ref()
    }

    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn update_field(&mut self, field: StudentField, value: impl Into<String>) {
        self.draft.set(field, value.into());
    }

    /// First half of a submit: validates and marks the form busy. The caller
    /// sends the write and hands the result to [`Self::finish_submit`].
    pub fn begin_submit(&mut self) -> Result<PendingWrite, SubmitOutcome> {
        if self.busy {
            debug!("Submit ignored, a write is in flight");
            return Err(SubmitOutcome::Busy);
        }

        self.errors = validate(&self.draft);
        if !self.errors.is_empty() {
            debug!(errors = self.errors.len(), "Draft rejected");
            return Err(SubmitOutcome::Invalid);
        }

        self.busy = true;
        Ok(PendingWrite {
            editing: self.editing.clone(),
            fields: self.draft.clone(),
        })
    }

    pub fn finish_submit(
        &mut self,
        write: &PendingWrite,
        result: Result<(), TransportError>,
        status: &mut StatusBanner,
    ) -> SubmitOutcome {
        self.busy = false;

        match result {
            Ok(()) => {
                let done = if write.editing.is_some() {
                    "✓ Student updated successfully"
                } else {
                    "✓ Student added successfully"
                };
                info!(editing = ?write.editing, "Saved student");

                self.cancel();
                status.success(done);
                SubmitOutcome::Saved
            }
            Err(e) => {
                error!(?e, "Error saving student record");
                status.failure("✗ Error saving student record");
                SubmitOutcome::Failed
            }
        }
    }

    pub fn begin_edit(&mut self, record: &Student) -> View {
        self.draft = record.fields.clone();
        self.errors = ValidationErrors::default();
        self.editing = Some(record.id.clone());
        View::Form
    }

    pub fn cancel(&mut self) {
        self.draft = StudentFields::default();
        self.errors = ValidationErrors::default();
        self.editing = None;
    }
}
