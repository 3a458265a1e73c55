use crate::{
    controllers::{
        form::{FormController, PendingWrite, SubmitOutcome},
        list::ListController,
    },
    data::student::{Student, StudentField, StudentId},
    error::{MissingStudentSnafu, RollbookResult, TransportError},
};
use snafu::OptionExt;
use std::time::Duration;
use tokio::time::Instant;

pub mod form;
pub mod list;

/// How long a success message stays up.
pub const STATUS_LIFETIME: Duration = Duration::from_secs(3);

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Form,
    List,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

/// The one status line both views share. Only one expiry is ever pending, a
/// new message replaces it.
#[derive(Debug, Default)]
pub struct StatusBanner {
    message: Option<StatusMessage>,
    expires_at: Option<Instant>,
}

impl StatusBanner {
    /// Shown for [`STATUS_LIFETIME`], then gone.
    pub fn success(&mut self, text: impl Into<String>) {
        self.message = Some(StatusMessage {
            kind: StatusKind::Success,
            text: text.into(),
        });
        self.expires_at = Some(Instant::now() + STATUS_LIFETIME);
    }

    /// Stays until the next message.
    pub fn failure(&mut self, text: impl Into<String>) {
        self.message = Some(StatusMessage {
            kind: StatusKind::Failure,
            text: text.into(),
        });
        self.expires_at = None;
    }

    pub fn current(&self) -> Option<&StatusMessage> {
        match self.expires_at {
            Some(deadline) if Instant::now() >= deadline => None,
            _ => self.message.as_ref(),
        }
    }

    pub fn remaining(&self) -> Option<Duration> {
        self.current()?;
        self.expires_at
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }
}

/// What a finished action still needs from the store.
#[must_use]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FollowUp {
    Done,
    /// The list is already marked busy, run a `list()` and hand the result to
    /// [`App::finish_listing`].
    Refetch,
}

/// Owns both views and the shared banner. Every user action comes through
/// here. Actions that talk to the store are split in two so nothing is
/// borrowed while the request is out.
#[derive(Debug, Default)]
pub struct App {
    view: View,
    form: FormController,
    list: ListController,
    status: StatusBanner,
}

impl App {
    pub const fn view(&self) -> View {
        self.view
    }

    pub const fn form(&self) -> &FormController {
        &self.form
    }

    pub const fn list(&self) -> &ListController {
        &self.list
    }

    pub const fn status(&self) -> &StatusBanner {
        &self.status
    }

    /// Switches to the list and marks it loading; the caller fetches.
    pub fn view_all(&mut self) {
        self.view = View::List;
        self.list.begin_activate();
    }

    pub fn finish_listing(&mut self, result: Result<Vec<Student>, TransportError>) {
        self.list.finish_activate(result, &mut self.status);
    }

    /// Leaves the draft alone.
    pub fn back(&mut self) {
        self.view = View::Form;
    }

    pub fn update_field(&mut self, field: StudentField, value: impl Into<String>) {
        self.form.update_field(field, value);
    }

    pub fn begin_submit(&mut self) -> Result<PendingWrite, SubmitOutcome> {
        self.form.begin_submit()
    }

    /// A save refetches the list when it is on screen; otherwise the stale
    /// record set is dropped.
    pub fn finish_submit(
        &mut self,
        write: &PendingWrite,
        result: Result<(), TransportError>,
    ) -> FollowUp {
        if self.form.finish_submit(write, result, &mut self.status) != SubmitOutcome::Saved {
            return FollowUp::Done;
        }

        match self.view {
            View::List => {
                self.list.begin_activate();
                FollowUp::Refetch
            }
            View::Form => {
                self.list.invalidate();
                FollowUp::Done
            }
        }
    }

    pub fn cancel(&mut self) {
        self.form.cancel();
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.list.set_search(query);
    }

    pub fn edit(&mut self, id: &StudentId) -> RollbookResult<()> {
        let record = self
            .list
            .find(id)
            .context(MissingStudentSnafu { id: id.clone() })?;
        self.view = self.list.request_edit(record, &mut self.form);
        Ok(())
    }

    pub fn begin_delete(&mut self) {
        self.list.begin_delete();
    }

    pub fn finish_delete(&mut self, id: &StudentId, result: Result<(), TransportError>) -> FollowUp {
        if self.list.finish_delete(id, result, &mut self.status) {
            self.list.begin_activate();
            FollowUp::Refetch
        } else {
            FollowUp::Done
        }
    }
}
