use crate::{
    controllers::{StatusBanner, View, form::FormController},
    data::student::{Student, StudentId},
    error::TransportError,
};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this student?";

/// Asks the user a yes/no question before something destructive happens.
pub trait Confirm: Sync {
    fn confirm(&self, prompt: &str) -> impl Future<Output = bool> + Send;
}

/// An answer the user already gave.
impl Confirm for bool {
    async fn confirm(&self, prompt: &str) -> bool {
        debug!(prompt, answer = *self, "Confirmation answered");
        *self
    }
}

#[derive(Debug, Default)]
pub struct ListController {
    records: Vec<Student>,
    search: String,
    busy: bool,
}

impl ListController {
    pub fn records(&self) -> &[Student] {
        &self.records
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn find(&self, id: &StudentId) -> Option<&Student> {
        self.records.iter().find(|s| &s.id == id)
    }

    /// Marks the list as loading. The fetch result goes to
    /// [`Self::finish_activate`].
    pub fn begin_activate(&mut self) {
        self.busy = true;
    }

    /// Replaces the record set with what the store returned. A failed fetch
    /// leaves the list empty.
    pub fn finish_activate(
        &mut self,
        result: Result<Vec<Student>, TransportError>,
        status: &mut StatusBanner,
    ) {
        match result {
            Ok(records) => self.records = records,
            Err(e) => {
                error!(?e, "Error fetching students");
                self.records.clear();
                status.failure("Error loading students");
            }
        }
        self.busy = false;
    }

    /// Drops the record set; it is only ever shown after a fresh fetch.
    pub fn invalidate(&mut self) {
        self.records.clear();
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Records matching the search, in the order the store returned them.
    pub fn visible_records(&self) -> Vec<&Student> {
        let needle = self.search.to_lowercase();
        self.records
            .iter()
            .filter(|s| s.haystack().contains(&needle))
            .collect()
    }

    /// Marks the list busy once the user has confirmed a delete.
    pub fn begin_delete(&mut self) {
        self.busy = true;
    }

    /// Returns whether the record went away, in which case the caller
    /// refetches through [`Self::begin_activate`].
    pub fn finish_delete(
        &mut self,
        id: &StudentId,
        result: Result<(), TransportError>,
        status: &mut StatusBanner,
    ) -> bool {
        self.busy = false;

        match result {
            Ok(()) => {
                info!(%id, "Deleted student");
                status.success("✓ Student deleted successfully");
                true
            }
            Err(e) => {
                error!(?e, "Error deleting student record");
                status.failure("✗ Error deleting student record");
                false
            }
        }
    }

    pub fn request_edit(&self, record: &Student, form: &mut FormController) -> View {
        form.begin_edit(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        data::{RecordStore, StoreOperation, memory::MemoryStore, student::StudentFields},
        error::RemoteStatusSnafu,
    };
    use reqwest::StatusCode;

    fn student(id: &str, name: &str, age: &str, roll_no: &str, course: &str) -> Student {
        Student {
            id: StudentId::new(id),
            fields: StudentFields {
                name: name.into(),
                age: age.into(),
                roll_no: roll_no.into(),
                course: course.into(),
            },
        }
    }

    fn bob_and_carl() -> MemoryStore {
        MemoryStore::with_students([
            student("s1", "Bob", "21", "X1", "CS"),
            student("s2", "Carl", "22", "X2", "EE"),
        ])
    }

    async fn activate(list: &mut ListController, store: &MemoryStore, status: &mut StatusBanner) {
        list.begin_activate();
        assert!(list.is_busy());
        let result = store.list().await;
        list.finish_activate(result, status);
    }

    async fn activated(store: &MemoryStore) -> ListController {
        let mut list = ListController::default();
        activate(&mut list, store, &mut StatusBanner::default()).await;
        list
    }

    fn unavailable() -> TransportError {
        RemoteStatusSnafu {
            status: StatusCode::SERVICE_UNAVAILABLE,
            operation: StoreOperation::Delete,
        }
        .build()
    }

    #[tokio::test]
    async fn search_filters_case_insensitively() {
        let mut list = activated(&bob_and_carl()).await;

        list.set_search("cs");
        let visible = list.visible_records();

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].fields.name, "Bob");
    }

    #[tokio::test]
    async fn search_matches_any_field_and_keeps_order() {
        let mut list = activated(&bob_and_carl()).await;

        list.set_search("X");
        let names: Vec<_> = list
            .visible_records()
            .into_iter()
            .map(|s| s.fields.name.as_str())
            .collect();
        assert_eq!(names, ["Bob", "Carl"]);

        list.set_search("22");
        assert_eq!(list.visible_records()[0].fields.name, "Carl");

        list.set_search("nobody");
        assert!(list.visible_records().is_empty());

        list.set_search("");
        assert_eq!(list.visible_records().len(), 2);
    }

    #[tokio::test]
    async fn setting_the_same_search_twice_changes_nothing() {
        let store = bob_and_carl();
        let mut list = activated(&store).await;

        list.set_search("carl");
        let once: Vec<Student> = list.visible_records().into_iter().cloned().collect();
        list.set_search("carl");
        let twice: Vec<Student> = list.visible_records().into_iter().cloned().collect();

        assert_eq!(once, twice);
        assert_eq!(store.calls(), [StoreOperation::List]);
    }

    #[tokio::test]
    async fn failed_fetch_empties_the_list() {
        let store = bob_and_carl();
        let mut list = activated(&store).await;
        assert_eq!(list.records().len(), 2);

        store.set_failing(true);
        let mut status = StatusBanner::default();
        activate(&mut list, &store, &mut status).await;

        assert!(list.records().is_empty());
        assert!(!list.is_busy());
        assert_eq!(
            status.current().map(|m| m.text.as_str()),
            Some("Error loading students")
        );
    }

    #[tokio::test]
    async fn finished_delete_asks_for_a_refetch() {
        let mut list = activated(&bob_and_carl()).await;
        let mut status = StatusBanner::default();

        list.begin_delete();
        assert!(list.is_busy());
        assert!(list.finish_delete(&StudentId::new("s1"), Ok(()), &mut status));

        assert!(!list.is_busy());
        assert_eq!(
            status.current().map(|m| m.text.as_str()),
            Some("✓ Student deleted successfully")
        );
    }

    #[tokio::test]
    async fn failed_delete_keeps_the_record_set() {
        let mut list = activated(&bob_and_carl()).await;
        let mut status = StatusBanner::default();

        list.begin_delete();
        let refetch = list.finish_delete(&StudentId::new("s1"), Err(unavailable()), &mut status);

        assert!(!refetch);
        assert!(!list.is_busy());
        assert_eq!(list.records().len(), 2);
        assert_eq!(
            status.current().map(|m| m.text.as_str()),
            Some("✗ Error deleting student record")
        );
    }

    #[tokio::test]
    async fn request_edit_prefills_the_form() {
        let list = activated(&bob_and_carl()).await;
        let mut form = FormController::default();

        let carl = list.find(&StudentId::new("s2")).unwrap();
        assert_eq!(list.request_edit(carl, &mut form), View::Form);

        assert_eq!(form.draft().name, "Carl");
        assert_eq!(form.editing(), Some(&StudentId::new("s2")));
    }
}
