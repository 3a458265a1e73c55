//! In-process `RecordStore` for exercising the controllers and routes without
//! a remote collection.

use crate::{
    data::{
        RecordStore, StoreOperation,
        student::{Student, StudentFields, StudentId},
    },
    error::{RemoteStatusSnafu, TransportError},
};
use reqwest::StatusCode;
use snafu::ensure;
use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

#[derive(Debug, Default)]
struct Inner {
    students: Vec<Student>,
    next_id: u32,
    failing: bool,
    calls: Vec<StoreOperation>,
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
    delay: Option<Duration>,
}

impl MemoryStore {
    pub fn with_students(students: impl IntoIterator<Item = Student>) -> Self {
        let students: Vec<_> = students.into_iter().collect();
        let store = Self::default();
        {
            let mut inner = store.inner.lock().unwrap();
            inner.next_id = u32::try_from(students.len()).unwrap();
            inner.students = students;
        }
        store
    }

    /// Every call sleeps this long before it touches the records, like a slow
    /// remote would.
    pub fn with_delay(self, delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..self
        }
    }

    /// Makes every following call answer 503 until switched back.
    pub fn set_failing(&self, failing: bool) {
        self.inner.lock().unwrap().failing = failing;
    }

    pub fn calls(&self) -> Vec<StoreOperation> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn students(&self) -> Vec<Student> {
        self.inner.lock().unwrap().students.clone()
    }

    async fn latency(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn record(&self, operation: StoreOperation) -> Result<MutexGuard<'_, Inner>, TransportError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(operation);
        ensure!(
            !inner.failing,
            RemoteStatusSnafu {
                status: StatusCode::SERVICE_UNAVAILABLE,
                operation
            }
        );
        Ok(inner)
    }
}

impl RecordStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Student>, TransportError> {
        self.latency().await;
        Ok(self.record(StoreOperation::List)?.students.clone())
    }

    async fn create(&self, fields: &StudentFields) -> Result<(), TransportError> {
        self.latency().await;
        let mut inner = self.record(StoreOperation::Create)?;
        inner.next_id += 1;
        let id = StudentId::new(format!("s{}", inner.next_id));
        inner.students.push(Student {
            id,
            fields: fields.clone(),
        });
        Ok(())
    }

    async fn update(&self, id: &StudentId, fields: &StudentFields) -> Result<(), TransportError> {
        let operation = StoreOperation::Update;
        self.latency().await;
        let mut inner = self.record(operation)?;
        let Some(existing) = inner.students.iter_mut().find(|s| &s.id == id) else {
            return RemoteStatusSnafu {
                status: StatusCode::NOT_FOUND,
                operation,
            }
            .fail();
        };
        existing.fields = fields.clone();
        Ok(())
    }

    async fn delete(&self, id: &StudentId) -> Result<(), TransportError> {
        let operation = StoreOperation::Delete;
        self.latency().await;
        let mut inner = self.record(operation)?;
        let before = inner.students.len();
        inner.students.retain(|s| &s.id != id);
        ensure!(
            inner.students.len() < before,
            RemoteStatusSnafu {
                status: StatusCode::NOT_FOUND,
                operation
            }
        );
        Ok(())
    }
}
