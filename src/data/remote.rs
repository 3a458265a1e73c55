use crate::{
    data::{
        RecordStore, StoreOperation,
        student::{Student, StudentFields, StudentId, WireDelete, WireStudent, WireWrite},
    },
    error::{DecodeResponseSnafu, RemoteStatusSnafu, SendRequestSnafu, TransportError},
};
use reqwest::{Client, RequestBuilder, Response};
use snafu::{ResultExt, ensure};
use std::sync::Arc;

/// `RecordStore` backed by the remote REST collection. Every verb goes to the
/// same URL, the record id travels in the JSON body.
#[derive(Clone, Debug)]
pub struct HttpRecordStore {
    client: Client,
    base: Arc<str>,
}

impl HttpRecordStore {
    pub fn new(base: impl Into<Arc<str>>) -> Self {
        Self {
            client: Client::new(),
            base: base.into(),
        }
    }

    async fn send(
        request: RequestBuilder,
        operation: StoreOperation,
    ) -> Result<Response, TransportError> {
        let response = request
            .send()
            .await
            .context(SendRequestSnafu { operation })?;

        let status = response.status();
        ensure!(
            status.is_success(),
            RemoteStatusSnafu { status, operation }
        );

        Ok(response)
    }
}

impl RecordStore for HttpRecordStore {
    async fn list(&self) -> Result<Vec<Student>, TransportError> {
        let operation = StoreOperation::List;
        let response = Self::send(self.client.get(&*self.base), operation).await?;

        let students: Vec<WireStudent> = response
            .json()
            .await
            .context(DecodeResponseSnafu { operation })?;

        debug!(count = students.len(), "Fetched students");
        Ok(students.into_iter().map(Student::from).collect())
    }

    async fn create(&self, fields: &StudentFields) -> Result<(), TransportError> {
        let body = WireWrite::new(None, fields);
        Self::send(self.client.post(&*self.base).json(&body), StoreOperation::Create).await?;
        Ok(())
    }

    async fn update(&self, id: &StudentId, fields: &StudentFields) -> Result<(), TransportError> {
        let body = WireWrite::new(Some(id), fields);
        Self::send(self.client.put(&*self.base).json(&body), StoreOperation::Update).await?;
        Ok(())
    }

    async fn delete(&self, id: &StudentId) -> Result<(), TransportError> {
        let body = WireDelete { id };
        Self::send(self.client.delete(&*self.base).json(&body), StoreOperation::Delete).await?;
        Ok(())
    }
}
