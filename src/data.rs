use crate::{
    data::student::{StudentFields, StudentId, Student},
    error::TransportError,
};
use serde::Deserialize;
use std::fmt;

pub mod remote;
pub mod student;

#[cfg(test)]
pub mod memory;

#[derive(Deserialize)]
pub struct IdForm {
    pub id: StudentId,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StoreOperation {
    List,
    Create,
    Update,
    Delete,
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::List => "list",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        })
    }
}

/// The remote student collection. Every call is a single fire-and-wait
/// request, nothing is retried.
pub trait RecordStore: Clone + Send + Sync + 'static {
    fn list(&self) -> impl Future<Output = Result<Vec<Student>, TransportError>> + Send;
    /// The assigned id is not handed back, callers refetch to see it.
    fn create(
        &self,
        fields: &StudentFields,
    ) -> impl Future<Output = Result<(), TransportError>> + Send;
    fn update(
        &self,
        id: &StudentId,
        fields: &StudentFields,
    ) -> impl Future<Output = Result<(), TransportError>> + Send;
    fn delete(&self, id: &StudentId) -> impl Future<Output = Result<(), TransportError>> + Send;
}
