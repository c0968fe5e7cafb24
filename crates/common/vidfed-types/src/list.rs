use serde::{Deserialize, Serialize};

/// A batch of rows returned by a storage listing operation, together with
/// the total count the query matched (which may exceed `data.len()` when
/// the caller paginated).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ResultList<T> {
    pub total: u64,
    pub data: Vec<T>,
}

impl<T> ResultList<T> {
    pub fn new(total: u64, data: Vec<T>) -> Self {
        Self { total, data }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> From<Vec<T>> for ResultList<T> {
    fn from(data: Vec<T>) -> Self {
        Self { total: data.len() as u64, data }
    }
}
