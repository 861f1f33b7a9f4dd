//! Success envelope shared by every REST endpoint: `{ "data": ... }`

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
