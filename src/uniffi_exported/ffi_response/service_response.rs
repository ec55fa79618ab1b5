use crate::prelude::*;

/// An HTTP response the data service sent back for a single request, as
/// received by the transport (FFI side or Rust side), fully buffered.
///
/// It is consumed by [`ResourceResponse::new`], which extracts the resource
/// and keeps the status code and headers.
#[derive(Record, Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,

    /// Can be empty, e.g. for a delete.
    pub body: Vec<u8>,
}

impl ServiceResponse {
    pub fn new(status_code: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status_code,
            headers,
            body,
        }
    }
}
