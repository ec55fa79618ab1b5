mod ffi_response;
mod quota;

pub use ffi_response::*;
pub use quota::*;
