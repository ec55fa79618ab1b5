mod ffi_resource_response;
mod raw_resource;
mod service_response;

pub use ffi_resource_response::*;
pub use raw_resource::*;
pub use service_response::*;
