mod quota_header_format;
mod resource;
mod resource_response;

pub use quota_header_format::*;
pub use resource::*;
pub use resource_response::*;
