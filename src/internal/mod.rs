mod headers;
mod quota;

pub use headers::*;
pub use quota::*;
