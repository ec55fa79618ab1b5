mod quota_kind;
mod quota_usage;

pub use quota_kind::*;
pub use quota_usage::*;
