mod parse_quota_headers;
mod parsed_quotas;
mod tokenize_quota_header;

pub(crate) use parse_quota_headers::*;
pub use parsed_quotas::*;
pub(crate) use tokenize_quota_header::*;
