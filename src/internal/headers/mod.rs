pub mod http_header_names;
mod response_headers_lookup;

pub(crate) use response_headers_lookup::*;
