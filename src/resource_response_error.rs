use crate::prelude::*;
use thiserror::Error as ThisError;

#[derive(Debug, PartialEq, Eq, Clone, ThisError, Error)]
pub enum ResourceResponseError {
    #[error("Unable to JSON deserialize HTTP response body into type: {type_name}")]
    UnableJSONDeserializeHTTPResponseBodyIntoTypeName { type_name: String },

    #[error("Quota {quota:?} in header '{header}' has non integer value '{value}'")]
    InvalidQuotaValue {
        quota: QuotaKind,
        header: String,
        value: String,
    },

    #[error("Quota {quota:?} in header '{header}' is not followed by a value")]
    MissingQuotaValue { quota: QuotaKind, header: String },

    #[error(
        "Resource quota header '{max_resource_quota}' and usage header '{current_resource_quota_usage}' are not aligned"
    )]
    MisalignedQuotaHeaders {
        max_resource_quota: String,
        current_resource_quota_usage: String,
    },

    #[error("Invalid quota header format: {underlying}")]
    InvalidQuotaHeaderFormat { underlying: String },
}
