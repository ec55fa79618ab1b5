//! Names of the response headers the data service reports request
//! telemetry and resource quotas in.

pub const ACTIVITY_ID: &str = "x-ms-activity-id";
pub const SESSION_TOKEN: &str = "x-ms-session-token";

/// Compound header, e.g. `functions=25;storedProcedures=100;triggers=25`.
pub const MAX_RESOURCE_QUOTA: &str = "x-ms-resource-quota";
/// Compound header, positionally parallel to [`MAX_RESOURCE_QUOTA`].
pub const CURRENT_RESOURCE_QUOTA_USAGE: &str = "x-ms-resource-usage";

pub const REQUEST_CHARGE: &str = "x-ms-request-charge";
pub const INDEX_TRANSFORMATION_PROGRESS: &str =
    "x-ms-documentdb-collection-index-transformation-progress";
pub const LAZY_INDEXING_PROGRESS: &str = "x-ms-documentdb-collection-lazy-indexing-progress";
