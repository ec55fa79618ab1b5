use crate::prelude::*;

/// A [`ResourceResponse`] exported FFI side (Swift/Kotlin side), holding the
/// resource as a [`RawResource`].
///
/// Shared with the host as an `Arc`, any thread may be the first to ask for
/// a quota, the quota headers are still only parsed once.
#[derive(Object)]
pub struct FFIResourceResponse {
    pub(crate) response: ResourceResponse<RawResource>,
}

impl FFIResourceResponse {
    pub fn with_response(response: ResourceResponse<RawResource>) -> Self {
        Self { response }
    }
}

#[export]
impl FFIResourceResponse {
    /// Consumes the [`ServiceResponse`] received by the host, fails only if a
    /// non-empty body is not a JSON object.
    #[uniffi::constructor]
    pub fn new(response: ServiceResponse) -> Result<Arc<Self>, ResourceResponseError> {
        ResourceResponse::new(response).map(|r| Arc::new(Self::with_response(r)))
    }

    pub fn resource(&self) -> Option<RawResource> {
        self.response.resource().cloned()
    }

    pub fn status_code(&self) -> u16 {
        self.response.status_code()
    }

    pub fn response_headers(&self) -> HashMap<String, String> {
        self.response.response_headers().clone()
    }

    pub fn activity_id(&self) -> String {
        self.response.activity_id().to_owned()
    }

    pub fn session_token(&self) -> String {
        self.response.session_token().to_owned()
    }

    pub fn request_charge(&self) -> f64 {
        self.response.request_charge()
    }

    pub fn max_resource_quota(&self) -> String {
        self.response.max_resource_quota().to_owned()
    }

    pub fn current_resource_quota_usage(&self) -> String {
        self.response.current_resource_quota_usage().to_owned()
    }

    pub fn index_transformation_progress(&self) -> i64 {
        self.response.index_transformation_progress()
    }

    pub fn lazy_indexing_progress(&self) -> i64 {
        self.response.lazy_indexing_progress()
    }

    /// `0`/`0` for a kind the service did not report, or when the quota
    /// headers could not be parsed.
    pub fn quota_usage(&self, kind: QuotaKind) -> QuotaUsage {
        self.response.quota_usage(kind)
    }

    pub fn try_quota_usage(&self, kind: QuotaKind) -> Result<QuotaUsage, ResourceResponseError> {
        self.response.try_quota_usage(kind)
    }

    /// All nine kinds, in the order of [`QuotaKind::ALL`].
    pub fn quota_usages(&self) -> Vec<QuotaUsageEntry> {
        self.response
            .quota_usages()
            .into_iter()
            .map(|(kind, quota_usage)| QuotaUsageEntry { kind, quota_usage })
            .collect()
    }
}
