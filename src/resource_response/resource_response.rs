use crate::prelude::*;

/// The service response to a single request, holding the deserialized
/// resource together with the response headers.
///
/// The [`ServiceResponse`] it was built from is consumed on construction.
/// The compound quota headers are parsed lazily, on the first quota read,
/// and only once, also when the first reads race on several threads.
#[derive(Debug)]
pub struct ResourceResponse<T: Resource> {
    resource: Option<T>,
    status_code: u16,
    response_headers: HashMap<String, String>,
    quota_header_format: QuotaHeaderFormat,
    quota_headers: OnceLock<Result<QuotaHeaders, ResourceResponseError>>,

    #[cfg(test)]
    parse_count: std::sync::atomic::AtomicUsize,
}

impl<T: Resource + DeserializeOwned> ResourceResponse<T> {
    pub fn new(response: ServiceResponse) -> Result<Self, ResourceResponseError> {
        Self::with_format(response, QuotaHeaderFormat::default())
    }

    pub fn with_format(
        response: ServiceResponse,
        quota_header_format: QuotaHeaderFormat,
    ) -> Result<Self, ResourceResponseError> {
        let ServiceResponse {
            status_code,
            headers,
            body,
        } = response;

        let resource = resource_from_body::<T>(&body)?;

        Ok(Self {
            resource,
            status_code,
            response_headers: headers,
            quota_header_format,
            quota_headers: OnceLock::new(),
            #[cfg(test)]
            parse_count: std::sync::atomic::AtomicUsize::new(0),
        })
    }
}

/// An empty body, e.g. of a delete, carries no resource.
fn resource_from_body<T: DeserializeOwned>(body: &[u8]) -> Result<Option<T>, ResourceResponseError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice::<T>(body).map(Some).map_err(|error| {
        log::debug!("Failed to deserialize resource: {error}");
        ResourceResponseError::UnableJSONDeserializeHTTPResponseBodyIntoTypeName {
            type_name: std::any::type_name::<T>().to_owned(),
        }
    })
}

impl<T: Resource> ResourceResponse<T> {
    /// The resource, `None` when the service returned no body.
    pub fn resource(&self) -> Option<&T> {
        self.resource.as_ref()
    }

    pub fn into_resource(self) -> Option<T> {
        self.resource
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn response_headers(&self) -> &HashMap<String, String> {
        &self.response_headers
    }

    pub fn activity_id(&self) -> &str {
        self.header_or_empty(http_header_names::ACTIVITY_ID)
    }

    /// The token used for managing the client's consistency requirements.
    pub fn session_token(&self) -> &str {
        self.header_or_empty(http_header_names::SESSION_TOKEN)
    }

    /// The maximum size limit for this entity, in megabytes for server
    /// resources and in count for master resources, as sent by the service.
    pub fn max_resource_quota(&self) -> &str {
        self.header_or_empty(http_header_names::MAX_RESOURCE_QUOTA)
    }

    /// The current size of this entity, in the units of
    /// [`ResourceResponse::max_resource_quota`].
    pub fn current_resource_quota_usage(&self) -> &str {
        self.header_or_empty(http_header_names::CURRENT_RESOURCE_QUOTA_USAGE)
    }

    /// The cost of the operation in request units, `0` if not reported.
    pub fn request_charge(&self) -> f64 {
        self.parsed_header_or(http_header_names::REQUEST_CHARGE, 0.0)
    }

    /// Progress of an index transformation, `-1` if none is underway.
    pub fn index_transformation_progress(&self) -> i64 {
        self.parsed_header_or(http_header_names::INDEX_TRANSFORMATION_PROGRESS, -1)
    }

    /// Progress of lazy indexing, `-1` if not reported.
    pub fn lazy_indexing_progress(&self) -> i64 {
        self.parsed_header_or(http_header_names::LAZY_INDEXING_PROGRESS, -1)
    }

    fn header_or_empty(&self, name: &str) -> &str {
        self.response_headers.header_value(name).unwrap_or_default()
    }

    fn parsed_header_or<V>(&self, name: &str, default: V) -> V
    where
        V: std::str::FromStr,
        V::Err: std::fmt::Display,
    {
        let Some(value) = self.response_headers.non_empty_header_value(name) else {
            return default;
        };
        value.trim().parse::<V>().unwrap_or_else(|error| {
            log::warn!("Ignoring header '{name}' with value '{value}': {error}");
            default
        })
    }
}

impl<T: Resource> ResourceResponse<T> {
    fn quota_headers(&self) -> &Result<QuotaHeaders, ResourceResponseError> {
        self.quota_headers.get_or_init(|| {
            #[cfg(test)]
            self.parse_count
                .fetch_add(1, std::sync::atomic::Ordering::SeqCst);

            let parsed = parse_quota_headers(
                self.response_headers
                    .header_value(http_header_names::MAX_RESOURCE_QUOTA),
                self.response_headers
                    .header_value(http_header_names::CURRENT_RESOURCE_QUOTA_USAGE),
                &self.quota_header_format,
            );
            if let Err(error) = &parsed {
                log::warn!("Resource quota headers are unusable, reading all quotas as 0: {error}");
            }
            parsed
        })
    }

    /// The quota and usage of `kind`, or the reason the quota headers could
    /// not be parsed under [`MalformedQuotaPolicy::Fail`].
    pub fn try_quota_usage(&self, kind: QuotaKind) -> Result<QuotaUsage, ResourceResponseError> {
        self.quota_headers()
            .as_ref()
            .map(|headers| headers.quota_usage(kind))
            .map_err(Clone::clone)
    }

    /// The quota and usage of `kind`, `0` for both when not reported.
    pub fn quota_usage(&self, kind: QuotaKind) -> QuotaUsage {
        self.try_quota_usage(kind).unwrap_or_default()
    }

    pub fn quota(&self, kind: QuotaKind) -> i64 {
        self.quota_usage(kind).quota
    }

    pub fn usage(&self, kind: QuotaKind) -> i64 {
        self.quota_usage(kind).usage
    }

    /// Every [`QuotaKind`], in the order of [`QuotaKind::ALL`].
    pub fn quota_usages(&self) -> Vec<(QuotaKind, QuotaUsage)> {
        QuotaKind::ALL
            .into_iter()
            .map(|kind| (kind, self.quota_usage(kind)))
            .collect()
    }

    pub fn database_quota(&self) -> i64 {
        self.quota(QuotaKind::Database)
    }

    pub fn database_usage(&self) -> i64 {
        self.usage(QuotaKind::Database)
    }

    pub fn collection_quota(&self) -> i64 {
        self.quota(QuotaKind::Collection)
    }

    pub fn collection_usage(&self) -> i64 {
        self.usage(QuotaKind::Collection)
    }

    pub fn user_quota(&self) -> i64 {
        self.quota(QuotaKind::User)
    }

    pub fn user_usage(&self) -> i64 {
        self.usage(QuotaKind::User)
    }

    pub fn permission_quota(&self) -> i64 {
        self.quota(QuotaKind::Permission)
    }

    pub fn permission_usage(&self) -> i64 {
        self.usage(QuotaKind::Permission)
    }

    pub fn collection_size_quota(&self) -> i64 {
        self.quota(QuotaKind::CollectionSize)
    }

    pub fn collection_size_usage(&self) -> i64 {
        self.usage(QuotaKind::CollectionSize)
    }

    /// Quota of the total size of all documents.
    pub fn document_quota(&self) -> i64 {
        self.quota(QuotaKind::DocumentsSize)
    }

    pub fn document_usage(&self) -> i64 {
        self.usage(QuotaKind::DocumentsSize)
    }

    pub fn stored_procedures_quota(&self) -> i64 {
        self.quota(QuotaKind::StoredProcedure)
    }

    pub fn stored_procedures_usage(&self) -> i64 {
        self.usage(QuotaKind::StoredProcedure)
    }

    pub fn triggers_quota(&self) -> i64 {
        self.quota(QuotaKind::Trigger)
    }

    pub fn triggers_usage(&self) -> i64 {
        self.usage(QuotaKind::Trigger)
    }

    pub fn user_defined_functions_quota(&self) -> i64 {
        self.quota(QuotaKind::UserDefinedFunction)
    }

    pub fn user_defined_functions_usage(&self) -> i64 {
        self.usage(QuotaKind::UserDefinedFunction)
    }
}
