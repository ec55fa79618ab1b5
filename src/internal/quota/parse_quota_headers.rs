use crate::prelude::*;

/// Demultiplexes the compound `max_resource_quota` and
/// `current_resource_quota_usage` headers into per kind values.
///
/// Both headers must be present and non blank, otherwise the quotas are
/// [`QuotaHeaders::NotReported`]. The headers are walked in parallel: a known
/// keyword at position `i` of the quota header is followed by its maximum at
/// `i + 1`, and the usage header carries the current value at the same
/// position. Unknown keywords are skipped. When one header is longer than the
/// other, positions past the end of the shorter one read as absent.
pub(crate) fn parse_quota_headers(
    max_resource_quota: Option<&str>,
    current_resource_quota_usage: Option<&str>,
    format: &QuotaHeaderFormat,
) -> Result<QuotaHeaders, ResourceResponseError> {
    let (Some(max_resource_quota), Some(current_resource_quota_usage)) = (
        max_resource_quota.filter(|h| !h.trim().is_empty()),
        current_resource_quota_usage.filter(|h| !h.trim().is_empty()),
    ) else {
        return Ok(QuotaHeaders::NotReported);
    };

    let quota_tokens = tokenize_quota_header(max_resource_quota, &format.delimiters);
    let usage_tokens = tokenize_quota_header(current_resource_quota_usage, &format.delimiters);
    let fail_on_malformed = format.malformed_value_policy == MalformedQuotaPolicy::Fail;

    let misaligned = || ResourceResponseError::MisalignedQuotaHeaders {
        max_resource_quota: max_resource_quota.to_owned(),
        current_resource_quota_usage: current_resource_quota_usage.to_owned(),
    };

    if quota_tokens.len() != usage_tokens.len() {
        log::warn!(
            "Quota header has {} tokens but usage header has {}, reading only aligned positions",
            quota_tokens.len(),
            usage_tokens.len()
        );
    }

    let mut parsed = ParsedQuotas::default();
    let mut index = 0;
    while index < quota_tokens.len() {
        let Some(kind) = QuotaKind::from_keyword(quota_tokens[index]) else {
            index += 1;
            continue;
        };

        if fail_on_malformed {
            let quota = quota_value(kind, max_resource_quota, quota_tokens.get(index + 1))?;
            parsed.insert_quota(kind, quota);
            match usage_tokens.get(index) {
                None => log::debug!(
                    "No usage reported for '{}', past the end of the usage header",
                    kind.service_keyword()
                ),
                Some(token) if QuotaKind::from_keyword(token) != Some(kind) => {
                    return Err(misaligned());
                }
                Some(_) => parsed.insert_usage(
                    kind,
                    quota_value(kind, current_resource_quota_usage, usage_tokens.get(index + 1))?,
                ),
            }
            index += 2;
            continue;
        }

        match quota_value(kind, max_resource_quota, quota_tokens.get(index + 1)) {
            Ok(value) => {
                parsed.insert_quota(kind, value);
                match quota_value(kind, current_resource_quota_usage, usage_tokens.get(index + 1)) {
                    Ok(value) => parsed.insert_usage(kind, value),
                    Err(error) => log::warn!("Skipping usage: {error}"),
                }
                index += 2;
            }
            Err(error) => {
                // The token after the keyword might be the next keyword.
                log::warn!("Skipping quota: {error}");
                index += 1;
            }
        }
    }

    log::debug!("Parsed resource quotas of {} kinds", parsed.len());
    Ok(QuotaHeaders::Reported(parsed))
}

fn quota_value(
    kind: QuotaKind,
    header: &str,
    token: Option<&&str>,
) -> Result<i64, ResourceResponseError> {
    let token = token.ok_or_else(|| ResourceResponseError::MissingQuotaValue {
        quota: kind,
        header: header.to_owned(),
    })?;
    token
        .parse::<i64>()
        .map_err(|_| ResourceResponseError::InvalidQuotaValue {
            quota: kind,
            header: header.to_owned(),
            value: (*token).to_owned(),
        })
}
