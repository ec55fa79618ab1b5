use crate::prelude::*;

/// The maximum allowance and current consumption the service reported for
/// one [`QuotaKind`], both `0` when the kind was not reported.
#[derive(Record, Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuotaUsage {
    pub quota: i64,
    pub usage: i64,
}

impl QuotaUsage {
    pub fn new(quota: i64, usage: i64) -> Self {
        Self { quota, usage }
    }
}

/// A [`QuotaUsage`] tagged with the kind it was reported for.
#[derive(Record, Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuotaUsageEntry {
    pub kind: QuotaKind,
    pub quota_usage: QuotaUsage,
}
