use crate::prelude::*;

/// Quota maxima and current usages demultiplexed from the two compound quota
/// headers, keyed by kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedQuotas {
    quotas: HashMap<QuotaKind, i64>,
    usages: HashMap<QuotaKind, i64>,
}

impl ParsedQuotas {
    pub(crate) fn insert_quota(&mut self, kind: QuotaKind, value: i64) {
        self.quotas.insert(kind, value);
    }

    pub(crate) fn insert_usage(&mut self, kind: QuotaKind, value: i64) {
        self.usages.insert(kind, value);
    }

    pub fn quota(&self, kind: QuotaKind) -> i64 {
        self.quotas.get(&kind).copied().unwrap_or_default()
    }

    pub fn usage(&self, kind: QuotaKind) -> i64 {
        self.usages.get(&kind).copied().unwrap_or_default()
    }

    pub fn quota_usage(&self, kind: QuotaKind) -> QuotaUsage {
        QuotaUsage::new(self.quota(kind), self.usage(kind))
    }

    /// Number of kinds with a reported maximum. A usage is only ever stored
    /// next to its maximum.
    pub fn len(&self) -> usize {
        self.quotas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotas.is_empty()
    }
}

/// Outcome of looking at the quota headers of a response. Absent headers are
/// a normal condition, not every operation reports quotas.
#[derive(Clone, Debug, PartialEq, Eq, enum_as_inner::EnumAsInner)]
pub enum QuotaHeaders {
    NotReported,
    Reported(ParsedQuotas),
}

impl QuotaHeaders {
    pub fn quota_usage(&self, kind: QuotaKind) -> QuotaUsage {
        self.as_reported()
            .map(|parsed| parsed.quota_usage(kind))
            .unwrap_or_default()
    }
}
