use crate::prelude::*;

/// The kinds of resource quota the service reports in the
/// `x-ms-resource-quota` and `x-ms-resource-usage` headers.
#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuotaKind {
    Database,
    Collection,
    User,
    Permission,
    CollectionSize,
    /// Total size of the documents, not the per document limit (`documentSize`).
    DocumentsSize,
    StoredProcedure,
    Trigger,
    UserDefinedFunction,
}

/// Keywords are compared ASCII case-insensitively. Each kind is listed under
/// its descriptive name and under the name the service puts on the wire.
const QUOTA_KEYWORDS: &[(&str, QuotaKind)] = &[
    ("database", QuotaKind::Database),
    ("databases", QuotaKind::Database),
    ("collection", QuotaKind::Collection),
    ("collections", QuotaKind::Collection),
    ("user", QuotaKind::User),
    ("users", QuotaKind::User),
    ("permission", QuotaKind::Permission),
    ("permissions", QuotaKind::Permission),
    ("collection-size", QuotaKind::CollectionSize),
    ("collectionSize", QuotaKind::CollectionSize),
    ("documents-size", QuotaKind::DocumentsSize),
    ("documentsSize", QuotaKind::DocumentsSize),
    ("stored-procedure", QuotaKind::StoredProcedure),
    ("storedProcedures", QuotaKind::StoredProcedure),
    ("trigger", QuotaKind::Trigger),
    ("triggers", QuotaKind::Trigger),
    ("user-defined-function", QuotaKind::UserDefinedFunction),
    ("functions", QuotaKind::UserDefinedFunction),
];

impl QuotaKind {
    pub const ALL: [QuotaKind; 9] = [
        QuotaKind::Database,
        QuotaKind::Collection,
        QuotaKind::User,
        QuotaKind::Permission,
        QuotaKind::CollectionSize,
        QuotaKind::DocumentsSize,
        QuotaKind::StoredProcedure,
        QuotaKind::Trigger,
        QuotaKind::UserDefinedFunction,
    ];

    /// Looks up the kind named by a single header token, `None` for tokens
    /// this crate does not know about (e.g. `documentsCount`).
    pub fn from_keyword(token: &str) -> Option<Self> {
        QUOTA_KEYWORDS
            .iter()
            .find(|(keyword, _)| keyword.eq_ignore_ascii_case(token))
            .map(|(_, kind)| *kind)
    }

    /// The keyword the service uses for this kind on the wire.
    pub(crate) fn service_keyword(&self) -> &'static str {
        match self {
            Self::Database => "databases",
            Self::Collection => "collections",
            Self::User => "users",
            Self::Permission => "permissions",
            Self::CollectionSize => "collectionSize",
            Self::DocumentsSize => "documentsSize",
            Self::StoredProcedure => "storedProcedures",
            Self::Trigger => "triggers",
            Self::UserDefinedFunction => "functions",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_is_found_by_its_service_keyword() {
        for kind in QuotaKind::ALL {
            assert_eq!(QuotaKind::from_keyword(kind.service_keyword()), Some(kind));
        }
    }

    #[test]
    fn keyword_lookup_ignores_case() {
        assert_eq!(QuotaKind::from_keyword("DATABASE"), Some(QuotaKind::Database));
        assert_eq!(
            QuotaKind::from_keyword("StoredProcedures"),
            Some(QuotaKind::StoredProcedure)
        );
        assert_eq!(
            QuotaKind::from_keyword("User-Defined-Function"),
            Some(QuotaKind::UserDefinedFunction)
        );
    }

    #[test]
    fn unknown_tokens_are_not_quota_kinds() {
        assert_eq!(QuotaKind::from_keyword("documentSize"), None);
        assert_eq!(QuotaKind::from_keyword("documentsCount"), None);
        assert_eq!(QuotaKind::from_keyword("5"), None);
        assert_eq!(QuotaKind::from_keyword(""), None);
    }
}
