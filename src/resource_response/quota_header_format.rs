use crate::prelude::*;

/// What to do when the quota headers are present but do not follow the
/// expected shape: a non integer value, or a usage header naming another
/// kind than the quota header at the same position.
///
/// Headers of different lengths are not malformed, positions past the end of
/// the shorter one read as absent under either policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedQuotaPolicy {
    /// The whole parse fails, [`ResourceResponse::try_quota_usage`] returns
    /// the error and every quota reads as `0`.
    #[default]
    Fail,

    /// Malformed entries are logged and skipped, the rest is kept.
    Skip,
}

/// How the compound quota headers are read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotaHeaderFormat {
    /// Every one of these separates two tokens, there is no escaping.
    pub delimiters: Vec<char>,
    pub malformed_value_policy: MalformedQuotaPolicy,
}

impl Default for QuotaHeaderFormat {
    fn default() -> Self {
        Self {
            delimiters: vec![';', '=', ',', '|', ' '],
            malformed_value_policy: MalformedQuotaPolicy::default(),
        }
    }
}

impl QuotaHeaderFormat {
    /// Reads a format from JSON configuration, missing fields take their
    /// default, e.g. `{ "malformed_value_policy": "skip" }`.
    pub fn from_json_str(json: &str) -> Result<Self, ResourceResponseError> {
        let format = serde_json::from_str::<Self>(json).map_err(|error| {
            ResourceResponseError::InvalidQuotaHeaderFormat {
                underlying: error.to_string(),
            }
        })?;
        if format.delimiters.is_empty() {
            return Err(ResourceResponseError::InvalidQuotaHeaderFormat {
                underlying: "no delimiters".to_owned(),
            });
        }
        Ok(format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_object_is_default() {
        assert_eq!(
            QuotaHeaderFormat::from_json_str("{}"),
            Ok(QuotaHeaderFormat::default())
        );
    }

    #[test]
    fn policy_and_delimiters_are_read() {
        let sut = QuotaHeaderFormat::from_json_str(
            r#"{ "delimiters": [";", ":"], "malformed_value_policy": "skip" }"#,
        )
        .unwrap();
        assert_eq!(sut.delimiters, vec![';', ':']);
        assert_eq!(sut.malformed_value_policy, MalformedQuotaPolicy::Skip);
    }

    #[test]
    fn no_delimiters_is_rejected() {
        assert!(matches!(
            QuotaHeaderFormat::from_json_str(r#"{ "delimiters": [] }"#),
            Err(ResourceResponseError::InvalidQuotaHeaderFormat { .. })
        ));
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(matches!(
            QuotaHeaderFormat::from_json_str(r#"{ "malformed_value_policy": "ignore" }"#),
            Err(ResourceResponseError::InvalidQuotaHeaderFormat { .. })
        ));
    }
}
