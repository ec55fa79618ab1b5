use crate::prelude::*;

/// A resource handed over FFI without a concrete Rust model: its identifier,
/// its entity tag and the JSON it was read from, for the host to decode.
///
/// Only a JSON object is a resource.
#[derive(Record, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub struct RawResource {
    pub id: String,
    pub etag: String,
    pub json: String,
}

impl TryFrom<serde_json::Value> for RawResource {
    type Error = String;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        let object = value
            .as_object()
            .ok_or_else(|| format!("expected a JSON object, found: {value}"))?;
        let string_field = |key: &str| {
            object
                .get(key)
                .and_then(serde_json::Value::as_str)
                .unwrap_or_default()
                .to_owned()
        };
        Ok(Self {
            id: string_field("id"),
            etag: string_field("_etag"),
            json: value.to_string(),
        })
    }
}

impl Resource for RawResource {
    fn id(&self) -> &str {
        &self.id
    }

    fn etag(&self) -> &str {
        &self.etag
    }
}
