use crate::prelude::*;

pub(crate) trait ResponseHeadersLookup {
    /// The value of header `name`, matched exactly first and then ignoring
    /// ASCII case, since HTTP header names are case-insensitive. When several
    /// other casings are present, the smallest name in byte order wins.
    fn header_value(&self, name: &str) -> Option<&str>;

    /// Like [`ResponseHeadersLookup::header_value`] but treats a blank value
    /// as absent.
    fn non_empty_header_value(&self, name: &str) -> Option<&str> {
        self.header_value(name).filter(|v| !v.trim().is_empty())
    }
}

impl ResponseHeadersLookup for HashMap<String, String> {
    fn header_value(&self, name: &str) -> Option<&str> {
        self.get(name)
            .or_else(|| {
                self.iter()
                    .filter(|(key, _)| key.eq_ignore_ascii_case(name))
                    .min_by(|(a, _), (b, _)| a.cmp(b))
                    .map(|(_, value)| value)
            })
            .map(String::as_str)
    }
}
