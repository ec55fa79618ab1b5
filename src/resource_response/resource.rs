/// A resource stored by the data service, e.g. a database, a collection or a
/// document, as deserialized from a response body.
pub trait Resource {
    /// The user assigned identifier, `id` in the JSON representation.
    fn id(&self) -> &str;

    /// The entity tag used for optimistic concurrency, `_etag` in the JSON
    /// representation.
    fn etag(&self) -> &str;
}
