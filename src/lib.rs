mod internal;
mod resource_response;
mod resource_response_error;
mod uniffi_exported;

pub mod prelude {
    pub use crate::internal::*;
    pub use crate::resource_response::*;
    pub use crate::resource_response_error::*;
    pub use crate::uniffi_exported::*;

    pub(crate) use serde::{de::DeserializeOwned, Deserialize, Serialize};
    pub(crate) use std::{
        collections::HashMap,
        sync::{Arc, OnceLock},
    };
    pub(crate) use uniffi::{export, Enum, Error, Object, Record};
}

pub use prelude::*;

uniffi::setup_scaffolding!();
