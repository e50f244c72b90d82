//! Wire envelope for backend responses.
//!
//! Every successful response wraps its payload as `{ "data": ... }`; any
//! other shape fails to parse and is treated as an error by the caller.

#[derive(Debug, serde::Deserialize)]
pub(super) struct Envelope<T> {
    pub(super) data: T,
}
