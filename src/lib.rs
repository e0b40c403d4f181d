/*!
functions-request

Assemble an off-chain computation job (code location, language, source,
arguments, remotely hosted secrets) and encode it as CBOR for the execution
network.

CBOR: https://www.rfc-editor.org/rfc/rfc8949

The receiving decoder depends on the exact key order and presence rules,
see the `request` module.
*/

pub mod authorized;
pub mod buffer;
pub mod bytes;
pub mod cbor;
pub mod constants;
pub mod error;
pub mod request;
pub mod types;

pub use authorized::{AuthorizedSenders, OwnerOnly, SetSendersPermission};
pub use buffer::ByteBuffer;
pub use bytes::Bytes;
pub use error::{Error, Result};
pub use request::RequestBuilder;
pub use types::{Address, CodeLanguage, Location, Request};
