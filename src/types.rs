use core::{
    convert::TryFrom,
    fmt,
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::{
    bytes::Bytes,
    constants::ADDRESS_LENGTH,
    error::Error,
};

/// Where a piece of the request lives. The ordinal is on the wire.
#[derive(Copy,Clone,Debug,Eq,PartialEq,Hash,Serialize_repr,Deserialize_repr)]
#[repr(u8)]
pub enum Location {
    Inline = 0,
    Remote = 1,
}

impl Default for Location {
    fn default() -> Self {
        Location::Inline
    }
}

impl TryFrom<u8> for Location {
    type Error = Error;

    fn try_from(from: u8) -> core::result::Result<Location, Error> {
        match from {
            0 => Ok(Location::Inline),
            1 => Ok(Location::Remote),
            value => Err(Error::UnknownOrdinal { kind: "location", value }),
        }
    }
}

impl From<Location> for u8 {
    fn from(location: Location) -> Self {
        location as Self
    }
}

#[derive(Copy,Clone,Debug,Eq,PartialEq,Hash,Serialize_repr,Deserialize_repr)]
#[repr(u8)]
pub enum CodeLanguage {
    JavaScript = 0,
}

impl Default for CodeLanguage {
    fn default() -> Self {
        CodeLanguage::JavaScript
    }
}

impl TryFrom<u8> for CodeLanguage {
    type Error = Error;

    fn try_from(from: u8) -> core::result::Result<CodeLanguage, Error> {
        match from {
            0 => Ok(CodeLanguage::JavaScript),
            value => Err(Error::UnknownOrdinal { kind: "language", value }),
        }
    }
}

impl From<CodeLanguage> for u8 {
    fn from(language: CodeLanguage) -> Self {
        language as Self
    }
}

/// An off-chain computation job, as it is handed to the execution network.
///
/// Build it through the `initialize_*` / `add_*` methods (see `request.rs`),
/// which validate before touching any field. Loading with serde runs the same
/// validation, so a loaded request always has a source.
#[derive(Clone,Debug,Default,Eq,PartialEq,Serialize,Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawRequest")]
pub struct Request {
    pub code_location: Location,
    pub secrets_location: Location,
    pub language: CodeLanguage,
    pub source: String,
    // empty means no secrets attached
    #[serde(skip_serializing_if = "Bytes::is_empty")]
    pub secrets: Bytes,
    // empty means omitted, not an empty array
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}

/// `Request` as it appears in serialized form, before validation.
#[derive(Debug,Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRequest {
    code_location: Location,
    #[serde(default)]
    secrets_location: Location,
    #[serde(default)]
    language: CodeLanguage,
    source: String,
    #[serde(default)]
    secrets: Bytes,
    #[serde(default)]
    args: Vec<String>,
}

impl TryFrom<RawRequest> for Request {
    type Error = Error;

    fn try_from(raw: RawRequest) -> core::result::Result<Request, Error> {
        let mut request = Request::default();
        request.initialize_request(raw.code_location, raw.language, raw.source)?;
        if !raw.args.is_empty() {
            request.add_args(raw.args)?;
        }
        if !raw.secrets.is_empty() {
            if raw.secrets_location == Location::Inline {
                return Err(Error::NoInlineSecrets);
            }
            request.add_remote_secrets(raw.secrets)?;
        }
        Ok(request)
    }
}

/// 20-byte account address, written `0x`-prefixed hex.
#[derive(Copy,Clone,Eq,PartialEq,Hash,Ord,PartialOrd)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Address(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Address(bytes)
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> core::result::Result<Self, Error> {
        let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
        let mut bytes = [0u8; ADDRESS_LENGTH];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|e| Error::InvalidAddress(format!("{}: {}", s, e)))?;
        Ok(Address(bytes))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
