/*!
Building and encoding requests.

Every mutation validates its input before writing anything, so a failed call
leaves the request exactly as it was.

The encoded form is an indefinite-length CBOR map. Keys, in wire order:

```text
codeLocation     uint     always
source           tstr     always
args             [* tstr] if args are non-empty (indefinite-length array)
secretsLocation  uint     if secrets are non-empty
secrets          bstr     if secrets are non-empty
```

The outer `0xbf` … `0xff` map header is part of the wire format. A decoder
that expects bare key/value pairs and adds its own map framing would see the
map nested twice, so dropping or adding the header is a breaking change.
*/

use crate::{
    buffer::ByteBuffer,
    bytes::Bytes,
    cbor::Encoder,
    constants::keys,
    error::{Error, Result},
    types::{CodeLanguage, Location, Request},
};

impl Request {
    /// Set where the code lives, its language and the source (code or URL).
    ///
    /// Secrets and args are left alone.
    pub fn initialize_request(
        &mut self,
        location: Location,
        language: CodeLanguage,
        source: impl Into<String>,
    ) -> Result<()> {
        let source = source.into();
        if source.is_empty() {
            return Err(Error::EmptySource);
        }

        self.code_location = location;
        self.language = language;
        self.source = source;
        Ok(())
    }

    pub fn initialize_inline_javascript(&mut self, source: impl Into<String>) -> Result<()> {
        self.initialize_request(Location::Inline, CodeLanguage::JavaScript, source)
    }

    /// Attach a reference to remotely hosted, encrypted secrets.
    ///
    /// Inline secrets cannot be attached.
    pub fn add_remote_secrets(&mut self, secrets: impl Into<Bytes>) -> Result<()> {
        let secrets = secrets.into();
        if secrets.is_empty() {
            return Err(Error::EmptySecrets);
        }

        self.secrets_location = Location::Remote;
        self.secrets = secrets;
        Ok(())
    }

    /// Replace the positional arguments, keeping their order.
    pub fn add_args<I, S>(&mut self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        if args.is_empty() {
            return Err(Error::EmptyArgs);
        }

        self.args = args;
        Ok(())
    }

    /// Encode into a fresh buffer of the default capacity.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut buffer = ByteBuffer::new();
        self.encode_into(&mut buffer)?;
        Ok(buffer.into_vec())
    }

    pub fn encode_with_capacity(&self, capacity: usize) -> Result<Vec<u8>> {
        let mut buffer = ByteBuffer::with_capacity(capacity);
        self.encode_into(&mut buffer)?;
        Ok(buffer.into_vec())
    }

    /// Append the encoded request to `buffer`.
    ///
    /// Nothing is written if the request is rejected.
    pub fn encode_into(&self, buffer: &mut ByteBuffer) -> Result<()> {
        let has_secrets = !self.secrets.is_empty();
        if has_secrets && self.secrets_location == Location::Inline {
            tracing::warn!("refusing to encode request with inline secrets");
            return Err(Error::NoInlineSecrets);
        }

        let start = buffer.len();
        let mut encoder = Encoder::new(buffer);
        encoder.start_map();

        encoder.write_string(keys::CODE_LOCATION);
        encoder.write_uint(u8::from(self.code_location).into());

        encoder.write_string(keys::SOURCE);
        encoder.write_string(&self.source);

        if !self.args.is_empty() {
            encoder.write_string(keys::ARGS);
            encoder.start_array();
            for arg in &self.args {
                encoder.write_string(arg);
            }
            encoder.end_sequence();
        }

        if has_secrets {
            encoder.write_string(keys::SECRETS_LOCATION);
            encoder.write_uint(u8::from(self.secrets_location).into());
            encoder.write_string(keys::SECRETS);
            encoder.write_bytes(&self.secrets);
        }

        encoder.end_sequence();

        tracing::debug!(
            code_location = ?self.code_location,
            args = self.args.len(),
            secrets = self.secrets.len(),
            encoded = buffer.len() - start,
            "encoded request"
        );
        Ok(())
    }
}

/// Chaining front end for assembling a single `Request`.
///
/// ```
/// use functions_request::RequestBuilder;
///
/// let mut builder = RequestBuilder::new();
/// builder
///     .initialize_inline_javascript("return Functions.encodeUint256(1)")?
///     .add_args(["ETH", "USD"])?;
/// let bytes = builder.encode()?;
/// assert_eq!(bytes[0], 0xbf);
/// # Ok::<(), functions_request::Error>(())
/// ```
#[derive(Clone,Debug,Default)]
pub struct RequestBuilder {
    request: Request,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initialize_request(
        &mut self,
        location: Location,
        language: CodeLanguage,
        source: impl Into<String>,
    ) -> Result<&mut Self> {
        self.request.initialize_request(location, language, source)?;
        Ok(self)
    }

    pub fn initialize_inline_javascript(&mut self, source: impl Into<String>) -> Result<&mut Self> {
        self.request.initialize_inline_javascript(source)?;
        Ok(self)
    }

    pub fn add_remote_secrets(&mut self, secrets: impl Into<Bytes>) -> Result<&mut Self> {
        self.request.add_remote_secrets(secrets)?;
        Ok(self)
    }

    pub fn add_args<I, S>(&mut self, args: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.add_args(args)?;
        Ok(self)
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        self.request.encode()
    }

    pub fn build(self) -> Request {
        self.request
    }
}

impl From<Request> for RequestBuilder {
    fn from(request: Request) -> Self {
        Self { request }
    }
}
