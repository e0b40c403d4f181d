pub const DEFAULT_CAPACITY: usize = 256;

// initial bytes with additional information 31 / the "break" stop code
pub const INDEFINITE_ARRAY: u8 = 0x9f;
pub const INDEFINITE_MAP: u8 = 0xbf;
pub const BREAK: u8 = 0xff;

// arguments below this fit in the initial byte
pub const MAX_INLINE_ARGUMENT: u64 = 23;

/// Map keys of the encoded request, in wire order.
///
/// The receiving decoder depends on this order. Do not sort.
pub mod keys {
    pub const CODE_LOCATION: &str = "codeLocation";
    pub const SOURCE: &str = "source";
    pub const ARGS: &str = "args";
    pub const SECRETS_LOCATION: &str = "secretsLocation";
    pub const SECRETS: &str = "secrets";
}

pub const ADDRESS_LENGTH: usize = 20;
