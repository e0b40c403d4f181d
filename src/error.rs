/// Everything that can go wrong while building or encoding a request,
/// or while administering the authorized senders.
#[derive(Clone,Debug,Eq,PartialEq,thiserror::Error)]
pub enum Error {
    #[error("request source is empty")]
    EmptySource,

    #[error("secrets are empty")]
    EmptySecrets,

    #[error("args are empty")]
    EmptyArgs,

    #[error("inline secrets are not supported")]
    NoInlineSecrets,

    #[error("list of authorized senders is empty")]
    EmptySendersList,

    #[error("sender is not authorized")]
    UnauthorizedSender,

    #[error("caller is not allowed to set authorized senders")]
    NotAllowedToSetSenders,

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("unknown {kind} ordinal: {value}")]
    UnknownOrdinal { kind: &'static str, value: u8 },
}

impl Error {
    /// Caller supplied an empty or malformed argument.
    ///
    /// These are never retried internally; fixing the input is the only way forward.
    pub fn is_validation(&self) -> bool {
        match self {
            Error::EmptySource
            | Error::EmptySecrets
            | Error::EmptyArgs
            | Error::EmptySendersList
            | Error::InvalidAddress(_)
            | Error::UnknownOrdinal { .. } => true,
            Error::NoInlineSecrets
            | Error::UnauthorizedSender
            | Error::NotAllowedToSetSenders => false,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
