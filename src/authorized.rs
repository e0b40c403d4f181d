//! Allow-list of addresses permitted to invoke protected actions.
//!
//! Who may change the list is not decided here: the policy is injected
//! as a `SetSendersPermission`, which any `Fn(&Address) -> bool` satisfies.

use std::collections::HashSet;

use crate::{
    error::{Error, Result},
    types::Address,
};

/// Decides whether `caller` may replace the authorized senders.
pub trait SetSendersPermission {
    fn can_set_authorized_senders(&self, caller: &Address) -> bool;
}

impl<F> SetSendersPermission for F
where
    F: Fn(&Address) -> bool,
{
    fn can_set_authorized_senders(&self, caller: &Address) -> bool {
        self(caller)
    }
}

/// Only a single owner address may change the list.
#[derive(Copy,Clone,Debug,Eq,PartialEq)]
pub struct OwnerOnly(pub Address);

impl SetSendersPermission for OwnerOnly {
    fn can_set_authorized_senders(&self, caller: &Address) -> bool {
        *caller == self.0
    }
}

pub struct AuthorizedSenders<P> {
    // O(1) membership
    members: HashSet<Address>,
    // order of the last `set_authorized_senders`
    ordered: Vec<Address>,
    permission: P,
}

impl<P: SetSendersPermission> AuthorizedSenders<P> {
    pub fn new(permission: P) -> Self {
        Self {
            members: HashSet::new(),
            ordered: Vec::new(),
            permission,
        }
    }

    /// Replace the whole set.
    ///
    /// Repeated addresses are kept once, at their first position.
    /// On error the current set is left untouched.
    pub fn set_authorized_senders(&mut self, caller: &Address, senders: &[Address]) -> Result<()> {
        if !self.permission.can_set_authorized_senders(caller) {
            tracing::warn!(%caller, "denied change of authorized senders");
            return Err(Error::NotAllowedToSetSenders);
        }
        if senders.is_empty() {
            return Err(Error::EmptySendersList);
        }

        self.members.clear();
        self.ordered.clear();
        for sender in senders {
            if self.members.insert(*sender) {
                self.ordered.push(*sender);
            }
        }

        tracing::info!(senders = ?self.ordered, changed_by = %caller, "authorized senders changed");
        Ok(())
    }

    pub fn get_authorized_senders(&self) -> &[Address] {
        &self.ordered
    }

    pub fn is_authorized_sender(&self, sender: &Address) -> bool {
        self.members.contains(sender)
    }

    /// Guard for protected actions.
    pub fn validate_authorized_sender(&self, sender: &Address) -> Result<()> {
        if self.is_authorized_sender(sender) {
            Ok(())
        } else {
            tracing::warn!(%sender, "unauthorized sender");
            Err(Error::UnauthorizedSender)
        }
    }
}
