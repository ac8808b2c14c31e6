use anchor_lang::prelude::*;

use crate::error::CldxError;

/// Owner role with a two-step handoff: the current owner nominates a
/// candidate, and the candidate must accept before the role moves.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ownership {
    pub owner: Pubkey,
    pub pending_owner: Option<Pubkey>,
}

impl Ownership {
    pub const SIZE: usize =
        32 + // owner
        1 + 32; // pending_owner

    pub fn new(owner: Pubkey) -> Self {
        Self {
            owner,
            pending_owner: None,
        }
    }

    pub fn require_owner(&self, signer: &Pubkey) -> std::result::Result<(), CldxError> {
        if *signer != self.owner {
            return Err(CldxError::UnauthorizedOwner);
        }
        Ok(())
    }

    /// Nominate `candidate`, replacing any earlier nomination.
    pub fn propose(&mut self, signer: &Pubkey, candidate: Pubkey) -> std::result::Result<(), CldxError> {
        self.require_owner(signer)?;
        if candidate == Pubkey::default() {
            return Err(CldxError::ZeroAddress);
        }
        self.pending_owner = Some(candidate);
        Ok(())
    }

    /// Commit the handoff. Returns the previous owner.
    pub fn accept(&mut self, signer: &Pubkey) -> std::result::Result<Pubkey, CldxError> {
        let candidate = self.pending_owner.ok_or(CldxError::NoPendingOwner)?;
        if *signer != candidate {
            return Err(CldxError::UnauthorizedPendingOwner);
        }
        let previous = self.owner;
        self.owner = candidate;
        self.pending_owner = None;
        Ok(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handoff_requires_nomination_then_acceptance() {
        let owner = Pubkey::new_unique();
        let candidate = Pubkey::new_unique();
        let mut o = Ownership::new(owner);

        assert!(matches!(o.accept(&candidate), Err(CldxError::NoPendingOwner)));

        o.propose(&owner, candidate).unwrap();
        assert_eq!(o.owner, owner);
        assert_eq!(o.pending_owner, Some(candidate));

        assert!(matches!(
            o.accept(&owner),
            Err(CldxError::UnauthorizedPendingOwner)
        ));

        assert_eq!(o.accept(&candidate).unwrap(), owner);
        assert_eq!(o.owner, candidate);
        assert_eq!(o.pending_owner, None);
    }

    #[test]
    fn only_owner_may_nominate() {
        let owner = Pubkey::new_unique();
        let mut o = Ownership::new(owner);
        let stranger = Pubkey::new_unique();

        assert!(matches!(
            o.propose(&stranger, stranger),
            Err(CldxError::UnauthorizedOwner)
        ));
        assert!(matches!(
            o.propose(&owner, Pubkey::default()),
            Err(CldxError::ZeroAddress)
        ));
        assert_eq!(o.pending_owner, None);
    }
}
