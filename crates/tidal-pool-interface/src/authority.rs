//! Two-step authority transfer helpers.
//!
//! Both programs guard their admin surface with the same pair of
//! instructions: the current authority nominates a successor, and the
//! successor must accept before any power changes hands. The shared logic
//! lives here so neither program re-implements it.
//!
//! # Usage
//!
//! 1. Implement `HasAuthority` for your config type
//! 2. Call `transfer_authority_impl` or `accept_authority_impl` from your handler

use pinocchio::{program_error::ProgramError, pubkey::Pubkey};

/// Trait for config types that support two-step authority transfer.
pub trait HasAuthority {
    /// Get the current authority pubkey.
    fn authority(&self) -> &Pubkey;
    /// Get mutable reference to authority pubkey.
    fn authority_mut(&mut self) -> &mut Pubkey;
    /// Get the pending authority pubkey.
    fn pending_authority(&self) -> &Pubkey;
    /// Get mutable reference to pending authority pubkey.
    fn pending_authority_mut(&mut self) -> &mut Pubkey;
}

/// Set the pending authority; only the current authority may call this.
///
/// # Errors
/// `ProgramError::IllegalOwner` if `signer` is not the current authority.
#[inline]
pub fn transfer_authority_impl<T: HasAuthority>(
    config: &mut T,
    signer: &Pubkey,
    new_authority: &Pubkey,
) -> Result<(), ProgramError> {
    if config.authority() != signer {
        return Err(ProgramError::IllegalOwner);
    }

    *config.pending_authority_mut() = *new_authority;

    Ok(())
}

/// Complete the transfer; only the pending authority may call this.
///
/// # Errors
/// - `ProgramError::UninitializedAccount` if no pending authority is set
/// - `ProgramError::IllegalOwner` if `signer` is not the pending authority
#[inline]
pub fn accept_authority_impl<T: HasAuthority>(
    config: &mut T,
    signer: &Pubkey,
) -> Result<(), ProgramError> {
    if *config.pending_authority() == Pubkey::default() {
        return Err(ProgramError::UninitializedAccount);
    }

    if config.pending_authority() != signer {
        return Err(ProgramError::IllegalOwner);
    }

    *config.authority_mut() = *config.pending_authority();
    *config.pending_authority_mut() = Pubkey::default();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Config {
        authority: Pubkey,
        pending: Pubkey,
    }

    impl HasAuthority for Config {
        fn authority(&self) -> &Pubkey {
            &self.authority
        }
        fn authority_mut(&mut self) -> &mut Pubkey {
            &mut self.authority
        }
        fn pending_authority(&self) -> &Pubkey {
            &self.pending
        }
        fn pending_authority_mut(&mut self) -> &mut Pubkey {
            &mut self.pending
        }
    }

    #[test]
    fn test_two_step_transfer() {
        let admin = [1u8; 32];
        let successor = [2u8; 32];
        let mut config = Config {
            authority: admin,
            pending: Pubkey::default(),
        };

        // Only the current authority can nominate
        assert!(transfer_authority_impl(&mut config, &successor, &successor).is_err());
        transfer_authority_impl(&mut config, &admin, &successor).unwrap();
        assert_eq!(config.authority, admin);

        // Only the nominee can accept
        assert!(accept_authority_impl(&mut config, &admin).is_err());
        accept_authority_impl(&mut config, &successor).unwrap();
        assert_eq!(config.authority, successor);
        assert_eq!(config.pending, Pubkey::default());
    }

    #[test]
    fn test_accept_without_pending_rejected() {
        let mut config = Config {
            authority: [1u8; 32],
            pending: Pubkey::default(),
        };
        assert!(accept_authority_impl(&mut config, &[1u8; 32]).is_err());
    }
}
