use anchor_lang::prelude::*;

use crate::errors::StablecoinError;

/// Independent attestation consulted before new supply is created.
pub trait ReserveVerifier {
    fn verify(&self, required_reserve: u128) -> Result<bool>;
}

/// Asks the linked reserve auditor program, signing as the ledger config PDA.
pub struct AuditorCpi<'a, 'info> {
    pub auditor_program: AccountInfo<'info>,
    pub auditor: AccountInfo<'info>,
    /// The auditor recorded in the ledger config.
    pub linked_auditor: Pubkey,
    pub ledger: AccountInfo<'info>,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl ReserveVerifier for AuditorCpi<'_, '_> {
    fn verify(&self, required_reserve: u128) -> Result<bool> {
        require_keys_eq!(
            self.auditor.key(),
            self.linked_auditor,
            StablecoinError::InvalidReserveAuditor
        );
        let cpi_accounts = reserve_auditor::cpi::accounts::Verify {
            auditor: self.auditor.clone(),
            caller: self.ledger.clone(),
        };
        let cpi_ctx = CpiContext::new_with_signer(
            self.auditor_program.clone(),
            cpi_accounts,
            self.signer_seeds,
        );
        let verified = reserve_auditor::cpi::verify(cpi_ctx, required_reserve)?.get();
        Ok(verified)
    }
}
