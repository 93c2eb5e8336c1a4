use soroban_sdk::contracterror;

// ============================================================================
// CONTRACT ERRORS
// ============================================================================

/// Typed failures for the NFT ledger. Policy violations that historically
/// reverted with a plain message (role checks, the soulbound lock, the
/// third-party frozen owner, burns by non-owners) surface as panics
/// carrying those exact strings instead.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum NftError {
    AlreadyInitialized = 1,
    AccountHasBeenFrozen = 2,
    NonexistentToken = 3,
    IncorrectOwner = 4,
    InsufficientApproval = 5,
}
