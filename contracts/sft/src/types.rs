use soroban_sdk::contracterror;

// ============================================================================
// CONTRACT ERRORS
// ============================================================================

/// Typed failures for the multi-class ledger. Every policy violation on
/// the semi-fungible paths (role checks, the soulbound lock, frozen owner
/// or frozen caller, burns by non-owners) historically reverted with a
/// plain message and surfaces as a panic carrying that exact string.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SftError {
    AlreadyInitialized = 1,
    InsufficientBalance = 2,
    MissingApprovalForAll = 3,
    LengthMismatch = 4,
    InvalidAmount = 5,
}
