use soroban_sdk::{contracterror, contracttype, String};

// ============================================================================
// CONTRACT ERRORS
// ============================================================================

/// Typed failures. Role and policy violations that historically reverted
/// with a plain message are signaled as panics instead and are not listed
/// here; the two forms are intentionally kept distinct.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    AlreadyInitialized = 1,
    EnforcedPause = 2,
    ExpectedPause = 3,
    AccountHasBeenFrozen = 4,
    InsufficientBalance = 5,
    InsufficientAllowance = 6,
    InvalidAmount = 7,
}

// ============================================================================
// TOKEN METADATA
// ============================================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}
