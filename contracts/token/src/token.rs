use soroban_sdk::{contract, contractimpl, Address, Env, String};
use token_policy::{compliance, roles, Role};

use crate::events;
use crate::storage;
use crate::types::{TokenError, TokenMetadata};
use crate::validation;

// ============================================================================
// FUNGIBLE TOKEN WITH ROLE-GATED COMPLIANCE
// ============================================================================

#[contract]
pub struct Token;

#[contractimpl]
impl Token {
    // ------------------------------------------------------------------------
    // Initialization
    // ------------------------------------------------------------------------

    /// Initializes the token. The `admin` account becomes the sole initial
    /// admin and additionally receives the minter and pauser roles, so the
    /// deployer can operate the token before delegating.
    ///
    /// # Errors
    /// - `AlreadyInitialized` if called a second time.
    pub fn initialize(
        env: Env,
        admin: Address,
        name: String,
        symbol: String,
    ) -> Result<(), TokenError> {
        if storage::has_metadata(&env) {
            return Err(TokenError::AlreadyInitialized);
        }

        roles::seed(&env, Role::Admin, &admin);
        roles::seed(&env, Role::Minter, &admin);
        roles::seed(&env, Role::Pauser, &admin);

        let metadata = TokenMetadata {
            name,
            symbol,
            decimals: 7,
        };
        storage::set_metadata(&env, &metadata);
        storage::set_paused(&env, false);

        Ok(())
    }

    // ------------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------------

    pub fn name(env: Env) -> String {
        storage::bump_instance(&env);
        storage::get_metadata(&env).name
    }

    pub fn symbol(env: Env) -> String {
        storage::bump_instance(&env);
        storage::get_metadata(&env).symbol
    }

    pub fn decimals(env: Env) -> u32 {
        storage::bump_instance(&env);
        storage::get_metadata(&env).decimals
    }

    pub fn balance_of(env: Env, id: Address) -> i128 {
        storage::get_balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::bump_instance(&env);
        storage::get_total_supply(&env)
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> i128 {
        storage::get_allowance(&env, &owner, &spender)
    }

    /// Sum of every amount ever minted. Unlike `total_supply`, burning
    /// does not decrease this counter.
    pub fn total_mint_amount(env: Env) -> i128 {
        storage::get_total_mint_amount(&env)
    }

    pub fn total_burn_amount(env: Env) -> i128 {
        storage::get_total_burn_amount(&env)
    }

    /// Sum of every amount moved by the transfer family. The historical
    /// accessor spelling is kept for existing callers.
    pub fn total_transfered_amount(env: Env) -> i128 {
        storage::get_total_transfered_amount(&env)
    }

    // ------------------------------------------------------------------------
    // Access policy
    // ------------------------------------------------------------------------

    pub fn has_role(env: Env, role: Role, account: Address) -> bool {
        roles::has_role(&env, role, &account)
    }

    pub fn grant_admin(env: Env, caller: Address, account: Address) {
        roles::grant(&env, &caller, Role::Admin, &account);
    }

    pub fn revoke_admin(env: Env, caller: Address, account: Address) {
        roles::revoke(&env, &caller, Role::Admin, &account);
    }

    pub fn grant_minter(env: Env, caller: Address, account: Address) {
        roles::grant(&env, &caller, Role::Minter, &account);
    }

    pub fn revoke_minter(env: Env, caller: Address, account: Address) {
        roles::revoke(&env, &caller, Role::Minter, &account);
    }

    pub fn grant_burner(env: Env, caller: Address, account: Address) {
        roles::grant(&env, &caller, Role::Burner, &account);
    }

    pub fn revoke_burner(env: Env, caller: Address, account: Address) {
        roles::revoke(&env, &caller, Role::Burner, &account);
    }

    pub fn grant_pauser(env: Env, caller: Address, account: Address) {
        roles::grant(&env, &caller, Role::Pauser, &account);
    }

    pub fn revoke_pauser(env: Env, caller: Address, account: Address) {
        roles::revoke(&env, &caller, Role::Pauser, &account);
    }

    // ------------------------------------------------------------------------
    // Compliance gate
    // ------------------------------------------------------------------------

    pub fn freeze(env: Env, caller: Address, account: Address) {
        compliance::freeze(&env, &caller, &account);
    }

    pub fn unfreeze(env: Env, caller: Address, account: Address) {
        compliance::unfreeze(&env, &caller, &account);
    }

    pub fn freeze_accounts(env: Env, account: Address) -> bool {
        compliance::is_frozen(&env, &account)
    }

    pub fn set_publicly_mintable(env: Env, caller: Address, value: bool) {
        compliance::set_publicly_mintable(&env, &caller, value);
    }

    pub fn is_publicly_mintable(env: Env) -> bool {
        compliance::is_publicly_mintable(&env)
    }

    // ------------------------------------------------------------------------
    // Mint
    // ------------------------------------------------------------------------

    /// Credits `amount` to the caller. Requires the minter role unless the
    /// token has been made publicly mintable. Minting is never blocked by
    /// frozen status.
    pub fn mint(env: Env, caller: Address, amount: i128) -> Result<(), TokenError> {
        caller.require_auth();
        storage::bump_instance(&env);

        // === CHECKS ===
        validation::require_not_paused(&env)?;
        if !compliance::can_mint(&env, &caller) {
            panic!("Caller does not has a MINTER_ROLE");
        }
        validation::require_positive_amount(amount)?;

        // === EFFECTS + EVENT ===
        do_mint(&env, &caller, amount)
    }

    /// Same admission rule as `mint`, crediting `to` instead of the caller.
    pub fn mint_to(env: Env, caller: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        caller.require_auth();
        storage::bump_instance(&env);

        validation::require_not_paused(&env)?;
        if !compliance::can_mint(&env, &caller) {
            panic!("Caller does not has a MINTER_ROLE");
        }
        validation::require_positive_amount(amount)?;

        do_mint(&env, &to, amount)
    }

    // ------------------------------------------------------------------------
    // Burn
    // ------------------------------------------------------------------------

    /// Burns from the caller's own balance.
    ///
    /// # Errors
    /// - `AccountHasBeenFrozen` if the caller is frozen.
    /// - `InsufficientBalance` if `amount` exceeds the balance.
    pub fn burn(env: Env, caller: Address, amount: i128) -> Result<(), TokenError> {
        caller.require_auth();
        storage::bump_instance(&env);

        validation::require_not_paused(&env)?;
        validation::require_not_frozen(&env, &caller)?;
        validation::require_positive_amount(amount)?;
        validation::require_sufficient_balance(&env, &caller, amount)?;

        do_burn(&env, &caller, amount)
    }

    /// Burns from `account`. The self-call is the owner path and needs no
    /// role; burning a third party requires the burner role. Either way a
    /// frozen target blocks the burn.
    pub fn burn_from(
        env: Env,
        caller: Address,
        account: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        caller.require_auth();
        storage::bump_instance(&env);

        validation::require_not_paused(&env)?;
        if caller != account {
            roles::require_role(&env, &caller, Role::Burner);
        }
        validation::require_not_frozen(&env, &account)?;
        validation::require_positive_amount(amount)?;
        validation::require_sufficient_balance(&env, &account, amount)?;

        do_burn(&env, &account, amount)
    }

    // ------------------------------------------------------------------------
    // Approvals
    // ------------------------------------------------------------------------

    pub fn approve(
        env: Env,
        owner: Address,
        spender: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        owner.require_auth();
        storage::bump_instance(&env);

        validation::require_non_negative_amount(amount)?;

        storage::set_allowance(&env, &owner, &spender, amount);
        events::emit_approval(&env, &owner, &spender, amount);

        Ok(())
    }

    // ------------------------------------------------------------------------
    // Transfers
    // ------------------------------------------------------------------------

    /// Moves `amount` from `from` to `to`.
    ///
    /// # Errors
    /// - `EnforcedPause` while paused.
    /// - `AccountHasBeenFrozen` if the sender is frozen.
    /// - `InsufficientBalance` if `amount` exceeds the sender's balance.
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        storage::bump_instance(&env);

        validation::require_not_paused(&env)?;
        validation::require_not_frozen(&env, &from)?;
        validation::require_positive_amount(amount)?;
        validation::require_sufficient_balance(&env, &from, amount)?;

        move_tokens(&env, &from, &to, amount)?;
        events::emit_transfer(&env, &from, &to, amount);

        Ok(())
    }

    /// `transfer` with an opaque memo string published in the transfer
    /// event. The memo carries no on-chain semantics.
    pub fn transfer_with_memo(
        env: Env,
        from: Address,
        to: Address,
        amount: i128,
        memo: String,
    ) -> Result<(), TokenError> {
        from.require_auth();
        storage::bump_instance(&env);

        validation::require_not_paused(&env)?;
        validation::require_not_frozen(&env, &from)?;
        validation::require_positive_amount(amount)?;
        validation::require_sufficient_balance(&env, &from, amount)?;

        move_tokens(&env, &from, &to, amount)?;
        events::emit_transfer_memo(&env, &from, &to, amount, &memo);

        Ok(())
    }

    /// Moves `amount` from `from` to `to` using `spender`'s allowance.
    /// Both the spender and the owner must be unfrozen; the two checks are
    /// independent but surface the same typed error.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        spender.require_auth();
        storage::bump_instance(&env);

        validation::require_not_paused(&env)?;
        validation::require_not_frozen(&env, &spender)?;
        validation::require_not_frozen(&env, &from)?;
        validation::require_positive_amount(amount)?;
        validation::require_sufficient_allowance(&env, &from, &spender, amount)?;
        validation::require_sufficient_balance(&env, &from, amount)?;

        spend_allowance(&env, &from, &spender, amount)?;
        move_tokens(&env, &from, &to, amount)?;
        events::emit_transfer(&env, &from, &to, amount);

        Ok(())
    }

    /// `transfer_from` with an opaque memo, as above.
    pub fn transfer_from_with_memo(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
        memo: String,
    ) -> Result<(), TokenError> {
        spender.require_auth();
        storage::bump_instance(&env);

        validation::require_not_paused(&env)?;
        validation::require_not_frozen(&env, &spender)?;
        validation::require_not_frozen(&env, &from)?;
        validation::require_positive_amount(amount)?;
        validation::require_sufficient_allowance(&env, &from, &spender, amount)?;
        validation::require_sufficient_balance(&env, &from, amount)?;

        spend_allowance(&env, &from, &spender, amount)?;
        move_tokens(&env, &from, &to, amount)?;
        events::emit_transfer_memo(&env, &from, &to, amount, &memo);

        Ok(())
    }

    // ------------------------------------------------------------------------
    // Pause switch
    // ------------------------------------------------------------------------

    /// Halts every state-mutating entry point. Pauser role only.
    pub fn pause(env: Env, caller: Address) -> Result<(), TokenError> {
        caller.require_auth();
        roles::require_role(&env, &caller, Role::Pauser);
        storage::bump_instance(&env);

        storage::set_paused(&env, true);
        events::emit_pause(&env);

        Ok(())
    }

    /// # Errors
    /// - `ExpectedPause` if the token is not paused.
    pub fn unpause(env: Env, caller: Address) -> Result<(), TokenError> {
        caller.require_auth();
        roles::require_role(&env, &caller, Role::Pauser);
        storage::bump_instance(&env);

        if !storage::is_paused(&env) {
            return Err(TokenError::ExpectedPause);
        }
        storage::set_paused(&env, false);
        events::emit_unpause(&env);

        Ok(())
    }

    pub fn is_paused(env: Env) -> bool {
        storage::bump_instance(&env);
        storage::is_paused(&env)
    }
}

// ============================================================================
// LEDGER EFFECTS
// ============================================================================

fn do_mint(env: &Env, to: &Address, amount: i128) -> Result<(), TokenError> {
    let new_balance = storage::get_balance(env, to)
        .checked_add(amount)
        .ok_or(TokenError::InvalidAmount)?;
    let new_supply = storage::get_total_supply(env)
        .checked_add(amount)
        .ok_or(TokenError::InvalidAmount)?;
    let new_minted = storage::get_total_mint_amount(env)
        .checked_add(amount)
        .ok_or(TokenError::InvalidAmount)?;

    storage::set_balance(env, to, new_balance);
    storage::set_total_supply(env, new_supply);
    storage::set_total_mint_amount(env, new_minted);

    events::emit_mint(env, to, amount);

    Ok(())
}

fn do_burn(env: &Env, from: &Address, amount: i128) -> Result<(), TokenError> {
    let new_balance = storage::get_balance(env, from)
        .checked_sub(amount)
        .ok_or(TokenError::InsufficientBalance)?;
    let new_supply = storage::get_total_supply(env)
        .checked_sub(amount)
        .ok_or(TokenError::InvalidAmount)?;
    let new_burned = storage::get_total_burn_amount(env)
        .checked_add(amount)
        .ok_or(TokenError::InvalidAmount)?;

    storage::set_balance(env, from, new_balance);
    storage::set_total_supply(env, new_supply);
    storage::set_total_burn_amount(env, new_burned);

    events::emit_burn(env, from, amount);

    Ok(())
}

fn move_tokens(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), TokenError> {
    let new_from = storage::get_balance(env, from)
        .checked_sub(amount)
        .ok_or(TokenError::InsufficientBalance)?;
    let new_to = storage::get_balance(env, to)
        .checked_add(amount)
        .ok_or(TokenError::InvalidAmount)?;
    let new_moved = storage::get_total_transfered_amount(env)
        .checked_add(amount)
        .ok_or(TokenError::InvalidAmount)?;

    storage::set_balance(env, from, new_from);
    storage::set_balance(env, to, new_to);
    storage::set_total_transfered_amount(env, new_moved);

    Ok(())
}

fn spend_allowance(
    env: &Env,
    owner: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), TokenError> {
    let remaining = storage::get_allowance(env, owner, spender)
        .checked_sub(amount)
        .ok_or(TokenError::InsufficientAllowance)?;
    storage::set_allowance(env, owner, spender, remaining);
    Ok(())
}

// ============================================================================
// UNIT TESTS
// ============================================================================
