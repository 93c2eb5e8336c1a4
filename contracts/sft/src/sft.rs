use soroban_sdk::{contract, contractimpl, Address, Bytes, Env, String, Vec};
use token_policy::{compliance, roles, Role};

use crate::events;
use crate::storage;
use crate::types::SftError;

// ============================================================================
// MULTI-CLASS SEMI-FUNGIBLE TOKEN WITH ROLE-GATED COMPLIANCE
// ============================================================================

#[contract]
pub struct Sft;

#[contractimpl]
impl Sft {
    // ------------------------------------------------------------------------
    // Initialization
    // ------------------------------------------------------------------------

    /// The `admin` account becomes the sole initial admin and also
    /// receives the minter role.
    pub fn initialize(env: Env, admin: Address) -> Result<(), SftError> {
        if storage::is_initialized(&env) {
            return Err(SftError::AlreadyInitialized);
        }

        roles::seed(&env, Role::Admin, &admin);
        roles::seed(&env, Role::Minter, &admin);
        storage::set_initialized(&env);

        Ok(())
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

    pub fn set_to_sbt(env: Env, caller: Address, value: bool) {
        compliance::set_to_sbt(&env, &caller, value);
    }

    pub fn is_sbt(env: Env) -> bool {
        compliance::is_sbt(&env)
    }

    // ------------------------------------------------------------------------
    // Mint
    // ------------------------------------------------------------------------

    /// Credits `amount` of class `class_id` to `to`. Class ids are chosen
    /// by the caller; there is no auto-assignment. The `data` argument is
    /// carried for interface parity and has no effect here.
    pub fn mint(
        env: Env,
        caller: Address,
        to: Address,
        class_id: u64,
        amount: i128,
        _data: Bytes,
    ) -> Result<(), SftError> {
        caller.require_auth();
        storage::bump_instance(&env);

        if !compliance::can_mint(&env, &caller) {
            panic!("This NFT is not publicly mintable");
        }
        require_positive_amount(amount)?;

        credit(&env, &to, class_id, amount)?;
        events::emit_mint(&env, &to, class_id, amount);

        Ok(())
    }

    pub fn mint_batch(
        env: Env,
        caller: Address,
        to: Address,
        class_ids: Vec<u64>,
        amounts: Vec<i128>,
        _data: Bytes,
    ) -> Result<(), SftError> {
        caller.require_auth();
        storage::bump_instance(&env);

        if !compliance::can_mint(&env, &caller) {
            panic!("This NFT is not publicly mintable");
        }
        require_same_length(&class_ids, &amounts)?;

        for (class_id, amount) in class_ids.iter().zip(amounts.iter()) {
            require_positive_amount(amount)?;
            credit(&env, &to, class_id, amount)?;
        }
        events::emit_mint_batch(&env, &to, &class_ids, &amounts);

        Ok(())
    }

    // ------------------------------------------------------------------------
    // Metadata
    // ------------------------------------------------------------------------

    /// Sets the metadata URI of a class. Admin only. The class does not
    /// need to have been minted yet.
    pub fn set_token_uri(env: Env, caller: Address, class_id: u64, uri: String) {
        caller.require_auth();
        roles::require_role(&env, &caller, Role::Admin);

        storage::set_uri(&env, class_id, &uri);
        events::emit_uri_set(&env, class_id);
    }

    /// Returns the class URI, or an empty string when none is set.
    pub fn uri(env: Env, class_id: u64) -> String {
        storage::get_uri(&env, class_id).unwrap_or_else(|| String::from_str(&env, ""))
    }

    pub fn balance_of(env: Env, account: Address, class_id: u64) -> i128 {
        storage::get_balance(&env, &account, class_id)
    }

    // ------------------------------------------------------------------------
    // Operator approvals
    // ------------------------------------------------------------------------

    pub fn set_approval_for_all(env: Env, owner: Address, operator: Address, approved: bool) {
        owner.require_auth();
        storage::set_approval_for_all(&env, &owner, &operator, approved);
        events::emit_approval_for_all(&env, &owner, &operator, approved);
    }

    pub fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool {
        storage::is_approved_for_all(&env, &owner, &operator)
    }

    // ------------------------------------------------------------------------
    // Transfers
    // ------------------------------------------------------------------------

    /// Moves `amount` of `class_id` from the sender's own balance.
    pub fn safe_transfer(
        env: Env,
        from: Address,
        to: Address,
        class_id: u64,
        amount: i128,
    ) -> Result<(), SftError> {
        from.require_auth();
        storage::bump_instance(&env);

        require_transferable(&env, &from, &from);
        require_positive_amount(amount)?;

        move_class(&env, &from, &to, class_id, amount)?;
        events::emit_transfer(&env, &from, &to, class_id, amount);

        Ok(())
    }

    pub fn safe_batch_transfer(
        env: Env,
        from: Address,
        to: Address,
        class_ids: Vec<u64>,
        amounts: Vec<i128>,
    ) -> Result<(), SftError> {
        from.require_auth();
        storage::bump_instance(&env);

        require_transferable(&env, &from, &from);
        require_same_length(&class_ids, &amounts)?;

        for (class_id, amount) in class_ids.iter().zip(amounts.iter()) {
            require_positive_amount(amount)?;
            move_class(&env, &from, &to, class_id, amount)?;
        }
        events::emit_transfer_batch(&env, &from, &to, &class_ids, &amounts);

        Ok(())
    }

    /// Batch transfer on behalf of `from`, using an operator approval.
    /// `data` is carried for interface parity only.
    pub fn safe_batch_transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        class_ids: Vec<u64>,
        amounts: Vec<i128>,
        _data: Bytes,
    ) -> Result<(), SftError> {
        spender.require_auth();
        storage::bump_instance(&env);

        require_transferable(&env, &from, &spender);
        if spender != from && !storage::is_approved_for_all(&env, &from, &spender) {
            return Err(SftError::MissingApprovalForAll);
        }
        require_same_length(&class_ids, &amounts)?;

        for (class_id, amount) in class_ids.iter().zip(amounts.iter()) {
            require_positive_amount(amount)?;
            move_class(&env, &from, &to, class_id, amount)?;
        }
        events::emit_transfer_batch(&env, &from, &to, &class_ids, &amounts);

        Ok(())
    }

    // ------------------------------------------------------------------------
    // Burn
    // ------------------------------------------------------------------------

    /// Debits `amount` of `class_id` from `owner`. The owner may burn its
    /// own balance; a burner-role holder may burn anyone's. Frozen owner
    /// and frozen caller block the burn independently.
    pub fn burn(
        env: Env,
        caller: Address,
        owner: Address,
        class_id: u64,
        amount: i128,
    ) -> Result<(), SftError> {
        caller.require_auth();
        storage::bump_instance(&env);

        require_burnable(&env, &caller, &owner);
        require_positive_amount(amount)?;

        debit(&env, &owner, class_id, amount)?;
        events::emit_burn(&env, &owner, class_id, amount);

        Ok(())
    }

    pub fn burn_batch(
        env: Env,
        caller: Address,
        owner: Address,
        class_ids: Vec<u64>,
        amounts: Vec<i128>,
    ) -> Result<(), SftError> {
        caller.require_auth();
        storage::bump_instance(&env);

        require_burnable(&env, &caller, &owner);
        require_same_length(&class_ids, &amounts)?;

        for (class_id, amount) in class_ids.iter().zip(amounts.iter()) {
            require_positive_amount(amount)?;
            debit(&env, &owner, class_id, amount)?;
        }
        events::emit_burn_batch(&env, &owner, &class_ids, &amounts);

        Ok(())
    }
}

// ============================================================================
// POLICY CHECKS
// ============================================================================

// Semi-fungible paths signal frozen parties with the plain messages, not
// the typed error; the owner check precedes the caller check, so a frozen
// sender acting directly reads as the frozen owner. Callers depend on the
// exact strings and their precedence.
fn require_transferable(env: &Env, from: &Address, caller: &Address) {
    if compliance::is_sbt(env) {
        panic!("This NFT was not permitted to transfer");
    }
    if compliance::is_frozen(env, from) {
        panic!("Owner has been frozen");
    }
    if compliance::is_frozen(env, caller) {
        panic!("Caller has been frozen");
    }
}

fn require_burnable(env: &Env, caller: &Address, owner: &Address) {
    if compliance::is_sbt(env) {
        panic!("This NFT was not permitted to burn");
    }
    if compliance::is_frozen(env, owner) {
        panic!("Owner has been frozen");
    }
    if compliance::is_frozen(env, caller) {
        panic!("Caller has been frozen");
    }
    if *caller != *owner && !roles::has_role(env, Role::Burner, caller) {
        panic!("Caller does not own this NFT");
    }
}

// ============================================================================
// LEDGER EFFECTS
// ============================================================================

fn require_positive_amount(amount: i128) -> Result<(), SftError> {
    if amount <= 0 {
        return Err(SftError::InvalidAmount);
    }
    Ok(())
}

fn require_same_length(class_ids: &Vec<u64>, amounts: &Vec<i128>) -> Result<(), SftError> {
    if class_ids.len() != amounts.len() {
        return Err(SftError::LengthMismatch);
    }
    Ok(())
}

fn credit(env: &Env, to: &Address, class_id: u64, amount: i128) -> Result<(), SftError> {
    let new_balance = storage::get_balance(env, to, class_id)
        .checked_add(amount)
        .ok_or(SftError::InvalidAmount)?;
    storage::set_balance(env, to, class_id, new_balance);
    Ok(())
}

fn debit(env: &Env, from: &Address, class_id: u64, amount: i128) -> Result<(), SftError> {
    let balance = storage::get_balance(env, from, class_id);
    if balance < amount {
        return Err(SftError::InsufficientBalance);
    }
    storage::set_balance(env, from, class_id, balance - amount);
    Ok(())
}

fn move_class(
    env: &Env,
    from: &Address,
    to: &Address,
    class_id: u64,
    amount: i128,
) -> Result<(), SftError> {
    debit(env, from, class_id, amount)?;
    credit(env, to, class_id, amount)?;
    Ok(())
}

// ============================================================================
// UNIT TESTS
// ============================================================================
