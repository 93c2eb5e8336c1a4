use soroban_sdk::{contract, contractimpl, Address, Env, String};
use token_policy::{compliance, roles, Role};

use crate::events;
use crate::storage;
use crate::types::NftError;

// ============================================================================
// SINGLE-CLASS NFT WITH ROLE-GATED COMPLIANCE
// ============================================================================

#[contract]
pub struct Nft;

#[contractimpl]
impl Nft {
    // ------------------------------------------------------------------------
    // Initialization
    // ------------------------------------------------------------------------

    /// The `admin` account becomes the sole initial admin and also
    /// receives the minter role.
    pub fn initialize(env: Env, admin: Address) -> Result<(), NftError> {
        if storage::is_initialized(&env) {
            return Err(NftError::AlreadyInitialized);
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

    /// Turns the collection soulbound (or back). While set, every
    /// transfer and burn is blocked for everyone.
    pub fn set_to_sbt(env: Env, caller: Address, value: bool) {
        compliance::set_to_sbt(&env, &caller, value);
    }

    pub fn is_sbt(env: Env) -> bool {
        compliance::is_sbt(&env)
    }

    // ------------------------------------------------------------------------
    // Mint
    // ------------------------------------------------------------------------

    /// Mints a new token to `to` with the supplied metadata URI and
    /// returns its id. Ids are assigned sequentially from zero.
    ///
    /// Requires the minter role unless the collection is publicly
    /// mintable. Frozen status never blocks minting.
    pub fn safe_mint(env: Env, caller: Address, to: Address, uri: String) -> u64 {
        caller.require_auth();
        storage::bump_instance(&env);

        if !compliance::can_mint(&env, &caller) {
            panic!("This NFT is not publicly mintable");
        }

        let token_id = storage::take_next_id(&env);
        storage::set_owner(&env, token_id, &to);
        storage::set_uri(&env, token_id, &uri);
        storage::set_supply(&env, storage::get_supply(&env) + 1);

        events::emit_mint(&env, &to, token_id);

        token_id
    }

    // ------------------------------------------------------------------------
    // Metadata
    // ------------------------------------------------------------------------

    /// Replaces the metadata URI of an existing token. Admin only.
    pub fn set_token_uri(
        env: Env,
        caller: Address,
        token_id: u64,
        uri: String,
    ) -> Result<(), NftError> {
        caller.require_auth();
        roles::require_role(&env, &caller, Role::Admin);

        if storage::get_owner(&env, token_id).is_none() {
            return Err(NftError::NonexistentToken);
        }
        storage::set_uri(&env, token_id, &uri);
        events::emit_uri_set(&env, token_id);

        Ok(())
    }

    pub fn token_uri(env: Env, token_id: u64) -> Result<String, NftError> {
        storage::get_uri(&env, token_id).ok_or(NftError::NonexistentToken)
    }

    pub fn owner_of(env: Env, token_id: u64) -> Result<Address, NftError> {
        storage::get_owner(&env, token_id).ok_or(NftError::NonexistentToken)
    }

    /// Live token count; decremented on burn.
    pub fn total_supply(env: Env) -> u32 {
        storage::bump_instance(&env);
        storage::get_supply(&env)
    }

    // ------------------------------------------------------------------------
    // Approvals
    // ------------------------------------------------------------------------

    /// Approves a single address for `token_id`. Cleared on transfer and
    /// burn. Owner only.
    pub fn approve(
        env: Env,
        owner: Address,
        approved: Address,
        token_id: u64,
    ) -> Result<(), NftError> {
        owner.require_auth();

        let actual = storage::get_owner(&env, token_id).ok_or(NftError::NonexistentToken)?;
        if actual != owner {
            return Err(NftError::InsufficientApproval);
        }
        storage::set_approved(&env, token_id, &approved);
        events::emit_approval(&env, &owner, &approved, token_id);

        Ok(())
    }

    pub fn get_approved(env: Env, token_id: u64) -> Option<Address> {
        storage::get_approved(&env, token_id)
    }

    // ------------------------------------------------------------------------
    // Transfers
    // ------------------------------------------------------------------------

    /// Transfers the caller's own token to `to`.
    pub fn transfer(env: Env, caller: Address, to: Address, token_id: u64) -> Result<(), NftError> {
        caller.require_auth();
        storage::bump_instance(&env);
        let from = caller.clone();
        do_transfer(&env, &caller, &from, &to, token_id)
    }

    /// Transfers `token_id` from `from` to `to`; the caller must be the
    /// owner or the approved address for the token.
    pub fn transfer_from(
        env: Env,
        caller: Address,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), NftError> {
        caller.require_auth();
        storage::bump_instance(&env);
        do_transfer(&env, &caller, &from, &to, token_id)
    }

    /// Identical to `transfer`; the name exists for interface parity
    /// with callers expecting a receiver-checked variant. The platform
    /// has no receiver hook to consult.
    pub fn safe_transfer(
        env: Env,
        caller: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), NftError> {
        caller.require_auth();
        storage::bump_instance(&env);
        let from = caller.clone();
        do_transfer(&env, &caller, &from, &to, token_id)
    }

    pub fn safe_transfer_from(
        env: Env,
        caller: Address,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), NftError> {
        caller.require_auth();
        storage::bump_instance(&env);
        do_transfer(&env, &caller, &from, &to, token_id)
    }

    // ------------------------------------------------------------------------
    // Burn
    // ------------------------------------------------------------------------

    /// Destroys `token_id`. The owner may burn its own token; a burner-role
    /// holder may burn anyone's, provided the owner is not frozen.
    pub fn burn(env: Env, caller: Address, token_id: u64) -> Result<(), NftError> {
        caller.require_auth();
        storage::bump_instance(&env);

        // === CHECKS ===
        if compliance::is_sbt(&env) {
            panic!("This NFT was not permitted to burn");
        }
        let owner = storage::get_owner(&env, token_id).ok_or(NftError::NonexistentToken)?;
        if caller == owner {
            if compliance::is_frozen(&env, &caller) {
                return Err(NftError::AccountHasBeenFrozen);
            }
        } else if roles::has_role(&env, Role::Burner, &caller) {
            if compliance::is_frozen(&env, &owner) {
                panic!("Owner has been frozen");
            }
        } else {
            panic!("Caller does not own this NFT");
        }

        // === EFFECTS ===
        storage::remove_token(&env, token_id);
        storage::set_supply(&env, storage::get_supply(&env) - 1);

        events::emit_burn(&env, &owner, token_id);

        Ok(())
    }
}

// ============================================================================
// TRANSFER PATH
// ============================================================================

// Check order is load-bearing: the soulbound lock wins over everything,
// a frozen caller is the typed error, a frozen third-party owner is the
// plain-message failure. Callers depend on the distinction.
fn do_transfer(
    env: &Env,
    caller: &Address,
    from: &Address,
    to: &Address,
    token_id: u64,
) -> Result<(), NftError> {
    if compliance::is_sbt(env) {
        panic!("This NFT was not permitted to transfer");
    }
    if compliance::is_frozen(env, caller) {
        return Err(NftError::AccountHasBeenFrozen);
    }

    let owner = storage::get_owner(env, token_id).ok_or(NftError::NonexistentToken)?;
    if compliance::is_frozen(env, &owner) {
        panic!("Owner has been frozen");
    }
    if *caller != owner && storage::get_approved(env, token_id).as_ref() != Some(caller) {
        return Err(NftError::InsufficientApproval);
    }
    if owner != *from {
        return Err(NftError::IncorrectOwner);
    }

    storage::set_owner(env, token_id, to);
    storage::clear_approved(env, token_id);

    events::emit_transfer(env, from, to, token_id);

    Ok(())
}

// ============================================================================
// UNIT TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{testutils::Address as _, Env};

    fn create_client(env: &Env) -> (NftClient, Address) {
        let contract_id = env.register_contract(None, Nft);
        let client = NftClient::new(env, &contract_id);
        let admin = Address::generate(env);
        client.initialize(&admin);
        (client, admin)
    }

    #[test]
    fn test_sequential_ids_from_zero() {
        let env = Env::default();
        env.mock_all_auths();
        let (client, admin) = create_client(&env);
        let uri = String::from_str(&env, "ipfs://a");

        assert_eq!(client.safe_mint(&admin, &admin, &uri), 0);
        assert_eq!(client.safe_mint(&admin, &admin, &uri), 1);
        assert_eq!(client.safe_mint(&admin, &admin, &uri), 2);
        assert_eq!(client.total_supply(), 3);
    }

    #[test]
    fn test_ids_not_reused_after_burn() {
        let env = Env::default();
        env.mock_all_auths();
        let (client, admin) = create_client(&env);
        let uri = String::from_str(&env, "ipfs://a");

        let id = client.safe_mint(&admin, &admin, &uri);
        client.burn(&admin, &id);
        assert_eq!(client.total_supply(), 0);

        let next = client.safe_mint(&admin, &admin, &uri);
        assert_eq!(next, id + 1);
    }

    #[test]
    fn test_initialize_twice_fails() {
        let env = Env::default();
        let (client, admin) = create_client(&env);
        let result = client.try_initialize(&admin);
        assert_eq!(result.unwrap_err().unwrap(), NftError::AlreadyInitialized);
    }
}
