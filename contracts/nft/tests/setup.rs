#![cfg(test)]
#![cfg(not(tarpaulin_include))]
use soroban_sdk::{testutils::Address as _, Address, Env, String};

use compliance_nft::nft::{Nft, NftClient};

pub struct TestEnv<'a> {
    pub env: Env,
    pub client: NftClient<'a>,
    pub admin: Address,
}

impl<'a> TestEnv<'a> {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);

        let contract_id = env.register_contract(None, Nft);
        let client = NftClient::new(&env, &contract_id);

        client.initialize(&admin);

        Self { env, client, admin }
    }

    pub fn user(&self) -> Address {
        Address::generate(&self.env)
    }

    pub fn uri(&self) -> String {
        String::from_str(&self.env, "ipfs://QmVCm44KbQHFVP78wzzNGipLDkd7D7GRk2FrMwLg5EQS5d")
    }

    pub fn uri2(&self) -> String {
        String::from_str(&self.env, "ipfs://QmRqvzf711NdUzqk8gKvjpCt2fC1i8ujZZ8oQtehsif2bs")
    }
}
