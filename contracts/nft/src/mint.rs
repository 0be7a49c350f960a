use crate::guards::check_at_least_one_yocto;
use crate::*;
use near_sdk::json_types::U64;
use std::collections::HashMap;

#[near]
impl Contract {
    /// Mints the next sequential token ID to `receiver_id`. Restricted to the
    /// contract owner, matching the deployer-mints issuance model.
    #[payable]
    #[handle_result]
    pub fn nft_mint(&mut self, receiver_id: AccountId) -> Result<U64, TokenError> {
        check_at_least_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        self.mint(receiver_id).map(U64)
    }
}

impl Contract {
    pub(crate) fn mint(&mut self, receiver_id: AccountId) -> Result<u64, TokenError> {
        let token_id = self.next_token_id;
        self.next_token_id = self
            .next_token_id
            .checked_add(1)
            .ok_or_else(|| TokenError::InternalError("Token ID counter overflow".into()))?;

        let token = Token {
            owner_id: receiver_id.clone(),
            approved_account_ids: HashMap::new(),
        };
        self.tokens_by_id.insert(token_id, token);
        self.add_token_to_owner(&receiver_id, token_id);

        events::emit_mint(receiver_id.as_str(), &[token_id.to_string()], None);
        Ok(token_id)
    }
}
