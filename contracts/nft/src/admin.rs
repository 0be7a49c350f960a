use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(owner_id: AccountId) -> Self {
        Self {
            owner_id,
            tokens_by_id: IterableMap::new(StorageKey::TokensById),
            tokens_per_owner: LookupMap::new(StorageKey::TokensPerOwner),
            next_token_id: 1,
            next_approval_id: 0,
        }
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), TokenError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(TokenError::InvalidInput(
                "New owner must differ from current owner".to_string(),
            ));
        }
        self.owner_id = new_owner;
        Ok(())
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }
}
