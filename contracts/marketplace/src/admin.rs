use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(owner_id: AccountId) -> Self {
        Self {
            owner_id,
            listings: IterableMap::new(StorageKey::Listings),
            listings_by_seller: LookupMap::new(StorageKey::ListingsBySeller),
        }
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), MarketplaceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(MarketplaceError::InvalidInput(
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
