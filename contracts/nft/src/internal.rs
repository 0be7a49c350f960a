use crate::guards::hash_account_id;
use crate::*;

impl Contract {
    pub(crate) fn add_token_to_owner(&mut self, account_id: &AccountId, token_id: u64) {
        let mut owned = self.tokens_per_owner.remove(account_id).unwrap_or_else(|| {
            IterableSet::new(StorageKey::TokensPerOwnerInner {
                account_id_hash: hash_account_id(account_id),
            })
        });
        owned.insert(token_id);
        self.tokens_per_owner.insert(account_id.clone(), owned);
    }

    pub(crate) fn remove_token_from_owner(&mut self, account_id: &AccountId, token_id: u64) {
        if let Some(mut owned) = self.tokens_per_owner.remove(account_id) {
            owned.remove(&token_id);
            if !owned.is_empty() {
                self.tokens_per_owner.insert(account_id.clone(), owned);
            }
        }
    }
}
