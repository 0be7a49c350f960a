use crate::guards::hash_account_id;
use crate::*;

impl Contract {
    pub(crate) fn add_listing_to_seller(&mut self, seller: &AccountId, token_id: u64) {
        let mut listed = self.listings_by_seller.remove(seller).unwrap_or_else(|| {
            IterableSet::new(StorageKey::ListingsBySellerInner {
                account_id_hash: hash_account_id(seller),
            })
        });
        listed.insert(token_id);
        self.listings_by_seller.insert(seller.clone(), listed);
    }

    pub(crate) fn remove_listing_from_seller(&mut self, seller: &AccountId, token_id: u64) {
        if let Some(mut listed) = self.listings_by_seller.remove(seller) {
            listed.remove(&token_id);
            if !listed.is_empty() {
                self.listings_by_seller.insert(seller.clone(), listed);
            }
        }
    }
}
