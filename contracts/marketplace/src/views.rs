use crate::*;
use near_sdk::json_types::U64;

#[near]
impl Contract {
    /// Total lookup over a listing slot. Never-listed IDs come back as an
    /// empty record with the zero-sentinel owner and a zero price.
    pub fn get_market_item(&self, token_id: U64) -> MarketItem {
        self.listings
            .get(&token_id.0)
            .map(MarketItem::from)
            .unwrap_or_else(|| MarketItem::empty(token_id.0))
    }

    pub fn get_listing(&self, token_id: U64) -> Option<Listing> {
        self.listings.get(&token_id.0).cloned()
    }

    pub fn get_supply_listings(&self) -> u64 {
        self.listings.len() as u64
    }

    pub fn get_listings(&self, from_index: Option<u64>, limit: Option<u64>) -> Vec<Listing> {
        let start = from_index.unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_VIEW_LIMIT).min(MAX_VIEW_LIMIT);

        self.listings
            .iter()
            .skip(start as usize)
            .take(limit as usize)
            .map(|(_, listing)| listing.clone())
            .collect()
    }

    pub fn get_listings_by_seller(
        &self,
        account_id: AccountId,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<Listing> {
        let Some(token_ids) = self.listings_by_seller.get(&account_id) else {
            return vec![];
        };

        let start = from_index.unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_VIEW_LIMIT).min(MAX_VIEW_LIMIT);

        token_ids
            .iter()
            .skip(start as usize)
            .take(limit as usize)
            .filter_map(|token_id| self.listings.get(token_id).cloned())
            .collect()
    }
}
