use near_sdk::AccountId;
use near_sdk::json_types::{U64, U128};
use near_sdk::near;

/// One sale slot per token ID. `owner` is the zero sentinel (`None`) while
/// the listing is live and becomes the buyer's account after a successful
/// purchase; the slot is kept after the sale as a queryable receipt.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct Listing {
    pub seller: AccountId,
    pub nft_contract_id: AccountId,
    pub token_id: U64,
    /// Approval under which this contract may move the token.
    pub approval_id: u64,
    pub price: U128,
    pub owner: Option<AccountId>,
}

impl Listing {
    pub fn is_sold(&self) -> bool {
        self.owner.is_some()
    }
}

/// Total view over a listing slot: never-listed IDs come back with the
/// zero-sentinel owner and a zero price instead of an absent record.
#[near(serializers = [json])]
#[derive(Clone)]
pub struct MarketItem {
    pub token_id: U64,
    pub nft_contract_id: Option<AccountId>,
    pub seller: Option<AccountId>,
    pub price: U128,
    pub owner: Option<AccountId>,
}

impl MarketItem {
    pub(crate) fn empty(token_id: u64) -> Self {
        Self {
            token_id: U64(token_id),
            nft_contract_id: None,
            seller: None,
            price: U128(0),
            owner: None,
        }
    }
}

impl From<&Listing> for MarketItem {
    fn from(listing: &Listing) -> Self {
        Self {
            token_id: listing.token_id,
            nft_contract_id: Some(listing.nft_contract_id.clone()),
            seller: Some(listing.seller.clone()),
            price: listing.price,
            owner: listing.owner.clone(),
        }
    }
}
