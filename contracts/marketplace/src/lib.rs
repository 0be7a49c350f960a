//! NFT marketplace — fixed-price listings for tokens held on an external NFT
//! contract, purchased with an attached NEAR deposit. Listing slots keep a
//! post-sale record: the `owner` field is `None` while a listing is live and
//! the buyer's account once sold.

use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{AccountId, BorshStorageKey, Gas, NearToken, PanicOnDefault, Promise, env, near};

pub mod constants;
mod errors;
mod guards;

mod events;
mod external;

mod admin;
mod internal;
mod listing;
mod purchase;
pub mod types;
mod views;


pub use constants::*;
pub use errors::MarketplaceError;
pub use types::{Listing, MarketItem};

// --- Storage Keys ---

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Listings,
    ListingsBySeller,
    ListingsBySellerInner { account_id_hash: Vec<u8> },
}

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub owner_id: AccountId,

    // One slot per token ID; a slot survives its sale so buyers stay queryable.
    pub listings: IterableMap<u64, Listing>,
    pub(crate) listings_by_seller: LookupMap<AccountId, IterableSet<u64>>,
}
