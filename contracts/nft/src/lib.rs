use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{AccountId, BorshStorageKey, PanicOnDefault, env, near};

pub mod constants;
mod errors;
mod guards;

mod events;

mod admin;
mod approval;
mod enumeration;
mod internal;
mod mint;
mod transfer;
pub mod types;

#[cfg(test)]
mod tests;

pub use constants::*;
pub use errors::TokenError;
pub use types::{Token, TokenView};

// --- Storage Keys ---

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    TokensById,
    TokensPerOwner,
    TokensPerOwnerInner { account_id_hash: Vec<u8> },
}

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        standard(standard = "nep171", version = "1.2.0"),
        standard(standard = "nep178", version = "1.0.0"),
        standard(standard = "nep181", version = "1.0.0"),
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub owner_id: AccountId,

    pub tokens_by_id: IterableMap<u64, Token>,
    pub(crate) tokens_per_owner: LookupMap<AccountId, IterableSet<u64>>,

    // Sequential issuance: the first minted token gets ID 1; IDs are never reused.
    pub next_token_id: u64,
    pub next_approval_id: u64,
}
