use near_sdk::AccountId;
use near_sdk::json_types::U64;
use near_sdk::near;
use std::collections::HashMap;

/// Stored per-token record. Metadata is intentionally not tracked by this
/// registry; ownership and approvals are the whole of the state.
#[near(serializers = [borsh])]
#[derive(Clone)]
pub struct Token {
    pub owner_id: AccountId,
    pub approved_account_ids: HashMap<AccountId, u64>,
}

/// JSON view of a token as returned by `nft_token` and the enumeration
/// methods.
#[near(serializers = [json])]
#[derive(Clone)]
pub struct TokenView {
    pub token_id: U64,
    pub owner_id: AccountId,
    pub approved_account_ids: HashMap<AccountId, u64>,
}

impl TokenView {
    pub(crate) fn from_token(token_id: u64, token: &Token) -> Self {
        Self {
            token_id: U64(token_id),
            owner_id: token.owner_id.clone(),
            approved_account_ids: token.approved_account_ids.clone(),
        }
    }
}
