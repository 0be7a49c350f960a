#![allow(dead_code)]

use near_sdk::json_types::{U64, U128};
use near_sdk::{AccountId, ext_contract};

#[ext_contract(ext_nft_contract)]
pub trait ExtNftContract {
    fn nft_transfer(
        &mut self,
        receiver_id: AccountId,
        token_id: U64,
        approval_id: Option<u64>,
        memo: Option<String>,
    );

    fn nft_is_approved(
        &self,
        token_id: U64,
        approved_account_id: AccountId,
        approval_id: Option<u64>,
    ) -> bool;

    fn nft_owner(&self, token_id: U64) -> Option<AccountId>;
}

#[ext_contract(ext_self)]
pub trait ExtSelf {
    fn resolve_listing(
        &mut self,
        seller_id: AccountId,
        nft_contract_id: AccountId,
        token_id: U64,
        approval_id: u64,
        price: U128,
    );

    fn resolve_purchase(
        &mut self,
        buyer_id: AccountId,
        seller_id: AccountId,
        nft_contract_id: AccountId,
        token_id: U64,
        price: U128,
        deposit: U128,
    ) -> bool;
}
