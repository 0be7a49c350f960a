use near_sdk::NearToken;

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

/// Fixed rejection reason surfaced when the attached deposit does not match
/// the list price.
pub const ERR_PRICE_NOT_MET: &str = "Value sent does not meet list price for NFT";

pub const DEFAULT_CALLBACK_GAS: u64 = 50;
pub const DEFAULT_NFT_TRANSFER_GAS: u64 = 50;
pub const MAX_CALLBACK_GAS: u64 = 300;

pub const DEFAULT_VIEW_LIMIT: u64 = 50;
pub const MAX_VIEW_LIMIT: u64 = 100;
