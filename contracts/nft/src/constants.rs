use near_sdk::NearToken;

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

pub const DEFAULT_VIEW_LIMIT: u64 = 50;
pub const MAX_VIEW_LIMIT: u64 = 100;
