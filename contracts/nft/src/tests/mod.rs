
// --- Unit Tests ---
pub mod unit {
    pub mod admin_test;
    pub mod approval_test;
    pub mod enumeration_test;
    pub mod mint_test;
    pub mod transfer_test;
}
