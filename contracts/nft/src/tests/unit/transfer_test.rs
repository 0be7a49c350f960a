use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::U64;
use near_sdk::testing_env;

#[test]
fn owner_transfer_happy() {
    let mut contract = new_contract();
    let tid = mint_to(&mut contract, &holder());
    testing_env!(context_with_deposit(holder(), 1).build());

    contract.nft_transfer(operator(), U64(tid), None, None).unwrap();
    assert_eq!(contract.nft_owner(U64(tid)), Some(operator()));
}

#[test]
fn approved_account_can_transfer() {
    let mut contract = new_contract();
    let tid = mint_to(&mut contract, &holder());
    testing_env!(context_with_deposit(holder(), 1).build());
    let approval_id = contract.nft_approve(U64(tid), operator()).unwrap();

    testing_env!(context_with_deposit(operator(), 1).build());
    contract
        .nft_transfer(operator(), U64(tid), Some(approval_id.0), None)
        .unwrap();
    assert_eq!(contract.nft_owner(U64(tid)), Some(operator()));
}

#[test]
fn transfer_clears_approvals() {
    let mut contract = new_contract();
    let tid = mint_to(&mut contract, &holder());
    testing_env!(context_with_deposit(holder(), 1).build());
    contract.nft_approve(U64(tid), operator()).unwrap();

    testing_env!(context_with_deposit(holder(), 1).build());
    contract.nft_transfer(owner(), U64(tid), None, None).unwrap();
    assert!(!contract.nft_is_approved(U64(tid), operator(), None));
}

#[test]
fn unapproved_sender_fails() {
    let mut contract = new_contract();
    let tid = mint_to(&mut contract, &holder());
    testing_env!(context_with_deposit(operator(), 1).build());

    let err = contract
        .nft_transfer(operator(), U64(tid), None, None)
        .unwrap_err();
    assert!(matches!(err, TokenError::Unauthorized(_)));
    assert_eq!(contract.nft_owner(U64(tid)), Some(holder()));
}

#[test]
fn wrong_approval_id_fails() {
    let mut contract = new_contract();
    let tid = mint_to(&mut contract, &holder());
    testing_env!(context_with_deposit(holder(), 1).build());
    let approval_id = contract.nft_approve(U64(tid), operator()).unwrap();

    testing_env!(context_with_deposit(operator(), 1).build());
    let err = contract
        .nft_transfer(operator(), U64(tid), Some(approval_id.0 + 1), None)
        .unwrap_err();
    assert!(matches!(err, TokenError::Unauthorized(_)));
    assert_eq!(contract.nft_owner(U64(tid)), Some(holder()));
}

#[test]
fn transfer_unknown_token_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(holder(), 1).build());

    let err = contract
        .nft_transfer(operator(), U64(42), None, None)
        .unwrap_err();
    assert!(matches!(err, TokenError::NotFound(_)));
}

#[test]
fn transfer_to_current_owner_fails() {
    let mut contract = new_contract();
    let tid = mint_to(&mut contract, &holder());
    testing_env!(context_with_deposit(holder(), 1).build());

    let err = contract
        .nft_transfer(holder(), U64(tid), None, None)
        .unwrap_err();
    assert!(matches!(err, TokenError::InvalidInput(_)));
}

#[test]
fn transfer_requires_exactly_one_yocto() {
    let mut contract = new_contract();
    let tid = mint_to(&mut contract, &holder());
    testing_env!(context(holder()).build());

    let err = contract
        .nft_transfer(operator(), U64(tid), None, None)
        .unwrap_err();
    assert!(matches!(err, TokenError::InsufficientDeposit(_)));
}

#[test]
fn transfer_updates_owner_index() {
    let mut contract = new_contract();
    let tid = mint_to(&mut contract, &holder());
    testing_env!(context_with_deposit(holder(), 1).build());
    contract.nft_transfer(operator(), U64(tid), None, None).unwrap();

    assert_eq!(contract.nft_supply_for_owner(holder()).0, 0);
    assert_eq!(contract.nft_supply_for_owner(operator()).0, 1);
}
