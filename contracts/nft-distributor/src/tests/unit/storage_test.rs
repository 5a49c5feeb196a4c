use crate::tests::test_utils::*;
use crate::*;
use near_sdk::mock::MockAction;
use near_sdk::test_utils::get_created_receipts;
use near_sdk::testing_env;

/// Yocto refunded to `account` by receipts created in the current context.
fn refunded_to(account: &AccountId) -> u128 {
    get_created_receipts()
        .into_iter()
        .filter(|receipt| &receipt.receiver_id == account)
        .flat_map(|receipt| receipt.actions)
        .map(|action| match action {
            MockAction::Transfer { deposit, .. } => deposit.as_yoctonear(),
            _ => 0,
        })
        .sum()
}

/// Claims `1:1` for `winner1()` so later claims for that owner are the same size, then
/// returns the storage cost of claiming cohort "2".
fn setup_claim_cost(contract: &mut Contract) -> u128 {
    claim(contract, "1", winner1()).unwrap();

    testing_env!(context_with_deposit(owner(), CLAIM_DEPOSIT).build());
    let before = contract.storage_usage_flushed();
    contract.admin_claim_token("2".into(), winner1()).unwrap();
    let after = contract.storage_usage_flushed();
    assert!(after > before);
    (after - before) as u128 * storage::storage_byte_cost()
}

// --- settle_storage ---

#[test]
fn settle_without_growth_refunds_everything() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(admin(), 5_000).build());
    let initial = contract.storage_usage_flushed();

    let charged = contract.settle_storage(&admin(), initial).unwrap();

    assert_eq!(charged, 0);
    assert_eq!(refunded_to(&admin()), 5_000);
}

#[test]
fn claim_refunds_excess_deposit() {
    let mut contract = new_contract();
    claim(&mut contract, "1", winner1()).unwrap();

    testing_env!(context_with_deposit(owner(), CLAIM_DEPOSIT).build());
    let before = contract.storage_usage_flushed();
    contract.admin_claim_token("2".into(), winner2()).unwrap();
    let cost = (contract.storage_usage_flushed() - before) as u128 * storage::storage_byte_cost();

    assert!(cost > 0 && cost < CLAIM_DEPOSIT);
    assert_eq!(refunded_to(&owner()), CLAIM_DEPOSIT - cost);
}

#[test]
fn claim_with_exact_deposit_succeeds() {
    let mut contract = new_contract();
    let cost = setup_claim_cost(&mut contract);

    testing_env!(context_with_deposit(owner(), cost).build());
    assert_eq!(
        contract.admin_claim_token("3".into(), winner1()).unwrap(),
        "3:1"
    );
    assert_eq!(refunded_to(&owner()), 0);
}

#[test]
fn claim_one_yocto_short_fails() {
    let mut contract = new_contract();
    let cost = setup_claim_cost(&mut contract);

    testing_env!(context_with_deposit(owner(), cost - 1).build());
    let err = contract
        .admin_claim_token("3".into(), winner1())
        .unwrap_err();
    assert!(matches!(err, DistributorError::InsufficientDeposit(_)));
    assert_eq!(refunded_to(&owner()), 0);
}
