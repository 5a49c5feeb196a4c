use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::U128;
use near_sdk::testing_env;

// --- add_cohort ---

#[test]
fn add_cohort_starts_empty() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract.add_cohort("vip".into(), 5).unwrap();

    let cohort = contract.get_cohort("vip".into()).unwrap();
    assert_eq!(cohort.limit, 5);
    assert_eq!(cohort.token_mints, 0);
    assert_eq!(contract.get_cohort_count(), 11);
    assert_eq!(contract.get_cohorts(Some(U128(10)), None)[0].cohort_id, "vip");
}

#[test]
fn add_existing_cohort_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    let err = contract.add_cohort("1".into(), 5).unwrap_err();
    assert!(matches!(err, DistributorError::InvalidInput(_)));
}

#[test]
fn add_cohort_rejects_bad_id() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    let err = contract.add_cohort("a:b".into(), 5).unwrap_err();
    assert!(matches!(err, DistributorError::InvalidInput(_)));
    let err = contract.add_cohort(String::new(), 5).unwrap_err();
    assert!(matches!(err, DistributorError::InvalidInput(_)));
}

#[test]
fn add_cohort_non_owner_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(admin(), 1).build());
    let err = contract.add_cohort("vip".into(), 5).unwrap_err();
    assert!(matches!(err, DistributorError::Unauthorized(_)));
}

// --- set_cohort_limit ---

#[test]
fn raising_limit_reopens_exhausted_cohort() {
    let mut contract = new_contract();
    claim(&mut contract, "1", winner1()).unwrap();
    claim(&mut contract, "1", winner2()).unwrap();
    assert!(claim(&mut contract, "1", loser1()).is_err());

    testing_env!(context_with_deposit(owner(), 1).build());
    contract.set_cohort_limit("1".into(), 3).unwrap();

    assert_eq!(claim(&mut contract, "1", loser1()).unwrap(), "1:3");
}

#[test]
fn limit_below_issued_fails() {
    let mut contract = new_contract();
    claim(&mut contract, "1", winner1()).unwrap();
    claim(&mut contract, "1", winner2()).unwrap();

    testing_env!(context_with_deposit(owner(), 1).build());
    let err = contract.set_cohort_limit("1".into(), 1).unwrap_err();
    assert!(matches!(err, DistributorError::InvalidInput(_)));
}

#[test]
fn limit_equal_to_issued_closes_cohort() {
    let mut contract = new_contract();
    claim(&mut contract, "1", winner1()).unwrap();

    testing_env!(context_with_deposit(owner(), 1).build());
    contract.set_cohort_limit("1".into(), 1).unwrap();

    let err = claim(&mut contract, "1", winner2()).unwrap_err();
    assert_eq!(err, DistributorError::MaxTokensIssued);
}

#[test]
fn set_limit_unknown_cohort_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    let err = contract.set_cohort_limit("nope".into(), 3).unwrap_err();
    assert!(matches!(err, DistributorError::NotFound(_)));
}

// --- views ---

#[test]
fn get_cohorts_paginates() {
    let contract = new_contract();
    let page = contract.get_cohorts(Some(U128(8)), Some(5));
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].cohort_id, "9");
    assert_eq!(page[1].cohort_id, "10");
}

#[test]
fn get_remaining_unknown_is_none() {
    let contract = new_contract();
    assert_eq!(contract.get_remaining("nope".into()), None);
    assert!(contract.get_cohort("nope".into()).is_none());
}

#[test]
fn cohort_supply_and_tokens() {
    let mut contract = new_contract();
    claim(&mut contract, "5", winner1()).unwrap();
    claim(&mut contract, "5", winner2()).unwrap();
    claim(&mut contract, "6", winner1()).unwrap();

    assert_eq!(contract.nft_supply_for_cohort("5".into()), U128(2));
    assert_eq!(contract.nft_supply_for_cohort("7".into()), U128(0));

    let tokens = contract.nft_tokens_for_cohort("5".into(), None, None);
    let ids: Vec<&str> = tokens.iter().map(|t| t.token_id.as_str()).collect();
    assert_eq!(ids, vec!["5:1", "5:2"]);

    let page = contract.nft_tokens_for_cohort("5".into(), Some(U128(1)), Some(1));
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].owner_id, winner2());
}

#[test]
fn cohort_supply_skips_preissued_serials() {
    testing_env!(context(owner()).build());
    let mut contract = Contract::new(
        BASE_URI.into(),
        vec!["legacy".into()],
        vec![5],
        vec![3],
        None,
        None,
    );
    claim(&mut contract, "legacy", winner1()).unwrap();

    assert_eq!(contract.nft_supply_for_cohort("legacy".into()), U128(1));
    let tokens = contract.nft_tokens_for_cohort("legacy".into(), None, None);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].token_id, "legacy:4");
}

#[test]
fn cohort_views_ignore_large_preissued_history() {
    testing_env!(context(owner()).build());
    let mut contract = Contract::new(
        BASE_URI.into(),
        vec!["big".into()],
        vec![MAX_COHORT_LIMIT],
        vec![MAX_COHORT_LIMIT - 10],
        None,
        None,
    );
    let token_id = claim(&mut contract, "big", winner1()).unwrap();
    assert_eq!(token_id, "big:999991");

    // Fresh context so used gas reflects the views alone.
    testing_env!(context(loser1()).build());
    assert_eq!(contract.nft_supply_for_cohort("big".into()), U128(1));
    let tokens = contract.nft_tokens_for_cohort("big".into(), None, None);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].token_id, token_id);
    assert!(contract
        .nft_tokens_for_cohort("big".into(), Some(U128(1)), None)
        .is_empty());
    assert!(
        env::used_gas() < near_sdk::Gas::from_tgas(5),
        "cohort views must not scan pre-issued serials"
    );
}
