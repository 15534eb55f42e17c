//! Tests for filter validation

use super::*;
use crate::error::{Error, ErrorKind};
use test_case::test_case;

const GOOD_ADDRESS: &str = "0x6b175474e89094c44da98b954eedeac495271d0f";

fn assert_validation_error(result: crate::error::Result<()>) {
    match result {
        Err(err) => assert_eq!(err.kind(), ErrorKind::Validation),
        Ok(()) => panic!("expected a validation error"),
    }
}

#[test]
fn test_empty_filters_are_valid() {
    TokenFilter::default().validate().unwrap();
    IndexFilter::default().validate().unwrap();
    IndexSubscriptionFilter::default().validate().unwrap();
    StreamFilter::default().validate().unwrap();
    AccountTokenSnapshotFilter::default().validate().unwrap();
    EventFilter::default().validate().unwrap();
}

#[test]
fn test_token_filter_any_listing_flag_valid() {
    TokenFilter {
        is_listed: Some(false),
    }
    .validate()
    .unwrap();
}

#[test_case("0x123" ; "too short")]
#[test_case("6b175474e89094c44da98b954eedeac495271d0f" ; "missing prefix")]
#[test_case("0x6b175474e89094c44da98b954eedeac495271dzz" ; "non-hex characters")]
#[test_case("" ; "empty string")]
fn test_stream_filter_rejects_bad_addresses(address: &str) {
    let filter = StreamFilter {
        sender: Some(address.to_string()),
        ..Default::default()
    };
    assert_validation_error(filter.validate());
}

#[test]
fn test_stream_filter_accepts_mixed_case_address() {
    // Validation accepts checksum casing; lowercasing happens at request time.
    let filter = StreamFilter {
        receiver: Some("0x6B175474E89094C44Da98b954EedeAC495271d0F".to_string()),
        ..Default::default()
    };
    filter.validate().unwrap();
}

#[test]
fn test_index_filter_rejects_non_numeric_index_id() {
    let filter = IndexFilter {
        index_id: Some("seven".to_string()),
        ..Default::default()
    };
    assert_validation_error(filter.validate());
}

#[test]
fn test_index_filter_accepts_numeric_index_id() {
    let filter = IndexFilter {
        index_id: Some("7".to_string()),
        publisher: Some(GOOD_ADDRESS.to_string()),
        token: Some(GOOD_ADDRESS.to_string()),
    };
    filter.validate().unwrap();
}

#[test]
fn test_subscription_filter_rejects_bad_subscriber() {
    let filter = IndexSubscriptionFilter {
        subscriber: Some("not-an-address".to_string()),
        approved: Some(true),
    };
    assert_validation_error(filter.validate());
}

#[test]
fn test_snapshot_filter_checks_both_addresses() {
    let filter = AccountTokenSnapshotFilter {
        account: Some(GOOD_ADDRESS.to_string()),
        token: Some("0xnope".to_string()),
    };
    assert_validation_error(filter.validate());
}

#[test]
fn test_event_filter_rejects_negative_timestamp() {
    let filter = EventFilter {
        account: None,
        timestamp_gt: Some(-1),
    };
    assert_validation_error(filter.validate());
}

#[test]
fn test_event_filter_accepts_zero_timestamp() {
    let filter = EventFilter {
        account: Some(GOOD_ADDRESS.to_string()),
        timestamp_gt: Some(0),
    };
    filter.validate().unwrap();
}

#[test]
fn test_validation_error_message_names_field() {
    let filter = StreamFilter {
        token: Some("0xbad".to_string()),
        ..Default::default()
    };
    let err = filter.validate().unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
    assert!(err.to_string().contains("token"));
}
