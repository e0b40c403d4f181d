//! Property-based tests using proptest
//!
//! Every request the builder accepts must decode back to what went in,
//! with keys in wire order and only the keys that are present.

mod common;

use proptest::prelude::*;

use common::{decode, text, texts};
use functions_request::{
    Address, AuthorizedSenders, CodeLanguage, Error, Location, Request,
};
use serde_cbor::Value;

fn location_strategy() -> impl Strategy<Value = Location> {
    prop_oneof![Just(Location::Inline), Just(Location::Remote)]
}

fn source_strategy() -> impl Strategy<Value = String> {
    // up to a few buffer capacities, including non-ASCII
    prop_oneof![
        "[a-zA-Z0-9 ;(){}=.]{1,64}",
        "\\PC{1,600}",
    ]
}

fn args_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("\\PC{0,40}", 1..40)
}

fn secrets_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..1024)
}

fn address_strategy() -> impl Strategy<Value = Address> {
    any::<[u8; 20]>().prop_map(Address::new)
}

proptest! {
    #[test]
    fn inline_javascript_has_only_location_and_source(source in source_strategy()) {
        let mut request = Request::default();
        request.initialize_inline_javascript(source.clone()).unwrap();

        let entries = decode(&request.encode().unwrap());
        prop_assert_eq!(entries.keys(), vec!["codeLocation", "source"]);
        prop_assert_eq!(entries.get("codeLocation"), Some(&Value::Integer(0)));
        prop_assert_eq!(text(entries.get("source").unwrap()), source.as_str());
    }

    #[test]
    fn args_decode_in_order(source in source_strategy(), args in args_strategy()) {
        let mut request = Request::default();
        request.initialize_inline_javascript(source).unwrap();
        request.add_args(args.clone()).unwrap();

        let entries = decode(&request.encode().unwrap());
        prop_assert_eq!(entries.keys(), vec!["codeLocation", "source", "args"]);
        prop_assert_eq!(texts(entries.get("args").unwrap()), args);
    }

    #[test]
    fn remote_secrets_decode_exactly(source in source_strategy(), secrets in secrets_strategy()) {
        let mut request = Request::default();
        request.initialize_inline_javascript(source).unwrap();
        request.add_remote_secrets(secrets.clone()).unwrap();

        let entries = decode(&request.encode().unwrap());
        prop_assert_eq!(
            entries.keys(),
            vec!["codeLocation", "source", "secretsLocation", "secrets"]
        );
        prop_assert_eq!(entries.get("secretsLocation"), Some(&Value::Integer(1)));
        prop_assert_eq!(entries.get("secrets"), Some(&Value::Bytes(secrets)));
    }

    #[test]
    fn empty_source_never_mutates(
        location in location_strategy(),
        source in source_strategy(),
        args in args_strategy()
    ) {
        let mut request = Request::default();
        request.initialize_request(location, CodeLanguage::JavaScript, source).unwrap();
        request.add_args(args).unwrap();
        let before = request.clone();

        prop_assert_eq!(
            request.initialize_request(Location::Inline, CodeLanguage::JavaScript, ""),
            Err(Error::EmptySource)
        );
        prop_assert_eq!(request, before);
    }

    #[test]
    fn encoding_is_idempotent(
        location in location_strategy(),
        source in source_strategy(),
        args in args_strategy(),
        secrets in secrets_strategy()
    ) {
        let mut request = Request::default();
        request.initialize_request(location, CodeLanguage::JavaScript, source).unwrap();
        request.add_args(args).unwrap();
        request.add_remote_secrets(secrets).unwrap();

        let first = request.encode().unwrap();
        prop_assert_eq!(&first, &request.encode().unwrap());
        prop_assert_eq!(first, request.encode_with_capacity(1).unwrap());
    }

    #[test]
    fn replacing_senders_forgets_old_ones(
        first in prop::collection::vec(address_strategy(), 1..16),
        second in prop::collection::vec(address_strategy(), 1..16)
    ) {
        let admin = Address::new([0xad; 20]);
        let mut senders = AuthorizedSenders::new(|_: &Address| true);
        senders.set_authorized_senders(&admin, &first).unwrap();
        senders.set_authorized_senders(&admin, &second).unwrap();

        for address in &first {
            prop_assert_eq!(senders.is_authorized_sender(address), second.contains(address));
        }
        for address in &second {
            prop_assert!(senders.is_authorized_sender(address));
        }
    }
}
