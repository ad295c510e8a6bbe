//! Tests for extracting the six typed addValidator arguments

mod common;

use add_validator::args::{ArgsError, CoerceError, FromArg, ValidatorArgs};
use add_validator::contract::ValidatorRegistry::G1Point;
use add_validator::report::{hints_for, ARGUMENT_HINTS, TRANSACTION_HINTS};
use add_validator::submit::SubmitError;
use alloy::primitives::{Address, Bytes, TxHash, B256, U256};
use common::{console_tuple_blob, json_array_blob, word, BIG, VALIDATOR};
use serde_json::json;
use std::str::FromStr;

#[test]
fn test_console_tuple_yields_typed_arguments() {
    let args = ValidatorArgs::from_blob(&console_tuple_blob()).expect("console blob should parse");
    let big = U256::from_str(BIG).unwrap();

    assert_eq!(args.validator, Address::from_str(VALIDATOR).unwrap());
    assert_eq!(
        args.attestations,
        vec![B256::from_str(&word("11")).unwrap(), B256::from_str(&word("22")).unwrap()]
    );

    assert_eq!(args.proof.a, [U256::from(1), U256::from(2)]);
    assert_eq!(args.proof.b[1], [U256::from(5), U256::from(6)]);
    assert_eq!(args.proof.publicInputs, vec![big, U256::from(42)]);
    assert_eq!(args.proof.programKey, B256::from_str(&word("aa")).unwrap());
    assert_eq!(args.proof.chainId, 17000);
    assert_eq!(args.proof.expiresAt, 1_758_842_435);
    assert_eq!(args.proof.metadata, Bytes::from(vec![0xde, 0xad, 0xbe, 0xef]));

    assert_eq!(args.pubkey_g1.X, U256::from(11));
    assert_eq!(args.pubkey_g2.X, [U256::from(13), big], "G2 coordinates must keep full width");
    assert_eq!(args.signature.Y, U256::from(18), "Positional G1 point should be accepted");
}

#[test]
fn test_json_array_and_console_tuple_agree() {
    let from_tuple = ValidatorArgs::from_blob(&console_tuple_blob()).unwrap();
    let from_json = ValidatorArgs::from_blob(&json_array_blob()).unwrap();

    assert_eq!(from_tuple, from_json, "Both renderings describe the same call");
}

#[test]
fn test_single_wrapped_argument_list_is_unwrapped() {
    let wrapped = format!("[{}]", json_array_blob());
    let args = ValidatorArgs::from_blob(&wrapped).unwrap();

    assert_eq!(args, ValidatorArgs::from_blob(&json_array_blob()).unwrap());
}

#[test]
fn test_object_keyed_by_parameter_name() {
    let ordered = ValidatorArgs::from_blob(&json_array_blob()).unwrap();
    let values = add_validator::args::parse_blob(&json_array_blob()).unwrap();

    let named = json!({
        "signature": values[5],
        "pubkeyG2": values[4],
        "pubkeyG1": values[3],
        "proof": values[2],
        "attestations": values[1],
        "validator": values[0],
    });

    let args = ValidatorArgs::from_values(&[named]).unwrap();
    assert_eq!(args, ordered);
}

#[test]
fn test_numeric_keyed_struct_is_positional() {
    let mut values = add_validator::args::parse_blob(&json_array_blob()).unwrap();
    values[3] = json!({"0": "21", "1": "22"});

    let args = ValidatorArgs::from_values(&values).unwrap();
    assert_eq!(args.pubkey_g1.X, U256::from(21));
    assert_eq!(args.pubkey_g1.Y, U256::from(22));
}

#[test]
fn test_missing_arguments_name_the_first_gap() {
    let values = add_validator::args::parse_blob(&json_array_blob()).unwrap();

    match ValidatorArgs::from_values(&values[..4]) {
        Err(ArgsError::Missing {
            expected,
            found,
            missing,
        }) => {
            assert_eq!(expected, 6);
            assert_eq!(found, 4);
            assert_eq!(missing, "pubkeyG2");
        }
        other => panic!("Expected Missing error, got {:?}", other),
    }
}

#[test]
fn test_extra_arguments_are_ignored() {
    let mut values = add_validator::args::parse_blob(&json_array_blob()).unwrap();
    let expected = ValidatorArgs::from_values(&values).unwrap();
    values.push(json!("0xffff"));

    assert_eq!(ValidatorArgs::from_values(&values).unwrap(), expected);
}

#[test]
fn test_bad_address_names_the_field() {
    let mut values = add_validator::args::parse_blob(&json_array_blob()).unwrap();
    values[0] = json!("0x1234");

    match ValidatorArgs::from_values(&values) {
        Err(ArgsError::Coerce(CoerceError { path, expected, .. })) => {
            assert_eq!(path, "validator");
            assert_eq!(expected, "address");
        }
        other => panic!("Expected coercion error, got {:?}", other),
    }
}

#[test]
fn test_short_g2_coordinate_is_rejected() {
    let mut values = add_validator::args::parse_blob(&json_array_blob()).unwrap();
    values[4] = json!({"X": ["1"], "Y": ["2", "3"]});

    let err = ValidatorArgs::from_values(&values).unwrap_err();
    match err {
        ArgsError::Coerce(e) => {
            assert_eq!(e.path, "pubkeyG2.X");
            assert_eq!(e.found, "1 elements instead of 2");
        }
        other => panic!("Expected coercion error, got {:?}", other),
    }
}

#[test]
fn test_nested_proof_field_path() {
    let mut values = add_validator::args::parse_blob(&json_array_blob()).unwrap();
    values[2]["b"][1][0] = json!("-3");

    let err = ValidatorArgs::from_values(&values).unwrap_err();
    match err {
        ArgsError::Coerce(e) => assert_eq!(e.path, "proof.b[1][0]"),
        other => panic!("Expected coercion error, got {:?}", other),
    }
}

#[test]
fn test_chain_id_overflow_is_rejected() {
    let mut values = add_validator::args::parse_blob(&json_array_blob()).unwrap();
    values[2]["chainId"] = json!("18446744073709551616");

    let err = ValidatorArgs::from_values(&values).unwrap_err();
    match err {
        ArgsError::Coerce(e) => {
            assert_eq!(e.path, "proof.chainId");
            assert_eq!(e.expected, "uint64");
        }
        other => panic!("Expected coercion error, got {:?}", other),
    }
}

#[test]
fn test_hex_integers_are_accepted() {
    let mut values = add_validator::args::parse_blob(&json_array_blob()).unwrap();
    values[3] = json!({"X": "0x0b", "Y": 12});

    let args = ValidatorArgs::from_values(&values).unwrap();
    assert_eq!(args.pubkey_g1.X, U256::from(11));
    assert_eq!(args.pubkey_g1.Y, U256::from(12));
}

#[test]
fn test_argument_errors_get_argument_hints() {
    let err = ValidatorArgs::from_blob("(1, 2").unwrap_err();
    let err = anyhow::Error::from(err);

    assert_eq!(hints_for(&err), ARGUMENT_HINTS);
}

#[test]
fn test_bytes_accepts_empty_and_rejects_odd_length() {
    let empty = Bytes::from_arg(&json!("0x"), "proof.metadata").expect("0x is empty bytes");
    assert!(empty.is_empty());

    let err = Bytes::from_arg(&json!("0xabc"), "proof.metadata").unwrap_err();
    assert_eq!(err.path, "proof.metadata");
    assert_eq!(err.expected, "bytes");
}

#[test]
fn test_fractions_are_not_integers() {
    let err = U256::from_arg(&json!("1.5"), "pubkeyG1.X").unwrap_err();
    assert_eq!(err.expected, "uint256");
    assert_eq!(err.found, "\"1.5\"");

    let values = add_validator::args::parse_blob("(1.5)").unwrap();
    assert!(u64::from_arg(&values[0], "proof.chainId").is_err());
}

#[test]
fn test_digit_separators_are_rejected() {
    let err = U256::from_arg(&json!("1_000"), "pubkeyG1.X").unwrap_err();
    assert_eq!(err.expected, "uint256");
    assert_eq!(U256::from_arg(&json!("1000"), "pubkeyG1.X").unwrap(), U256::from(1000));
}

#[test]
fn test_positional_struct_with_extra_elements_is_rejected() {
    let err = G1Point::from_arg(&json!(["1", "2", "3"]), "signature").unwrap_err();
    assert_eq!(err.path, "signature");
    assert_eq!(err.found, "3 elements instead of 2");

    let mut values = add_validator::args::parse_blob(&json_array_blob()).unwrap();
    values[5] = json!(["17", "18", "19"]);
    match ValidatorArgs::from_values(&values) {
        Err(ArgsError::Coerce(e)) => assert_eq!(e.path, "signature"),
        other => panic!("Expected coercion error, got {:?}", other),
    }
}

#[test]
fn test_named_struct_with_extra_keys_is_accepted() {
    let point = G1Point::from_arg(&json!({"X": "1", "Y": "2", "label": "pk"}), "pubkeyG1").unwrap();
    assert_eq!(point.X, U256::from(1));
    assert_eq!(point.Y, U256::from(2));
}

#[test]
fn test_transaction_errors_get_transaction_hints() {
    let err = anyhow::Error::from(SubmitError::Reverted {
        tx_hash: TxHash::ZERO,
        block: "7".to_string(),
    });

    assert_eq!(hints_for(&err), TRANSACTION_HINTS);
}
