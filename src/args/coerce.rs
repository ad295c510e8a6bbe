//! Typed coercion from parsed argument trees into contract parameters.

use alloy::primitives::{Address, Bytes, B256, U256};
use serde_json::Value;
use std::str::FromStr;
use thiserror::Error;

use crate::contract::ValidatorRegistry::{G1Point, G2Point, ValidatorProof};

#[derive(Debug, Error, PartialEq, Eq)]
#[error("`{path}`: expected {expected}, found {found}")]
pub struct CoerceError {
    pub path: String,
    pub expected: &'static str,
    pub found: String,
}

impl CoerceError {
    fn new(path: &str, expected: &'static str, value: Option<&Value>) -> Self {
        let found = match value {
            None => "nothing".to_string(),
            Some(v) => {
                let rendered = v.to_string();
                if rendered.chars().count() > 48 {
                    let head: String = rendered.chars().take(45).collect();
                    format!("{head}...")
                } else {
                    rendered
                }
            }
        };
        Self {
            path: path.to_string(),
            expected,
            found,
        }
    }
}

/// A contract parameter type that can be read out of a parsed blob element.
pub trait FromArg: Sized {
    const EXPECTED: &'static str;

    fn from_arg(value: &Value, path: &str) -> Result<Self, CoerceError>;
}

fn text(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => Some(s.trim()).filter(|s| !s.is_empty()),
        _ => None,
    }
}

/// Items of an array, or of an object whose keys are all indices
/// (`{"0": .., "1": ..}`, the way ethers logs a `Result`).
fn positional(value: &Value) -> Option<Vec<&Value>> {
    match value {
        Value::Array(items) => Some(items.iter().collect()),
        Value::Object(map) if !map.is_empty() => {
            let mut indexed = map
                .iter()
                .map(|(k, v)| k.parse::<usize>().ok().map(|i| (i, v)))
                .collect::<Option<Vec<_>>>()?;
            indexed.sort_by_key(|(i, _)| *i);
            let contiguous = indexed.iter().enumerate().all(|(pos, (i, _))| pos == *i);
            contiguous.then(|| indexed.into_iter().map(|(_, v)| v).collect())
        }
        _ => None,
    }
}

impl FromArg for U256 {
    const EXPECTED: &'static str = "uint256";

    fn from_arg(value: &Value, path: &str) -> Result<Self, CoerceError> {
        let parsed = match value {
            Value::Number(n) => n.as_u64().map(U256::from),
            // ruint skips `_` separators; console values never carry them
            other => text(other)
                .filter(|s| !s.contains('_'))
                .and_then(|s| U256::from_str(s).ok()),
        };
        parsed.ok_or_else(|| CoerceError::new(path, Self::EXPECTED, Some(value)))
    }
}

impl FromArg for u64 {
    const EXPECTED: &'static str = "uint64";

    fn from_arg(value: &Value, path: &str) -> Result<Self, CoerceError> {
        let wide = U256::from_arg(value, path)
            .map_err(|_| CoerceError::new(path, Self::EXPECTED, Some(value)))?;
        if wide > U256::from(u64::MAX) {
            return Err(CoerceError::new(path, Self::EXPECTED, Some(value)));
        }
        Ok(wide.to::<u64>())
    }
}

impl FromArg for Address {
    const EXPECTED: &'static str = "address";

    fn from_arg(value: &Value, path: &str) -> Result<Self, CoerceError> {
        text(value)
            .and_then(|s| Address::from_str(s).ok())
            .ok_or_else(|| CoerceError::new(path, Self::EXPECTED, Some(value)))
    }
}

impl FromArg for B256 {
    const EXPECTED: &'static str = "bytes32";

    fn from_arg(value: &Value, path: &str) -> Result<Self, CoerceError> {
        text(value)
            .and_then(|s| B256::from_str(s).ok())
            .ok_or_else(|| CoerceError::new(path, Self::EXPECTED, Some(value)))
    }
}

impl FromArg for Bytes {
    const EXPECTED: &'static str = "bytes";

    fn from_arg(value: &Value, path: &str) -> Result<Self, CoerceError> {
        text(value)
            .and_then(|s| Bytes::from_str(s).ok())
            .ok_or_else(|| CoerceError::new(path, Self::EXPECTED, Some(value)))
    }
}

impl<T: FromArg> FromArg for Vec<T> {
    const EXPECTED: &'static str = "array";

    fn from_arg(value: &Value, path: &str) -> Result<Self, CoerceError> {
        let items =
            positional(value).ok_or_else(|| CoerceError::new(path, Self::EXPECTED, Some(value)))?;
        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| T::from_arg(item, &format!("{path}[{i}]")))
            .collect()
    }
}

impl<T: FromArg, const N: usize> FromArg for [T; N] {
    const EXPECTED: &'static str = "fixed-length array";

    fn from_arg(value: &Value, path: &str) -> Result<Self, CoerceError> {
        let items = Vec::<T>::from_arg(value, path)?;
        let found = items.len();
        <[T; N]>::try_from(items).map_err(|_| CoerceError {
            path: path.to_string(),
            expected: Self::EXPECTED,
            found: format!("{found} elements instead of {N}"),
        })
    }
}

/// Field access for a struct rendered either positionally or by name.
struct StructFields<'a> {
    value: &'a Value,
    path: &'a str,
    items: Option<Vec<&'a Value>>,
}

impl<'a> StructFields<'a> {
    fn new(
        value: &'a Value,
        path: &'a str,
        expected: &'static str,
        field_count: usize,
    ) -> Result<Self, CoerceError> {
        if !value.is_object() && !value.is_array() {
            return Err(CoerceError::new(path, expected, Some(value)));
        }
        let items = positional(value);
        if let Some(found) = items.as_ref().map(Vec::len).filter(|n| *n > field_count) {
            return Err(CoerceError {
                path: path.to_string(),
                expected,
                found: format!("{found} elements instead of {field_count}"),
            });
        }
        Ok(Self { value, path, items })
    }

    fn lookup(&self, index: usize, name: &str) -> Option<&'a Value> {
        if let Value::Object(map) = self.value {
            let named = map
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v);
            if named.is_some() {
                return named;
            }
            if let Some(v) = map.get(&index.to_string()) {
                return Some(v);
            }
        }
        self.items.as_ref().and_then(|items| items.get(index).copied())
    }

    fn field<T: FromArg>(&self, index: usize, name: &str) -> Result<T, CoerceError> {
        let path = format!("{}.{}", self.path, name);
        match self.lookup(index, name) {
            Some(v) => T::from_arg(v, &path),
            None => Err(CoerceError::new(&path, T::EXPECTED, None)),
        }
    }
}

impl FromArg for G1Point {
    const EXPECTED: &'static str = "G1 point {X, Y}";

    fn from_arg(value: &Value, path: &str) -> Result<Self, CoerceError> {
        let fields = StructFields::new(value, path, Self::EXPECTED, 2)?;
        Ok(G1Point {
            X: fields.field(0, "X")?,
            Y: fields.field(1, "Y")?,
        })
    }
}

impl FromArg for G2Point {
    const EXPECTED: &'static str = "G2 point {X: [x0, x1], Y: [y0, y1]}";

    fn from_arg(value: &Value, path: &str) -> Result<Self, CoerceError> {
        let fields = StructFields::new(value, path, Self::EXPECTED, 2)?;
        Ok(G2Point {
            X: fields.field(0, "X")?,
            Y: fields.field(1, "Y")?,
        })
    }
}

impl FromArg for ValidatorProof {
    const EXPECTED: &'static str = "validator proof struct";

    fn from_arg(value: &Value, path: &str) -> Result<Self, CoerceError> {
        let fields = StructFields::new(value, path, Self::EXPECTED, 9)?;
        Ok(ValidatorProof {
            a: fields.field(0, "a")?,
            b: fields.field(1, "b")?,
            c: fields.field(2, "c")?,
            publicInputs: fields.field(3, "publicInputs")?,
            programKey: fields.field(4, "programKey")?,
            nullifier: fields.field(5, "nullifier")?,
            chainId: fields.field(6, "chainId")?,
            expiresAt: fields.field(7, "expiresAt")?,
            metadata: fields.field(8, "metadata")?,
        })
    }
}
