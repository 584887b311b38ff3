//! JSON-deserializable conformance suite.
//!
//! These types describe the shared, language-independent test format:
//!
//! ```json
//! {
//!   "version": "1.0.0",
//!   "tests": [
//!     {"op": "op_truncate", "in": [{"Mem": ["bit", 1, 0, 1]}, 2], "out": [{"Mem": ["bit", 1, 0]}], "tag": "shrink"}
//!   ]
//! }
//! ```
//!
//! Inputs and outputs are atoms (integers, floats, booleans) or tagged
//! region constructors (`{"Mem": n}`, `{"Num": n}`, `{"Mem": ["bit", ...]}`,
//! `{"Mem": ["byte", ...]}`). An `out` consisting of a single bare string
//! names an expected error symbol. The runner rebuilds the inputs,
//! dispatches on the operation name by positional unpacking, and compares
//! outputs structurally.

use num_bigint::BigInt;
use serde::Deserialize;

use crate::access::{
    op_get_bit, op_get_bits, op_get_byte, op_get_bytes, op_set_bit, op_set_bits, op_set_byte,
    op_set_bytes,
};
use crate::codec::{
    from_bit_list, from_bool, from_byte_list, from_numeric_big_integer, from_numeric_f32,
    from_numeric_f64, from_numeric_i16, from_numeric_i32, from_numeric_i64, from_numeric_i8,
    from_numeric_u16, from_numeric_u32, from_numeric_u64, from_numeric_u8, into_bool,
    into_numeric_big_integer, into_numeric_f32, into_numeric_f64, into_numeric_i16,
    into_numeric_i32, into_numeric_i64, into_numeric_i8, into_numeric_u16, into_numeric_u32,
    into_numeric_u64, into_numeric_u8,
};
use crate::errors::MemoryError;
use crate::meta::{meta_op_bit_length, meta_op_byte_length};
use crate::region::Region;
use crate::size::{
    op_concatenate, op_ensure_bit_length, op_ensure_byte_length, op_extend, op_truncate,
};
use crate::transform::{op_identity, op_reverse, op_reverse_bits, op_reverse_bytes};

/// Top-level suite document.
#[derive(Debug, Deserialize)]
pub struct SuiteDef {
    pub version: String,
    pub tests: Vec<CaseDef>,
}

/// One test case: an operation applied to `in` by positional unpacking,
/// expected to produce `out` element-wise.
#[derive(Debug, Deserialize)]
pub struct CaseDef {
    pub op: String,
    #[serde(rename = "in")]
    pub input: Vec<ValueDef>,
    pub out: Vec<ValueDef>,
    pub tag: String,
}

/// A value atom or a tagged region constructor.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ValueDef {
    Bool(bool),
    Int(i64),
    Float(f64),
    Ctor(CtorDef),
    /// A bare string: only meaningful in `out`, naming an error symbol.
    Symbol(String),
}

/// Region constructors, externally tagged as `{"Mem": ...}` / `{"Num": ...}`.
#[derive(Debug, Clone, Deserialize)]
pub enum CtorDef {
    Mem(InitDef),
    Num(InitDef),
}

/// Either a bare bit length or a `["bit", ...]` / `["byte", ...]` list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum InitDef {
    Length(usize),
    List(Vec<ItemDef>),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ItemDef {
    Tag(String),
    Value(u8),
}

/// A materialized value, comparable structurally.
#[derive(Debug, Clone, PartialEq)]
pub enum Actual {
    Region(Region),
    Int(i64),
    Float(f64),
    Bool(bool),
}

/// Parses a suite document from its JSON text.
pub fn load(json: &str) -> Result<SuiteDef, serde_json::Error> {
    serde_json::from_str(json)
}

/// Runs every case, returning one tagged message per failure.
pub fn run_suite(suite: &SuiteDef) -> Vec<String> {
    suite
        .tests
        .iter()
        .filter_map(|case| run_case(case).err().map(|e| format!("[{}] {}", case.tag, e)))
        .collect()
}

/// Runs a single case. `Err` carries a human-readable mismatch description.
pub fn run_case(case: &CaseDef) -> Result<(), String> {
    let args: Vec<Actual> = case.input.iter().map(build_value).collect::<Result<_, _>>()?;
    let outcome = apply(&case.op, &args)?;

    if let [ValueDef::Symbol(expected)] = case.out.as_slice() {
        return match outcome {
            Err(err) if err.symbol() == expected => Ok(()),
            Err(err) => Err(format!("expected {}, got {}", expected, err.symbol())),
            Ok(values) => Err(format!("expected {}, got {:?}", expected, values)),
        };
    }

    let expected: Vec<Actual> = case.out.iter().map(build_value).collect::<Result<_, _>>()?;
    match outcome {
        Ok(actual) if actual == expected => Ok(()),
        Ok(actual) => Err(format!("expected {:?}, got {:?}", expected, actual)),
        Err(err) => Err(format!("expected {:?}, got {}", expected, err.symbol())),
    }
}

fn build_value(value: &ValueDef) -> Result<Actual, String> {
    Ok(match value {
        ValueDef::Bool(b) => Actual::Bool(*b),
        ValueDef::Int(v) => Actual::Int(*v),
        ValueDef::Float(v) => Actual::Float(*v),
        ValueDef::Ctor(CtorDef::Mem(init)) => Actual::Region(build_mem(init)?),
        ValueDef::Ctor(CtorDef::Num(init)) => Actual::Region(build_num(init)?),
        ValueDef::Symbol(s) => return Err(format!("bare string outside out: {:?}", s)),
    })
}

fn build_mem(init: &InitDef) -> Result<Region, String> {
    match init {
        InitDef::Length(n) => Ok(op_ensure_bit_length(&Region::default(), *n, false)),
        InitDef::List(items) => {
            let (tag, values) = split_list(items)?;
            match tag {
                "bit" => from_bit_list(&values, None).map_err(|e| e.symbol().to_string()),
                "byte" => Ok(from_byte_list(&values, values.len() * 8)),
                other => Err(format!("unknown constructor tag {:?}", other)),
            }
        }
    }
}

fn build_num(init: &InitDef) -> Result<Region, String> {
    match init {
        InitDef::Length(n) => from_numeric_big_integer(&BigInt::from(0), Some(*n), true)
            .map_err(|e| e.symbol().to_string()),
        InitDef::List(_) => Err("Num takes a bit length, not a list".to_string()),
    }
}

fn split_list(items: &[ItemDef]) -> Result<(&str, Vec<u8>), String> {
    let Some((ItemDef::Tag(tag), rest)) = items.split_first() else {
        return Err("constructor list must start with a tag".to_string());
    };

    let values = rest
        .iter()
        .map(|item| match item {
            ItemDef::Value(v) => Ok(*v),
            ItemDef::Tag(t) => Err(format!("unexpected tag {:?} in list body", t)),
        })
        .collect::<Result<Vec<u8>, String>>()?;

    Ok((tag.as_str(), values))
}

type OpResult = Result<Vec<Actual>, MemoryError>;

fn region_arg<'a>(args: &'a [Actual], i: usize) -> Result<&'a Region, String> {
    match args.get(i) {
        Some(Actual::Region(r)) => Ok(r),
        other => Err(format!("argument {} must be a region, got {:?}", i, other)),
    }
}

fn int_arg(args: &[Actual], i: usize) -> Result<i64, String> {
    match args.get(i) {
        Some(Actual::Int(v)) => Ok(*v),
        other => Err(format!("argument {} must be an integer, got {:?}", i, other)),
    }
}

fn index_arg(args: &[Actual], i: usize) -> Result<usize, String> {
    usize::try_from(int_arg(args, i)?).map_err(|_| format!("argument {} must be non-negative", i))
}

fn bool_arg(args: &[Actual], i: usize) -> Result<bool, String> {
    match args.get(i) {
        Some(Actual::Bool(v)) => Ok(*v),
        other => Err(format!("argument {} must be a boolean, got {:?}", i, other)),
    }
}

fn float_arg(args: &[Actual], i: usize) -> Result<f64, String> {
    match args.get(i) {
        Some(Actual::Float(v)) => Ok(*v),
        Some(Actual::Int(v)) => Ok(*v as f64),
        other => Err(format!("argument {} must be a float, got {:?}", i, other)),
    }
}

fn optional_length(args: &[Actual], i: usize) -> Result<Option<usize>, String> {
    if args.len() > i {
        Ok(Some(index_arg(args, i)?))
    } else {
        Ok(None)
    }
}

fn region_out(result: Result<Region, MemoryError>) -> OpResult {
    result.map(|r| vec![Actual::Region(r)])
}

fn int_out<T: Into<i64>>(result: Result<T, MemoryError>) -> OpResult {
    result.map(|v| vec![Actual::Int(v.into())])
}

/// Applies an operation by name. The outer `Err` means the case itself is
/// malformed; the inner result is the operation's own outcome.
fn apply(op: &str, args: &[Actual]) -> Result<OpResult, String> {
    Ok(match op {
        "meta_op_bit_length" => Ok(vec![Actual::Int(meta_op_bit_length(region_arg(args, 0)?) as i64)]),
        "meta_op_byte_length" => Ok(vec![Actual::Int(meta_op_byte_length(region_arg(args, 0)?) as i64)]),

        "op_identity" => Ok(vec![Actual::Region(op_identity(region_arg(args, 0)?))]),
        "op_reverse" => Ok(vec![Actual::Region(op_reverse(region_arg(args, 0)?))]),
        "op_reverse_bits" => Ok(vec![Actual::Region(op_reverse_bits(region_arg(args, 0)?))]),
        "op_reverse_bytes" => Ok(vec![Actual::Region(op_reverse_bytes(region_arg(args, 0)?))]),

        "op_get_bit" => region_out(op_get_bit(region_arg(args, 0)?, index_arg(args, 1)?)),
        "op_get_bits" => region_out(op_get_bits(
            region_arg(args, 0)?,
            index_arg(args, 1)?,
            index_arg(args, 2)?,
        )),
        "op_get_byte" => region_out(op_get_byte(region_arg(args, 0)?, index_arg(args, 1)?)),
        "op_get_bytes" => region_out(op_get_bytes(
            region_arg(args, 0)?,
            index_arg(args, 1)?,
            index_arg(args, 2)?,
        )),

        "op_set_bit" => region_out(op_set_bit(
            region_arg(args, 0)?,
            index_arg(args, 1)?,
            region_arg(args, 2)?,
        )),
        "op_set_bits" => region_out(op_set_bits(
            region_arg(args, 0)?,
            index_arg(args, 1)?,
            region_arg(args, 2)?,
        )),
        "op_set_byte" => region_out(op_set_byte(
            region_arg(args, 0)?,
            index_arg(args, 1)?,
            region_arg(args, 2)?,
        )),
        "op_set_bytes" => region_out(op_set_bytes(
            region_arg(args, 0)?,
            index_arg(args, 1)?,
            region_arg(args, 2)?,
        )),

        "op_truncate" => region_out(op_truncate(region_arg(args, 0)?, index_arg(args, 1)?)),
        "op_extend" => region_out(op_extend(
            region_arg(args, 0)?,
            index_arg(args, 1)?,
            bool_arg(args, 2)?,
        )),
        "op_ensure_bit_length" => Ok(vec![Actual::Region(op_ensure_bit_length(
            region_arg(args, 0)?,
            index_arg(args, 1)?,
            bool_arg(args, 2)?,
        ))]),
        "op_ensure_byte_length" => Ok(vec![Actual::Region(op_ensure_byte_length(
            region_arg(args, 0)?,
            index_arg(args, 1)?,
            bool_arg(args, 2)?,
        ))]),
        "op_concatenate" => Ok(vec![Actual::Region(op_concatenate(
            region_arg(args, 0)?,
            region_arg(args, 1)?,
        ))]),

        "from_numeric_u8" => {
            let (value, length) = (int_arg(args, 0)?, optional_length(args, 1)?);
            match u8::try_from(value) {
                Ok(v) => region_out(from_numeric_u8(v, length)),
                Err(_) => Err(MemoryError::NumericRangeError),
            }
        }
        "from_numeric_u16" => {
            let (value, length) = (int_arg(args, 0)?, optional_length(args, 1)?);
            match u16::try_from(value) {
                Ok(v) => region_out(from_numeric_u16(v, length)),
                Err(_) => Err(MemoryError::NumericRangeError),
            }
        }
        "from_numeric_u32" => {
            let (value, length) = (int_arg(args, 0)?, optional_length(args, 1)?);
            match u32::try_from(value) {
                Ok(v) => region_out(from_numeric_u32(v, length)),
                Err(_) => Err(MemoryError::NumericRangeError),
            }
        }
        "from_numeric_u64" => {
            let (value, length) = (int_arg(args, 0)?, optional_length(args, 1)?);
            match u64::try_from(value) {
                Ok(v) => region_out(from_numeric_u64(v, length)),
                Err(_) => Err(MemoryError::NumericRangeError),
            }
        }
        "from_numeric_i8" => {
            let (value, length) = (int_arg(args, 0)?, optional_length(args, 1)?);
            match i8::try_from(value) {
                Ok(v) => region_out(from_numeric_i8(v, length)),
                Err(_) => Err(MemoryError::NumericRangeError),
            }
        }
        "from_numeric_i16" => {
            let (value, length) = (int_arg(args, 0)?, optional_length(args, 1)?);
            match i16::try_from(value) {
                Ok(v) => region_out(from_numeric_i16(v, length)),
                Err(_) => Err(MemoryError::NumericRangeError),
            }
        }
        "from_numeric_i32" => {
            let (value, length) = (int_arg(args, 0)?, optional_length(args, 1)?);
            match i32::try_from(value) {
                Ok(v) => region_out(from_numeric_i32(v, length)),
                Err(_) => Err(MemoryError::NumericRangeError),
            }
        }
        "from_numeric_i64" => {
            let (value, length) = (int_arg(args, 0)?, optional_length(args, 1)?);
            region_out(from_numeric_i64(value, length))
        }

        "into_numeric_u8" => int_out(into_numeric_u8(region_arg(args, 0)?)),
        "into_numeric_u16" => int_out(into_numeric_u16(region_arg(args, 0)?)),
        "into_numeric_u32" => int_out(into_numeric_u32(region_arg(args, 0)?)),
        "into_numeric_u64" => match into_numeric_u64(region_arg(args, 0)?) {
            Ok(v) => i64::try_from(v)
                .map(|v| Ok(vec![Actual::Int(v)]))
                .map_err(|_| "u64 result does not fit a suite integer".to_string())?,
            Err(e) => Err(e),
        },
        "into_numeric_i8" => int_out(into_numeric_i8(region_arg(args, 0)?)),
        "into_numeric_i16" => int_out(into_numeric_i16(region_arg(args, 0)?)),
        "into_numeric_i32" => int_out(into_numeric_i32(region_arg(args, 0)?)),
        "into_numeric_i64" => int_out(into_numeric_i64(region_arg(args, 0)?)),

        "from_numeric_big_integer" => {
            // (value, signed) or (value, bit_length, signed).
            let value = BigInt::from(int_arg(args, 0)?);
            let (length, signed) = if args.len() > 2 {
                (Some(index_arg(args, 1)?), bool_arg(args, 2)?)
            } else {
                (None, bool_arg(args, 1)?)
            };
            region_out(from_numeric_big_integer(&value, length, signed))
        }
        "into_numeric_big_integer" => {
            let value = into_numeric_big_integer(region_arg(args, 0)?, bool_arg(args, 1)?);
            i64::try_from(value)
                .map(|v| Ok(vec![Actual::Int(v)]))
                .map_err(|_| "big integer result does not fit a suite integer".to_string())?
        }

        "from_numeric_f32" => {
            let value = float_arg(args, 0)? as f32;
            region_out(from_numeric_f32(value, optional_length(args, 1)?))
        }
        "from_numeric_f64" => {
            let value = float_arg(args, 0)?;
            region_out(from_numeric_f64(value, optional_length(args, 1)?))
        }
        "into_numeric_f32" => into_numeric_f32(region_arg(args, 0)?)
            .map(|v| vec![Actual::Float(f64::from(v))]),
        "into_numeric_f64" => into_numeric_f64(region_arg(args, 0)?)
            .map(|v| vec![Actual::Float(v)]),

        "from_bool" => {
            let value = bool_arg(args, 0)?;
            Ok(vec![Actual::Region(from_bool(value, optional_length(args, 1)?))])
        }
        "into_bool" => Ok(vec![Actual::Bool(into_bool(region_arg(args, 0)?))]),

        other => return Err(format!("unknown operation {:?}", other)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_atoms_deserialize() {
        let suite = load(
            r#"{"version": "1.0.0", "tests": [
                {"op": "op_concatenate",
                 "in": [{"Mem": ["bit", 1, 0, 1]}, {"Mem": 3}],
                 "out": [{"Mem": ["bit", 1, 0, 1, 0, 0, 0]}],
                 "tag": "concat"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(suite.version, "1.0.0");
        assert_eq!(run_suite(&suite), Vec::<String>::new());
    }

    #[test]
    fn test_expected_error_symbol() {
        let suite = load(
            r#"{"version": "1.0.0", "tests": [
                {"op": "op_get_bit", "in": [{"Mem": 3}, 3], "out": ["BoundsError"], "tag": "oob"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(run_suite(&suite), Vec::<String>::new());
    }

    #[test]
    fn test_mismatch_is_reported_with_tag() {
        let suite = load(
            r#"{"version": "1.0.0", "tests": [
                {"op": "meta_op_bit_length", "in": [{"Mem": 4}], "out": [5], "tag": "wrong"}
            ]}"#,
        )
        .unwrap();

        let failures = run_suite(&suite);
        assert_eq!(failures.len(), 1);
        assert!(failures[0].starts_with("[wrong]"));
    }

    #[test]
    fn test_num_constructor_is_zero_valued() {
        let suite = load(
            r#"{"version": "1.0.0", "tests": [
                {"op": "op_identity", "in": [{"Num": 9}], "out": [{"Mem": 9}], "tag": "num-mem"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(run_suite(&suite), Vec::<String>::new());
    }

    #[test]
    fn test_unknown_operation_is_malformed() {
        let case = CaseDef {
            op: "op_rotate".to_string(),
            input: vec![],
            out: vec![],
            tag: "bad".to_string(),
        };

        assert!(run_case(&case).is_err());
    }
}
