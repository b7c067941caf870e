//! Variable storage.
//!
//! Every variable is declared once with a [`DeclaredType`] and lives for the
//! whole run. Array indices are 1-based at this boundary and checked
//! against the declared shape on both reads and writes.

use algo_ir::Span;
use rustc_hash::FxHashMap;

use crate::errors::{
    duplicate_declaration, index_out_of_bounds, type_mismatch, undeclared_variable, EvalError,
    EvalErrorKind, EvalResult,
};
use crate::value::{DeclaredType, ScalarType, Value};

#[derive(Debug, Default)]
pub struct Environment {
    values: FxHashMap<String, Value>,
    types: FxHashMap<String, DeclaredType>,
    declared_at: FxHashMap<String, Span>,
}

fn not_an_array(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::NotAnArray {
        name: name.to_string(),
    })
}

/// Zero-based position of the 1-based `index` in a dimension of `len`.
fn slot_index(index: i64, len: usize) -> EvalResult<usize> {
    index
        .checked_sub(1)
        .and_then(|i| usize::try_from(i).ok())
        .filter(|&i| i < len)
        .ok_or_else(|| index_out_of_bounds(index, len))
}

fn slot<'v>(value: &'v Value, indices: &[i64], name: &str) -> EvalResult<&'v Value> {
    let Some((&index, rest)) = indices.split_first() else {
        return Ok(value);
    };
    match value {
        Value::Array(items) => slot(&items[slot_index(index, items.len())?], rest, name),
        _ => Err(not_an_array(name)),
    }
}

fn slot_mut<'v>(value: &'v mut Value, indices: &[i64], name: &str) -> EvalResult<&'v mut Value> {
    let Some((&index, rest)) = indices.split_first() else {
        return Ok(value);
    };
    match value {
        Value::Array(items) => {
            let i = slot_index(index, items.len())?;
            slot_mut(&mut items[i], rest, name)
        }
        _ => Err(not_an_array(name)),
    }
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Register `name`, declared at `at`. Scalars start unset; arrays are
    /// allocated with `shape` (one size per dimension) and every slot unset.
    pub fn declare(
        &mut self,
        name: &str,
        ty: DeclaredType,
        shape: &[usize],
        at: Span,
    ) -> EvalResult<()> {
        if self.is_declared(name) {
            return Err(duplicate_declaration(
                name,
                self.declared_at.get(name).copied(),
            ));
        }
        let value = match ty {
            DeclaredType::Scalar(_) => Value::Unset,
            DeclaredType::Array { .. } => Value::new_array(shape),
        };
        self.types.insert(name.to_string(), ty);
        self.values.insert(name.to_string(), value);
        self.declared_at.insert(name.to_string(), at);
        Ok(())
    }

    pub fn declared_type(&self, name: &str) -> EvalResult<DeclaredType> {
        self.types
            .get(name)
            .copied()
            .ok_or_else(|| undeclared_variable(name))
    }

    /// Element type of the scalar slot reached with `index_count` indices.
    pub fn slot_type(&self, name: &str, index_count: usize) -> EvalResult<ScalarType> {
        let ty = self.declared_type(name)?;
        match (ty, ty.slot_type(index_count)) {
            (_, Some(slot_ty)) => Ok(slot_ty),
            (DeclaredType::Scalar(_), None) => Err(not_an_array(name)),
            (DeclaredType::Array { rank, .. }, None) => {
                Err(EvalError::new(EvalErrorKind::InvalidArrayShape {
                    name: name.to_string(),
                    rank,
                    got: index_count,
                }))
            }
        }
    }

    /// Read `name`, following 1-based `indices`. Fewer indices than the
    /// array's rank yield a sub-array.
    pub fn get(&self, name: &str, indices: &[i64]) -> EvalResult<Value> {
        let root = self
            .values
            .get(name)
            .ok_or_else(|| undeclared_variable(name))?;
        slot(root, indices, name).cloned()
    }

    /// Write `value` to the scalar slot of `name` addressed by `indices`.
    ///
    /// The slot must be fully indexed and `value` must have exactly the
    /// declared element type.
    pub fn set(&mut self, name: &str, indices: &[i64], value: Value) -> EvalResult<()> {
        let slot_ty = self.slot_type(name, indices.len())?;
        if !slot_ty.accepts(&value) {
            return Err(type_mismatch(slot_ty.name(), value.type_name()));
        }
        let root = self
            .values
            .get_mut(name)
            .ok_or_else(|| undeclared_variable(name))?;
        *slot_mut(root, indices, name)? = value;
        Ok(())
    }
}
