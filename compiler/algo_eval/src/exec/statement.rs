//! Declarations and assignment.

use algo_ir::{Node, TokenData, TypeName};
use tracing::trace;

use super::{malformed, Executable};
use crate::errors::{type_mismatch, EvalError, EvalErrorKind, EvalResult};
use crate::interpreter::Interpreter;
use crate::value::{DeclaredType, ScalarType, Value, MAX_ARRAY_SLOTS};

/// `<names> : <type>`, laid out as `(: <type> <var>...)`.
pub(super) struct Declare;

/// `<target> ← <expr>`.
pub(super) struct Assign;

fn scalar_type(node: &Node) -> EvalResult<ScalarType> {
    match node.head.data {
        TokenData::Type(name) => ScalarType::from_type_name(name),
        _ => None,
    }
    .ok_or_else(|| type_mismatch("type", node.head.to_string()).with_span(node.span()))
}

fn declared_type(type_node: &Node, var_node: &Node) -> EvalResult<DeclaredType> {
    match (&type_node.head.data, type_node.children.as_slice()) {
        (TokenData::Type(TypeName::Tableau), [element]) => Ok(DeclaredType::Array {
            element: scalar_type(element)?,
            rank: var_node.children.len(),
        }),
        _ => scalar_type(type_node).map(DeclaredType::Scalar),
    }
}

impl Declare {
    /// Evaluate each dimension of an array declaration into a size.
    ///
    /// The product of the sizes may not exceed [`MAX_ARRAY_SLOTS`].
    fn shape(var_node: &Node, interp: &mut Interpreter<'_>) -> EvalResult<Vec<usize>> {
        let mut shape = Vec::with_capacity(var_node.children.len());
        let mut slots: usize = 1;
        for dim in &var_node.children {
            let size = match interp.value_of(dim)? {
                Value::Int(size) => size,
                other => {
                    return Err(type_mismatch("entier", other.type_name()).with_span(dim.full_span()))
                }
            };
            let size = usize::try_from(size)
                .ok()
                .filter(|&n| n >= 1)
                .ok_or_else(|| {
                    EvalError::new(EvalErrorKind::InvalidArraySize { size }).with_span(dim.full_span())
                })?;
            slots = slots
                .checked_mul(size)
                .filter(|&n| n <= MAX_ARRAY_SLOTS)
                .ok_or_else(|| {
                    EvalError::new(EvalErrorKind::ArrayTooLarge {
                        limit: MAX_ARRAY_SLOTS,
                    })
                    .with_span(dim.full_span())
                })?;
            shape.push(size);
        }
        Ok(shape)
    }
}

impl Executable for Declare {
    fn execute(&self, node: &Node, interp: &mut Interpreter<'_>) -> EvalResult<()> {
        let Some((type_node, vars)) = node.children.split_first() else {
            return Err(malformed(node));
        };
        for var_node in vars {
            let Some(var) = var_node.head.as_var() else {
                return Err(type_mismatch("variable", var_node.head.to_string())
                    .with_span(var_node.span()));
            };
            let ty = declared_type(type_node, var_node)?;
            let shape = Declare::shape(var_node, interp)?;
            trace!(name = %var.name, %ty, "declare");
            interp
                .env_mut()
                .declare(&var.name, ty, &shape, var_node.full_span())
                .map_err(|err| err.or_span(var_node.span()))?;
        }
        Ok(())
    }
}

impl Executable for Assign {
    fn execute(&self, node: &Node, interp: &mut Interpreter<'_>) -> EvalResult<()> {
        let [target, value] = node.children.as_slice() else {
            return Err(malformed(node));
        };
        let value = interp.value_of(value)?;
        interp.assign(target, value)
    }
}
