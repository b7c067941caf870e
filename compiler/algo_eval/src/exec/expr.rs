//! Expression heads. Each pushes exactly one value.

use algo_ir::{Node, TokenData};

use super::{malformed, Executable};
use crate::builtins::builtin;
use crate::errors::{unknown_function, EvalResult};
use crate::interpreter::Interpreter;
use crate::operators::{evaluate_binary, evaluate_connective, negate};

/// `+ - * /`; `-` with a single child is negation.
pub(super) struct Arithmetic;

/// `= ≠ < ≤ > ≥`.
pub(super) struct Comparison;

/// `ET` / `OU`.
pub(super) struct Connective;

/// A built-in call used as a statement or inside an expression.
pub(super) struct Call;

fn operands<'n>(node: &'n Node) -> EvalResult<(&'n Node, &'n Node)> {
    match node.children.as_slice() {
        [left, right] => Ok((left, right)),
        _ => Err(malformed(node)),
    }
}

impl Executable for Arithmetic {
    fn execute(&self, node: &Node, interp: &mut Interpreter<'_>) -> EvalResult<()> {
        let TokenData::Operator(op) = node.head.data else {
            return Err(malformed(node));
        };
        let result = if let [operand] = node.children.as_slice() {
            let value = interp.value_of(operand)?;
            negate(&value)
        } else {
            let (left, right) = operands(node)?;
            let left = interp.value_of(left)?;
            let right = interp.value_of(right)?;
            evaluate_binary(op, &left, &right)
        };
        interp.push(result.map_err(|err| err.or_span(node.span()))?);
        Ok(())
    }
}

impl Executable for Comparison {
    fn execute(&self, node: &Node, interp: &mut Interpreter<'_>) -> EvalResult<()> {
        let TokenData::Operator(op) = node.head.data else {
            return Err(malformed(node));
        };
        let (left, right) = operands(node)?;
        let left = interp.value_of(left)?;
        let right = interp.value_of(right)?;
        let value = evaluate_binary(op, &left, &right).map_err(|err| err.or_span(node.span()))?;
        interp.push(value);
        Ok(())
    }
}

impl Executable for Connective {
    fn execute(&self, node: &Node, interp: &mut Interpreter<'_>) -> EvalResult<()> {
        let TokenData::BooleanOperator(op) = node.head.data else {
            return Err(malformed(node));
        };
        let (left, right) = operands(node)?;
        let left = interp.value_of(left)?;
        let right = interp.value_of(right)?;
        let value =
            evaluate_connective(op, &left, &right).map_err(|err| err.or_span(node.span()))?;
        interp.push(value);
        Ok(())
    }
}

impl Executable for Call {
    fn execute(&self, node: &Node, interp: &mut Interpreter<'_>) -> EvalResult<()> {
        let TokenData::Function(call) = &node.head.data else {
            return Err(malformed(node));
        };
        let function = builtin(&call.name)
            .ok_or_else(|| unknown_function(&call.name).with_span(node.span()))?;
        if let Some(value) = function
            .call(node, interp)
            .map_err(|err| err.or_span(node.span()))?
        {
            interp.push(value);
        }
        Ok(())
    }
}
