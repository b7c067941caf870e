//! Block statements.
//!
//! None of these recurse into a body. They only move the instruction
//! pointer:
//! - `Si`: fall into the body, or jump to its `Sinon` or `Fin si`
//! - `Sinon`: skip to `Fin si` when the `if` branch ran
//! - `Tant`, `Pour`: push their own address on the loop stack and fall
//!   into the body, or jump past their `Fin`
//! - `Fin tant`, `Fin pour`: jump back to the address on the loop stack
//! - `Fin` alone: stop the program

use algo_ir::{Keyword, Node, Operator};
use tracing::debug;

use super::{malformed, Executable};
use crate::errors::{type_mismatch, unmatched_block, EvalResult};
use crate::interpreter::Interpreter;
use crate::operators::evaluate_binary;
use crate::value::Value;

pub(super) struct If;

pub(super) struct Else;

pub(super) struct While;

pub(super) struct For;

pub(super) struct End;

fn else_key(ip: usize) -> String {
    format!("sinon@{ip}")
}

fn for_key(ip: usize) -> String {
    format!("pour@{ip}")
}

fn condition(node: &Node, interp: &mut Interpreter<'_>) -> EvalResult<bool> {
    let cond = node.child(0).ok_or_else(|| malformed(node))?;
    let value = interp.value_of(cond)?;
    value
        .as_bool()
        .ok_or_else(|| type_mismatch("booléen", value.type_name()).with_span(cond.full_span()))
}

impl Executable for If {
    fn execute(&self, node: &Node, interp: &mut Interpreter<'_>) -> EvalResult<()> {
        let ip = interp.ip();
        let taken = condition(node, interp)?;
        let block = interp.block(ip, Keyword::Si)?;
        if let Some(else_ip) = block.else_ip {
            interp.set_meta(else_key(else_ip), Value::Bool(taken));
        }
        if !taken {
            interp.jump(block.else_ip.unwrap_or(block.end_ip));
        }
        Ok(())
    }
}

impl Executable for Else {
    fn execute(&self, _node: &Node, interp: &mut Interpreter<'_>) -> EvalResult<()> {
        let ip = interp.ip();
        match interp.take_meta(&else_key(ip)) {
            Some(Value::Bool(true)) => {
                let block = interp.block(ip, Keyword::Si)?;
                interp.jump(block.end_ip);
                Ok(())
            }
            Some(_) => Ok(()),
            None => Err(unmatched_block(Keyword::Sinon.as_str())),
        }
    }
}

impl Executable for While {
    fn execute(&self, node: &Node, interp: &mut Interpreter<'_>) -> EvalResult<()> {
        let ip = interp.ip();
        if condition(node, interp)? {
            interp.push_loop(ip);
        } else {
            let block = interp.block(ip, Keyword::Tant)?;
            debug!(ip, "while loop exit");
            interp.jump(block.end_ip + 1);
        }
        Ok(())
    }
}

impl For {
    fn step(current: &Value) -> Value {
        match current {
            Value::Float(_) => Value::Float(1.0),
            _ => Value::Int(1),
        }
    }
}

impl Executable for For {
    fn execute(&self, node: &Node, interp: &mut Interpreter<'_>) -> EvalResult<()> {
        let [iter, init, end] = node.children.as_slice() else {
            return Err(malformed(node));
        };
        let ip = interp.ip();
        let key = for_key(ip);

        let Some(bound) = interp.meta(&key).cloned() else {
            interp.execute(init)?;
            let bound = interp.value_of(end)?;
            if !matches!(bound, Value::Int(_) | Value::Float(_)) {
                return Err(type_mismatch("entier ou réel", bound.type_name())
                    .with_span(end.full_span()));
            }
            debug!(ip, %bound, "for loop entry");
            interp.set_meta(key, bound);
            interp.push_loop(ip);
            return Ok(());
        };

        let current = interp.value_of(iter)?;
        if evaluate_binary(Operator::Lt, &current, &bound)? == Value::Bool(true) {
            let next = evaluate_binary(Operator::Plus, &current, &For::step(&current))?;
            interp.push_loop(ip);
            interp.assign(iter, next)
        } else {
            debug!(ip, "for loop exit");
            interp.take_meta(&key);
            let block = interp.block(ip, Keyword::Pour)?;
            interp.jump(block.end_ip + 1);
            Ok(())
        }
    }
}

impl Executable for End {
    fn execute(&self, node: &Node, interp: &mut Interpreter<'_>) -> EvalResult<()> {
        let Some(closed) = node.child(0) else {
            interp.halt();
            return Ok(());
        };
        match closed.head.keyword() {
            Some(Keyword::Si) => Ok(()),
            Some(Keyword::Tant | Keyword::Pour) => {
                let target = interp.pop_loop()?;
                interp.jump(target);
                Ok(())
            }
            _ => Err(malformed(node)),
        }
    }
}
