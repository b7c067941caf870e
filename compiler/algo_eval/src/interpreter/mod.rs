//! The instruction-pointer machine.
//!
//! A [`Program`] is a flat array of statement nodes. The interpreter walks
//! it with one instruction pointer that advances by one after every
//! statement unless the statement requested a jump. Loops and branches are
//! jumps over this array: block bodies are never recursed into.
//!
//! Transient control-flow bookkeeping lives in a metadata map keyed by
//! synthetic strings that embed an instruction address (`sinon@<ip>` for
//! the branch-taken flag of an `if`/`else`, `pour@<ip>` for the cached
//! upper bound of a `for` loop).

mod blocks;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use algo_ir::{Node, NumberLit, Program, TokenData, VarRef};
use algo_stack::ensure_sufficient_stack;

use crate::console::Console;
use crate::environment::Environment;
use crate::errors::{no_value, EvalError, EvalErrorKind, EvalResult};
use crate::exec::executable;
use crate::value::{ScalarType, Value};

pub use blocks::Block;

fn target_var(target: &Node) -> EvalResult<&VarRef> {
    target.head.as_var().ok_or_else(|| {
        EvalError::new(EvalErrorKind::TypeMismatch {
            expected: "variable".to_string(),
            got: target.head.to_string(),
        })
        .with_span(target.span())
    })
}

pub struct Interpreter<'a> {
    program: &'a Program,
    ip: usize,
    /// Target set by the executing statement, replacing `ip + 1`.
    next_ip: Option<usize>,
    halted: bool,
    env: Environment,
    /// Values produced by expression nodes for their caller.
    stack: Vec<Value>,
    /// Addresses `Fin tant`/`Fin pour` jump back to.
    loop_stack: Vec<usize>,
    metadata: FxHashMap<String, Value>,
    blocks: FxHashMap<usize, Block>,
    console: &'a mut dyn Console,
}

impl<'a> Interpreter<'a> {
    pub fn new(program: &'a Program, console: &'a mut dyn Console) -> Self {
        Interpreter {
            program,
            ip: 0,
            next_ip: None,
            halted: false,
            env: Environment::new(),
            stack: Vec::new(),
            loop_stack: Vec::new(),
            metadata: FxHashMap::default(),
            blocks: FxHashMap::default(),
            console,
        }
    }

    /// Run from the current instruction until the pointer leaves the
    /// program or a bare `Fin` stops it. The first error aborts the run.
    #[tracing::instrument(level = "debug", skip_all, fields(lines = self.program.len()))]
    pub fn run(&mut self) -> EvalResult<()> {
        let program = self.program;
        while !self.halted {
            let Some(node) = program.get(self.ip) else {
                break;
            };
            trace!(ip = self.ip, node = %node, "dispatch");
            self.execute(node).map_err(|err| err.or_span(node.span()))?;
            self.stack.clear();
            self.ip = self.next_ip.take().unwrap_or(self.ip + 1);
        }
        debug!(ip = self.ip, halted = self.halted, "run finished");
        Ok(())
    }

    /// Execute one node through its [`Executable`](crate::Executable).
    pub fn execute(&mut self, node: &Node) -> EvalResult<()> {
        let rule = executable(&node.head.data).ok_or_else(|| {
            EvalError::new(EvalErrorKind::NotExecutable {
                what: node.head.to_string(),
            })
            .with_span(node.span())
        })?;
        rule.execute(node, self)
    }

    /// Value of an expression node.
    ///
    /// Literals and variables resolve directly; any other node is executed
    /// and must leave exactly its result on the value stack.
    pub fn value_of(&mut self, node: &Node) -> EvalResult<Value> {
        ensure_sufficient_stack(|| self.value_of_inner(node))
    }

    fn value_of_inner(&mut self, node: &Node) -> EvalResult<Value> {
        match &node.head.data {
            TokenData::Number(n) => Ok(match n.value {
                NumberLit::Int(i) => Value::Int(i),
                NumberLit::Float(x) => Value::Float(x),
            }),
            TokenData::String(s) => Ok(s
                .as_char()
                .map_or_else(|| Value::Str(s.text.clone()), Value::Char)),
            TokenData::Boolean(b) => Ok(Value::Bool(*b)),
            TokenData::Variable(var) => {
                let indices = self.indices(node)?;
                self.env
                    .get(&var.name, &indices)
                    .map_err(|err| err.or_span(node.span()))
            }
            _ => {
                let depth = self.stack.len();
                self.execute(node)?;
                if self.stack.len() > depth {
                    self.stack
                        .pop()
                        .ok_or_else(|| no_value(node.head.to_string()))
                } else {
                    Err(no_value(node.head.to_string()).with_span(node.span()))
                }
            }
        }
    }

    /// Evaluate the index children of a variable node.
    pub fn indices(&mut self, var_node: &Node) -> EvalResult<Vec<i64>> {
        let mut indices = Vec::with_capacity(var_node.children.len());
        for dim in &var_node.children {
            match self.value_of(dim)? {
                Value::Int(i) => indices.push(i),
                other => {
                    return Err(EvalError::new(EvalErrorKind::InvalidIndexType {
                        got: other.type_name(),
                    })
                    .with_span(dim.full_span()))
                }
            }
        }
        Ok(indices)
    }

    /// Evaluate a target's indices and find the scalar type of the slot
    /// they address.
    pub fn slot_type(&mut self, target: &Node) -> EvalResult<(Vec<i64>, ScalarType)> {
        let var = target_var(target)?;
        let indices = self.indices(target)?;
        let ty = self
            .env
            .slot_type(&var.name, indices.len())
            .map_err(|err| err.or_span(target.span()))?;
        Ok((indices, ty))
    }

    /// Store `value` into the slot addressed by a variable node.
    pub fn assign(&mut self, target: &Node, value: Value) -> EvalResult<()> {
        let indices = self.indices(target)?;
        self.store(target, &indices, value)
    }

    /// Store `value` into `target` at already evaluated `indices`.
    pub fn store(&mut self, target: &Node, indices: &[i64], value: Value) -> EvalResult<()> {
        let var = target_var(target)?;
        self.env
            .set(&var.name, indices, value)
            .map_err(|err| err.or_span(target.span()))
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    pub fn console(&mut self) -> &mut dyn Console {
        &mut *self.console
    }

    #[inline]
    pub fn push(&mut self, value: Value) {
        self.stack.push(value);
    }

    // Control flow

    #[inline]
    pub fn ip(&self) -> usize {
        self.ip
    }

    /// Continue at `target` after the current statement.
    pub fn jump(&mut self, target: usize) {
        debug!(from = self.ip, to = target, "jump");
        self.next_ip = Some(target);
    }

    /// Stop after the current statement.
    pub fn halt(&mut self) {
        debug!(ip = self.ip, "stop");
        self.halted = true;
    }

    pub fn push_loop(&mut self, ip: usize) {
        self.loop_stack.push(ip);
    }

    pub fn pop_loop(&mut self) -> EvalResult<usize> {
        self.loop_stack
            .pop()
            .ok_or_else(|| EvalError::new(EvalErrorKind::LoopStackEmpty))
    }

    pub fn meta(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    pub fn set_meta(&mut self, key: String, value: Value) {
        self.metadata.insert(key, value);
    }

    pub fn take_meta(&mut self, key: &str) -> Option<Value> {
        self.metadata.remove(key)
    }
}
