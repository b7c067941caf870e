//! Built-in functions.
//!
//! Names are matched case-insensitively: `Afficher`, `AFFICHER` and
//! `afficher` are the same function.

use algo_ir::Node;
use tracing::trace;

use crate::errors::{arity_mismatch, type_mismatch, EvalError, EvalErrorKind, EvalResult};
use crate::interpreter::Interpreter;
use crate::value::{ScalarType, Value};

/// A function callable from programs.
///
/// `call` receives the whole call node; its children are the argument
/// expressions, unevaluated, so `read` can treat its argument as a target.
pub trait Builtin: Sync {
    fn name(&self) -> &'static str;

    /// Run the function. `Ok(None)` means the call produces no value.
    fn call(&self, call: &Node, interp: &mut Interpreter<'_>) -> EvalResult<Option<Value>>;
}

/// `Afficher(a, b, ...)`: print the arguments on one line, space-separated.
struct Print;

/// `Saisir(x)`: read one line of input into `x`.
struct Read;

/// `longueur(s)`: length of a string or an array.
struct Length;

static PRINT: Print = Print;
static READ: Read = Read;
static LENGTH: Length = Length;

/// Look up a built-in by name.
pub fn builtin(name: &str) -> Option<&'static dyn Builtin> {
    match name.to_lowercase().as_str() {
        "afficher" | "écrire" | "ecrire" => Some(&PRINT),
        "saisir" | "lire" => Some(&READ),
        "longueur" => Some(&LENGTH),
        _ => None,
    }
}

fn single_arg<'n>(name: &str, call: &'n Node) -> EvalResult<&'n Node> {
    match call.children.as_slice() {
        [arg] => Ok(arg),
        args => Err(arity_mismatch(name, 1, args.len()).with_span(call.span())),
    }
}

impl Builtin for Print {
    fn name(&self) -> &'static str {
        "afficher"
    }

    fn call(&self, call: &Node, interp: &mut Interpreter<'_>) -> EvalResult<Option<Value>> {
        let mut parts = Vec::with_capacity(call.children.len());
        for arg in &call.children {
            parts.push(interp.value_of(arg)?.to_string());
        }
        interp.console().write_line(&parts.join(" "))?;
        Ok(None)
    }
}

impl Read {
    fn parse(line: &str, ty: ScalarType) -> Option<Value> {
        match ty {
            ScalarType::Int => line.trim().parse().ok().map(Value::Int),
            ScalarType::Float => line.trim().replace(',', ".").parse().ok().map(Value::Float),
            ScalarType::Bool => match line.trim().to_lowercase().as_str() {
                "vrai" => Some(Value::Bool(true)),
                "faux" => Some(Value::Bool(false)),
                _ => None,
            },
            ScalarType::Char => single_char(line)
                .or_else(|| single_char(line.trim()))
                .map(Value::Char),
            ScalarType::Str => Some(Value::Str(line.to_string())),
        }
    }
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

impl Builtin for Read {
    fn name(&self) -> &'static str {
        "saisir"
    }

    fn call(&self, call: &Node, interp: &mut Interpreter<'_>) -> EvalResult<Option<Value>> {
        let target = single_arg(self.name(), call)?;
        let (indices, ty) = interp.slot_type(target)?;
        let line = interp
            .console()
            .read_line()?
            .ok_or_else(|| EvalError::new(EvalErrorKind::InputExhausted))?;
        trace!(%line, ty = ty.name(), "read");
        let value = Read::parse(&line, ty).ok_or_else(|| {
            EvalError::new(EvalErrorKind::InvalidInput {
                input: line.clone(),
                expected: ty.name(),
            })
            .with_span(target.full_span())
        })?;
        interp.store(target, &indices, value)?;
        Ok(None)
    }
}

impl Builtin for Length {
    fn name(&self) -> &'static str {
        "longueur"
    }

    fn call(&self, call: &Node, interp: &mut Interpreter<'_>) -> EvalResult<Option<Value>> {
        let arg = single_arg(self.name(), call)?;
        let len = match interp.value_of(arg)? {
            Value::Str(s) => s.chars().count(),
            Value::Char(_) => 1,
            Value::Array(items) => items.len(),
            other => {
                return Err(
                    type_mismatch("chaîne ou tableau", other.type_name()).with_span(arg.full_span())
                )
            }
        };
        i64::try_from(len)
            .map(|n| Some(Value::Int(n)))
            .map_err(|_| EvalError::new(EvalErrorKind::IntegerOverflow { operation: "longueur" }))
    }
}
