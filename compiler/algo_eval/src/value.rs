//! Runtime values and declared types.

use std::fmt;

use algo_ir::TypeName;

/// Upper bound on the total slot count of one array variable.
pub const MAX_ARRAY_SLOTS: usize = 1 << 20;

/// A runtime value.
///
/// Arrays are nested: a two-dimensional array is an `Array` of `Array`s,
/// with `Unset` in every slot that was never written.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A declared slot that was never assigned.
    Unset,
    Int(i64),
    Float(f64),
    Bool(bool),
    Char(char),
    Str(String),
    Array(Vec<Value>),
}

impl Value {
    /// French name of the value's type, as used in messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Unset => "non initialisé",
            Value::Int(_) => "entier",
            Value::Float(_) => "réel",
            Value::Bool(_) => "booléen",
            Value::Char(_) => "caractère",
            Value::Str(_) => "chaîne",
            Value::Array(_) => "tableau",
        }
    }

    /// An array of the given shape with every slot unset.
    ///
    /// Callers bound the slot count by [`MAX_ARRAY_SLOTS`] first.
    pub fn new_array(shape: &[usize]) -> Value {
        match shape.split_first() {
            None => Value::Unset,
            Some((&len, rest)) => Value::Array(vec![Value::new_array(rest); len]),
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unset => Ok(()),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Bool(true) => f.write_str("vrai"),
            Value::Bool(false) => f.write_str("faux"),
            Value::Char(c) => write!(f, "{c}"),
            Value::Str(s) => f.write_str(s),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Element type a variable can hold.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ScalarType {
    Int,
    Float,
    Bool,
    Char,
    Str,
}

impl ScalarType {
    /// Scalar type named by a type word; `None` for `tableau`.
    pub fn from_type_name(name: TypeName) -> Option<Self> {
        match name {
            TypeName::Entier => Some(ScalarType::Int),
            TypeName::Reel => Some(ScalarType::Float),
            TypeName::Booleen => Some(ScalarType::Bool),
            TypeName::Caractere => Some(ScalarType::Char),
            TypeName::Chaine => Some(ScalarType::Str),
            TypeName::Tableau => None,
        }
    }

    /// Whether `value` may be stored in a slot of this type. No implicit
    /// conversion: an `Int` never fills a `Float` slot.
    pub fn accepts(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (ScalarType::Int, Value::Int(_))
                | (ScalarType::Float, Value::Float(_))
                | (ScalarType::Bool, Value::Bool(_))
                | (ScalarType::Char, Value::Char(_))
                | (ScalarType::Str, Value::Str(_))
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            ScalarType::Int => "entier",
            ScalarType::Float => "réel",
            ScalarType::Bool => "booléen",
            ScalarType::Char => "caractère",
            ScalarType::Str => "chaîne",
        }
    }
}

/// Type a variable was declared with.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeclaredType {
    Scalar(ScalarType),
    /// `rank` is the number of dimensions given at declaration.
    Array { element: ScalarType, rank: usize },
}

impl DeclaredType {
    /// Type of the slot reached with `indices` indices, if it is a scalar.
    pub fn slot_type(self, indices: usize) -> Option<ScalarType> {
        match self {
            DeclaredType::Scalar(ty) if indices == 0 => Some(ty),
            DeclaredType::Array { element, rank } if indices == rank => Some(element),
            _ => None,
        }
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclaredType::Scalar(ty) => f.write_str(ty.name()),
            DeclaredType::Array { element, rank } => {
                write!(f, "tableau de {} ({rank} dim.)", element.name())
            }
        }
    }
}
