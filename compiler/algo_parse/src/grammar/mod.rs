//! Parse rules, one per head token variant.

mod declaration;
mod expr;
mod statement;

pub(crate) use declaration::Declaration;
pub(crate) use expr::{
    variable_node, Add, Assign, Call, Comparison, Connective, GroupExpr, Literal, Multiply,
    Subtract, VariableRef,
};
pub(crate) use statement::{Else, End, For, If, ProgramHeader, Section, While};
