//! Stack growth for deeply nested source.
//!
//! The AST builder recurses once per nested group or operator, and the
//! engine recurses once per nested sub-expression while extracting values.
//! A pathological line such as `x ← ((((((...))))))` would otherwise blow the
//! native stack, so both phases wrap their recursive step in
//! [`ensure_sufficient_stack`].
//!
//! - **Native targets**: `stacker` grows the stack on demand.
//! - **WASM targets**: plain passthrough.

/// Remaining stack below which a new segment is allocated (64KB).
const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
///
/// ```text
/// fn build_node(&mut self, tokens: &[Token]) -> ParseResult<Node> {
///     ensure_sufficient_stack(|| self.build_node_inner(tokens))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
