use super::*;

#[test]
fn nested_group_depth_does_not_overflow() {
    // One frame per nesting level, like the AST builder on `((((x))))`.
    fn unwrap_groups(depth: u32) -> u32 {
        ensure_sufficient_stack(|| if depth == 0 { 0 } else { unwrap_groups(depth - 1) + 1 })
    }

    assert_eq!(unwrap_groups(100_000), 100_000);
}

#[test]
fn passes_result_through() {
    let result: Result<i64, &str> = ensure_sufficient_stack(|| Ok(7));
    assert_eq!(result, Ok(7));
}
