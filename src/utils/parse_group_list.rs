/// Group assigned when the CSV cell is empty or unreadable.
pub const DEFAULT_GROUP_ID: i64 = 1;

/// Parse a literal sequence of group ids such as `[1, 2]`, `(3,)`, `2, 3` or `5`.
///
/// Brackets are optional; an unbracketed value reads like a tuple literal.
/// Empty input and anything that is not a sequence of integers falls back to
/// `[DEFAULT_GROUP_ID]`. This never fails.
pub fn parse_group_list(text: &str) -> Vec<i64> {
    try_parse_group_list(text).unwrap_or_else(|| vec![DEFAULT_GROUP_ID])
}

fn try_parse_group_list(text: &str) -> Option<Vec<i64>> {
    let t = text.trim();
    if t.is_empty() {
        return None;
    }
    let bracketed = t
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .or_else(|| t.strip_prefix('(').and_then(|s| s.strip_suffix(')')));

    let inner = match bracketed {
        Some(s) if s.trim().is_empty() => return Some(Vec::new()),
        Some(s) => s.trim(),
        None => t,
    };
    // A single trailing comma is valid literal syntax: `[1, 2,]`.
    let inner = inner.strip_suffix(',').unwrap_or(inner);

    inner
        .split(',')
        .map(|v| {
            let v = v.trim();
            if v.is_empty() {
                None
            } else {
                v.parse::<i64>().ok()
            }
        })
        .collect()
}
