//! Dotted path resolution over nested tables.
//!
//! A path such as `db.primary.host` is split on its first `.`; the head is
//! looked up in the current table and the tail is resolved against the value
//! found there. Segments are opaque keys.

use toml::{Table, Value};

use super::StoreError;

/// Looks up a dotted path in `scope`.
///
/// Returns `None` if any segment is missing, or if a segment other than the
/// last one holds something that is not a table.
pub fn find<'a>(path: &str, scope: &'a Table) -> Option<&'a Value> {
    let (head, rest) = split_head(path);
    let value = scope.get(head)?;

    match rest {
        Some(rest) => find(rest, value.as_table()?),
        None => Some(value),
    }
}

/// Like [`find`], but a missing segment is an error naming the full path.
pub fn find_strict<'a>(path: &str, scope: &'a Table) -> Result<&'a Value, StoreError> {
    find(path, scope).ok_or_else(|| StoreError::KeyNotFound(path.to_string()))
}

/// Writes `value` at a dotted path, creating intermediate tables as needed.
///
/// An intermediate segment holding a non-table value is replaced by an empty
/// table before descending.
pub fn assign(path: &str, scope: &mut Table, value: Value) {
    let (head, rest) = split_head(path);

    let Some(rest) = rest else {
        scope.insert(head.to_string(), value);
        return;
    };

    if !matches!(scope.get(head), Some(Value::Table(_))) {
        scope.insert(head.to_string(), Value::Table(Table::new()));
    }

    if let Some(Value::Table(nested)) = scope.get_mut(head) {
        assign(rest, nested, value);
    }
}

/// Splits on the first `.`. An empty tail counts as no tail.
fn split_head(path: &str) -> (&str, Option<&str>) {
    match path.split_once('.') {
        Some((head, rest)) if !rest.is_empty() => (head, Some(rest)),
        Some((head, _)) => (head, None),
        None => (path, None),
    }
}
