use toml::{Table, Value};

/// Merges `overlay` into `base`.
///
/// Nested tables are merged recursively and arrays are appended. Any other
/// value in `overlay` replaces the one in `base`.
pub fn deep_merge(base: &mut Table, overlay: Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(Value::Table(base_table)), Value::Table(overlay_table)) => {
                deep_merge(base_table, overlay_table);
            }
            (Some(Value::Array(base_array)), Value::Array(overlay_array)) => {
                base_array.extend(overlay_array);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
