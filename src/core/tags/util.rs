//! core/tags/util.rs
//! Small helpers shared by the block readers.

use super::PropertyMap;

/// Append `value` under `key`, skipping empty strings.
pub(crate) fn push_prop(map: &mut PropertyMap, key: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    map.entry(key.to_string())
        .or_default()
        .push(value.to_string());
}

/// Append every part of a multi-value text field.
/// ID3v2.4 (and the `id3` crate) separate values with NUL.
pub(crate) fn push_split(map: &mut PropertyMap, key: &str, value: &str) {
    for part in value.split('\0') {
        push_prop(map, key, part.trim_end());
    }
}

/// Parse the leading integer of strings like:
/// - "3" -> Some(3)
/// - "3/12" -> Some(3)
/// - "1997-06-16" -> Some(1997)
/// - "+3", "-4" -> Some(3), Some(-4) (one leading sign, as `str::parse`)
/// - "abc" -> None
pub(crate) fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim();
    let end = s
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && matches!(c, '-' | '+'))))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    s[..end].parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_int_variants() {
        assert_eq!(leading_int("3"), Some(3));
        assert_eq!(leading_int(" 3/12 "), Some(3));
        assert_eq!(leading_int("1997-06-16"), Some(1997));
        assert_eq!(leading_int("-4"), Some(-4));
        assert_eq!(leading_int("+3"), Some(3));
        assert_eq!(leading_int("+3/12"), Some(3));
        assert_eq!(leading_int("+"), None);
        assert_eq!(leading_int("+-3"), None);
        assert_eq!(leading_int("abc"), None);
        assert_eq!(leading_int(""), None);
        assert_eq!(leading_int("-"), None);
    }

    #[test]
    fn split_on_nul_and_skip_empty() {
        let mut map = PropertyMap::new();
        push_split(&mut map, "ARTIST", "A\0B\0");
        push_prop(&mut map, "ALBUM", "");
        assert_eq!(map["ARTIST"], vec!["A".to_string(), "B".to_string()]);
        assert!(!map.contains_key("ALBUM"));
    }
}
