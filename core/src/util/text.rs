/// First `max` characters of `s`, cut on a char boundary.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Last path component, treating both `/` and `\` as separators.
pub fn file_name_of(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// `2026-01-02T03:04:05.123` -> `2026-01-02 03:04`, trimmed to `len` chars.
pub fn short_timestamp(ts: &str, len: usize) -> String {
    truncate_chars(ts, len).replace('T', " ")
}

/// Characters `start..end` of `s`; empty if `s` is shorter than `start`.
pub fn char_slice(s: &str, start: usize, end: usize) -> &str {
    let begin = match s.char_indices().nth(start) {
        Some((idx, _)) => idx,
        None => return "",
    };
    let stop = s.char_indices().nth(end).map(|(idx, _)| idx).unwrap_or(s.len());
    &s[begin..stop]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_on_char_boundary() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("", 3), "");
    }

    #[test]
    fn file_name_handles_both_separators() {
        assert_eq!(file_name_of("C:\\repo\\src\\main.rs"), "main.rs");
        assert_eq!(file_name_of("/repo/lib.rs"), "lib.rs");
        assert_eq!(file_name_of("plain.txt"), "plain.txt");
    }

    #[test]
    fn timestamps_shorten() {
        assert_eq!(short_timestamp("2026-01-02T03:04:05.1", 16), "2026-01-02 03:04");
        assert_eq!(char_slice("2026-01-02T03:04:05", 11, 19), "03:04:05");
        assert_eq!(char_slice("short", 11, 19), "");
    }
}
