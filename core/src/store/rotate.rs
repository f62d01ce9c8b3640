/// Returns the last `max_lines` lines of `content`, newline
/// terminated, or `None` when the content is already within the cap.
pub fn keep_last_lines(content: &str, max_lines: usize) -> Option<String> {
    let lines: Vec<&str> = content.trim().lines().collect();
    if lines.len() <= max_lines {
        return None;
    }
    let mut out = lines[lines.len() - max_lines..].join("\n");
    out.push('\n');
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_tail_in_order() {
        let content = "a\nb\nc\nd\ne\n";
        assert_eq!(keep_last_lines(content, 3).as_deref(), Some("c\nd\ne\n"));
    }

    #[test]
    fn untouched_within_cap() {
        assert_eq!(keep_last_lines("a\nb\n", 2), None);
        assert_eq!(keep_last_lines("", 2), None);
    }
}
