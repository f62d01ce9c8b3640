/// Drops the oldest entries so at most `cap` remain, preserving order.
pub fn truncate_front<T>(buf: &mut Vec<T>, cap: usize) {
    let overflow = buf.len().saturating_sub(cap);
    if overflow > 0 {
        buf.drain(..overflow);
    }
}
