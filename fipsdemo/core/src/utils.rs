use subtle::ConstantTimeEq;

/**
    Const-compatible case-insensitive ASCII byte comparison.
*/
pub const fn eq_ignore_ascii_case(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i].to_ascii_lowercase() != b[i].to_ascii_lowercase() {
            return false;
        }
        i += 1;
    }
    true
}

/**
    Constant-time byte slice equality.

    Every byte of both slices is examined regardless of where the first
    difference occurs. Slices of different lengths compare unequal; only the
    lengths themselves are not hidden.
*/
pub fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
