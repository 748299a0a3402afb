// Human-readable byte counts

/// Format a byte count with binary prefixes: `"512 B"`, `"1.50 KiB"`,
/// `"1.17 GiB"`. Two decimals for everything above bytes. Total over all
/// u64 values; the divisor tops out at 1024^6 so even u64::MAX stays in
/// range.
pub fn format_bytes(bytes: u64) -> String {
    const UNIT: u64 = 1024;
    if bytes < UNIT {
        return format!("{} B", bytes);
    }
    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }
    const PREFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];
    format!("{:.2} {}iB", bytes as f64 / div as f64, PREFIXES[exp])
}
