// crates/domain/src/format/size.rs
use super::number::group_thousands;

/// Binary multipliers, largest first.
const MULTIPLIERS: [(u64, char); 4] = [(1 << 40, 'T'), (1 << 30, 'G'), (1 << 20, 'M'), (1 << 10, 'k')];

/// Formats a byte count for the size column, or `None` for directories.
///
/// The largest multiplier the count reaches is used, with one decimal place
/// unless the fraction is below `0.1` or at least `0.95`, in which case no
/// decimals are shown (`4.03M` prints as `4MB`, `4.97M` as `5MB`). Counts below
/// one KiB print raw. The integer part carries thousands separators and the
/// string always ends in `B`.
pub fn format_size(bytes: u64, is_directory: bool) -> Option<String> {
    if is_directory {
        return None;
    }

    for (multiplier, prefix) in MULTIPLIERS {
        if bytes >= multiplier {
            let value = bytes as f64 / multiplier as f64;
            let fraction = value.fract();
            let number = if fraction < 0.1 || fraction >= 0.95 { format!("{value:.0}") } else { format!("{value:.1}") };
            return Some(format!("{}{prefix}B", group_thousands(&number)));
        }
    }
    Some(format!("{}B", group_thousands(&bytes.to_string())))
}
