// crates/domain/src/format/number.rs

/// Inserts a comma every three digits of the integer part of a decimal
/// string: `"1023.5"` becomes `"1,023.5"`.
pub fn group_thousands(number: &str) -> String {
    let (integer, fraction) = match number.find('.') {
        Some(dot) => number.split_at(dot),
        None => (number, ""),
    };

    let mut grouped = String::with_capacity(number.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push_str(fraction);
    grouped
}

/// 1-based row number as shown in the index column.
pub fn format_index(number: usize) -> String {
    group_thousands(&number.to_string())
}
