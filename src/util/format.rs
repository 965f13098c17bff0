use chrono::Datelike;

/// Group digits in threes: `1234567` → `"1,234,567"`.
pub fn format_number(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Long Korean date, e.g. `2025년 3월 7일`.
pub fn format_date(date: &impl Datelike) -> String {
    format!("{}년 {}월 {}일", date.year(), date.month(), date.day())
}
