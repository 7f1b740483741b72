use time::OffsetDateTime;

const MINUTE_MS: i64 = 60_000;

pub fn now_ms() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

/// Relative Portuguese label ("Agora mesmo", "5min atrás", "2h atrás", "3d atrás").
pub fn time_ago(now_ms: i64, then_ms: i64) -> String {
    let minutes = (now_ms - then_ms).max(0) / MINUTE_MS;
    let hours = minutes / 60;
    let days = hours / 24;

    if minutes < 1 {
        "Agora mesmo".to_string()
    } else if minutes < 60 {
        format!("{minutes}min atrás")
    } else if hours < 24 {
        format!("{hours}h atrás")
    } else {
        format!("{days}d atrás")
    }
}

/// `dd/mm/yyyy` in UTC.
pub fn short_date(ts_ms: i64) -> String {
    OffsetDateTime::from_unix_timestamp_nanos(ts_ms as i128 * 1_000_000)
        .map(|dt| {
            format!(
                "{:02}/{:02}/{}",
                dt.day(),
                u8::from(dt.month()),
                dt.year()
            )
        })
        .unwrap_or_default()
}

pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// First comma-grouped number in a label such as `"15,423 registos"`.
pub fn leading_count(label: &str) -> u64 {
    let start = match label.find(|c: char| c.is_ascii_digit()) {
        Some(idx) => idx,
        None => return 0,
    };

    let mut value: u64 = 0;
    let mut chars = label[start..].chars().peekable();
    while let Some(ch) = chars.next() {
        if let Some(digit) = ch.to_digit(10) {
            value = value.saturating_mul(10).saturating_add(digit as u64);
        } else if ch == ',' && chars.peek().map_or(false, |next| next.is_ascii_digit()) {
            continue;
        } else {
            break;
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_706_100_000_000;

    #[test]
    fn time_ago_buckets() {
        assert_eq!(time_ago(NOW, NOW - 30_000), "Agora mesmo");
        assert_eq!(time_ago(NOW, NOW - 5 * MINUTE_MS), "5min atrás");
        assert_eq!(time_ago(NOW, NOW - 125 * MINUTE_MS), "2h atrás");
        assert_eq!(time_ago(NOW, NOW - 3 * 24 * 60 * MINUTE_MS), "3d atrás");
        assert_eq!(time_ago(NOW, NOW + MINUTE_MS), "Agora mesmo");
    }

    #[test]
    fn thousands_groups_digits() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1_000), "1,000");
        assert_eq!(thousands(198_437), "198,437");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn leading_count_parses_grouped_numbers() {
        assert_eq!(leading_count("15,423 registos"), 15_423);
        assert_eq!(leading_count("128,990 eventos"), 128_990);
        assert_eq!(leading_count("0 registos"), 0);
        assert_eq!(leading_count("Unknown"), 0);
        assert_eq!(leading_count("cerca de 12, talvez"), 12);
    }

    #[test]
    fn short_date_is_day_first() {
        // 2024-01-24T12:40:00Z
        assert_eq!(short_date(1_706_100_000_000), "24/01/2024");
    }
}
