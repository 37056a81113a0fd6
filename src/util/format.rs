//! Presentational formatting helpers shared by the list views.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format an ISO-8601 timestamp as `Mon D, YYYY` (en-US style).
///
/// Anything that does not start with a `YYYY-MM-DD` date is returned
/// unchanged — the backend value is display-only and never validated.
pub fn format_date(raw: &str) -> String {
    let date_part = raw.split('T').next().unwrap_or(raw);
    let fields: Vec<&str> = date_part.split('-').collect();
    if let [year, month, day] = fields.as_slice() {
        if let (Ok(y), Ok(m), Ok(d)) = (
            year.parse::<i32>(),
            month.parse::<usize>(),
            day.parse::<u32>(),
        ) {
            if (1..=12).contains(&m) && (1..=31).contains(&d) {
                return format!("{} {d}, {y}", MONTHS[m - 1]);
            }
        }
    }
    raw.to_owned()
}

/// The part of an email address before the `@`, used as a display handle.
pub fn email_handle(email: Option<&str>) -> String {
    email
        .and_then(|addr| addr.split('@').next())
        .filter(|handle| !handle.is_empty())
        .map_or_else(|| "username".to_owned(), ToOwned::to_owned)
}

/// Medal for the top three leaderboard ranks, `#N` otherwise.
pub fn rank_badge(rank: i64) -> String {
    match rank {
        1 => "🥇".to_owned(),
        2 => "🥈".to_owned(),
        3 => "🥉".to_owned(),
        n => format!("#{n}"),
    }
}

/// Row highlight class for the top three leaderboard ranks.
pub fn rank_row_class(rank: i64) -> &'static str {
    if (1..=3).contains(&rank) {
        "table-warning"
    } else {
        ""
    }
}

/// Bootstrap badge color for a workout difficulty label.
pub fn difficulty_badge(difficulty: &str) -> &'static str {
    match difficulty {
        "Easy" => "success",
        "Medium" => "warning",
        "Hard" => "danger",
        _ => "secondary",
    }
}
