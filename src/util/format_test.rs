use super::*;

// =============================================================
// format_date
// =============================================================

#[test]
fn formats_iso_timestamp() {
    assert_eq!(format_date("2024-06-01T12:30:00Z"), "Jun 1, 2024");
}

#[test]
fn formats_bare_date() {
    assert_eq!(format_date("2024-12-25"), "Dec 25, 2024");
}

#[test]
fn strips_leading_zero_from_day() {
    assert_eq!(format_date("2024-01-05"), "Jan 5, 2024");
}

#[test]
fn unparseable_date_is_returned_unchanged() {
    assert_eq!(format_date("yesterday"), "yesterday");
    assert_eq!(format_date(""), "");
    assert_eq!(format_date("2024-13-01"), "2024-13-01");
}

// =============================================================
// email_handle
// =============================================================

#[test]
fn handle_is_the_local_part() {
    assert_eq!(email_handle(Some("ann@example.com")), "ann");
}

#[test]
fn missing_email_falls_back() {
    assert_eq!(email_handle(None), "username");
    assert_eq!(email_handle(Some("")), "username");
}

// =============================================================
// rank helpers
// =============================================================

#[test]
fn top_three_ranks_get_medals() {
    assert_eq!(rank_badge(1), "🥇");
    assert_eq!(rank_badge(2), "🥈");
    assert_eq!(rank_badge(3), "🥉");
    assert_eq!(rank_badge(4), "#4");
}

#[test]
fn only_top_three_rows_highlight() {
    assert_eq!(rank_row_class(1), "table-warning");
    assert_eq!(rank_row_class(3), "table-warning");
    assert_eq!(rank_row_class(4), "");
    assert_eq!(rank_row_class(0), "");
}

// =============================================================
// difficulty_badge
// =============================================================

#[test]
fn known_difficulties_map_to_colors() {
    assert_eq!(difficulty_badge("Easy"), "success");
    assert_eq!(difficulty_badge("Medium"), "warning");
    assert_eq!(difficulty_badge("Hard"), "danger");
}

#[test]
fn unknown_difficulty_is_secondary() {
    assert_eq!(difficulty_badge("Impossible"), "secondary");
    assert_eq!(difficulty_badge(""), "secondary");
}
