use tabarnam_migrate::modules::migration::prompt::is_affirmative;
use tabarnam_migrate::modules::migration::report::{logo_preview, preview, LOGO_PREVIEW_LEN};

#[test]
fn test_long_urls_are_truncated_to_sixty_chars() {
    let url = format!("https://example.com/{}", "x".repeat(80));
    let shown = logo_preview(Some(&url));

    assert_eq!(shown.chars().count(), LOGO_PREVIEW_LEN + 3);
    assert!(shown.ends_with("..."));
    assert_eq!(&shown[..LOGO_PREVIEW_LEN], &url[..LOGO_PREVIEW_LEN]);
}

#[test]
fn test_sixty_char_url_is_shown_verbatim_with_marker() {
    let url = "x".repeat(60);
    assert_eq!(logo_preview(Some(&url)), format!("{url}..."));
}

#[test]
fn test_short_url_still_gets_the_marker() {
    // Observed behavior of the report: the marker is always appended,
    // short values included.
    assert_eq!(logo_preview(Some("blob:xyz")), "blob:xyz...");
}

#[test]
fn test_absent_url_shows_placeholder() {
    assert_eq!(logo_preview(None), "N/A...");
}

#[test]
fn test_preview_counts_characters_not_bytes() {
    let value = "é".repeat(70);
    let shown = preview(&value, 60);

    assert_eq!(shown.chars().count(), 63);
    assert!(shown.ends_with("..."));
}

#[test]
fn test_affirmative_answers() {
    assert!(is_affirmative("yes"));
    assert!(is_affirmative("YES"));
    assert!(is_affirmative("  Yes \n"));
}

#[test]
fn test_everything_else_declines() {
    assert!(!is_affirmative(""));
    assert!(!is_affirmative("   "));
    assert!(!is_affirmative("y"));
    assert!(!is_affirmative("no"));
    assert!(!is_affirmative("yes please"));
}
