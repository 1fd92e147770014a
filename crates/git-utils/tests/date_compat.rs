//! Timestamp rendering checks against values produced by `git log --date=iso`.

use bstr::BStr;
use git_utils::date::{GitDate, Signature};
use proptest::prelude::*;

#[test]
fn iso_rendering_matches_git() {
    let cases = [
        ("1234567890 +0000", "2009-02-13 23:31:30 +00:00"),
        ("1234567890 +0530", "2009-02-14 05:01:30 +05:30"),
        ("1700000000 +0000", "2023-11-14 22:13:20 +00:00"),
        ("0 +0000", "1970-01-01 00:00:00 +00:00"),
        ("0 -0100", "1969-12-31 23:00:00 -01:00"),
    ];

    for (raw, expected) in cases {
        let date = GitDate::parse_raw(raw).unwrap();
        assert_eq!(date.format_iso_local(), expected, "input: {raw}");
    }
}

#[test]
fn committer_rendering() {
    let sig = Signature::parse(BStr::new(
        "Jane Q. Public <jane@example.org> 1234567890 +0000",
    ))
    .unwrap();
    assert_eq!(
        sig.render("commit"),
        "Jane Q. Public jane@example.org commit timestamp: 2009-02-13 23:31:30 +00:00"
    );
}

#[test]
fn empty_email_is_allowed() {
    let sig = Signature::parse(BStr::new("nobody <> 0 +0000")).unwrap();
    assert!(sig.email.is_empty());
}

proptest! {
    #[test]
    fn offset_is_rendered_as_recorded(ts in 0i64..4_000_000_000, hours in 0i32..14, minutes in 0i32..60, negative: bool) {
        let sign = if negative { '-' } else { '+' };
        let raw = format!("{ts} {sign}{hours:02}{minutes:02}");
        let date = GitDate::parse_raw(&raw).unwrap();
        let rendered = date.format_iso_local();
        let expected_suffix = format!("{sign}{hours:02}:{minutes:02}");
        // chrono always renders a zero offset with a '+' sign
        if hours == 0 && minutes == 0 {
            prop_assert!(rendered.ends_with("+00:00"));
        } else {
            prop_assert!(rendered.ends_with(&expected_suffix), "{} vs {}", rendered, expected_suffix);
        }
    }
}
