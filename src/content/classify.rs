//! Filename classification for the posts and drafts areas.
//!
//! Pure and total: any filename maps to `Post`, `Draft`, or `Unrecognized`.
//! A name that matches the date-prefixed shape but carries an impossible
//! calendar date is logged and degrades to `Unrecognized`; classification
//! never fails and never reads file contents.

use crate::tree::FileNode;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// `YYYY-MM-DD-title.ext`; the title segment may itself contain dashes.
static POST_FILENAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})-(.+)\..+$").expect("valid post filename regex")
});

/// `title.ext`; so permissive it is only applied inside the drafts area.
static DRAFT_FILENAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+)\..+$").expect("valid draft filename regex"));

const EXTENSION: &str = "md";

/// A classified entry in the posts area. The embedded date is the sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub title: String,
    pub date: NaiveDate,
    pub file: FileNode,
}

/// A classified entry in the drafts area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub file: FileNode,
}

/// Which well-known area a file was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    Posts,
    Drafts,
}

/// Outcome of classifying one filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Post(Post),
    Draft(Draft),
    Unrecognized,
}

/// Classify a file by the area it lives in.
pub fn classify(file: &FileNode, area: Area) -> Classification {
    match area {
        Area::Posts => match parse_post(file) {
            Some(post) => Classification::Post(post),
            None => Classification::Unrecognized,
        },
        Area::Drafts => match parse_draft(file) {
            Some(draft) => Classification::Draft(draft),
            None => Classification::Unrecognized,
        },
    }
}

/// Try reading a file as a post. Non-membership is `None`.
pub fn parse_post(file: &FileNode) -> Option<Post> {
    let name = file.name();
    let captures = POST_FILENAME.captures(name)?;

    // Two- and four-digit fields always fit; validity is a calendar question.
    let year: i32 = captures[1].parse().ok()?;
    let month: u32 = captures[2].parse().ok()?;
    let day: u32 = captures[3].parse().ok()?;
    let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
        tracing::warn!(
            filename = name,
            "date-shaped filename has no valid calendar date"
        );
        return None;
    };

    Some(Post {
        title: format_title(&captures[4]),
        date,
        file: file.clone(),
    })
}

/// Try reading a file as a draft. Non-membership is `None`.
pub fn parse_draft(file: &FileNode) -> Option<Draft> {
    let captures = DRAFT_FILENAME.captures(file.name())?;
    Some(Draft {
        title: format_title(&captures[1]),
        file: file.clone(),
    })
}

/// Filename segment to human-readable title: dashes become spaces, the
/// result is trimmed and its first character uppercased.
///
/// Lossy by design: a dash that was literally part of the intended title is
/// indistinguishable from a word separator, and casing is not preserved.
pub fn format_title(segment: &str) -> String {
    let spaced = segment.replace('-', " ");
    let trimmed = spaced.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Draft filename for a title: spaces become dashes, `.md` appended.
pub fn draft_filename(title: &str) -> String {
    format!("{}.{}", title.replace(' ', "-"), EXTENSION)
}

/// Post filename for a title on a given date. An empty title produces no
/// extra dash after the date prefix.
pub fn post_filename(title: &str, date: NaiveDate) -> String {
    if title.is_empty() {
        format!("{}.{}", date.format("%Y-%m-%d"), EXTENSION)
    } else {
        format!("{}-{}", date.format("%Y-%m-%d"), draft_filename(title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn file(name: &str) -> FileNode {
        FileNode::new(format!("_posts/{}", name))
    }

    #[test]
    fn valid_post_filename_yields_date_and_title() {
        let post = parse_post(&file("2016-03-21-my-first-post.md")).unwrap();
        assert_eq!(post.date, NaiveDate::from_ymd_opt(2016, 3, 21).unwrap());
        assert_eq!(post.title, "My first post");
        assert_eq!(post.file.name(), "2016-03-21-my-first-post.md");
    }

    #[test]
    fn post_title_may_contain_dots() {
        let post = parse_post(&file("2016-03-21-version-2.0-released.md")).unwrap();
        assert_eq!(post.title, "Version 2.0 released");
    }

    #[test]
    fn shapeless_names_are_not_posts() {
        assert!(parse_post(&file("notes.md")).is_none());
        assert!(parse_post(&file("2016-03-21.md")).is_none());
        assert!(parse_post(&file("16-03-21-too-short.md")).is_none());
        assert!(parse_post(&file("noextension")).is_none());
    }

    #[test]
    fn impossible_calendar_dates_degrade_to_non_membership() {
        assert!(parse_post(&file("2016-13-01-bad-month.md")).is_none());
        assert!(parse_post(&file("2016-02-30-bad-day.md")).is_none());
        assert!(parse_post(&file("2016-00-10-zero-month.md")).is_none());
    }

    #[test]
    fn draft_grammar_accepts_any_name_with_an_extension() {
        let draft = parse_draft(&FileNode::new("_drafts/my-idea.md")).unwrap();
        assert_eq!(draft.title, "My idea");
        assert!(parse_draft(&FileNode::new("_drafts/noextension")).is_none());
    }

    #[test]
    fn classify_is_area_sensitive() {
        let dated = FileNode::new("_x/2016-03-21-a-post.md");
        assert!(matches!(classify(&dated, Area::Posts), Classification::Post(_)));
        assert!(matches!(
            classify(&dated, Area::Drafts),
            Classification::Draft(_)
        ));

        let plain = FileNode::new("_x/idea.md");
        assert!(matches!(
            classify(&plain, Area::Posts),
            Classification::Unrecognized
        ));
        assert!(matches!(
            classify(&plain, Area::Drafts),
            Classification::Draft(_)
        ));
    }

    #[test]
    fn format_title_replaces_dashes_trims_and_capitalizes() {
        assert_eq!(format_title("my-first-post"), "My first post");
        assert_eq!(format_title("-leading-dash"), "Leading dash");
        assert_eq!(format_title("already Upper"), "Already Upper");
        assert_eq!(format_title(""), "");
        assert_eq!(format_title("---"), "");
    }

    #[test]
    fn draft_filename_replaces_spaces() {
        assert_eq!(draft_filename("My Title"), "My-Title.md");
        assert_eq!(draft_filename("one"), "one.md");
    }

    #[test]
    fn post_filename_prefixes_the_date() {
        let date = NaiveDate::from_ymd_opt(2020, 5, 4).unwrap();
        assert_eq!(post_filename("My Title", date), "2020-05-04-My-Title.md");
        assert_eq!(post_filename("", date), "2020-05-04.md");
    }

    // The title round trip is lossy on purpose: literal dashes and irregular
    // casing are not reproduced.
    #[test]
    fn title_round_trip_is_lossy() {
        let original = "state-of-the-art";
        let reparsed = parse_draft(&FileNode::new(draft_filename(original))).unwrap();
        assert_eq!(reparsed.title, "State of the art");
    }

    proptest! {
        #[test]
        fn classify_is_total_over_arbitrary_filenames(name in ".*") {
            let node = FileNode::new(name);
            let _ = classify(&node, Area::Posts);
            let _ = classify(&node, Area::Drafts);
        }
    }
}
