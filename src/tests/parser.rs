use super::Parser;
use crate::config::Config;

const DARING_FIREBALL: &str = r#"
Markdown
========

Download
--------

[Markdown 1.0.1][dl] (18 KB) -- 17 Dec 2004

[dl]: http://daringfireball.net/projects/downloads/Markdown_1.0.1.zip


Introduction
------------

Markdown is a text-to-HTML conversion tool for web writers. Markdown
allows you to write using an easy-to-read, easy-to-write plain text
format, then convert it to structurally valid XHTML (or HTML).

Thus, "Markdown" is two things: (1) a plain text formatting syntax;
and (2) a software tool, written in Perl, that converts the plain text
formatting to HTML. See the [Syntax][] page for details pertaining to
Markdown's formatting syntax. You can try it out, right now, using the
online [Dingus][].

  [syntax]: /projects/markdown/syntax
  [dingus]: /projects/markdown/dingus
"#;

#[test]
fn test_parse() {
    let mut parser = Parser::new();
    let tree = parser.parse(DARING_FIREBALL);

    assert_eq!(tree.sections.len(), 1);
    assert_eq!(tree.sections[0].title, "Markdown");

    let subsections = &tree.sections[0].subsections;
    assert_eq!(subsections.len(), 2);
    assert_eq!(subsections[0].title, "Download");
    assert_eq!(subsections[1].title, "Introduction");

    assert_eq!(
        subsections[0].paragraphs,
        vec![
            "[Markdown 1.0.1][dl] (18 KB) -- 17 Dec 2004",
            "[dl]: http://daringfireball.net/projects/downloads/Markdown_1.0.1.zip",
        ]
    );
    assert_eq!(subsections[1].paragraphs.len(), 3);
    assert!(subsections[1].paragraphs[0].starts_with("Markdown is"));
    assert!(subsections[1].paragraphs[1].starts_with("Thus,"));
    assert_eq!(
        subsections[1].paragraphs[2],
        "  [syntax]: /projects/markdown/syntax\n  [dingus]: /projects/markdown/dingus"
    );
}

#[test]
fn test_paragraph_keeps_internal_newlines() {
    let mut parser = Parser::new();
    let tree = parser.parse(DARING_FIREBALL);

    let intro = tree
        .section("Markdown")
        .and_then(|s| s.subsection("Introduction"))
        .unwrap();
    assert_eq!(intro.paragraphs[0].lines().count(), 3);
    assert_eq!(
        intro.paragraphs[0].lines().nth(2),
        Some("format, then convert it to structurally valid XHTML (or HTML).")
    );
}

#[test]
fn test_parse_section_only() {
    let mut parser = Parser::new();
    let tree = parser.parse("\nMarkdown\n========\n");

    assert_eq!(tree.sections.len(), 1);
    assert!(tree.sections[0].subsections.is_empty());
}

#[test]
fn test_parse_section_and_subsections_only() {
    let mut parser = Parser::new();
    let tree = parser.parse(
        "\nMarkdown\n========\n\nDownload\n--------\n\n\n\nIntroduction\n------------\n",
    );

    assert_eq!(tree.sections.len(), 1);
    assert_eq!(tree.sections[0].subsections.len(), 2);
    assert_eq!(tree.paragraph_count(), 0);
}

#[test]
fn test_missing_section_is_synthesised() {
    let mut parser = Parser::new();
    let tree = parser.parse("\nDownload\n--------\n\n\nIntroduction\n------------\n");

    assert_eq!(tree.sections.len(), 1);
    assert_eq!(tree.sections[0].title, "untitled");
    let titles: Vec<&str> = tree.sections[0]
        .subsections
        .iter()
        .map(|s| s.title.as_str())
        .collect();
    assert_eq!(titles, ["Download", "Introduction"]);
}

#[test]
fn test_default_section_title_from_config() {
    let config = Config {
        default_section_title: "document".to_string(),
        ..Config::default()
    };
    let mut parser = Parser::with_config(config);
    let tree = parser.parse("Download\n--------\n");

    assert_eq!(tree.sections[0].title, "document");
}

#[test]
fn test_no_headers_gives_empty_tree() {
    let mut parser = Parser::new();
    let tree = parser.parse("just some prose\nwith no headings\n\nat all\n");

    assert!(tree.is_empty());
}

#[test]
fn test_empty_input() {
    let mut parser = Parser::new();
    assert!(parser.parse("").is_empty());
}

#[test]
fn test_repeated_section_within_one_text() {
    let mut parser = Parser::new();
    let tree = parser.parse(
        "
Category A
==========

Item 1
------

First.

Category B
==========

Item 2
------

Second.

Category A
==========

Item 3
------

Third.

",
    );

    let titles: Vec<&str> = tree.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["Category A", "Category B"]);

    let a = tree.section("Category A").unwrap();
    assert_eq!(a.subsections.len(), 2);
    assert_eq!(a.subsections[0].title, "Item 1");
    assert_eq!(a.subsections[1].title, "Item 3");
    assert_eq!(a.subsections[1].paragraphs, ["Third."]);
}

#[test]
fn test_reparse_merges_into_same_nodes() {
    let mut parser = Parser::new();
    parser.parse("Notes\n=====\n\nToday\n-----\n\nfirst entry\n\n");
    let tree = parser.parse("Notes\n=====\n\nToday\n-----\n\nsecond entry\n\n");

    assert_eq!(tree.sections.len(), 1);
    assert_eq!(tree.sections[0].subsections.len(), 1);
    assert_eq!(
        tree.sections[0].subsections[0].paragraphs,
        ["first entry", "second entry"]
    );
}

#[test]
fn test_reparse_appends_new_subsections_in_call_order() {
    let mut parser = Parser::new();
    parser.parse("Notes\n=====\n\nMonday\n------\n\na\n\n");
    let tree = parser.parse("Notes\n=====\n\nTuesday\n-------\n\nb\n\n");

    let notes = tree.section("Notes").unwrap();
    let titles: Vec<&str> = notes.subsections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["Monday", "Tuesday"]);
}

#[test]
fn test_titles_are_case_sensitive() {
    let mut parser = Parser::new();
    let tree = parser.parse("Notes\n=====\n\nnotes\n=====\n");

    assert_eq!(tree.sections.len(), 2);
}

#[test]
fn test_multiple_blank_lines_do_not_create_empty_paragraphs() {
    let mut parser = Parser::new();
    let tree = parser.parse("A\n===\n\nB\n---\n\none\n\n\n   \n\ntwo\n\n\n");

    let paragraphs = &tree.sections[0].subsections[0].paragraphs;
    assert_eq!(paragraphs, &["one", "two"]);
}

#[test]
fn test_header_lines_never_in_paragraphs() {
    let mut parser = Parser::new();
    let tree = parser.parse("A\n===\n\nB\n---\n\nprose\nC\n---\n\nmore\n\nD\n=====\n\n");

    for section in &tree.sections {
        for sub in &section.subsections {
            for paragraph in &sub.paragraphs {
                assert!(!paragraph.contains("---"), "rule in {paragraph:?}");
                assert!(!paragraph.contains("==="), "rule in {paragraph:?}");
                assert!(!paragraph.lines().any(|l| l == "C" || l == "D"));
            }
        }
    }
    // "prose" was still open when C's rule arrived, so it is flushed under C.
    let b = tree.sections[0].subsection("B").unwrap();
    let c = tree.sections[0].subsection("C").unwrap();
    assert!(b.paragraphs.is_empty());
    assert_eq!(c.paragraphs, ["prose", "more"]);
}

#[test]
fn test_unterminated_trailing_paragraph_is_dropped() {
    let mut parser = Parser::new();
    let tree = parser.parse("A\n===\n\nB\n---\n\nkept\n\nlost");

    assert_eq!(tree.sections[0].subsections[0].paragraphs, ["kept"]);
}

#[test]
fn test_flush_trailing_paragraph_option() {
    let config = Config {
        flush_trailing_paragraph: true,
        ..Config::default()
    };
    let mut parser = Parser::with_config(config);
    let tree = parser.parse("A\n===\n\nB\n---\n\nkept\n\nalso kept");

    assert_eq!(
        tree.sections[0].subsections[0].paragraphs,
        ["kept", "also kept"]
    );
}

#[test]
fn test_short_runs_are_prose() {
    let mut parser = Parser::new();
    let tree = parser.parse("A\n===\n\nB\n---\n\nnot a rule\n--\n==\n\n");

    assert_eq!(tree.sections.len(), 1);
    assert_eq!(tree.sections[0].subsections.len(), 1);
    assert_eq!(
        tree.sections[0].subsections[0].paragraphs,
        ["not a rule\n--\n=="]
    );
}

#[test]
fn test_min_rule_length_from_config() {
    let config = Config {
        min_rule_length: 5,
        ..Config::default()
    };
    let mut parser = Parser::with_config(config);
    let tree = parser.parse("Title\n=====\n\nSub\n-----\n\nbody\n---\n\n");

    assert_eq!(tree.sections[0].title, "Title");
    assert_eq!(tree.sections[0].subsections.len(), 1);
    assert_eq!(tree.sections[0].subsections[0].paragraphs, ["body\n---"]);
}

#[test]
fn test_rule_on_first_line_has_empty_title() {
    let mut parser = Parser::new();
    let tree = parser.parse("===\n");

    assert_eq!(tree.sections.len(), 1);
    assert_eq!(tree.sections[0].title, "");
}

#[test]
fn test_rule_after_lone_blank_does_not_panic() {
    let mut parser = Parser::new();
    parser.parse("A\n===\n\nB\n---\n\n");
    let tree = parser.parse("\n---\n\ntext\n\n");

    // The title of the second rule is the blank line above it.
    let a = tree.section("A").unwrap();
    assert_eq!(a.subsections.len(), 2);
    assert_eq!(a.subsections[1].title, "");
    assert_eq!(a.subsections[1].paragraphs, ["text"]);
}

#[test]
fn test_new_section_keeps_previous_subsection_cursor() {
    let mut parser = Parser::new();
    let tree = parser.parse("A\n===\n\nS\n---\n\none\n\nB\n===\n\ntwo\n\n");

    assert_eq!(tree.sections.len(), 2);
    assert!(tree.sections[1].subsections.is_empty());
    assert_eq!(tree.sections[0].subsections[0].paragraphs, ["one", "two"]);
}

#[test]
fn test_export_uses_own_tree() {
    let text = "Markdown\n========\n\nIntro\n-----\n\nHello.\n";
    let mut parser = Parser::new();
    parser.parse(text);

    assert_eq!(parser.export(), text);
    assert_eq!(parser.into_tree().sections[0].title, "Markdown");
}
