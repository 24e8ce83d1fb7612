//! E2E tests for the editor layout pipeline.
//!
//! Run with:
//!   cargo test --test `e2e_layout` -- --nocapture
//!
//! Library log records are forwarded to `tracing` so adjustments (clamped
//! widths, moved separators) show up next to the test output.

use std::sync::{Mutex, PoisonError};

use fixedtext::{Alignment, END, Editor, LogLevel, Options, set_log_callback};
use tracing::{Level, debug, error, info, span, warn};
use unicode_normalization::UnicodeNormalization;

static RECORDS: Mutex<Vec<String>> = Mutex::new(Vec::new());

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_test_writer()
        .try_init();

    set_log_callback(|level, message| {
        match level {
            LogLevel::Debug => debug!(target: "fixedtext", "{message}"),
            LogLevel::Info => info!(target: "fixedtext", "{message}"),
            LogLevel::Warn => warn!(target: "fixedtext", "{message}"),
            LogLevel::Error => error!(target: "fixedtext", "{message}"),
        }
        RECORDS
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    });
}

fn logged(needle: &str) -> bool {
    RECORDS
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .any(|record| record.contains(needle))
}

fn lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn e2e_wrap_to_25() {
    init_logging();
    let span = span!(Level::INFO, "e2e_wrap_to_25");
    let _enter = span.enter();

    let text = Editor::new("Your name is VRISKA SERKET. You are a master of EXTREME ROLEPLAYING.")
        .wrap(25)
        .into_string();
    info!(%text, "wrapped");
    assert_eq!(
        lines(&text),
        vec!["Your name is VRISKA", "SERKET. You are a master", "of EXTREME ROLEPLAYING."]
    );
}

#[test]
fn e2e_wrap_counts_graphemes_not_code_points() {
    init_logging();
    let nfc = "My fianc\u{e9}e and I went to the bistro";
    let nfd: String = nfc.nfd().collect();
    assert_ne!(nfc.chars().count(), nfd.chars().count());

    let wrapped_nfc = Editor::new(nfc).wrap(10).into_string();
    let wrapped_nfd = Editor::new(nfd.as_str()).wrap(10).into_string();
    debug!(%wrapped_nfc, %wrapped_nfd, "wrapped both forms");

    assert_eq!(lines(&wrapped_nfc), vec!["My fianc\u{e9}e", "and I went", "to the", "bistro"]);
    let recomposed: Vec<String> = lines(&wrapped_nfd).iter().map(|l| l.nfc().collect()).collect();
    assert_eq!(recomposed, lines(&wrapped_nfc));
}

#[test]
fn e2e_wrap_hangul_and_emoji() {
    init_logging();
    let syllables = "\u{AC00}\u{B098}\u{B2E4} \u{B77C}\u{B9C8}\u{BC14} \u{C0AC}\u{C544}\u{C790}";
    let jamo: String = syllables.nfd().collect();
    let precomposed = Editor::new(syllables).wrap(7).into_string();
    let decomposed = Editor::new(jamo.as_str()).wrap(7).into_string();
    assert_eq!(lines(&precomposed).len(), 2);
    let recomposed: String = decomposed.nfc().collect();
    assert_eq!(recomposed, precomposed);

    let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467} family \u{1F44D}\u{1F3FB} ok";
    let text = Editor::new(family).wrap(8).into_string();
    assert_eq!(
        lines(&text),
        vec!["\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467} family", "\u{1F44D}\u{1F3FB} ok"]
    );
}

#[test]
fn e2e_justify_to_60() {
    init_logging();
    let text = Editor::new("Some words that will have spacing justified.")
        .justify(60)
        .into_string();
    assert_eq!(text, "Some    words   that    will    have   spacing    justified.");
    assert_eq!(text.chars().count(), 60);
}

#[test]
fn e2e_center_to_45() {
    init_logging();
    let text = Editor::new("Your name is TEREZI PYROPE.").center(45).into_string();
    assert_eq!(text.len(), 45);
    assert!(text.starts_with(&format!("{}Y", " ".repeat(9))));
    assert!(text.ends_with(&format!(".{}", " ".repeat(9))));

    let text = Editor::new("cafe\u{0301}").align(Alignment::Center, 8).into_string();
    assert_eq!(text, "  cafe\u{0301}  ");
}

#[test]
fn e2e_sub_editor_indent() {
    init_logging();
    let text = Editor::new("Hello, World!").chars(5, 7).indent(1).commit();
    assert_eq!(text.text(), "Hello\t, World!");
    assert!(!text.is_sub_editor());
}

#[test]
fn e2e_paragraph_ambiguity() {
    init_logging();
    let mut seen = Vec::new();
    let text = Editor::new("a\n\n\nb").apply_paragraphs(|_, para, _, _| {
        seen.push(para.to_string());
        vec![para.to_string()]
    });
    assert_eq!(seen, vec!["a\n", "b"]);
    assert_eq!(text.text(), "a\n\n\nb");
    assert!(logged("line separator moved from paragraph 1 to 0"));
}

#[test]
fn e2e_paragraph_fragments() {
    init_logging();
    let opts = Options::default()
        .with_paragraph_separator("</p>\n<p>")
        .with_line_separator("\n");
    let mut fragments = Vec::new();
    let text = Editor::new("<p>one</p>\n<p>two</p>")
        .with_options(opts)
        .apply_paragraphs(|i, para, prefix, suffix| {
            fragments.push((i, prefix.to_string(), suffix.to_string()));
            vec![para.to_uppercase()]
        });
    assert_eq!(text.text(), "<P>ONE</p>\n<p>TWO</P>");
    assert_eq!(
        fragments,
        vec![
            (0, String::new(), "</p>".to_string()),
            (1, "<p>".to_string(), String::new()),
        ]
    );
}

// ============================================================================
// Operation chains
// ============================================================================

#[test]
fn e2e_indent_mixed_separators() {
    init_logging();
    let input = "here is a custom multi-line with unique break,<br/>normal break\n\
                 folded with custom parasep break<p>\n\
                 and a normal para end\n\n\
                 with some more breaks\n\
                 and another<p>custom line end folded with custom parasep<p><p>a third possible para\n\n\
                 finally a completely<p>unique para end<para>\n\
                 and some text<br/>to break things up\n";
    let expected = ">here is a custom multi-line with unique break,<br/>normal break\n\
                    >folded with custom parasep break<p>\n\
                    >and a normal para end\n>\n\
                    >with some more breaks\n\
                    >and another<p>custom line end folded with custom parasep<p><p>a third possible para\n>\n\
                    >finally a completely<p>unique para end<para>\n\
                    >and some text<br/>to break things up\n";
    let opts = Options::default().with_indent_str(">");
    assert_eq!(Editor::new(input).indent_opts(1, &opts).text(), expected);
    assert_eq!(Editor::new(input).with_options(opts).indent(1).text(), expected);
}

#[test]
fn e2e_wrap_then_indent_paragraphs() {
    init_logging();
    let opts = Options::default()
        .with_preserve_paragraphs(true)
        .with_indent_str("  ");
    let text = Editor::new("this is a line that is split by paragraph in the input.\n\nThis is the second paragraph.\n\nAnd this is the third")
        .with_options(opts)
        .wrap(20)
        .indent(1)
        .into_string();
    assert_eq!(
        lines(&text),
        vec![
            "  this is a line that",
            "  is split by",
            "  paragraph in the",
            "  input.",
            "",
            "  This is the second",
            "  paragraph.",
            "",
            "  And this is the",
            "  third",
        ]
    );
}

#[test]
fn e2e_edit_middle_lines() {
    init_logging();
    let doc = "Title\nfirst body line that is long\nsecond body line\nFooter\n";
    let text = Editor::new(doc)
        .lines(1, 3)
        .wrap(12)
        .indent(1)
        .commit()
        .lines_from(-1)
        .align(Alignment::Right, 10)
        .into_string();
    assert_eq!(
        text,
        "Title\n\tfirst body\n\tline that is\n\tlong second\n\tbody line\n    Footer\n"
    );
}

#[test]
fn e2e_overtype_and_delete_clusters() {
    init_logging();
    let text = Editor::new("na\u{EF}ve caf\u{E9} \u{1F1FA}\u{1F1F8}")
        .overtype(2, "i")
        .delete(-2, END)
        .insert(END, "!")
        .into_string();
    assert_eq!(text, "naive caf\u{E9}!");
}

// ============================================================================
// Columns and tables
// ============================================================================

#[test]
fn e2e_two_columns_into_document() {
    init_logging();
    let text = Editor::new("Intro\n")
        .insert_two_columns(END, "left side text here", "right side", 3, 23, 0.5)
        .into_string();
    assert_eq!(text, "Intro\nleft side    right side\ntext here    \n");
}

#[test]
fn e2e_two_columns_narrow_width_clamps() {
    init_logging();
    let text = Editor::new("")
        .insert_two_columns(0, "ab", "cd", 1, 0, 0.5)
        .into_string();
    assert_eq!(text, "ab cd\n");
    assert!(logged("left column width 0 below minimum; using 2"));
}

#[test]
fn e2e_definitions_table() {
    init_logging();
    let defs = [
        ("wrap", "break text into lines no wider than a given width"),
        ("justify", "pad the gaps so every line fills the width"),
    ];
    let text = Editor::new("")
        .insert_definitions_table(0, &defs, 40)
        .into_string();
    let hang = " ".repeat(10);
    assert_eq!(
        lines(&text),
        vec![
            "\twrap     break text into lines no wider".to_string(),
            format!("{hang}than a given width"),
            "\tjustify  pad the gaps so every line".to_string(),
            format!("{hang}fills the width"),
            String::new(),
        ]
    );
}

#[test]
fn e2e_table_widened_to_fit() {
    init_logging();
    let table = vec![vec!["left", "right"]];
    let text = Editor::new("").insert_table(0, &table, 3).into_string();
    assert_eq!(text, "left  right\n");
    assert!(logged("table width 3 below minimum 11; using minimum"));
}

#[test]
fn e2e_table_counts_clusters() {
    init_logging();
    let table = vec![vec!["cafe\u{0301}", "x"], vec!["tea", "\u{1F375}"]];
    let opts = Options::default().with_table_borders(true);
    let text = Editor::new("")
        .with_options(opts)
        .insert_table(0, &table, 0)
        .into_string();
    assert_eq!(
        lines(&text),
        vec![
            "+------+---+",
            "| cafe\u{0301} | x |",
            "| tea  | \u{1F375} |",
            "+------+---+",
            "",
        ]
    );
}

#[test]
fn e2e_table_short_char_set_is_padded() {
    init_logging();
    let table = vec![vec!["x"]];
    let opts = Options::default()
        .with_table_borders(true)
        .with_table_char_set("#");
    let text = Editor::new("")
        .with_options(opts)
        .insert_table(0, &table, 0)
        .into_string();
    assert_eq!(text, "#|||#\n+ x +\n#|||#\n");
}

#[test]
fn e2e_wrap_width_clamp_is_logged() {
    init_logging();
    let text = Editor::new("abc").wrap(1).into_string();
    assert_eq!(lines(&text), vec!["a-", "bc"]);
    assert!(logged("wrap width 1 below minimum; using 2"));
}
