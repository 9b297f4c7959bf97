use caret_diagnostics::{
    AnsiMode, CharSet, Color, Config, IndexUnit, Label, LabelAttach, Report, ReportKind,
    ReportStyle, SourceCache, Span,
};

use snapbox::{assert_data_eq, str};

fn cache() -> SourceCache {
    [("main.ts", "let a = 1;")].into_iter().collect()
}

fn plain() -> Config {
    Config::default().ansi_mode(AnsiMode::Off)
}

#[test]
fn basic_error_report() {
    let report = Report::new(Span::new("main.ts", 0, 10))
        .kind(ReportKind::Error)
        .message("syntax error")
        .label(
            Label::new(Span::new("main.ts", 4, 5))
                .unwrap()
                .message("here"),
        )
        .config(plain());

    let expected = str![[r#"
Error: syntax error
  ╭─[main.ts:1:1]
  │
1 │ let a = 1;
  │     ┬
  │     ╰──────────────────── here
──╯"#]];
    assert_data_eq!(report.render(&cache()).unwrap(), expected);
}

#[test]
fn ascii_charset() {
    let report = Report::new(Span::new("main.ts", 0, 10))
        .message("syntax error")
        .label(
            Label::new(Span::new("main.ts", 4, 5))
                .unwrap()
                .message("here"),
        )
        .config(plain().char_set(CharSet::Ascii));

    let expected = str![[r#"
Error: syntax error
  ,-[main.ts:1:1]
  |
1 | let a = 1;
  |     -
  |     `-------------------- here
--'"#]];
    assert_data_eq!(report.render(&cache()).unwrap(), expected);
}

#[test]
fn code_renders_in_brackets() {
    let report = Report::new(Span::new("main.ts", 0, 10))
        .code("E001")
        .message("syntax error")
        .config(plain());

    let expected = str![[r#"
Error[E001]: syntax error
  ╭─[main.ts:1:1]
  │
──╯"#]];
    assert_data_eq!(report.render(&cache()).unwrap(), expected);
}

#[test]
fn missing_code_and_message_render_empty() {
    let report = Report::new(Span::new("main.ts", 0, 10)).config(plain());
    let output = report.render(&cache()).unwrap();
    let header = output.lines().next().unwrap();
    // No "[...]" bracket, and never the literal "null".
    assert_eq!(header, "Error: ");
}

#[test]
fn labels_stack_by_order_then_line() {
    let report = Report::new(Span::new("main.ts", 0, 10))
        .message("syntax error")
        .label(
            Label::new(Span::new("main.ts", 0, 3))
                .unwrap()
                .message("kw")
                .order(1),
        )
        .label(
            Label::new(Span::new("main.ts", 8, 9))
                .unwrap()
                .message("value")
                .order(0),
        )
        .config(plain());

    let expected = str![[r#"
Error: syntax error
  ╭─[main.ts:1:1]
  │
1 │ let a = 1;
  │         ┬
  │         ╰──────────────── value
  │ ─┬─
  │  ╰─────────────────────── kw
──╯"#]];
    assert_data_eq!(report.render(&cache()).unwrap(), expected);
}

#[test]
fn distant_labeled_lines_are_elided() {
    let cache: SourceCache = [("many.ts", "a0\na1\na2\na3\na4")].into_iter().collect();
    let report = Report::new(Span::new("many.ts", 0, 2))
        .message("oops")
        .label(Label::new(Span::new("many.ts", 0, 2)).unwrap())
        .label(Label::new(Span::new("many.ts", 9, 11)).unwrap())
        .config(plain());

    let expected = str![[r#"
Error: oops
  ╭─[many.ts:1:1]
  │
1 │ a0
  │ ─┬
...
4 │ a3
  │ ─┬
──╯"#]];
    assert_data_eq!(report.render(&cache).unwrap(), expected);
}

#[test]
fn one_skipped_line_still_gets_a_marker() {
    // The adjacency rule: any gap in line indices greater than one
    // produces exactly one marker, so skipping a single unlabeled line
    // already elides.
    let cache: SourceCache = [("many.ts", "a0\na1\na2\na3\na4")].into_iter().collect();
    let report = Report::new(Span::new("many.ts", 0, 2))
        .message("oops")
        .label(Label::new(Span::new("many.ts", 0, 2)).unwrap())
        .label(Label::new(Span::new("many.ts", 6, 8)).unwrap())
        .config(plain());

    let expected = str![[r#"
Error: oops
  ╭─[many.ts:1:1]
  │
1 │ a0
  │ ─┬
...
3 │ a2
  │ ─┬
──╯"#]];
    assert_data_eq!(report.render(&cache).unwrap(), expected);
}

#[test]
fn adjacent_labeled_lines_are_not_elided() {
    let cache: SourceCache = [("many.ts", "a0\na1\na2\na3\na4")].into_iter().collect();
    let report = Report::new(Span::new("many.ts", 0, 2))
        .message("oops")
        .label(Label::new(Span::new("many.ts", 0, 2)).unwrap())
        .label(Label::new(Span::new("many.ts", 3, 5)).unwrap())
        .config(plain());

    let expected = str![[r#"
Error: oops
  ╭─[many.ts:1:1]
  │
1 │ a0
  │ ─┬
2 │ a1
  │ ─┬
──╯"#]];
    assert_data_eq!(report.render(&cache).unwrap(), expected);
}

#[test]
fn unresolvable_primary_span_degrades_to_placeholders() {
    let report = Report::new(Span::new("main.ts", 100, 105))
        .message("oops")
        .label(
            Label::new(Span::new("main.ts", 100, 105))
                .unwrap()
                .message("x"),
        )
        .config(plain());

    let expected = str![[r#"
Error: oops
  ╭─[main.ts:?:?]
  │
──╯"#]];
    assert_data_eq!(report.render(&cache()).unwrap(), expected);
}

#[test]
fn notes_and_help_keep_append_order() {
    let report = Report::new(Span::new("main.ts", 0, 10))
        .message("oops")
        .label(Label::new(Span::new("main.ts", 4, 5)).unwrap())
        .note("first note")
        .note("second note")
        .help("try removing it")
        .config(plain());

    let expected = str![[r#"
Error: oops
  ╭─[main.ts:1:1]
  │
1 │ let a = 1;
  │     ┬
──╯
note: first note
note: second note
help: try removing it"#]];
    assert_data_eq!(report.render(&cache()).unwrap(), expected);
}

#[test]
fn empty_source_still_renders_header_and_box() {
    let cache: SourceCache = [("empty.ts", "")].into_iter().collect();
    let report = Report::new(Span::new("empty.ts", 0, 0))
        .message("oops")
        .config(plain());

    let expected = str![[r#"
Error: oops
  ╭─[empty.ts:1:1]
  │
──╯"#]];
    assert_data_eq!(report.render(&cache).unwrap(), expected);
}

#[test]
fn zero_width_label_widens_to_one_column() {
    let report = Report::new(Span::new("main.ts", 0, 10))
        .message("oops")
        .label(
            Label::new(Span::new("main.ts", 4, 4))
                .unwrap()
                .message("here"),
        )
        .config(plain());

    let expected = str![[r#"
Error: oops
  ╭─[main.ts:1:1]
  │
1 │ let a = 1;
  │     ┬
  │     ╰──────────────────── here
──╯"#]];
    assert_data_eq!(report.render(&cache()).unwrap(), expected);
}

#[test]
fn attach_policy_moves_the_marker() {
    let render = |attach| {
        Report::new(Span::new("main.ts", 0, 10))
            .message("m")
            .label(
                Label::new(Span::new("main.ts", 4, 9))
                    .unwrap()
                    .message("rhs"),
            )
            .config(plain().label_attach(attach))
            .render(&cache())
            .unwrap()
    };
    assert!(render(LabelAttach::Start).contains("  │     ┬────"));
    assert!(render(LabelAttach::Middle).contains("  │     ──┬──"));
    assert!(render(LabelAttach::End).contains("  │     ────┬"));
}

#[test]
fn byte_and_char_units_resolve_the_same_line() {
    let cache: SourceCache = [("uni.ts", "héllo wörld")].into_iter().collect();
    // The same word addressed in both units: chars 6..11, bytes 7..13.
    let char_report = Report::new(Span::new("uni.ts", 6, 11))
        .message("m")
        .label(Label::new(Span::new("uni.ts", 6, 11)).unwrap())
        .config(plain());
    let byte_report = Report::new(Span::new("uni.ts", 7, 13))
        .message("m")
        .label(Label::new(Span::new("uni.ts", 7, 13)).unwrap())
        .config(plain().index_type(IndexUnit::Byte));

    let char_output = char_report.render(&cache).unwrap();
    let byte_output = byte_report.render(&cache).unwrap();
    // Same line, different column numbers for the same logical spot.
    assert!(char_output.contains("uni.ts:1:7"));
    assert!(byte_output.contains("uni.ts:1:8"));
    assert!(char_output.contains("1 │ héllo wörld"));
    assert!(byte_output.contains("1 │ héllo wörld"));
}

#[test]
fn display_line_offset_biases_printed_numbers() {
    let mut cache: SourceCache = [("off.ts", "let a = 1;")].into_iter().collect();
    cache.get_mut("off.ts").unwrap().set_display_line_offset(99);
    let report = Report::new(Span::new("off.ts", 0, 10))
        .message("oops")
        .label(
            Label::new(Span::new("off.ts", 4, 5))
                .unwrap()
                .message("here"),
        )
        .config(plain());

    let expected = str![[r#"
Error: oops
    ╭─[off.ts:100:1]
    │
100 │ let a = 1;
    │     ┬
    │     ╰──────────────────── here
────╯"#]];
    assert_data_eq!(report.render(&cache).unwrap(), expected);
}

#[test]
fn cross_file_labels_are_dropped() {
    let cache: SourceCache = [("a.ts", "let a = 1;"), ("b.ts", "let b = 2;")]
        .into_iter()
        .collect();
    let report = Report::new(Span::new("a.ts", 0, 10))
        .message("oops")
        .label(
            Label::new(Span::new("b.ts", 0, 5))
                .unwrap()
                .message("other file"),
        )
        .config(plain());
    let output = report.render(&cache).unwrap();
    assert!(!output.contains("other file"));
    assert!(!output.contains("let b = 2;"));
}

#[test]
fn multi_line_labels_are_dropped() {
    let cache: SourceCache = [("two.ts", "first\nsecond")].into_iter().collect();
    let report = Report::new(Span::new("two.ts", 0, 12))
        .message("oops")
        .label(
            Label::new(Span::new("two.ts", 3, 9))
                .unwrap()
                .message("spans lines"),
        )
        .config(plain());
    let output = report.render(&cache).unwrap();
    assert!(!output.contains("spans lines"));
}

#[test]
fn label_ending_on_a_line_boundary_stays_on_its_line() {
    // The span covers "first\n" exactly; the end boundary must not spill
    // onto the second line.
    let cache: SourceCache = [("two.ts", "first\nsecond")].into_iter().collect();
    let report = Report::new(Span::new("two.ts", 0, 6))
        .message("oops")
        .label(
            Label::new(Span::new("two.ts", 0, 6))
                .unwrap()
                .message("first line"),
        )
        .config(plain());
    let output = report.render(&cache).unwrap();
    assert!(output.contains("first line"));
    assert!(!output.contains("2 │"));
}

#[test]
fn unknown_source_id_is_fatal() {
    let report = Report::new(Span::new("ghost.ts", 0, 1)).message("oops");
    let err = report.render(&cache()).unwrap_err();
    assert_eq!(err.to_string(), "failed to fetch source 'ghost.ts'");
}

#[test]
fn detached_span_resolves_against_the_unknown_placeholder() {
    let cache: SourceCache = [("<unknown>", "let a = 1;")].into_iter().collect();
    let report = Report::new(Span::detached(0, 10))
        .message("oops")
        .config(plain());
    let output = report.render(&cache).unwrap();
    assert!(output.contains("<unknown>:1:1"));
}

#[test]
fn rendering_is_deterministic_and_repeatable() {
    let report = Report::new(Span::new("main.ts", 0, 10))
        .message("syntax error")
        .label(
            Label::new(Span::new("main.ts", 4, 5))
                .unwrap()
                .message("here"),
        );
    let cache = cache();
    let first = report.render(&cache).unwrap();
    let second = report.render(&cache).unwrap();
    assert_eq!(first, second);
}

#[test]
fn ansi_off_output_has_no_escapes() {
    let report = Report::new(Span::new("main.ts", 0, 10))
        .message("syntax error")
        .label(
            Label::new(Span::new("main.ts", 4, 5))
                .unwrap()
                .message("here")
                .color(Color::RED),
        )
        .config(Config::default().ansi_mode(AnsiMode::Off));
    let output = report.render(&cache()).unwrap();
    assert!(!output.contains('\u{1b}'));
}

#[test]
fn ansi_on_keeps_label_and_margin_colors() {
    let report = Report::new(Span::new("main.ts", 0, 10))
        .message("syntax error")
        .label(
            Label::new(Span::new("main.ts", 4, 5))
                .unwrap()
                .message("here")
                .color(Color::RED),
        );
    let output = report.render(&cache()).unwrap();
    // Kind color on the header, label color on the underline.
    assert!(output.contains("\u{1b}[31mError\u{1b}[0m: syntax error"));
    assert!(output.contains("\u{1b}[31m┬\u{1b}[0m"));
    // Margin glyphs carry the fixed margin color.
    assert!(output.contains("\u{1b}[38;5;246m"));
}

#[test]
fn fixed_kinds_color_even_when_color_is_off() {
    // Only ANSI mode forces plain text; the color toggle gates labels,
    // margins, and custom styles, not the fixed kind names.
    let report = Report::new(Span::new("main.ts", 0, 10))
        .message("oops")
        .config(Config::default().color(false));
    let output = report.render(&cache()).unwrap();
    assert!(output.starts_with("\u{1b}[31mError\u{1b}[0m: oops"));
    assert!(!output.contains("\u{1b}[38;5;246m"));
}

#[test]
fn custom_style_color_is_gated_on_the_color_toggle() {
    let styled = Report::new(Span::new("main.ts", 0, 10))
        .kind(ReportStyle::custom("Deprecation", Color::CYAN))
        .message("old API");
    let colored = styled.clone().render(&cache()).unwrap();
    assert!(colored.starts_with("\u{1b}[36mDeprecation\u{1b}[0m: old API"));

    let plain = styled
        .config(Config::default().color(false))
        .render(&cache())
        .unwrap();
    assert!(plain.starts_with("Deprecation: old API"));
}

#[test]
fn plain_style_never_colors() {
    let report = Report::new(Span::new("main.ts", 0, 10))
        .kind("Nit")
        .message("tiny thing");
    let output = report.render(&cache()).unwrap();
    assert!(output.starts_with("Nit: tiny thing"));
}

#[test]
fn warning_and_advice_kinds_use_their_palette() {
    let warn = Report::new(Span::new("main.ts", 0, 10))
        .kind(ReportKind::Warning)
        .message("w")
        .render(&cache())
        .unwrap();
    assert!(warn.starts_with("\u{1b}[33mWarning\u{1b}[0m: w"));

    let advice = Report::new(Span::new("main.ts", 0, 10))
        .kind(ReportKind::Advice)
        .message("a")
        .render(&cache())
        .unwrap();
    assert!(advice.starts_with("\u{1b}[38;5;147mAdvice\u{1b}[0m: a"));
}

#[test]
fn trailing_whitespace_is_trimmed_from_source_rows() {
    let cache: SourceCache = [("ws.ts", "let a = 1;   \nnext")].into_iter().collect();
    let report = Report::new(Span::new("ws.ts", 0, 10))
        .message("oops")
        .label(Label::new(Span::new("ws.ts", 4, 5)).unwrap())
        .config(plain());
    let output = report.render(&cache).unwrap();
    assert!(output.contains("1 │ let a = 1;\n"));
}
