//! The layout algorithm: one report plus one source cache in, the final
//! annotated text out.

use caret_source_file::{Source, SourceCache, SourceNotFound};

use crate::config::{AnsiMode, LabelAttach};
use crate::draw::{Color, fg, margin_color, note_color, strip_ansi};
use crate::report::Report;

/// The fixed virtual column label messages start at, so unrelated
/// diagnostics visually align.
const MESSAGE_COLUMN: usize = 25;

/// Consecutive labeled lines whose index gap exceeds this get a single
/// elision marker between them; adjacent lines get nothing.
const ELISION_GAP: usize = 1;

const ELISION_MARKER: &str = "...";

/// Rendering failed outright; no partial output is produced.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error(transparent)]
    SourceNotFound(#[from] SourceNotFound),
}

/// A label projected onto one source line.
///
/// Computed fresh on every render: the projection depends on the
/// report's config (index unit, attach policy), which may change
/// between renders of the same report.
struct LabelLineInfo<'a> {
    line_index: usize,
    start_col: usize,
    end_col: usize,
    attach_col: usize,
    message: Option<&'a str>,
    order: i32,
    color: Option<Color>,
}

fn attach_column(start_col: usize, end_col: usize, attach: LabelAttach) -> usize {
    match attach {
        LabelAttach::Start => start_col,
        LabelAttach::End => end_col.saturating_sub(1).max(start_col),
        LabelAttach::Middle => (start_col + end_col) / 2,
    }
}

/// A bar of `len` line glyphs with the marker glyph at `marker_index`,
/// clamped into the bar.
fn underline_with_marker(len: usize, marker_index: usize, bar: char, marker: char) -> String {
    if len == 0 {
        return String::new();
    }
    let mut glyphs = vec![bar; len];
    glyphs[marker_index.min(len - 1)] = marker;
    glyphs.into_iter().collect()
}

fn project_labels<'a>(report: &'a Report, source: &Source) -> Vec<LabelLineInfo<'a>> {
    let unit = report.config.index_type;
    let mut infos = Vec::with_capacity(report.labels.len());

    for label in &report.labels {
        // One render call annotates exactly one file.
        if label.span.source_id != report.span.source_id {
            tracing::trace!(
                label = ?label.span,
                "dropping label pointing at a different source"
            );
            continue;
        }
        let start = source.line_at(label.span.start, unit);
        // The end boundary resolves inside the range so a span ending
        // exactly on a line boundary stays on its own line.
        let end = source.line_at(label.span.end.saturating_sub(1).max(label.span.start), unit);
        let (Some(start), Some(end)) = (start, end) else {
            tracing::trace!(label = ?label.span, "dropping label past the end of the source");
            continue;
        };
        if start.index != end.index {
            tracing::trace!(label = ?label.span, "dropping multi-line label");
            continue;
        }

        let start_col = start.column;
        // Zero-width spans widen to one column before the attach column
        // is computed.
        let end_col = (label.span.end - start.line.offset(unit)).max(start_col + 1);
        infos.push(LabelLineInfo {
            line_index: start.index,
            start_col,
            end_col,
            attach_col: attach_column(start_col, end_col, report.config.label_attach),
            message: label.message.as_deref(),
            order: label.order,
            color: label.color,
        });
    }

    // Stable order: drives both vertical stacking on a line and the
    // overall rendering sequence.
    infos.sort_by_key(|info| (info.order, info.line_index));
    infos
}

pub(crate) fn render_report(report: &Report, cache: &SourceCache) -> Result<String, RenderError> {
    let source_id = report.span.source_id.as_deref().unwrap_or("<unknown>");
    let _span = tracing::trace_span!("render_report", source = source_id).entered();

    let source = cache.fetch(source_id)?;
    let config = &report.config;
    let draw = config.char_set.characters();
    let is_color = config.color;
    let unit = config.index_type;

    // Primary location; an unresolvable offset degrades to "?" rather
    // than aborting.
    let primary = source.line_at(report.span.start, unit);
    let line_no = primary.map_or_else(
        || "?".to_string(),
        |at| (at.index + 1 + source.display_line_offset()).to_string(),
    );
    let col_no = primary.map_or_else(|| "?".to_string(), |at| (at.column + 1).to_string());
    let line_ref = format!("{source_id}:{line_no}:{col_no}");

    let label_lines = project_labels(report, source);

    let mut line_indices: Vec<usize> = label_lines.iter().map(|info| info.line_index).collect();
    line_indices.sort_unstable();
    line_indices.dedup();

    let line_no_width = line_indices
        .iter()
        .map(|index| (index + 1 + source.display_line_offset()).to_string().len())
        .max()
        .unwrap_or(1)
        .max(1);
    let indent = " ".repeat(line_no_width + 1);

    let code_prefix = report
        .code
        .as_deref()
        .map(|code| format!("[{code}]"))
        .unwrap_or_default();
    let header_label = format!("{}{}", report.kind.name(), code_prefix);
    let header = format!(
        "{}: {}",
        fg(&header_label, report.kind.resolve_color(config)),
        report.message.as_deref().unwrap_or("")
    );

    let vbar = draw.vbar.to_string();
    let mut lines = vec![
        header,
        format!(
            "{indent}{}{line_ref}{}",
            fg(
                &format!("{}{}[", draw.ltop, draw.hbar),
                margin_color(is_color)
            ),
            fg("]", margin_color(is_color)),
        ),
        format!("{indent}{}", fg(&vbar, margin_color(is_color))),
    ];

    let mut last_line_index: Option<usize> = None;
    for &line_index in &line_indices {
        if let Some(last) = last_line_index {
            if line_index - last > ELISION_GAP {
                lines.push(ELISION_MARKER.to_string());
            }
        }

        let line_text = source
            .get_line(line_index)
            .and_then(|line| source.line_text(line))
            .unwrap_or_default();
        let line_no_text = format!(
            "{:>line_no_width$}",
            line_index + 1 + source.display_line_offset()
        );
        let margin_prefix = format!("{line_no_text} {}", draw.vbar);
        lines.push(format!(
            "{} {}",
            fg(&margin_prefix, margin_color(is_color)),
            line_text.trim_end()
        ));

        for info in label_lines.iter().filter(|info| info.line_index == line_index) {
            let underline_len = (info.end_col - info.start_col).max(1);
            let underline = underline_with_marker(
                underline_len,
                info.attach_col.saturating_sub(info.start_col),
                draw.hbar,
                draw.munderbar,
            );
            let label_color = if is_color { info.color } else { None };
            lines.push(format!(
                "{indent}{} {}{}",
                fg(&vbar, margin_color(is_color)),
                " ".repeat(info.start_col),
                fg(&underline, label_color),
            ));

            if let Some(message) = info.message.filter(|message| !message.is_empty()) {
                let tail_len = MESSAGE_COLUMN.saturating_sub(info.attach_col + 1).max(1);
                let arrow = format!(
                    "{}{}",
                    draw.lbot,
                    draw.hbar.to_string().repeat(tail_len)
                );
                lines.push(format!(
                    "{indent}{} {}{} {message}",
                    fg(&vbar, margin_color(is_color)),
                    " ".repeat(info.attach_col),
                    fg(&arrow, label_color),
                ));
            }
        }

        last_line_index = Some(line_index);
    }

    lines.push(fg(
        &format!(
            "{}{}",
            draw.hbar.to_string().repeat(line_no_width + 1),
            draw.rbot
        ),
        margin_color(is_color),
    ));

    for note in &report.notes {
        lines.push(format!("{}: {note}", fg("note", note_color(is_color))));
    }
    for help in &report.help {
        lines.push(format!("{}: {help}", fg("help", note_color(is_color))));
    }

    let rendered = lines.join("\n");
    Ok(match config.ansi_mode {
        AnsiMode::Off => strip_ansi(&rendered),
        AnsiMode::On => rendered,
    })
}
