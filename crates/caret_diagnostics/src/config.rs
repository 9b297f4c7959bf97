use caret_source_file::IndexUnit;

use crate::draw::CharSet;

/// Where the explanatory arrow attaches under a label's underline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum LabelAttach {
    /// The leftmost column of the underline.
    Start,
    /// The midpoint of the underline.
    Middle,
    /// The rightmost column of the underline.
    End,
}

/// Whether the rendered string may carry ANSI escape sequences.
///
/// With `Off`, every escape is stripped from the fully composed output
/// as the final rendering step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum AnsiMode {
    On,
    Off,
}

/// Resolved rendering options.
///
/// Every field has a fixed default; overlaying user choices is plain
/// struct update over [`Config::default`] or the chained setters below,
/// so no partially initialized config ever reaches the renderer.
///
/// `cross_gap`, `compact`, `multiline_arrows`, `minimise_crossings`,
/// `context_lines`, `enumerate_notes`, and `enumerate_helps` are
/// accepted for forward compatibility with richer layout policies; the
/// base layout consumes `label_attach`, `char_set`, `index_type`,
/// `color`, `ansi_mode`, and `tab_width`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case", default)
)]
pub struct Config {
    pub cross_gap: bool,
    pub label_attach: LabelAttach,
    pub compact: bool,
    pub underlines: bool,
    pub multiline_arrows: bool,
    pub color: bool,
    pub tab_width: usize,
    pub char_set: CharSet,
    pub index_type: IndexUnit,
    pub minimise_crossings: bool,
    pub context_lines: usize,
    pub ansi_mode: AnsiMode,
    pub enumerate_notes: bool,
    pub enumerate_helps: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            cross_gap: true,
            label_attach: LabelAttach::Middle,
            compact: false,
            underlines: true,
            multiline_arrows: true,
            color: true,
            tab_width: 4,
            char_set: CharSet::Unicode,
            index_type: IndexUnit::Char,
            minimise_crossings: false,
            context_lines: 0,
            ansi_mode: AnsiMode::On,
            enumerate_notes: true,
            enumerate_helps: true,
        }
    }
}

impl Config {
    pub fn cross_gap(self, yes: bool) -> Config {
        Config {
            cross_gap: yes,
            ..self
        }
    }

    pub fn label_attach(self, attach: LabelAttach) -> Config {
        Config {
            label_attach: attach,
            ..self
        }
    }

    pub fn compact(self, yes: bool) -> Config {
        Config { compact: yes, ..self }
    }

    pub fn underlines(self, yes: bool) -> Config {
        Config {
            underlines: yes,
            ..self
        }
    }

    pub fn multiline_arrows(self, yes: bool) -> Config {
        Config {
            multiline_arrows: yes,
            ..self
        }
    }

    /// Whether labels and kinds render with their colors at all.
    pub fn color(self, yes: bool) -> Config {
        Config { color: yes, ..self }
    }

    pub fn tab_width(self, width: usize) -> Config {
        Config {
            tab_width: width,
            ..self
        }
    }

    pub fn char_set(self, char_set: CharSet) -> Config {
        Config { char_set, ..self }
    }

    /// The unit every span offset of the report is interpreted in.
    pub fn index_type(self, unit: IndexUnit) -> Config {
        Config {
            index_type: unit,
            ..self
        }
    }

    pub fn minimise_crossings(self, yes: bool) -> Config {
        Config {
            minimise_crossings: yes,
            ..self
        }
    }

    pub fn context_lines(self, lines: usize) -> Config {
        Config {
            context_lines: lines,
            ..self
        }
    }

    pub fn ansi_mode(self, mode: AnsiMode) -> Config {
        Config {
            ansi_mode: mode,
            ..self
        }
    }

    pub fn enumerate_notes(self, yes: bool) -> Config {
        Config {
            enumerate_notes: yes,
            ..self
        }
    }

    pub fn enumerate_helps(self, yes: bool) -> Config {
        Config {
            enumerate_helps: yes,
            ..self
        }
    }
}

/// Maps a source character at display column `col` to the character to
/// draw and the number of columns it occupies: tabs expand to the next
/// tab stop, other whitespace collapses to a single space.
pub fn char_width(c: char, col: usize, tab_width: usize) -> (char, usize) {
    if c == '\t' {
        let tab_end = (col / tab_width + 1) * tab_width;
        (' ', tab_end - col)
    } else if c.is_whitespace() {
        (' ', 1)
    } else {
        (c, 1)
    }
}
