use caret_diagnostics::{Color, Label, Report, ReportKind, SourceCache, Span};

fn main() {
    let cache: SourceCache = [("demo.ts", "let a = 1;\nlet a = 2;")].into_iter().collect();

    let report = Report::new(Span::new("demo.ts", 15, 16))
        .kind(ReportKind::Error)
        .code("E0428")
        .message("`a` is bound twice")
        .label(
            Label::new(Span::new("demo.ts", 4, 5))
                .unwrap()
                .message("first binding")
                .color(Color::CYAN),
        )
        .label(
            Label::new(Span::new("demo.ts", 15, 16))
                .unwrap()
                .message("rebound here")
                .color(Color::RED)
                .order(1),
        )
        .note("bindings in the same scope must be unique")
        .help("rename one of the bindings");

    anstream::println!("{}", report.render(&cache).unwrap());
}
