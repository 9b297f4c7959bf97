use caret_diagnostics::{CharSet, Color, Config, Label, Report, ReportStyle, SourceCache, Span};

fn main() {
    let cache: SourceCache = [("api.ts", "client.fetchAllSync();")].into_iter().collect();

    let report = Report::new(Span::new("api.ts", 7, 19))
        .kind(ReportStyle::custom("Deprecation", Color::MAGENTA))
        .message("`fetchAllSync` will be removed")
        .label(
            Label::new(Span::new("api.ts", 7, 19))
                .unwrap()
                .message("use `fetchAll` instead")
                .color(Color::MAGENTA),
        )
        .config(Config::default().char_set(CharSet::Ascii));

    anstream::println!("{}", report.render(&cache).unwrap());
}
