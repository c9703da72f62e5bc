use std::sync::Arc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use katex_parser::macros::MacroDefinition;
use katex_parser::namespace::Mapping;
use katex_parser::{KatexContext, Settings, parse};

/// Representative inputs, one per area of the parser.
const CASES: [(&str, &str); 7] = [
    ("Scripts", r"\sigma_{i,j}^{2} + x'' + \sum_{k=0}^{\infty} a_k"),
    ("Fractions", r"\frac{1}{1+\frac{1}{1+\frac{1}{x}}} + {a \over b}"),
    ("ArrayMode", r"\begin{pmatrix}a & b \\ c & d\end{pmatrix}\begin{array}{l|r}1&2\\3&4\end{array}"),
    ("GroupMacros", r"\def\x#1{#1#1}\x{\x{ab}}{\gdef\y{z}}\y"),
    ("LeftRight", r"\left( \frac{a}{b} \middle| \sqrt[3]{c} \right]"),
    ("TextMode", r"\text{a -- b ``quoted'' $x^2$ and \textbf{bold}}"),
    ("Colors", r"{\color{red} x + \textcolor{#0a0}{y}} \colorbox{blue}{z}"),
];

fn build_settings(macros: &[(&str, &str)]) -> Settings {
    let mut slots = Mapping::default();
    for (name, expansion) in macros {
        slots.insert((*name).to_owned(), MacroDefinition::from(*expansion));
    }
    Settings::builder().macros(slots).build()
}

fn bench_parsing(c: &mut Criterion) {
    let ctx = Arc::new(KatexContext::default());
    let settings = Arc::new(build_settings(&[(r"\RR", r"\mathbb{R}")]));

    let mut group = c.benchmark_group("katex_parse");
    for (name, tex) in CASES {
        // Ensure parsing succeeds once before measuring performance.
        parse(ctx.as_ref(), tex, settings.as_ref()).expect("parsing failed while priming benchmark");

        let ctx = Arc::clone(&ctx);
        let settings = Arc::clone(&settings);
        group.bench_function(name, move |b| {
            b.iter(|| {
                let nodes = parse(ctx.as_ref(), black_box(tex), settings.as_ref())
                    .expect("parsing failed during benchmark");
                black_box(nodes.len());
            });
        });
    }
    group.finish();

    c.bench_function("context_default", |b| {
        b.iter(|| black_box(KatexContext::default().functions.len()));
    });
}

criterion_group!(benches, bench_parsing);
criterion_main!(benches);
