//! Passthrough rendering benchmark
//!
//! Measures the cost of the extra inline scanners and the paragraph
//! splitting transform against a plain CommonMark baseline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use markdown_it::MarkdownIt;
use markdown_it_extras::add_default_plugins;

const TEST_DOCS: &[(&str, &str)] = &[
    (
        "plain",
        r#"# Plain Document
Just a paragraph with *emphasis* and `code`, no math at all.

Another paragraph to keep the block parser busy."#,
    ),
    (
        "inline_math",
        r#"# Inline Math
An equation: $a^*=x-b^*$ in running text.

Asymmetric \(x = y\) delimiters and a second $E = mc^2$ span.
More text with ~~old~~ and ++new++ and x^2^ markers."#,
    ),
    (
        "block_math",
        r#"# Block Math
An equation:

$$
x = {-b \pm \sqrt{b^2-4ac} \over 2a}
$$

Mid-paragraph promotion: Block $$a^*=x-b^*$$ equation $$c+d$$ done."#,
    ),
    (
        "math_heavy",
        r#"$a$ $b$ $c$ with $$x$$ and $$y$$ then \(z\) plus \[w\]
$e^{i\pi} + 1 = 0$ and $\frac{1}{2}$ and $\sqrt{2}$
Block $$\int_0^1 f(x)dx$$ equation $$\sum_{n=1}^\infty 1/n^2$$ end"#,
    ),
];

fn benchmark_with_extras(c: &mut Criterion) {
    let mut md = MarkdownIt::new();
    markdown_it::plugins::cmark::add(&mut md);
    add_default_plugins(&mut md);

    let mut group = c.benchmark_group("render_with_extras");
    for (name, doc) in TEST_DOCS {
        group.bench_with_input(BenchmarkId::from_parameter(name), doc, |b, doc| {
            b.iter(|| black_box(md.parse(black_box(doc)).render()));
        });
    }
    group.finish();
}

fn benchmark_cmark_baseline(c: &mut Criterion) {
    let mut md = MarkdownIt::new();
    markdown_it::plugins::cmark::add(&mut md);

    let mut group = c.benchmark_group("render_cmark_baseline");
    for (name, doc) in TEST_DOCS {
        group.bench_with_input(BenchmarkId::from_parameter(name), doc, |b, doc| {
            b.iter(|| black_box(md.parse(black_box(doc)).render()));
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_with_extras, benchmark_cmark_baseline);
criterion_main!(benches);
