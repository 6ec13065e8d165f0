use criterion::{criterion_group, criterion_main, Criterion, black_box};

use color_analysis::{
    core::normalize_labels,
    specs::colors,
    stats::Metrics,
};

const DAYS: [&str; 5] = ["MONDAY", "TUESDAY", "WEDNESDAY", "THURSDAY", "FRIDAY"];
const COLORS: [&str; 8] = ["RED", "BLUE", "BLEW", "GREEN", "WHITE", "ARSH", "PINK", "BROWN"];

/// A few thousand rows in the weekly-table shape.
fn synthetic_doc(rows: usize) -> String {
    let mut doc = String::from("<table>\n");
    for r in 0..rows {
        let cell: Vec<&str> = (0..19).map(|i| COLORS[(r * 7 + i * 3) % COLORS.len()]).collect();
        doc.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            DAYS[r % DAYS.len()],
            cell.join(", ")
        ));
    }
    doc.push_str("</table>\n");
    doc
}

fn bench_pipeline(c: &mut Criterion) {
    let doc = synthetic_doc(2_000);

    c.bench_function("extract", |b| {
        b.iter(|| {
            let labels = colors::extract(black_box(&doc));
            black_box(labels.len())
        })
    });

    let raw = colors::extract(&doc);
    c.bench_function("normalize", |b| {
        b.iter(|| black_box(normalize_labels(black_box(&raw))))
    });

    let clean = normalize_labels(&raw);
    c.bench_function("metrics", |b| {
        b.iter(|| black_box(Metrics::compute(black_box(&clean))))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
