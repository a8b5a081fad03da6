use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizforge_core::markdown::extract_quiz_blocks;
use quizforge_core::parser::parse_quiz_str;

fn generate_quiz_toml(n: usize) -> String {
    let mut s = String::new();
    s.push_str(
        r#"[quiz]
chapter = "bench"
title = "Benchmark"
"#,
    );
    for i in 0..n {
        s.push_str(&format!(
            r#"
[[questions]]
prompt = "Question {i}?"
explanation = "Explanation {i}."

[[questions.choices]]
text = "Right answer {i}"
correct = true

[[questions.choices]]
text = "Wrong answer {i}"

[[questions.choices]]
text = "Other wrong answer {i}"
"#
        ));
    }
    s
}

fn generate_chapter_markdown(blocks: usize) -> String {
    let mut s = String::from("# Benchmark Chapter\n\nSome prose between quizzes.\n");
    for i in 0..blocks {
        s.push_str(&format!(
            "\n```clojure\n(defn f{i} [x] (+ x {i}))\n```\n\n```quiz\n[[questions]]\nprompt = \"Q{i}?\"\n\n[[questions.choices]]\ntext = \"Yes\"\ncorrect = true\n\n[[questions.choices]]\ntext = \"No\"\n```\n"
        ));
    }
    s
}

fn bench_toml_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("toml_parsing");

    for size in [5usize, 50, 200] {
        let toml = generate_quiz_toml(size);
        group.bench_function(format!("{size}_questions"), |b| {
            b.iter(|| {
                parse_quiz_str(black_box(&toml), black_box("bench.toml".as_ref())).unwrap()
            })
        });
    }

    group.finish();
}

fn bench_extract_blocks(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_quiz_blocks");

    let small = generate_chapter_markdown(2);
    let large = generate_chapter_markdown(50);
    let no_blocks = "# Plain chapter\n\nOnly prose here, nothing fenced.";

    group.bench_function("2_blocks", |b| {
        b.iter(|| extract_quiz_blocks(black_box(&small)))
    });

    group.bench_function("50_blocks", |b| {
        b.iter(|| extract_quiz_blocks(black_box(&large)))
    });

    group.bench_function("no_blocks", |b| {
        b.iter(|| extract_quiz_blocks(black_box(no_blocks)))
    });

    group.finish();
}

criterion_group!(benches, bench_toml_parsing, bench_extract_blocks);
criterion_main!(benches);
