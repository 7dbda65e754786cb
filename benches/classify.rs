// benches/classify.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

use job_charts::config::taxonomy::Taxonomy;
use job_charts::enrich::{classify::Classifier, experience::extract_experience, Enricher};
use job_charts::model::Job;

const SAMPLES: &[(&str, &str)] = &[
    ("Senior DevOps Engineer", "5+ years with kubernetes and terraform, ci/cd pipelines on aws"),
    ("QA Automation Engineer", "Selenium, Cypress and Playwright. 3-5 years of testing experience."),
    ("SDET", "general engineering"),
    ("Data Scientist", "Python, pandas, machine learning and deep learning. Overall 7 years."),
    ("QA Engineer - MEP Construction", "Site inspections, HVAC and plumbing snag lists."),
    ("Store Manager", "Run the shop floor and manage rotas."),
];

fn sample_jobs(n: usize) -> Vec<Job> {
    (0..n)
        .map(|i| {
            let (title, desc) = SAMPLES[i % SAMPLES.len()];
            serde_json::from_value(json!({ "jobId": i, "title": title, "description": desc })).unwrap()
        })
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let tax = Taxonomy::default();
    let classifier = Classifier::new(&tax).expect("built-in taxonomy compiles");

    c.bench_function("classify_samples", |b| {
        b.iter(|| {
            for (title, desc) in SAMPLES {
                black_box(classifier.classify(black_box(title), black_box(desc)));
            }
        })
    });

    c.bench_function("extract_experience_samples", |b| {
        b.iter(|| {
            for (_, desc) in SAMPLES {
                black_box(extract_experience(black_box(desc), "bench"));
            }
        })
    });

    let enricher = Enricher::new(&tax).expect("built-in taxonomy compiles");
    let jobs = sample_jobs(1_000);
    c.bench_function("enrich_1000", |b| {
        b.iter_batched(
            || jobs.clone(),
            |mut js| black_box(enricher.enrich_all(&mut js, None)),
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
