use std::collections::HashSet;
use std::fs;
use std::path::Path;

use veridict::pipeline::{BuildPipeline, CorpusRecord, SplitConfig};
use veridict::sources::Source;

fn write_liar(path: &Path, n: usize, offset: usize) {
    let mut out = String::new();
    for i in 0..n {
        let id = offset + i;
        out.push_str(&format!(
            "{id}.json\tfalse\tThe sky is green, statement {id}.\teconomy\tspeaker{id}\t\ttx\trepublican\t0\t1\t2\t3\t4\ta speech\n"
        ));
    }
    fs::write(path, out).unwrap();
}

fn write_politifact(path: &Path, n: usize) {
    let mut out = String::from("statement,source,author,date,rating\n");
    for i in 0..n {
        out.push_str(&format!(
            "\"Taxes went up, claim {i}.\",Alice,Bob,2024-09-19,False\n"
        ));
    }
    fs::write(path, out).unwrap();
}

fn write_snopes(path: &Path, n: usize) {
    let mut out = String::from("claim,rating,url\n");
    for i in 0..n {
        out.push_str(&format!(
            "\"The moon is cheese, claim {i}.\",False,https://example.com/{i}\n"
        ));
    }
    fs::write(path, out).unwrap();
}

fn read_records(path: &Path) -> Vec<CorpusRecord> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader.deserialize().map(|r| r.unwrap()).collect()
}

fn gen_data_dir(dir: &Path) {
    write_liar(&dir.join("train.tsv"), 40, 0);
    write_liar(&dir.join("test.tsv"), 10, 1000);
    write_liar(&dir.join("valid.tsv"), 10, 2000);
    write_politifact(&dir.join("politifact_factchecks_20240919.csv"), 10);
    write_snopes(&dir.join("snopes_factchecks_data.csv"), 10);
}

#[test_log::test]
fn build_end_to_end() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    gen_data_dir(src.path());

    let pipeline = BuildPipeline::new(
        src.path().to_path_buf(),
        dst.path().to_path_buf(),
        SplitConfig::default(),
    );
    let report = pipeline.run().unwrap();

    assert_eq!(report.total, 80);
    assert_eq!(report.knowledge_base + report.evaluation_set, 80);

    let kb = read_records(&dst.path().join("knowledge_base.csv"));
    let eval = read_records(&dst.path().join("evaluation_set.csv"));
    assert_eq!(kb.len(), report.knowledge_base);
    assert_eq!(eval.len(), report.evaluation_set);

    // partitions are disjoint and exhaustive
    let uuids: HashSet<&str> = kb
        .iter()
        .chain(eval.iter())
        .map(|r| r.uuid.as_str())
        .collect();
    assert_eq!(uuids.len(), 80);

    // 10% of each 10-row stratum is held out
    let eval_snopes = eval.iter().filter(|r| r.source == Source::Snopes).count();
    assert_eq!(eval_snopes, 1);
    let eval_politifact = eval
        .iter()
        .filter(|r| r.source == Source::PolitiFact)
        .count();
    assert_eq!(eval_politifact, 1);

    // statements came out normalized, labels untouched
    let liar_row = kb.iter().find(|r| r.source == Source::Liar).unwrap();
    assert!(liar_row.statement.starts_with("sky green statement"));
    assert_eq!(liar_row.label, "false");
    let snopes_row = kb.iter().find(|r| r.source == Source::Snopes).unwrap();
    assert!(snopes_row.statement.starts_with("moon cheese claim"));
    assert_eq!(snopes_row.label, "False");

    // report landed on disk as valid json
    let raw = fs::read_to_string(dst.path().join("build_report.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed["total"], 80);
}

#[test]
fn build_reproducible_with_same_seed() {
    let src = tempfile::tempdir().unwrap();
    gen_data_dir(src.path());

    let run = |dst: &Path| {
        BuildPipeline::new(
            src.path().to_path_buf(),
            dst.to_path_buf(),
            SplitConfig::default(),
        )
        .run()
        .unwrap();
        read_records(&dst.join("evaluation_set.csv"))
            .into_iter()
            .map(|r| r.statement)
            .collect::<Vec<_>>()
    };

    let dst_a = tempfile::tempdir().unwrap();
    let dst_b = tempfile::tempdir().unwrap();
    assert_eq!(run(dst_a.path()), run(dst_b.path()));
}

#[test]
fn build_missing_input_fails() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    // no input files at all

    let pipeline = BuildPipeline::new(
        src.path().to_path_buf(),
        dst.path().to_path_buf(),
        SplitConfig::default(),
    );
    assert!(pipeline.run().is_err());
}

#[test]
fn build_missing_column_fails() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    gen_data_dir(src.path());
    // snopes file without the claim column
    fs::write(
        src.path().join("snopes_factchecks_data.csv"),
        "rating,url\nFalse,https://example.com\n",
    )
    .unwrap();

    let pipeline = BuildPipeline::new(
        src.path().to_path_buf(),
        dst.path().to_path_buf(),
        SplitConfig::default(),
    );
    assert!(pipeline.run().is_err());
}
