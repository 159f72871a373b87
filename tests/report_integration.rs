//! End-to-end report generation over a fake criterion output tree

use std::fs;
use std::path::Path;

use benchtab::config::{BenchmarkGroup, ReportConfig, TableStyle};
use benchtab::io::SampleReader;
use benchtab::report::{ReportBuilder, TableRenderer, TabledRenderer};
use tempfile::TempDir;

fn write_sample(base: &Path, group: &str, size: u32, content: &str) {
    let dir = base.join(group).join(size.to_string()).join("new");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("sample.json"), content).unwrap();
}

#[test]
fn test_single_group_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    write_sample(
        temp_dir.path(),
        "laconic_ot_commit",
        3,
        r#"{"sampling_mode":"Linear","iters":[1.0,1.0,1.0],"times":[10.0,20.0,30.0]}"#,
    );

    let config = ReportConfig::new()
        .with_base_path(temp_dir.path())
        .with_sizes(vec![3])
        .with_groups(vec![BenchmarkGroup::new("Hash (Time)", "laconic_ot_commit")]);
    let reader = SampleReader::from_config(&config);
    let mut diagnostics = Vec::new();

    let table = ReportBuilder::new(&config)
        .build(&reader, &mut diagnostics)
        .unwrap();

    assert_eq!(table.header, vec!["Database Size", "Hash (Time)"]);
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0].to_strings(), vec!["2^{3}", "20.00 ns"]);
    assert_eq!(
        String::from_utf8(diagnostics).unwrap(),
        "laconic_ot_commit 3 20.00 ns\n"
    );

    let text = TabledRenderer::new(config.style).render(&table);
    assert!(text.contains("Database Size"));
    assert!(text.contains("20.00 ns"));
}

#[test]
fn test_default_groups_across_sizes() {
    let temp_dir = TempDir::new().unwrap();
    let config = ReportConfig::new()
        .with_base_path(temp_dir.path())
        .with_sizes(vec![3, 4]);

    // commit: 37.5 ns, send: 1.5 ms, recv: 125 s
    for size in [3, 4] {
        write_sample(temp_dir.path(), "laconic_ot_commit", size, r#"{"iters":[2,4],"times":[100,100]}"#);
        write_sample(temp_dir.path(), "laconic_ot_send", size, r#"{"iters":[2],"times":[3000000]}"#);
        write_sample(temp_dir.path(), "laconic_ot_recv", size, r#"{"iters":[1],"times":[125000000000]}"#);
    }

    let table = ReportBuilder::new(&config)
        .build(&SampleReader::from_config(&config), &mut std::io::sink())
        .unwrap();

    assert_eq!(
        table.header,
        vec!["Database Size", "Hash (Time)", "Send (Time)", "Recv (Time)"]
    );
    assert_eq!(table.rows[0].to_strings(), vec!["2^{3}", "37.50 ns", "1.50 ms", "2:5 m"]);
    assert_eq!(table.rows[1].label, "2^{4}");

    let text = TabledRenderer::new(TableStyle::Markdown).render(&table);
    assert_eq!(text.lines().count(), 4);
}

#[test]
fn test_config_file_drives_report() {
    let temp_dir = TempDir::new().unwrap();
    let samples = temp_dir.path().join("criterion");
    write_sample(&samples, "parse", 10, r#"{"iters":[1],"times":[1000]}"#);

    let config_path = temp_dir.path().join("benchtab.toml");
    fs::write(
        &config_path,
        format!(
            "base_path = {:?}\nsize_column = \"Input\"\nsizes = [10]\nstyle = \"ascii\"\nmath_labels = true\n\n[[groups]]\nname = \"Parse\"\nid = \"parse\"\n",
            samples.to_string_lossy()
        ),
    )
    .unwrap();

    let config = ReportConfig::load_from(&config_path).unwrap();
    let table = ReportBuilder::new(&config)
        .build(&SampleReader::from_config(&config), &mut std::io::sink())
        .unwrap();

    assert_eq!(table.header, vec!["Input", "Parse"]);
    assert_eq!(table.rows[0].to_strings(), vec!["$2^{10}$", "1.00 µs"]);
    assert!(TabledRenderer::new(config.style).render(&table).starts_with('+'));
}
