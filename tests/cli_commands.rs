//! End-to-end tests of the CLI commands, run in-process with captured output.

use clap::Parser;
use datamotion_grid::cli::Cli;
use datamotion_grid::{commands, GridSettings};
use grid_core::Row;
use grid_persistence::{FilesystemStore, GRID_STORAGE_KEY};
use tempfile::TempDir;

fn run(args: &[&str]) -> anyhow::Result<String> {
    let mut argv = vec!["datamotion-grid"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv)?;
    let mut out = Vec::new();
    commands::run(&GridSettings::default(), cli.command, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_generate_json_to_stdout() {
    let output = run(&["generate", "--rows", "3", "--seed", "42"]).unwrap();
    let rows: Vec<Row> = serde_json::from_str(&output).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].name, "Charlie Smith");
    assert_eq!(rows[1].email, "bob.rodriguez2@gridtools.app");
}

#[test]
fn test_generate_negative_rows_is_empty() {
    let output = run(&["generate", "--rows", "-5", "--format", "jsonl"]).unwrap();
    assert!(output.is_empty());
}

#[test]
fn test_generate_csv_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rows.csv");
    let output = run(&[
        "generate",
        "--rows",
        "25",
        "--format",
        "csv",
        "--output",
        path.to_str().unwrap(),
    ])
    .unwrap();
    assert!(output.starts_with("Wrote 25 rows"));

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 26);
    assert_eq!(
        content.lines().next(),
        Some("id,name,email,status,country,createdAt,amount")
    );
}

#[test]
fn test_query_filters_and_sorts() {
    let output = run(&[
        "query",
        "--rows",
        "500",
        "--filter",
        "status=Active",
        "--sort",
        "amount:desc",
        "--limit",
        "5",
    ])
    .unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "id\tname\temail\tstatus\tcountry\tcreatedAt\tamount");
    assert_eq!(lines.len(), 1 + 5 + 1);

    let amounts: Vec<f64> = lines[1..6]
        .iter()
        .map(|line| {
            let cells: Vec<&str> = line.split('\t').collect();
            assert_eq!(cells[3], "Active");
            cells[6].parse().unwrap()
        })
        .collect();
    assert!(amounts.windows(2).all(|pair| pair[0] >= pair[1]));
    assert!(lines[6].starts_with("Showing 1-5 of "));
    assert!(lines[6].ends_with("(500 total, 1 active filters)"));
}

#[test]
fn test_query_unknown_column_is_an_error() {
    let err = run(&["query", "--rows", "10", "--filter", "salary=10"]).unwrap_err();
    assert!(format!("{err:#}").contains("Invalid filter 'salary=10'"));
}

#[test]
fn test_query_unknown_view_is_an_error() {
    let err = run(&["query", "--rows", "10", "--view", "missing"]).unwrap_err();
    assert!(err.to_string().contains("Unknown view 'missing'"));
}

#[test]
fn test_query_header_labels() {
    let output = run(&["query", "--rows", "3", "--labels"]).unwrap();
    assert_eq!(
        output.lines().next(),
        Some("ID\tName\tEmail\tStatus\tCountry\tCreated at\tAmount")
    );
}

#[test]
fn test_query_ignores_stale_active_view() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().to_str().unwrap();
    let path = FilesystemStore::new(temp_dir.path())
        .path_for(GRID_STORAGE_KEY)
        .unwrap();
    std::fs::write(&path, r#"{"views":[],"activeViewId":"view_gone"}"#).unwrap();

    let output = run(&["query", "--rows", "10", "--state-dir", dir]).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 1 + 10 + 1);
    assert_eq!(lines[11], "Showing 1-10 of 10 rows (10 total, 0 active filters)");

    // An explicit view must still exist
    let err = run(&["query", "--rows", "10", "--state-dir", dir, "--view", "view_gone"])
        .unwrap_err();
    assert!(err.to_string().contains("Unknown view 'view_gone'"));
}

#[test]
fn test_query_page_past_end() {
    let output = run(&["query", "--rows", "10", "--offset", "50"]).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "Showing 0-0 of 10 rows (10 total, 0 active filters)");
}

#[test]
fn test_views_round_trip_through_state_dir() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().to_str().unwrap();

    let listed = run(&["views", "--state-dir", dir, "list"]).unwrap();
    assert!(listed.contains("default"));
    assert!(listed.contains("highAmount"));

    let created = run(&[
        "views",
        "--state-dir",
        dir,
        "create",
        "--name",
        "Spain",
        "--filter",
        "country=Spain",
    ])
    .unwrap();
    let id = created.trim().strip_prefix("Created view ").unwrap().to_string();
    assert!(id.starts_with("view_"));

    // The created view is active, so later queries pick it up
    let listed = run(&["views", "--state-dir", dir, "list"]).unwrap();
    assert!(listed.lines().any(|line| line.starts_with(&format!("* {id}"))));

    let output = run(&["query", "--rows", "200", "--state-dir", dir]).unwrap();
    for line in output.lines().skip(1).filter(|l| !l.starts_with("Showing")) {
        assert_eq!(line.split('\t').nth(4), Some("Spain"));
    }

    run(&["views", "--state-dir", dir, "delete", &id]).unwrap();
    let listed = run(&["views", "--state-dir", dir, "list"]).unwrap();
    assert!(!listed.contains(&id));
    assert!(!listed.contains('*'));
}

#[test]
fn test_views_apply_unknown() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().to_str().unwrap();
    assert!(run(&["views", "--state-dir", dir, "apply", "nope"]).is_err());
}

#[test]
fn test_window() {
    let output = run(&[
        "window",
        "--rows",
        "1000",
        "--scroll",
        "4000",
        "--viewport",
        "400",
        "--overscan",
        "2",
    ])
    .unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "index\tstart\tsize\ttransform");
    assert_eq!(lines[1], "98\t3920\t40\ttranslateY(3920px)");
    assert_eq!(
        lines.last().copied(),
        Some("Container height 40000px, padding top 3920px, bottom 35520px, 14 rows rendered")
    );
}

#[test]
fn test_window_row_count_at_i64_max() {
    let output = run(&["window", "--rows", "9223372036854775807", "--viewport", "400"]).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[1], "0\t0\t40\ttranslateY(0px)");
    assert_eq!(
        lines.last().copied(),
        Some(
            "Container height 18446744073709551615px, padding top 0px, \
             bottom 18446744073709550815px, 20 rows rendered"
        )
    );
}
