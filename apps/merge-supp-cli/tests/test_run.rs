use clap::Parser;
use merge_supp_cli::error::{EXIT_CONFIGURATION, EXIT_IO, EXIT_MISSING_FIELD};
use merge_supp_cli::{run, Cli};
use std::fs;
use tempfile::TempDir;

fn workspace() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("prefixes.csv"),
        "seat,prefixes\nA1,Mr.\nB2,Ms.\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("nick_names.txt"),
        "robert, bob - rob, bobby\nbob - bobby\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("names.csv"),
        "seat,FirstName\nA1,Bob\nB2,Ann\n",
    )
    .unwrap();
    dir
}

fn cli(dir: &TempDir, extra: &[&str]) -> Cli {
    let path = |name: &str| dir.path().join(name).display().to_string();
    let mut args = vec![
        "merge-supp".to_string(),
        path("names.csv"),
        "--out".to_string(),
        path("out.csv"),
        "--prefix-file".to_string(),
        path("prefixes.csv"),
        "--nick-names-file".to_string(),
        path("nick_names.txt"),
    ];
    args.extend(extra.iter().map(|s| s.to_string()));
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn test_run_writes_augmented_csv() {
    let dir = workspace();

    let summary = run(&cli(&dir, &[])).unwrap();

    assert_eq!(summary.rows, 2);
    assert_eq!(
        fs::read_to_string(dir.path().join("out.csv")).unwrap(),
        "seat,FirstName,prefixes,nick_names\nA1,Bob,Mr.,rob;bobby\nB2,Ann,Ms.,\n"
    );
}

#[test]
fn test_config_file_sets_columns() {
    let dir = workspace();
    fs::write(
        dir.path().join("names.csv"),
        "id,Given\nA1,Robert\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("prefixes.csv"),
        "id,prefixes\nA1,Dr.\n",
    )
    .unwrap();
    let config = dir.path().join("merge.yaml");
    fs::write(&config, "prefix_column: id\nname_column: Given\n").unwrap();

    let config_arg = config.display().to_string();
    run(&cli(&dir, &["--config", &config_arg])).unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("out.csv")).unwrap(),
        "id,Given,prefixes,nick_names\nA1,Robert,Dr.,rob;bobby\n"
    );
}

#[test]
fn test_cli_options_override_config_file() {
    let dir = workspace();
    let config = dir.path().join("merge.yaml");
    fs::write(&config, "prefix_column: id\nname_column: Given\n").unwrap();

    let config_arg = config.display().to_string();
    let summary = run(&cli(
        &dir,
        &["--config", &config_arg, "-p", "seat", "-n", "FirstName"],
    ))
    .unwrap();

    assert_eq!(summary.prefixes_matched, 2);
}

#[test]
fn test_missing_reference_file_exit_code() {
    let dir = workspace();
    fs::remove_file(dir.path().join("nick_names.txt")).unwrap();

    let err = run(&cli(&dir, &[])).unwrap_err();

    assert_eq!(err.exit_code(), EXIT_CONFIGURATION);
    assert!(!dir.path().join("out.csv").exists());
}

#[test]
fn test_missing_prefix_column_exit_code() {
    let dir = workspace();

    let err = run(&cli(&dir, &["-p", "row"])).unwrap_err();

    assert_eq!(err.exit_code(), EXIT_CONFIGURATION);
    assert!(err.to_string().contains("missing required column 'row'"));
}

#[test]
fn test_missing_name_field_exit_code() {
    let dir = workspace();

    let err = run(&cli(&dir, &["-n", "GivenName"])).unwrap_err();

    assert_eq!(err.exit_code(), EXIT_MISSING_FIELD);
}

#[test]
fn test_bad_config_file_exit_code() {
    let dir = workspace();
    let config = dir.path().join("merge.yaml");
    fs::write(&config, "prefix_col: seat\n").unwrap();

    let config_arg = config.display().to_string();
    let err = run(&cli(&dir, &["--config", &config_arg])).unwrap_err();
    assert_eq!(err.exit_code(), EXIT_CONFIGURATION);

    let missing = dir.path().join("absent.yaml").display().to_string();
    let err = run(&cli(&dir, &["--config", &missing])).unwrap_err();
    assert_eq!(err.exit_code(), EXIT_CONFIGURATION);
}

#[test]
fn test_missing_input_exit_code() {
    let dir = workspace();
    fs::remove_file(dir.path().join("names.csv")).unwrap();

    let err = run(&cli(&dir, &[])).unwrap_err();

    assert_eq!(err.exit_code(), EXIT_IO);
}
