use super::*;
use clap::CommandFactory;
use std::ffi::OsString;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tempfile::tempdir;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("parse cli")
}

fn run_with(cli: &Cli, cwd: &Path, stdin: &[u8]) -> (Result<()>, String) {
    let relativizer = Relativizer::new(&cli.target_dir, cwd);
    let mut stdin = Cursor::new(stdin.to_vec());
    let mut buf = Vec::new();
    let result = execute(cli, &relativizer, &mut stdin, &mut buf);
    (result, String::from_utf8(buf).expect("utf8"))
}

#[test]
fn target_dir_is_required() {
    let parse = Cli::try_parse_from(["relpath"]);
    let err = parse.expect_err("missing target");
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn list_files_are_optional() {
    let cli = parse(&["relpath", "/out"]);
    assert_eq!(cli.target_dir, PathBuf::from("/out"));
    assert!(cli.lists.is_empty());

    let (result, out) = run_with(&cli, Path::new("/"), b"");
    result.expect("run");
    assert!(out.is_empty());
}

#[test]
fn dash_reads_stdin_between_files() {
    let tmp = tempdir().expect("tempdir");
    let before = tmp.path().join("before.txt");
    let after = tmp.path().join("after.txt");
    fs::write(&before, "/p/b\n").expect("write");
    fs::write(&after, "/p/a\n").expect("write");

    let args: Vec<OsString> = vec![
        "relpath".into(),
        "/p".into(),
        before.into_os_string(),
        "-".into(),
        after.into_os_string(),
    ];
    let cli = Cli::try_parse_from(args).expect("parse cli");
    let (result, out) = run_with(&cli, Path::new("/"), b"/p/stdin\n");

    result.expect("run");
    assert_eq!(out, "b\nstdin\na\n");
}

#[test]
fn ndjson_flag_switches_format() {
    let cli = parse(&["relpath", "--ndjson", "/p", "-"]);
    assert_eq!(cli.output_format(), OutputFormat::Ndjson);

    let (result, out) = run_with(&cli, Path::new("/"), b"/p/q/r.c\n");
    result.expect("run");

    let record: serde_json::Value = serde_json::from_str(out.trim_end()).expect("json line");
    assert_eq!(record["source"], "/p/q/r.c");
    assert_eq!(record["relative"], "q/r.c");
}

#[test]
fn missing_list_file_is_an_error_naming_the_file() {
    let cli = parse(&["relpath", "/p", "/nonexistent/relpath/list.txt"]);
    let (result, out) = run_with(&cli, Path::new("/"), b"");

    let err = result.expect_err("missing list");
    assert!(format!("{err:#}").contains("/nonexistent/relpath/list.txt"));
    assert!(out.is_empty());
}

#[test]
fn verbosity_maps_to_log_directives() {
    assert_eq!(parse(&["relpath", "/p"]).log_directive(), "warn");
    assert_eq!(parse(&["relpath", "-v", "/p"]).log_directive(), "info");
    assert_eq!(parse(&["relpath", "-vv", "/p"]).log_directive(), "debug");
    assert_eq!(parse(&["relpath", "-vvvv", "/p"]).log_directive(), "trace");
    assert_eq!(parse(&["relpath", "-q", "/p"]).log_directive(), "error");
}

#[test]
fn quiet_and_verbose_conflict() {
    let parse = Cli::try_parse_from(["relpath", "-q", "-v", "/p"]);
    assert!(parse.is_err());
}

#[test]
fn env_directive_overrides_flags_unless_blank() {
    let cli = parse(&["relpath", "-q", "/p"]);

    let (overridden, rejected) = log_filter(&cli, Some("debug".to_string()));
    assert_eq!(overridden.to_string(), "debug");
    assert!(rejected.is_none());

    let (fallback, rejected) = log_filter(&cli, Some("  ".to_string()));
    assert_eq!(fallback.to_string(), "error");
    assert!(rejected.is_none());

    let (unset, _) = log_filter(&cli, None);
    assert_eq!(unset.to_string(), "error");
}

#[test]
fn invalid_env_directive_falls_back_and_is_reported() {
    let cli = parse(&["relpath", "-v", "/p"]);

    let (filter, rejected) = log_filter(&cli, Some("relpath=loudest".to_string()));

    assert_eq!(filter.to_string(), "info");
    let reason = rejected.expect("rejected directive");
    assert!(reason.contains(LOG_ENV));
    assert!(reason.contains("relpath=loudest"));
}

#[test]
fn help_output_lists_flags() {
    let help = Cli::command().render_long_help().to_string();
    assert!(help.contains("--ndjson"));
    assert!(help.contains("--verbose"));
    assert!(help.contains("<TARGET_DIR>"));
}
