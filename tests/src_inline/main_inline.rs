use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("kira_labqc_main_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn run_args(cli: Cli) -> RunArgs {
    match cli.command {
        Command::Run(args) => args,
    }
}

#[test]
fn test_parse_panel_selection() {
    assert_eq!(parse_panel_selection("all").unwrap(), PanelSelection::All);
    assert_eq!(parse_panel_selection("ALL").unwrap(), PanelSelection::All);
    assert_eq!(
        parse_panel_selection("lft").unwrap(),
        PanelSelection::One(Panel::Lft)
    );
    assert_eq!(
        parse_panel_selection("Rheumatology").unwrap(),
        PanelSelection::One(Panel::Rheumatology)
    );
    let err = parse_panel_selection("hormones").unwrap_err();
    assert!(err.starts_with("invalid --panel hormones (use cbc|lft|kft|"));
    assert!(err.ends_with("|oncology|all)"));
}

#[test]
fn test_cli_defaults() {
    let cli = Cli::try_parse_from(["kira-labqc", "run", "--input", "labs.json", "--out", "out"]).unwrap();
    let args = run_args(cli);
    assert_eq!(args.input, PathBuf::from("labs.json"));
    assert_eq!(args.out, PathBuf::from("out"));
    assert_eq!(args.panel, "all");
    assert_eq!(args.sex, None);
    assert!(!args.verbose);
}

#[test]
fn test_cli_explicit_flags() {
    let cli = Cli::try_parse_from([
        "kira-labqc", "run", "--input", "in.json.gz", "--out", "o", "--panel", "kft", "--sex", "female",
        "--verbose",
    ])
    .unwrap();
    let args = run_args(cli);
    assert_eq!(args.panel, "kft");
    assert_eq!(args.sex.as_deref(), Some("female"));
    assert!(args.verbose);
}

#[test]
fn test_cli_requires_input_and_out() {
    assert!(Cli::try_parse_from(["kira-labqc", "run", "--out", "o"]).is_err());
    assert!(Cli::try_parse_from(["kira-labqc", "run", "--input", "i"]).is_err());
}

#[test]
fn test_run_single_panel_writes_reports() {
    let dir = make_temp_dir();
    let input = dir.join("labs.json");
    fs::write(
        &input,
        r#"{"sex": "male", "parameters": {"Sodium": {"value": 140}, "Chloride": {"value": 100}, "Bicarbonate": {"value": 24}}}"#,
    )
    .unwrap();
    let out = dir.join("out");
    let args = RunArgs {
        input,
        out: out.clone(),
        panel: "kft".to_string(),
        sex: None,
        verbose: false,
    };
    run_analysis(args).unwrap();
    let summary = fs::read_to_string(out.join("summary.json")).unwrap();
    assert!(summary.contains("\"Anion Gap\""));
}

#[test]
fn test_run_all_panels_and_missing_input() {
    let dir = make_temp_dir();
    let input = dir.join("labs.json");
    fs::write(
        &input,
        r#"{"parameters": {"Hb": {"value": 9, "unit": "g/dL"}, "TSH": {"value": 8}}}"#,
    )
    .unwrap();
    let out = dir.join("out");
    run_analysis(RunArgs {
        input,
        out: out.clone(),
        panel: "all".to_string(),
        sex: Some("female".to_string()),
        verbose: false,
    })
    .unwrap();
    assert!(out.join("cbc").join("report.txt").is_file());
    assert!(out.join("tft").join("parameters.tsv").is_file());

    let err = run_analysis(RunArgs {
        input: dir.join("absent.json"),
        out,
        panel: "all".to_string(),
        sex: None,
        verbose: false,
    })
    .unwrap_err();
    assert!(err.starts_with("missing input"));
}

#[test]
fn test_run_passes_clinical_context() {
    let dir = make_temp_dir();
    let input = dir.join("labs.json");
    fs::write(
        &input,
        r#"{"parameters": {"ALT": {"value": 330}, "ALP": {"value": 120}}, "context": {"hemolysis": true}}"#,
    )
    .unwrap();
    let out = dir.join("out");
    run_analysis(RunArgs {
        input,
        out: out.clone(),
        panel: "lft".to_string(),
        sex: Some("male".to_string()),
        verbose: false,
    })
    .unwrap();
    let summary = fs::read_to_string(out.join("summary.json")).unwrap();
    assert!(summary.contains("\"kind\": \"hemolysis\""));
}
