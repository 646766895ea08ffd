use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use kira_labqc::input::load_input;
use kira_labqc::report::{write_all_reports, write_reports};
use kira_labqc::{Panel, Sex, analyze_all_with_context, analyze_with_context, logging};

#[derive(Debug, Parser)]
#[command(name = "kira-labqc", version, about = "Laboratory panel classification and consistency checks")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze one input document and write reports.
    Run(RunArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Input JSON document (optionally .gz).
    #[arg(long)]
    input: PathBuf,
    /// Output directory.
    #[arg(long)]
    out: PathBuf,
    /// Panel id or name, or `all` to split parameters by owning panel.
    #[arg(long, default_value = "all")]
    panel: String,
    /// Overrides the document's sex field (male|female|default).
    #[arg(long)]
    sex: Option<String>,
    #[arg(long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelSelection {
    All,
    One(Panel),
}

fn parse_panel_selection(raw: &str) -> Result<PanelSelection, String> {
    if raw.trim().eq_ignore_ascii_case("all") {
        return Ok(PanelSelection::All);
    }
    Panel::parse(raw).map(PanelSelection::One).ok_or_else(|| {
        let ids = Panel::all().iter().map(|p| p.id()).collect::<Vec<_>>();
        format!("invalid --panel {raw} (use {}|all)", ids.join("|"))
    })
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Run(args) => run_analysis(args),
    }
}

fn run_analysis(args: RunArgs) -> Result<(), String> {
    logging::init(args.verbose);

    let selection = parse_panel_selection(&args.panel)?;
    let sex_override = args.sex.as_deref().map(Sex::parse);
    let input = load_input(&args.input, sex_override).map_err(|e| e.to_string())?;

    match selection {
        PanelSelection::One(panel) => {
            let result = analyze_with_context(panel, &input.parameters, input.sex, &input.context);
            write_reports(&result, &args.out).map_err(|e| e.to_string())?;
        }
        PanelSelection::All => {
            let results = analyze_all_with_context(&input.parameters, input.sex, &input.context);
            let dirs = write_all_reports(&results, &args.out).map_err(|e| e.to_string())?;
            tracing::info!(panels = dirs.len(), out = %args.out.display(), "all panels written");
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
