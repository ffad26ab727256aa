use std::io::BufRead;
use std::process::ExitCode;

use anyhow::Context;
use colored::{ColoredString, Colorize};
use serde::Serialize;

use addrcheck_core::{
    to_checksum, validate, CharDiff, CheckerConfig, ComparisonState, PasteTarget, SegmentKind,
    Session, ValidationOutcome,
};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<ExitCode> {
    let Cli { command, format, config, .. } = cli;
    let config = match config {
        Some(path) => CheckerConfig::load(&path)?,
        None => CheckerConfig::default(),
    };

    match command {
        Command::Compare(args) => cmd_compare(args, config, &format),
        Command::Validate(args) => cmd_validate(args, &config, &format),
        Command::Checksum(args) => cmd_checksum(args, &format),
        Command::Watch(args) => cmd_watch(args, config, &format),
    }
}

/// Everything a front end shows for the current pair of inputs.
#[derive(Serialize)]
struct CompareReport<'a> {
    first: &'a str,
    second: &'a str,
    state: ComparisonState,
    label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    diff: Option<&'a CharDiff>,
    #[serde(skip_serializing_if = "Option::is_none")]
    explorer_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    checksum_hint: Option<String>,
}

impl<'a> CompareReport<'a> {
    fn from_session(session: &'a Session) -> Self {
        let comparison = session.comparison();
        let invalid_input = match comparison.state {
            ComparisonState::FirstInvalid => Some(session.first()),
            ComparisonState::SecondInvalid => Some(session.second()),
            _ => None,
        };
        let checksum_hint = invalid_input
            .filter(|_| session.config().show_checksum_hint)
            .and_then(|input| to_checksum(input).ok());

        Self {
            first: session.first(),
            second: session.second(),
            state: comparison.state,
            label: comparison.state.label(),
            diff: comparison.diff.as_ref(),
            explorer_link: session.explorer_link(),
            checksum_hint,
        }
    }
}

#[derive(Serialize)]
struct ValidateReport<'a> {
    address: &'a str,
    outcome: ValidationOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    checksum: Option<String>,
}

fn cmd_compare(args: CompareArgs, config: CheckerConfig, format: &OutputFormat) -> anyhow::Result<ExitCode> {
    let mut session = Session::with_config(config);
    session.set_first(args.first);
    session.set_second(args.second);

    print_report(&CompareReport::from_session(&session), format)?;
    Ok(ExitCode::from(compare_status(session.state())))
}

/// Exit status for a mismatch or invalid input.
const EXIT_FAILURE: u8 = 1;

/// `compare` succeeds only when both addresses are equal.
fn compare_status(state: ComparisonState) -> u8 {
    if state == ComparisonState::Equal {
        0
    } else {
        EXIT_FAILURE
    }
}

/// `validate` fails when any address is invalid.
fn validate_status(reports: &[ValidateReport<'_>]) -> u8 {
    if reports.iter().all(|r| r.outcome.is_valid()) {
        0
    } else {
        EXIT_FAILURE
    }
}

fn cmd_validate(args: ValidateArgs, config: &CheckerConfig, format: &OutputFormat) -> anyhow::Result<ExitCode> {
    let reports: Vec<ValidateReport> = args
        .addresses
        .iter()
        .map(|address| ValidateReport {
            address,
            outcome: validate(address),
            checksum: to_checksum(address).ok(),
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Text => {
            for report in &reports {
                if report.outcome.is_valid() {
                    println!("{} {}", "✓ Valid  ".green().bold(), report.address);
                } else {
                    println!("{} {}", "✗ Invalid".red().bold(), report.address);
                    if let Some(checksum) = report.checksum.as_ref().filter(|_| config.show_checksum_hint) {
                        println!("  {} {}", "checksummed:".yellow(), checksum);
                    }
                }
            }
        }
    }

    Ok(ExitCode::from(validate_status(&reports)))
}

fn cmd_checksum(args: ChecksumArgs, format: &OutputFormat) -> anyhow::Result<ExitCode> {
    let checksum = to_checksum(&args.address)
        .with_context(|| format!("cannot checksum {:?}", args.address))?;

    match format {
        OutputFormat::Json => {
            let report = ValidateReport {
                address: &args.address,
                outcome: validate(&args.address),
                checksum: Some(checksum),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => println!("{}", checksum.bold()),
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_watch(args: WatchArgs, config: CheckerConfig, format: &OutputFormat) -> anyhow::Result<ExitCode> {
    let mut session = Session::with_config(config);
    if matches!(format, OutputFormat::Text) {
        println!("{}", "Paste addresses, one per line. Ctrl-D to quit.".dimmed());
    }

    let stdin = std::io::stdin().lock();
    watch_lines(stdin, &mut session, &args.clear_command, |session, step| {
        if step == WatchStep::Pasted(PasteTarget::Discarded) && matches!(format, OutputFormat::Text) {
            println!("{}", "Both addresses valid, paste ignored.".dimmed());
        }
        print_report(&CompareReport::from_session(session), format)
    })?;
    Ok(ExitCode::SUCCESS)
}

/// What one input line did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WatchStep {
    Cleared,
    Pasted(PasteTarget),
}

/// Feed each line of `input` to the session as a paste, or clear it when the
/// line equals `clear_command`. `on_step` sees the session after every line.
fn watch_lines<R: BufRead>(
    input: R,
    session: &mut Session,
    clear_command: &str,
    mut on_step: impl FnMut(&Session, WatchStep) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line.context("failed to read input")?;
        let step = if line == clear_command {
            session.clear();
            WatchStep::Cleared
        } else {
            WatchStep::Pasted(session.paste(&line))
        };
        on_step(session, step)?;
    }
    Ok(())
}

fn print_report(report: &CompareReport<'_>, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(report)?);
            return Ok(());
        }
        OutputFormat::Text => {}
    }

    println!("{}", paint_state(report.state));
    if let Some(diff) = report.diff {
        println!("  {}", render_diff(diff));
        println!("  {}", format!("{} character edits", diff.edit_count()).dimmed());
    }
    if let Some(hint) = &report.checksum_hint {
        println!("  {} {}", "checksummed:".yellow(), hint);
    }
    if let Some(link) = &report.explorer_link {
        println!("  {}", link.blue());
    }
    Ok(())
}

fn paint_state(state: ComparisonState) -> ColoredString {
    match state {
        ComparisonState::Equal => state.label().green().bold(),
        ComparisonState::NotEqual => state.label().red().bold(),
        _ => state.label().dimmed(),
    }
}

/// Inline diff: added runs green, removed runs red, the rest dimmed.
fn render_diff(diff: &CharDiff) -> String {
    diff.segments
        .iter()
        .map(|segment| {
            let text = segment.text.as_str();
            let painted = match segment.kind {
                SegmentKind::Unchanged => text.dimmed(),
                SegmentKind::Added => text.green().underline(),
                SegmentKind::Removed => text.red().strikethrough(),
            };
            painted.to_string()
        })
        .collect()
}
