use std::io::Read;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{bail, Context};
use checker_core::{update, AppState, Msg, SessionState};
use checker_engine::ResolverSettings;
use checker_logging::check_info;

use crate::effects::EffectRunner;
use crate::logging;
use crate::render;

const USAGE: &str = "\
Usage: checker_app [OPTIONS] [FILE]

Checks a newline-delimited list of URLs (1 to 100) against a simulated
search index, one URL at a time. Reads FILE, or stdin when omitted.

Options:
  --latency-ms <MS>  Simulated per-URL latency (default 800)
  --seed <N>         Fix the outcome RNG seed for a reproducible run
  --json             Print the final summary as JSON
  -h, --help         Show this help
";

#[derive(Debug, Default, PartialEq, Eq)]
struct CliOptions {
    input: Option<PathBuf>,
    latency_ms: Option<u64>,
    seed: Option<u64>,
    json: bool,
}

pub fn run() -> anyhow::Result<()> {
    let options = match parse_args(std::env::args().skip(1))? {
        Some(options) => options,
        None => {
            print!("{USAGE}");
            return Ok(());
        }
    };

    logging::initialize();

    let raw = read_input(options.input.as_deref())?;

    let mut settings = ResolverSettings::default();
    if let Some(ms) = options.latency_ms {
        settings.latency = Duration::from_millis(ms);
    }
    settings.seed = options.seed;

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(msg_tx, settings);

    let mut state = AppState::new();
    state = dispatch(state, Msg::InputChanged(raw), &runner);
    check_info!(
        "submitting {} candidate URLs",
        state.view().candidate_count
    );
    state = dispatch(state, Msg::CheckSubmitted, &runner);

    let view = state.view();
    if let Some(err) = view.last_error {
        bail!("{err}");
    }
    println!("Checking {} URLs...", view.stats.total);
    state.consume_dirty();

    loop {
        let msg = msg_rx.recv().context("engine event channel closed")?;
        // Completion changes only the session, not the entries; rendering it
        // would repeat the final progress line.
        let is_completion = matches!(msg, Msg::BatchCompleted);
        state = dispatch(state, msg, &runner);
        if state.consume_dirty() && !is_completion {
            render::print_progress(&state.view());
        }
        if state.session() == SessionState::Completed {
            break;
        }
    }

    let view = state.view();
    if options.json {
        println!("{}", render::json_summary(&view)?);
    } else {
        render::print_report(&view);
    }
    Ok(())
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (state, effects) = update(state, msg);
    runner.run(effects);
    state
}

/// Returns None when help was requested.
fn parse_args(args: impl Iterator<Item = String>) -> anyhow::Result<Option<CliOptions>> {
    let mut options = CliOptions::default();
    let mut args = args;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--json" => options.json = true,
            "--latency-ms" => {
                let value = args.next().context("--latency-ms needs a value")?;
                options.latency_ms = Some(value.parse().context("invalid --latency-ms")?);
            }
            "--seed" => {
                let value = args.next().context("--seed needs a value")?;
                options.seed = Some(value.parse().context("invalid --seed")?);
            }
            other if other.starts_with('-') => bail!("unknown option: {other}"),
            path => {
                if options.input.is_some() {
                    bail!("more than one input file given");
                }
                options.input = Some(PathBuf::from(path));
            }
        }
    }
    Ok(Some(options))
}

fn read_input(path: Option<&std::path::Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<Option<CliOptions>> {
        parse_args(args.iter().map(ToString::to_string))
    }

    #[test]
    fn parses_flags_and_input_path() {
        let options = parse(&["--latency-ms", "50", "--seed", "7", "--json", "urls.txt"])
            .unwrap()
            .unwrap();
        assert_eq!(
            options,
            CliOptions {
                input: Some(PathBuf::from("urls.txt")),
                latency_ms: Some(50),
                seed: Some(7),
                json: true,
            }
        );
    }

    #[test]
    fn defaults_to_stdin_input() {
        let options = parse(&[]).unwrap().unwrap();
        assert_eq!(options, CliOptions::default());
    }

    #[test]
    fn help_short_circuits() {
        assert_eq!(parse(&["--help"]).unwrap(), None);
        assert_eq!(parse(&["-h", "urls.txt"]).unwrap(), None);
    }

    #[test]
    fn rejects_unknown_options_and_extra_paths() {
        assert!(parse(&["--frobnicate"]).is_err());
        assert!(parse(&["a.txt", "b.txt"]).is_err());
        assert!(parse(&["--latency-ms"]).is_err());
        assert!(parse(&["--latency-ms", "soon"]).is_err());
    }
}
