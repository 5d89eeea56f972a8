use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, LevelFilter};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use typeahead::{Autocomplete, Band, Config, Suggestion};

mod cli;
use cli::display::*;
use cli::vocab::load_vocabulary;
use cli::{Cli, Commands};

/// "Did you mean" is only offered for matches this close.
const DID_YOU_MEAN_THRESHOLD: u32 = 3;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.format_timestamp(None).init();
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Suggest {
            vocab,
            query,
            count,
            band,
            json,
        } => run_suggest(&config, &vocab, &query, count, band, json),
        Commands::Trace {
            vocab,
            query,
            count,
            band,
        } => run_trace(&config, &vocab, &query, count, band),
        Commands::Check { vocab, token } => run_check(&config, &vocab, &token),
        Commands::Repl { vocab } => run_repl(&config, &vocab),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = Config::from_json(&raw).with_context(|| format!("in {}", path.display()))?;
    debug!("loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}

fn build_session(config: &Config, vocab: &Path, band: Option<u32>) -> Result<Autocomplete> {
    let tokens = load_vocabulary(vocab)?;
    let mut session = Autocomplete::from_config(config);
    if let Some(tau) = band {
        session.set_band(Band::Limit(tau));
    }
    for token in &tokens {
        session.add_token(token);
    }
    debug!("registered {} tokens from {}", session.len(), vocab.display());
    Ok(session)
}

fn type_query(session: &mut Autocomplete, query: &str) {
    for c in query.chars() {
        session.append(c);
    }
}

fn top(session: &Autocomplete, count: Option<usize>) -> Vec<Suggestion> {
    match count {
        Some(k) => session.suggestions_with_count(k),
        None => session.suggestions(),
    }
}

fn run_suggest(
    config: &Config,
    vocab: &Path,
    query: &str,
    count: Option<usize>,
    band: Option<u32>,
    json: bool,
) -> Result<()> {
    let mut session = build_session(config, vocab, band)?;
    type_query(&mut session, query);
    let ranking = top(&session, count);

    if json {
        println!("{}", serde_json::to_string_pretty(&ranking)?);
    } else {
        for line in suggestion_lines(&ranking) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn run_trace(
    config: &Config,
    vocab: &Path,
    query: &str,
    count: Option<usize>,
    band: Option<u32>,
) -> Result<()> {
    let mut session = build_session(config, vocab, band)?;

    for c in query.chars() {
        let start = Instant::now();
        session.append(c);
        let elapsed_us = start.elapsed().as_secs_f64() * 1e6;
        let ranking = top(&session, count);

        section_top(&format!("{:?}", session.query()));
        row(&format!(" keystroke {}", timing_us(elapsed_us)));
        for line in suggestion_lines(&ranking) {
            row(&line);
        }
        section_bot();
    }
    Ok(())
}

fn run_check(config: &Config, vocab: &Path, token: &str) -> Result<()> {
    let session = build_session(config, vocab, None)?;

    if session.all_tokens().iter().any(|t| t == token) {
        println!("{} is a known token", themed(GREEN, &[BOLD], token));
        return Ok(());
    }

    match session.most_likely(token) {
        Some(best) if best.distance <= DID_YOU_MEAN_THRESHOLD => {
            anyhow::bail!("unknown token '{}'. Did you mean '{}'?", token, best.name)
        }
        _ => anyhow::bail!("unknown token '{}'", token),
    }
}

fn run_repl(config: &Config, vocab: &Path) -> Result<()> {
    let mut session = build_session(config, vocab, None)?;
    let interactive = atty::is(atty::Stream::Stdin);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        if interactive {
            print!("{} ", themed(CYAN, &[BOLD], ">"));
            stdout.flush()?;
        }

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\n', '\r']);

        match line.split_once(' ').unwrap_or((line, "")) {
            (":quit", _) | (":q", _) => break,
            (":back", _) => session.backspace(),
            (":clear", _) => session.clear_query(),
            (":add", token) if !token.is_empty() => session.add_token(token),
            (":tokens", _) => {
                for token in session.all_tokens() {
                    println!("{}", token);
                }
                continue;
            }
            _ => session.set_query(line),
        }

        println!("query: {:?}", session.query());
        for line in suggestion_lines(&session.suggestions()) {
            println!("{}", line);
        }
    }
    Ok(())
}
