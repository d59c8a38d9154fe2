//! avro - Roman phonetic to Bengali converter
//!
//! `avro ami banglay gan gai` converts its arguments; with no arguments each
//! line of standard input is converted.

use avro_phonetic::config::{config_path, load_config};
use avro_phonetic::PatternTable;
use std::io::{self, BufRead, BufWriter, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    // warn and above unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = load_config();
    log::debug!("config {}: {:?}", config_path().display(), config);

    // a table that fails to load falls back to the bundled one
    let custom = match config.load_table() {
        Ok(table) => table,
        Err(e) => {
            log::warn!("using bundled table: {}", e);
            None
        }
    };
    let table = match &custom {
        Some(table) => table,
        None => PatternTable::avro(),
    };
    log::info!(
        "table '{}' {} ({} patterns)",
        table.meta().name,
        table.meta().version,
        table.len()
    );

    let parser = config.parser(table);
    let args: Vec<String> = std::env::args().skip(1).collect();

    let result = if args.is_empty() {
        convert_lines(|line| parser.parse(line))
    } else {
        println!("{}", parser.parse(&args.join(" ")));
        Ok(())
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("i/o error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Convert stdin line by line
fn convert_lines(convert: impl Fn(&str) -> String) -> io::Result<()> {
    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());
    for line in stdin.lock().lines() {
        writeln!(out, "{}", convert(&line?))?;
    }
    out.flush()
}
