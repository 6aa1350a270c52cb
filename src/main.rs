use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

use ladder_check::pipeline::{self, CheckError, CheckOptions};
use ladder_check::record::{PuzzleRecord, RecordFields, DEFAULT_ANSWER_FIELD, DEFAULT_LADDER_FIELD, DEFAULT_TEXT_FIELD};
use ladder_check::validator::LadderMode;
use ladder_check::word_list::{Dictionary, DictionaryError};

/// Word-ladder puzzle item checker
///
/// Reads one puzzle record (a JSON object) or a batch (a JSON array of objects),
/// recovers and validates each word ladder, and prints the records with the
/// normalized ladder written back.
#[derive(Parser, Debug)]
#[command(author, version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"), about, long_about = None)]
struct Cli {
    /// JSON input file; reads stdin when absent or "-"
    input: Option<PathBuf>,

    /// Path to the word list (one word per line, or word;score)
    #[arg(short, long, env = "LADDER_DICTIONARY", default_value = "data/words.txt")]
    dictionary: PathBuf,

    /// URL to download the word list from if the local file is missing
    #[arg(long, env = "LADDER_DICTIONARY_URL")]
    dictionary_url: Option<String>,

    /// Skip scored word-list entries below this score
    #[arg(short = 'm', long)]
    min_score: Option<i32>,

    /// Also reject ladders that change the same letter position twice
    #[arg(short, long)]
    strict: bool,

    /// Field holding the explicit ladder (read and written)
    #[arg(long, default_value = DEFAULT_LADDER_FIELD)]
    ladder_field: String,

    /// Field holding the puzzle text
    #[arg(long, default_value = DEFAULT_TEXT_FIELD)]
    text_field: String,

    /// Field holding the answer
    #[arg(long, default_value = DEFAULT_ANSWER_FIELD)]
    answer_field: String,

    /// Pretty-print the output JSON
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    fn check_options(&self) -> CheckOptions {
        CheckOptions {
            mode: if self.strict { LadderMode::Strict } else { LadderMode::Lenient },
            fields: RecordFields {
                ladder: self.ladder_field.clone(),
                text: self.text_field.clone(),
                answer: self.answer_field.clone(),
            },
        }
    }
}

/// Entry point of the ladder checker.
///
/// Delegates to [`try_main`]; any error is printed to stderr in detailed form and
/// the process exits with code 1. Nothing is written to stdout on failure.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("LADDER_DEBUG").is_ok();
    ladder_check::log::init_logger(debug_enabled);

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(check_err) = e.downcast_ref::<CheckError>() {
                eprintln!("Error: {}", check_err.display_detailed());
            } else if let Some(dict_err) = e.downcast_ref::<DictionaryError>() {
                eprintln!("Error: {}", dict_err.display_detailed());
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

/// Core application logic.
///
/// Steps:
/// 1. Parse CLI arguments.
/// 2. Read and parse the input JSON (before touching the dictionary, so bad input
///    fails fast).
/// 3. Load the dictionary once, downloading it if needed.
/// 4. Check the record or every record in the batch.
/// 5. Print the result only if everything passed.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let options = cli.check_options();

    let input = read_input(cli.input.as_ref())?;
    let value: Value = serde_json::from_str(&input).map_err(|e| format!("malformed input JSON: {e}"))?;

    let dictionary = Dictionary::load_or_fetch(&cli.dictionary, cli.dictionary_url.as_deref(), cli.min_score)?;

    let output = match value {
        Value::Array(items) => check_all(&items, &options, &dictionary)?,
        Value::Object(fields) => {
            let record = PuzzleRecord::new(fields);
            Value::from(pipeline::check_record(&record, &options, &dictionary)?)
        }
        other => {
            return Err(CheckError::NotAnObject {
                found: pipeline::json_type_name(&other),
            }
            .into());
        }
    };

    let text = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{text}");

    Ok(())
}

/// Check a batch; succeed only if every item passes.
fn check_all(items: &[Value], options: &CheckOptions, dictionary: &Dictionary) -> Result<Value, Box<dyn std::error::Error>> {
    let mut checked = Vec::with_capacity(items.len());
    let mut failures = 0;

    for (index, result) in pipeline::check_batch(items, options, dictionary).into_iter().enumerate() {
        match result {
            Ok(record) => checked.push(Value::from(record)),
            Err(e) => {
                eprintln!("Item {index}: {}", e.display_detailed());
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(format!("{failures} of {} items failed", items.len()).into());
    }
    Ok(Value::Array(checked))
}

fn read_input(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => fs::read_to_string(p).map_err(|e| {
            io::Error::new(e.kind(), format!("failed to read input from '{}': {e}", p.display()))
        }),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
