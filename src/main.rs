use log::{debug, error};
use recipe_cart::afx::AFX_METHOD;
use recipe_cart::{
    CartConfig, CartImporter, ImportError, ImportResponse, ImportResult, AFX_ENDPOINT,
};
use serde_json::{json, Map, Value};
use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

const USAGE: &str = "Usage: recipe-cart [--extract-only] [--form] <FILE|->";

struct Args {
    input: Option<String>,
    extract_only: bool,
    form: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        input: None,
        extract_only: false,
        form: false,
    };

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--extract-only" => args.extract_only = true,
            "--form" => args.form = true,
            "-h" | "--help" => return Err(USAGE.to_string()),
            flag if flag.starts_with("--") => {
                return Err(format!("Unknown option '{flag}'\n{USAGE}"))
            }
            _ if args.input.is_some() => return Err(format!("Too many arguments\n{USAGE}")),
            _ => args.input = Some(arg),
        }
    }

    if args.extract_only && args.form {
        return Err(format!("--extract-only and --form cannot be combined\n{USAGE}"));
    }
    Ok(args)
}

fn read_input(input: Option<&str>) -> io::Result<String> {
    match input {
        None | Some("-") => {
            let mut html = String::new();
            io::stdin().read_to_string(&mut html)?;
            Ok(html)
        }
        Some(path) => fs::read_to_string(path),
    }
}

fn run(args: Args) -> Result<(), ImportError> {
    let html = read_input(args.input.as_deref())?;
    debug!("Read {} bytes of HTML", html.len());

    let config = CartConfig::load()?;
    let mut builder = CartImporter::builder().config(config).html(html);
    if args.extract_only {
        builder = builder.extract_only();
    }

    let output = match builder.build()? {
        ImportResult::Recipe(recipe) => serde_json::to_value(&recipe)?,
        ImportResult::Submission(submission) if args.form => {
            let fields: Map<String, Value> = submission
                .form_fields()?
                .into_iter()
                .map(|(name, value)| (name.to_string(), Value::String(value)))
                .collect();
            json!({
                "action": AFX_ENDPOINT,
                "method": AFX_METHOD,
                "fields": fields,
            })
        }
        ImportResult::Submission(submission) => {
            serde_json::to_value(ImportResponse::from(submission))?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::from(2);
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
