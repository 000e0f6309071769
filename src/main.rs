use std::fs;

use clap::Parser;
use numeval::calculate_expression;

/// numeval is a small command-line calculator for plain arithmetic
/// expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells numeval to read the expression from a file instead of the
    /// command line.
    #[arg(short, long)]
    file: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let expression = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match calculate_expression(&expression) {
        Ok(value) => println!("{value}"),
        Err(e) => eprintln!("{e}"),
    }
}
