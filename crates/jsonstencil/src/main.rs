//! Command-line front end: class definitions in, JSON template out.

use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use jsonstencil::{KeyCase, convert};

#[derive(Parser)]
#[command(name = "jsonstencil")]
#[command(version)]
#[command(about = "Synthesize the default-instance JSON template for class definitions")]
struct Cli {
    /// Input file with class definitions; reads stdin when omitted or `-`
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Keep field names exactly as declared instead of camel-casing them
    #[arg(long)]
    preserve_case: bool,

    /// Pretty-print the template
    #[arg(long)]
    pretty: bool,
}

fn main() {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let source = match &cli.input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)?,
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let key_case = if cli.preserve_case {
        KeyCase::Preserve
    } else {
        KeyCase::Camel
    };

    if let Some(tree) = convert(&source, key_case)? {
        let rendered = if cli.pretty {
            serde_json::to_string_pretty(&tree)?
        } else {
            tree.to_string()
        };
        println!("{rendered}");
    }

    Ok(())
}
