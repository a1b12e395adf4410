use clap::Parser;
use miette::{Context, IntoDiagnostic, Result};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

use jauge::Metrics;

#[derive(Parser)]
#[command(name = "jauge")]
#[command(about = "json payload gauge: weighs your payloads in utf-8 bytes and tells you what broke", long_about = None)]
struct Cli {
    /// payload to inspect; reads stdin when omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// print the payload reformatted with 2-space indentation instead of the report
    #[arg(short, long)]
    format: bool,

    /// no report, answer through the exit status only
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    miette::set_panic_hook();
    let cli = Cli::parse();
    let payload = read_payload(cli.file.as_deref())?;

    if cli.format {
        let pretty = jauge::format(&payload);
        if pretty.ends_with('\n') {
            print!("{pretty}");
        } else {
            println!("{pretty}");
        }
        return Ok(());
    }

    if cli.quiet {
        if jauge::check(&payload).is_err() {
            std::process::exit(1);
        }
        return Ok(());
    }

    print_report(&jauge::measure(&payload));
    jauge::check(&payload)?;
    println!("payload is valid json");
    Ok(())
}

fn read_payload(file: Option<&std::path::Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read file '{}'", path.display())),
        None => {
            let mut payload = String::new();
            std::io::stdin()
                .read_to_string(&mut payload)
                .into_diagnostic()
                .wrap_err("Failed to read stdin")?;
            Ok(payload)
        }
    }
}

fn print_report(metrics: &Metrics) {
    println!("bytes       {} (utf-8)", group_thousands(metrics.byte_count));
    println!("characters  {}", group_thousands(metrics.char_count));
    println!("lines       {}", group_thousands(metrics.line_count));
    println!("words       {}", group_thousands(metrics.word_count));
    println!("kilobytes   {:.2}", metrics.kilobytes());
    println!("megabytes   {:.4}", metrics.megabytes());
    if let Some(tier) = metrics.tier() {
        println!("size        {tier}");
    }
}

fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
