//! Moji CLI
//!
//! Emoji shortcode substitution from the command line.

use mojic::{init_tracing, parse_args, run, CliError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let result = parse_args(&args).and_then(|(command, options)| {
        run(&command, &options, std::io::stdin().lock(), std::io::stdout().lock())
    });

    if let Err(err) = result {
        eprintln!("error: {err}");
        if matches!(err, CliError::Usage(_) | CliError::UnknownCommand(_)) {
            eprintln!();
            eprintln!("Run `moji help` for usage.");
        }
        std::process::exit(err.exit_code());
    }
}
