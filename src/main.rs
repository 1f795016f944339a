use std::process::ExitCode;

use clap::Parser;

use mtl_cli::cli::commands::translate::{self, TranslateOptions};
use mtl_cli::cli::{Args, Command};
use mtl_cli::config::ResolveOptions;
use mtl_cli::output::{self, OutputConfig};
use mtl_cli::translation::print_languages;
use mtl_cli::ui::Style;

fn main() -> ExitCode {
    let args = Args::parse();

    let defaults = OutputConfig::default();
    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || defaults.no_color,
    });

    if let Some(Command::Languages) = args.command {
        print_languages();
        return ExitCode::SUCCESS;
    }

    let options = TranslateOptions {
        text: args.text,
        input: args.input,
        output: args.output,
        resolve: ResolveOptions {
            from: args.from,
            to: args.to,
            model: args.model,
            max_length: args.max_length,
            log_level: args.log_level,
            log_format: args.log_format,
        },
    };

    match translate::run_translate(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", Style::error("Error:"));
            ExitCode::FAILURE
        }
    }
}
