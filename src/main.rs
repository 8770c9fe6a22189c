// SPDX-License-Identifier: MPL-2.0
use iced_books::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_books - track the books you read

USAGE:
  iced_books [OPTIONS]

OPTIONS:
  --lang <ID>         UI language (e.g. en-US, fr)
  --config-dir <DIR>  Directory holding settings.toml
  --debug             Debug logging unless RUST_LOG is set
  -h, --help          Print this help
";

/// Console logging; `RUST_LOG` wins over `--debug`.
fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Fails only if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init();
}

fn parse_args() -> Result<Option<(Flags, bool)>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let debug = args.contains("--debug");
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("warning: ignoring unexpected arguments: {rest:?}");
    }

    Ok(Some((flags, debug)))
}

fn main() -> iced::Result {
    let (flags, debug) = match parse_args() {
        Ok(Some(parsed)) => parsed,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    init_tracing(debug);
    paths::init_cli_override(flags.config_dir.clone());

    app::run(flags)
}
