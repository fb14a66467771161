// SPDX-License-Identifier: MPL-2.0
use bistro::app::{self, paths, App, Flags};
use bistro::logging::{self, LogConfig};
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
bistro - restaurant showcase

USAGE:
  bistro [OPTIONS]

OPTIONS:
  --lang <id>          UI language (e.g. en-US, fr)
  --config-dir <dir>   Directory holding settings.toml and content.toml
  --content <file>     Site content file replacing the built-in content
  -v, --verbose        More log output (repeatable)
  -h, --help           Print this help
";

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let mut verbosity: u8 = 0;
    while args.contains(["-v", "--verbose"]) {
        verbosity = verbosity.saturating_add(1);
    }

    if let Err(err) = logging::init_logging(&LogConfig::from_verbosity(verbosity)) {
        eprintln!("Failed to initialize logging: {err}");
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());

    let app = match App::new(flags) {
        Ok(app) => app,
        Err(err) => {
            tracing::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match app::run(app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        content_path: args.opt_value_from_str::<_, PathBuf>("--content")?,
    })
}
