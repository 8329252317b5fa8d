use super::CliConfig;
use clap::Parser;
use std::ffi::OsString;

/// Flag names also accepted with a single leading dash (`-source data.json`).
const SINGLE_DASH_FLAGS: [&str; 5] = ["source", "output", "log", "config", "verbose"];

fn is_single_dash_flag(arg: &str) -> bool {
    match arg.strip_prefix('-') {
        Some(rest) if !rest.starts_with('-') => {
            let name = rest.split('=').next().unwrap_or(rest);
            SINGLE_DASH_FLAGS.contains(&name)
        }
        _ => false,
    }
}

/// Rewrites `-name` / `-name=value` into `--name` / `--name=value` for the known flags.
/// The first item (program name), non-UTF-8 arguments and everything after a bare `--`
/// pass through untouched.
pub fn normalize_single_dash_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;

    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            let arg: OsString = arg.into();
            if i == 0 || passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }

            if arg.to_str().is_some_and(is_single_dash_flag) {
                let mut flagged = OsString::from("-");
                flagged.push(&arg);
                flagged
            } else {
                arg
            }
        })
        .collect()
}

impl CliConfig {
    pub fn parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_single_dash_args(args))
    }

    /// Parses `std::env::args_os()`, exiting with clap's usage message on error.
    pub fn from_env_args() -> Self {
        Self::parse_from(normalize_single_dash_args(std::env::args_os()))
    }
}
