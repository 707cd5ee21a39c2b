use std::process;

use clap::error::ErrorKind as ClapErrorKind;
use clap::{Arg, ArgAction, Command};

const ARG_TARGET: &str = "target";
const USAGE: &str = "rawhttp [GET/POST] [URL]";

fn build_cli_args() -> Command {
    Command::new("rawhttp")
        .about("Send a GET or POST over a plain TCP socket")
        .override_usage(USAGE)
        .arg(
            Arg::new(ARG_TARGET)
                .help("Optional method followed by the url")
                .value_name("[METHOD] URL")
                .num_args(1..=2)
                .required(true)
                .action(ArgAction::Append),
        )
}

/// Split the positionals into `(method, url)`. A lone url is a GET.
fn parse_args<I, T>(argv: I) -> Result<(String, String), clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let args = build_cli_args().try_get_matches_from(argv)?;
    let mut values: Vec<String> = args
        .get_many::<String>(ARG_TARGET)
        .map(|v| v.cloned().collect())
        .unwrap_or_default();
    match values.len() {
        1 => Ok(("GET".to_string(), values.remove(0))),
        2 => {
            let url = values.remove(1);
            Ok((values.remove(0), url))
        }
        _ => Err(build_cli_args().error(ClapErrorKind::WrongNumberOfValues, "expected [METHOD] URL")),
    }
}

fn main() {
    env_logger::init();

    let (method, url) = match parse_args(std::env::args_os()) {
        Ok(v) => v,
        Err(e) if matches!(e.kind(), ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion) => {
            let _ = e.print();
            process::exit(0);
        }
        Err(e) => {
            log::debug!("bad arguments: {}", e);
            println!("{}\n", USAGE);
            process::exit(1);
        }
    };

    match rawhttp::command(&url, &method, None) {
        Ok(resp) => println!("{}", resp),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
