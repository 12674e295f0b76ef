use astrocalc::shell::Shell;

fn main() {
    env_logger::init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    match config.mode {
        Mode::Convert(token) => match astrocalc::convert(&token) {
            Ok(report) => println!("{}", report.render()),
            Err(err) => {
                eprintln!("Error: {err}");
                std::process::exit(1);
            }
        },
        Mode::Shell => {
            if let Err(err) = Shell::new().run() {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
    }
}

enum Mode {
    /// One-shot conversion of a quantity token.
    Convert(String),
    /// Interactive command loop.
    Shell,
}

struct CliConfig {
    mode: Mode,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut token: Option<String> = None;
    let mut shell = false;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print!("{}", help_text());
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("astrocalc {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "-s" | "--shell" => shell = true,
            "--" => {
                // Everything after `--` is the quantity, even if it starts
                // with a sign ("-5deg").
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if token.is_some() {
                        return Err("error: quantity provided multiple times".to_string());
                    }
                    token = Some(rest);
                }
                break;
            }
            _ if arg.starts_with('-') && arg.len() > 1 && !arg[1..].starts_with(|c: char| c.is_ascii_digit()) => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                if token.is_some() {
                    return Err("error: quantity provided multiple times".to_string());
                }
                token = Some(arg);
            }
        }
    }

    if shell {
        if token.is_some() {
            return Err("error: --shell takes no quantity argument".to_string());
        }
        return Ok(CliConfig { mode: Mode::Shell });
    }

    match token {
        Some(token) => Ok(CliConfig { mode: Mode::Convert(token) }),
        None => Err(format!("error: no quantity provided\n\n{}", help_text())),
    }
}

fn help_text() -> String {
    format!(
        "astrocalc {version}

Astronomy calculator toolbox: unit conversion and formula helpers.

Usage:
  astrocalc [OPTIONS] [--] <quantity>
  astrocalc --shell

Arguments:
  <quantity>      A quantity token like 312N, 2.5km or 1000ms. Use `--`
                  before negative quantities (astrocalc -- -5deg).

Options:
  -s, --shell     Start the interactive command shell.
  -h, --help      Show this help message.
  -V, --version   Print version information.

Exit codes:
  0  Success.
  1  Failed conversion or command.
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION")
    )
}
