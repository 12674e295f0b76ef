//! Interactive command shell.
//!
//! A small line-oriented loop over a fixed command table. Each input line is
//! split on whitespace; the first word selects a command, the rest become its
//! arguments. Command words are matched case-insensitively against names and
//! aliases, with a fuzzy fallback for near-misses (announced before running,
//! so the user sees which command actually fired).
//!
//! ```text
//! ">>> Command: conv 1km"
//!        │
//!        ├─ resolve("conv")  → exact alias hit → convert
//!        ├─ banner (name, description, arguments)
//!        └─ handler(["1km"]) → report text, or "Error: ..." and keep looping
//! ```
//!
//! Command errors never terminate the loop; only `quit` (or EOF) does.

use std::io::{self, BufRead, Write};

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::formulas;

/// Minimum fuzzy score for a near-miss to be accepted as a command.
const FUZZY_CUTOFF: i64 = 50;

type Handler = fn(&[&str]) -> Result<String, String>;

enum Action {
    Run(Handler),
    /// Needs access to the command table, so it is dispatched by the shell
    /// itself rather than through a plain handler.
    Help,
    Quit,
}

/// A shell command: canonical name, one-line description, aliases, behavior.
struct Command {
    name: &'static str,
    desc: &'static str,
    aliases: &'static [&'static str],
    action: Action,
}

/// What dispatching one input line produced.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Blank line; nothing to do.
    Empty,
    /// Text to print (command output or an error message).
    Text(String),
    /// The user asked to leave the loop.
    Quit,
}

enum Resolution {
    Exact(usize),
    /// Fuzzy hit: command index plus the name/alias that matched.
    Fuzzy(usize, String),
    Unknown,
}

pub struct Shell {
    commands: Vec<Command>,
    matcher: SkimMatcherV2,
}

impl Shell {
    pub fn new() -> Self {
        Shell { commands: built_in_commands(), matcher: SkimMatcherV2::default() }
    }

    /// Run the read-eval-print loop until `quit` or EOF.
    pub fn run(&self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        loop {
            write!(stdout, ">>> Command: ")?;
            stdout.flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break; // EOF
            }

            match self.eval_line(&line) {
                Outcome::Empty => continue,
                Outcome::Text(text) => writeln!(stdout, "{text}")?,
                Outcome::Quit => break,
            }
        }

        Ok(())
    }

    /// Dispatch a single input line and return what it printed.
    pub fn eval_line(&self, line: &str) -> Outcome {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return Outcome::Empty;
        };
        let args: Vec<&str> = parts.collect();

        let mut preamble = String::new();
        let index = match self.resolve(word) {
            Resolution::Exact(index) => index,
            Resolution::Fuzzy(index, matched) => {
                preamble = format!("Unknown command '{word}'. Using closest match '{matched}'\n");
                index
            }
            Resolution::Unknown => {
                return Outcome::Text(format!(
                    "Unknown command '{word}'. Type 'help' to see available commands."
                ));
            }
        };

        let command = &self.commands[index];
        let body = match command.action {
            Action::Quit => return Outcome::Quit,
            Action::Help => self.help_text(&args),
            Action::Run(handler) => match handler(&args) {
                Ok(text) => text,
                Err(err) => format!("Error: {err}"),
            },
        };

        let separator = "-".repeat(30);
        Outcome::Text(format!(
            "{preamble}{separator}\nCommand: {}\nDescription: {}\nArguments: {args:?}\n{separator}\n{body}",
            command.name, command.desc
        ))
    }

    /// Case-insensitive index over names and aliases, in declaration order.
    fn index(&self) -> Vec<(String, usize)> {
        let mut index = Vec::new();
        for (position, command) in self.commands.iter().enumerate() {
            index.push((command.name.to_lowercase(), position));
            for alias in command.aliases {
                index.push((alias.to_lowercase(), position));
            }
        }
        index
    }

    fn resolve(&self, word: &str) -> Resolution {
        let index = self.index();
        let lower = word.to_lowercase();

        if let Some((_, position)) = index.iter().find(|(key, _)| *key == lower) {
            return Resolution::Exact(*position);
        }

        // Best-scoring fuzzy candidate; strict `>` keeps ties on the
        // earliest-declared command for determinism.
        let mut best: Option<(i64, &str, usize)> = None;
        for (key, position) in &index {
            if let Some(score) = self.matcher.fuzzy_match(key, &lower) {
                if best.is_none_or(|(high, _, _)| score > high) {
                    best = Some((score, key.as_str(), *position));
                }
            }
        }

        match best {
            Some((score, key, position)) if score >= FUZZY_CUTOFF => {
                Resolution::Fuzzy(position, key.to_string())
            }
            _ => Resolution::Unknown,
        }
    }

    /// The help index, optionally grepped.
    ///
    /// Without arguments, prints one line per command. With a query, prints
    /// matching index lines with ±5 lines of context; overlapping context
    /// ranges are merged, and matched lines carry a `>` marker.
    fn help_text(&self, args: &[&str]) -> String {
        let mut lines = vec!["Available commands:".to_string()];
        for command in &self.commands {
            let aliases = if command.aliases.is_empty() {
                String::new()
            } else {
                format!(" (aliases: {})", command.aliases.join(", "))
            };
            lines.push(format!("- {}: {}{}", command.name, command.desc, aliases));
        }

        let Some(query) = args.first() else {
            return lines.join("\n");
        };

        const CONTEXT: usize = 5;
        let needle = query.to_lowercase();
        let matched: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.to_lowercase().contains(&needle))
            .map(|(position, _)| position)
            .collect();

        if matched.is_empty() {
            return format!("No matches for: {query:?}");
        }

        // Merge overlapping/adjacent context ranges. `matched` is ascending,
        // so one forward pass suffices.
        let mut merged: Vec<(usize, usize)> = Vec::new();
        for &position in &matched {
            let start = position.saturating_sub(CONTEXT);
            let end = (position + CONTEXT).min(lines.len() - 1);
            match merged.last_mut() {
                Some(last) if start <= last.1 + 1 => last.1 = last.1.max(end),
                _ => merged.push((start, end)),
            }
        }

        let mut out = vec![format!("Help index (grep for '{query}', context +/-{CONTEXT}):")];
        for (start, end) in merged {
            for position in start..=end {
                let marker = if matched.contains(&position) { '>' } else { ' ' };
                out.push(format!("{marker} {}", lines[position]));
            }
        }
        out.join("\n")
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

// --- Built-in commands -------------------------------------------------------

fn built_in_commands() -> Vec<Command> {
    vec![
        Command {
            name: "convert",
            desc: "Converts arbitrary units",
            aliases: &["conv", "units"],
            action: Action::Run(cmd_convert),
        },
        Command {
            name: "stefan_boltzmann",
            desc: "Calculate the radiated power per unit area using the Stefan-Boltzmann law",
            aliases: &["stefanboltzman", "boltzman", "radiationpower", "blackbody"],
            action: Action::Run(cmd_stefan_boltzmann),
        },
        Command {
            name: "distance_modulus",
            desc: "Relate apparent magnitude, absolute magnitude and distance (give two of m, M, d)",
            aliases: &["distmod", "dm"],
            action: Action::Run(cmd_distance_modulus),
        },
        Command {
            name: "help",
            desc: "Shows available commands (help `word` to search index, > marks result)",
            aliases: &["?", "h"],
            action: Action::Help,
        },
        Command {
            name: "quit",
            desc: "Leave the shell",
            aliases: &["exit", "q"],
            action: Action::Quit,
        },
    ]
}

fn cmd_convert(args: &[&str]) -> Result<String, String> {
    let [token] = args else {
        return Err(
            "please provide an argument for what you want to convert\n\
             For example: `convert 23kg`"
                .to_string(),
        );
    };

    let report = crate::convert(token).map_err(|err| err.to_string())?;
    Ok(report.render())
}

fn parse_number(raw: &str, what: &str) -> Result<f64, String> {
    raw.parse::<f64>().map_err(|_| format!("invalid {what}: {raw:?}"))
}

fn cmd_stefan_boltzmann(args: &[&str]) -> Result<String, String> {
    let (temp_k, emissivity) = match args {
        [temp] => (parse_number(temp, "temperature")?, 1.0),
        [temp, emissivity] => {
            (parse_number(temp, "temperature")?, parse_number(emissivity, "emissivity")?)
        }
        _ => return Err("usage: stefan_boltzmann <temperature-K> [emissivity]".to_string()),
    };

    let power = formulas::stefan_boltzmann(temp_k, emissivity);
    Ok(format!("Radiated Power: {power} W/m^2"))
}

fn cmd_distance_modulus(args: &[&str]) -> Result<String, String> {
    let mut m: Option<f64> = None;
    let mut m_abs: Option<f64> = None;
    let mut d_pc: Option<f64> = None;

    for arg in args {
        match arg.split_once('=') {
            Some(("m", value)) => m = Some(parse_number(value, "m")?),
            Some(("M", value)) => m_abs = Some(parse_number(value, "M")?),
            Some(("d", value)) => d_pc = Some(parse_number(value, "d")?),
            _ => return Err(format!("unrecognized argument {arg:?} (expected m=, M= or d=)")),
        }
    }

    match (m, m_abs, d_pc) {
        (Some(m), Some(m_abs), None) => {
            Ok(format!("d = {} pc", formulas::distance_from_modulus(m, m_abs)))
        }
        (Some(m), None, Some(d)) => Ok(format!("M = {}", formulas::absolute_magnitude(m, d))),
        (None, Some(m_abs), Some(d)) => {
            Ok(format!("m = {}", formulas::apparent_magnitude(m_abs, d)))
        }
        _ => Err("provide exactly two of: m, M, and d (in parsecs)".to_string()),
    }
}
