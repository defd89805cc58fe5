#![deny(warnings)]
use std::io::{BufRead, BufReader, Write};

use clap::Parser as CLI;
use propositional_formula_parser::{parse, LogicTree};

/// Prints the syntax tree of every propositional formula in the input
#[derive(CLI, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Input file with one formula per line
    #[arg(short, long, value_parser, default_value = "-")]
    input: clio::Input,

    /// Output file
    #[arg(short, long, value_parser, default_value = "-")]
    output: clio::Output,

    /// Reject formulas with lowercase atoms instead of normalizing them
    #[arg(long)]
    strict_case: bool,

    /// Print the distinct atoms of each formula below its tree
    #[arg(short, long)]
    atoms: bool,
}

struct CliError(String);

impl std::fmt::Debug for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn render(tree: &LogicTree, atoms: bool) -> String {
    let mut rendered = tree.to_string();
    if atoms {
        let letters: Vec<String> = tree.atoms().iter().map(char::to_string).collect();
        rendered.push('\n');
        rendered.push_str(&letters.join(" "));
    }
    rendered
}

fn main() -> Result<(), CliError> {
    env_logger::init();
    let mut args = Cli::parse();

    let reader = BufReader::new(&mut args.input);
    let mut rendered = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| CliError(format!("{e}")))?;
        if line.trim().is_empty() {
            continue;
        }
        let tree = parse(&line).map_err(|e| CliError(format!("line {}: {e}", number + 1)))?;
        if args.strict_case {
            if let Some(diagnostic) = tree.diagnostics().first() {
                return Err(CliError(format!("line {}: {diagnostic}", number + 1)));
            }
        }
        rendered.push(render(&tree, args.atoms));
    }

    for tree in rendered {
        writeln!(args.output, "{tree}").map_err(|e| CliError(format!("{e}")))?;
    }
    Ok(())
}
