use alloc::string::String;

use snafu::{ensure, OptionExt, Snafu};

/// Why a routine script line was rejected.
#[derive(Debug, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum ParseError {
    #[snafu(display("line {line}: unknown command `{command}`"))]
    UnknownCommand { line: usize, command: String },

    #[snafu(display("line {line}: expected {expected} argument(s), found {found}"))]
    ArgumentCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[snafu(display("line {line}: `{value}` is not a valid number"))]
    InvalidNumber { line: usize, value: String },
}

fn arg_count(line: usize, args: &[&str], expected: usize) -> Result<(), ParseError> {
    ensure!(
        args.len() == expected,
        ArgumentCountSnafu {
            line,
            expected,
            found: args.len(),
        }
    );
    Ok(())
}

pub fn no_args(line: usize, args: &[&str]) -> Result<(), ParseError> {
    arg_count(line, args, 0)
}

pub fn single_f64(line: usize, args: &[&str]) -> Result<f64, ParseError> {
    arg_count(line, args, 1)?;
    args[0]
        .parse::<f64>()
        .ok()
        .context(InvalidNumberSnafu { line, value: args[0] })
}

pub fn single_u64(line: usize, args: &[&str]) -> Result<u64, ParseError> {
    arg_count(line, args, 1)?;
    args[0]
        .parse::<u64>()
        .ok()
        .context(InvalidNumberSnafu { line, value: args[0] })
}
