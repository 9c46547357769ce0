use passforge::pass::{CharacterClass, ClassSet};
use thiserror::Error;

use super::CliFlags;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Invalid character type {0:?}: use u, l, d, s")]
    InvalidClass(char),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--save" => flags.save = true,
            "-d" | "--default" => flags.default = true,
            "-u" | "--unique" => flags.unique = true,
            "-e" | "--entropy" => flags.entropy = true,
            "--hw" => flags.hw = true,
            "--no-upper" => flags.without.insert(CharacterClass::Uppercase),
            "--no-lower" => flags.without.insert(CharacterClass::Lowercase),
            "--no-digits" => flags.without.insert(CharacterClass::Digit),
            "--no-symbols" => flags.without.insert(CharacterClass::Symbol),
            "-l" | "--length" => {
                i += 1;
                // Kept as text: "0", "-3" or "abc" are reported by the generator
                flags.length = Some(value(args, i, arg)?.to_string());
            }
            "-n" | "--number" => {
                i += 1;
                let raw = value(args, i, arg)?;
                flags.number = Some(
                    raw.parse()
                        .map_err(|_| ParseError::InvalidNumber(raw.to_string()))?,
                );
            }
            "-c" | "--classes" => {
                i += 1;
                let raw = value(args, i, arg)?;
                flags.classes = Some(ClassSet::from_letters(raw).map_err(ParseError::InvalidClass)?);
            }
            "-o" | "--output" => {
                // Check if next arg exists and isn't another flag
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    i += 1;
                    flags.output = Some(args[i].clone());
                } else {
                    flags.output = Some(".".to_string());
                }
            }
            other => return Err(ParseError::UnknownArg(other.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, ParseError> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.to_string()))
}
