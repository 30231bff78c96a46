use std::{error::Error, path::PathBuf, process};

use crate::dir::FoyerDirectory;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    DatadirPath(FoyerDirectory),
}

pub fn parse_args(args: Vec<String>) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", crate::VERSION);
        process::exit(0);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: foyer [OPTIONS]

Options:
    --datadir <PATH>    Path of the foyer datadir
    -v, --version       Display foyer version
    -h, --help          Print help
        "#
        );
        process::exit(0);
    }

    for (i, arg) in args.iter().enumerate().skip(1) {
        if arg == "--datadir" {
            if let Some(a) = args.get(i + 1) {
                res.push(Arg::DatadirPath(FoyerDirectory::new(PathBuf::from(a))));
            } else {
                return Err("missing arg to --datadir".into());
            }
        } else if arg.starts_with("--") {
            return Err(format!("unknown option: {}", arg).into());
        }
    }

    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        assert!(parse_args(vec!["foyer".into(), "--meth".into()]).is_err());
        assert!(parse_args(vec!["foyer".into(), "--datadir".into()]).is_err());
        assert_eq!(
            Some(Vec::new()),
            parse_args(vec!["foyer".into()]).ok(),
        );
        assert_eq!(
            Some(vec![Arg::DatadirPath(FoyerDirectory::new(PathBuf::from(
                "hello"
            )))]),
            parse_args(
                "foyer --datadir hello"
                    .split(' ')
                    .map(|a| a.to_string())
                    .collect()
            )
            .ok()
        );
    }
}
