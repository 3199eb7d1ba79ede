use std::error::Error as _;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::Env;
use log::{debug, info};

use twosum_core::cases;
use twosum_core::two_sum::{self, Pair};

/// Find two entries of a sequence that sum to a target.
///
/// With `--target`, searches the given numbers and prints the pair of indices, or `[]` if
/// there is none. With `--cases`, runs a JSON file of cases and prints the outcomes, exiting
/// with status 1 if any case fails. With neither, runs the built-in examples. Errors go to
/// stderr whatever the log level.
#[derive(Parser, Debug)]
#[clap(name = "twosum", version, allow_negative_numbers = true)]
struct Opts {
    /// Sum to look for among NUMS
    #[clap(long, conflicts_with = "cases")]
    target: Option<i64>,
    /// Sequence to search
    #[clap(requires = "target")]
    nums: Vec<i64>,
    /// JSON array of `{"input": {"nums", "target"}, "output"}` cases
    #[clap(long, value_name = "FILE")]
    cases: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let opts = Opts::parse();
    debug!("options: {:?}", opts);
    match run(opts) {
        Ok(true) => (),
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("twosum: {}", describe(&e));
            process::exit(1);
        }
    }
}

/// Returns whether every check passed.
fn run(opts: Opts) -> Result<bool, cases::Error> {
    if let Some(target) = opts.target {
        println!("{}", render(two_sum::find(&opts.nums, target)));
        return Ok(true);
    }
    let cases = match opts.cases {
        Some(path) => cases::load_path(&path)?,
        None => cases::builtin(),
    };
    let outcomes = cases::run(&cases);
    println!("{}", serde_json::to_string_pretty(&outcomes)?);
    let summary = cases::Summary::of(&outcomes);
    info!("{} passed, {} failed", summary.passed, summary.failed);
    Ok(summary.all_passed())
}

fn render(pair: Option<Pair>) -> String {
    match pair {
        Some(pair) => pair.to_string(),
        None => "[]".to_string(),
    }
}

/// Formats an error followed by its chain of causes.
fn describe(e: &cases::Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ErrorKind;
    use std::io::Write;

    fn parse(args: &[&str]) -> Result<Opts, clap::Error> {
        Opts::try_parse_from(std::iter::once("twosum").chain(args.iter().copied()))
    }

    fn case_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_negative_numbers_are_values() {
        let opts = parse(&["--target", "0", "-3", "4", "3", "90"]).unwrap();
        assert_eq!(opts.target, Some(0));
        assert_eq!(opts.nums, vec![-3, 4, 3, 90]);
        assert_eq!(render(two_sum::find(&opts.nums, 0)), "[0, 2]");

        let opts = parse(&["--target", "-8", "-1", "-7"]).unwrap();
        assert_eq!(opts.target, Some(-8));
        assert_eq!(opts.nums, vec![-1, -7]);
    }

    #[test]
    fn test_target_conflicts_with_cases() {
        let err = parse(&["--target", "9", "--cases", "cases.json"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_nums_require_target() {
        let err = parse(&["2", "7"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_no_arguments() {
        let opts = parse(&[]).unwrap();
        assert_eq!(opts.target, None);
        assert!(opts.nums.is_empty());
        assert_eq!(opts.cases, None);
        assert!(run(opts).unwrap());
    }

    #[test]
    fn test_query_without_pair() {
        assert_eq!(render(None), "[]");
        assert_eq!(render(Some(Pair::new(1, 2))), "[1, 2]");

        // An empty sequence is a valid query with no answer.
        let opts = parse(&["--target", "9"]).unwrap();
        assert!(opts.nums.is_empty());
        assert_eq!(render(two_sum::find(&opts.nums, 9)), "[]");
        assert!(run(opts).unwrap());
    }

    #[test]
    fn test_case_file_results() {
        let passing = case_file(r#"[{"input": {"nums": [3, 3], "target": 6}, "output": [0, 1]}]"#);
        let opts = parse(&["--cases", passing.path().to_str().unwrap()]).unwrap();
        assert!(run(opts).unwrap());

        let failing = case_file(
            r#"[
                {"input": {"nums": [3, 3], "target": 6}, "output": [0, 1]},
                {"input": {"nums": [1, 2, 3], "target": 100}, "output": [0, 2]}
            ]"#,
        );
        let opts = parse(&["--cases", failing.path().to_str().unwrap()]).unwrap();
        assert!(!run(opts).unwrap());
    }

    #[test]
    fn test_unreadable_case_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let opts = parse(&["--cases", missing.to_str().unwrap()]).unwrap();
        let err = run(opts).unwrap_err();
        let message = describe(&err);
        assert!(
            message.starts_with(&format!("reading {}: ", missing.display())),
            "{}",
            message
        );
        // The cause is listed once.
        assert_eq!(message.matches(": ").count(), 1, "{}", message);
    }
}
