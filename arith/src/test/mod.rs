//! End-to-end tests of arith, run against temporary directories.

use crate::{get_opts, run_arith, ArithResult, Opts};
use libarith::grade_answer;

use std::fs;
use tempfile::{tempdir, TempDir};

fn arg(dir: &TempDir) -> &str {
    dir.path().to_str().unwrap()
}

fn read(dir: &TempDir, file: &str) -> String {
    fs::read_to_string(dir.path().join(file)).unwrap()
}

/// Writes `contents` to `file` in `dir`, returning the file's path.
fn write(dir: &TempDir, file: &str, contents: &str) -> String {
    let path = dir.path().join(file);
    fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_owned()
}

fn opts(args: &[&str]) -> Result<Opts, clap::Error> {
    get_opts(
        |app| app.get_matches_from_safe(std::iter::once("arith").chain(args.iter().copied())),
        false,
    )
}

fn run(args: &[&str]) -> ArithResult {
    run_arith(opts(args).unwrap())
}

/// Splits `N. text` lines, checking that they are numbered from 1.
fn numbered_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .enumerate()
        .map(|(i, line)| {
            let prefix = format!("{}. ", i + 1);
            assert!(line.starts_with(&prefix), "{:?} is not entry {}", line, i + 1);
            line[prefix.len()..].to_owned()
        })
        .collect()
}

mod generate {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn writes_exercises_and_answers() {
        let dir = tempdir().unwrap();
        let result = run(&["-n", "20", "-r", "10", "--seed", "1", "-d", arg(&dir)]);
        assert_eq!(result.code, 0, "{}", result.stderr);
        assert!(result.stdout.starts_with("Generated 20 exercises"));

        let exercises = numbered_lines(&read(&dir, "Exercises.txt"));
        let answers = numbered_lines(&read(&dir, "Answers.txt"));
        assert_eq!(exercises.len(), 20);
        assert_eq!(answers.len(), 20);
        for (exercise, answer) in exercises.iter().zip(answers.iter()) {
            assert!(exercise.ends_with(" ="), "{:?}", exercise);
            let expression = exercise.trim_end_matches(" =");
            assert!(grade_answer(expression, answer).is_correct());
        }
    }

    #[test]
    fn same_seed_same_files() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        for dir in &[&first, &second] {
            let result = run(&["-n", "15", "-r", "20", "--seed", "99", "-d", arg(&dir)]);
            assert_eq!(result.code, 0, "{}", result.stderr);
        }
        assert_eq!(read(&first, "Exercises.txt"), read(&second, "Exercises.txt"));
        assert_eq!(read(&first, "Answers.txt"), read(&second, "Answers.txt"));
    }

    #[test]
    fn degenerate_range() {
        let dir = tempdir().unwrap();
        let result = run(&["-n", "5", "-r", "1", "-d", arg(&dir)]);
        assert_eq!(result.code, 1);
        assert!(result.stderr.starts_with("error: range 1 is too small"));
        assert!(!dir.path().join("Exercises.txt").exists());
    }

    #[test]
    fn missing_out_dir() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");
        let result = run(&["-n", "1", "-r", "10", "-d", missing.to_str().unwrap()]);
        assert_eq!(result.code, 1);
        assert!(result.stderr.contains("could not write"));
        assert!(result.stderr.contains("Exercises.txt"));
    }
}

mod grade {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn generated_answers_are_all_correct() {
        let dir = tempdir().unwrap();
        let result = run(&["-n", "10", "-r", "10", "--seed", "3", "-d", arg(&dir)]);
        assert_eq!(result.code, 0, "{}", result.stderr);

        let exercises = dir.path().join("Exercises.txt");
        let answers = dir.path().join("Answers.txt");
        let result = run(&[
            "-e",
            exercises.to_str().unwrap(),
            "-a",
            answers.to_str().unwrap(),
            "-d",
            arg(&dir),
        ]);
        assert_eq!(result.code, 0, "{}", result.stderr);
        assert_eq!(
            read(&dir, "Grade.txt"),
            "Correct: 10 (1, 2, 3, 4, 5, 6, 7, 8, 9, 10)\nWrong: 0 ()\n"
        );
    }

    #[test]
    fn mixed_verdicts() {
        let dir = tempdir().unwrap();
        let exercises = write(
            &dir,
            "Exercises.txt",
            "1. 1 + 2 =\n2. 1/2 ÷ 1/4 =\n\n3. 3 × 3 =\n4. 1 ÷ 0 =\n5. 5 - 1 =\n",
        );
        let answers = write(&dir, "Answers.txt", "1. 3\n2. 4/2\n3. 8\n4. 0\n");
        let result = run(&["-e", &exercises, "-a", &answers, "-d", arg(&dir)]);
        assert_eq!(result.code, 0);
        assert_eq!(read(&dir, "Grade.txt"), "Correct: 2 (1, 2)\nWrong: 3 (3, 4, 5)\n");
        assert!(result.stdout.starts_with("Correct: 2 (1, 2)\nWrong: 3 (3, 4, 5)"));
        assert!(result.stderr.contains("E0001"));
    }

    #[test]
    fn unreadable_lines_are_wrong() {
        let dir = tempdir().unwrap();
        let exercises = write(&dir, "Exercises.txt", "1. 1 + 1 =\n1 + 2 =\n3. 2 × 2 =\n");
        let answers = write(&dir, "Answers.txt", "1. 2\n2. 3\nthree: 4\n");
        let result = run(&["-e", &exercises, "-a", &answers, "-d", arg(&dir)]);
        assert_eq!(result.code, 0);
        assert_eq!(read(&dir, "Grade.txt"), "Correct: 1 (1)\nWrong: 2 (2, 3)\n");
    }

    #[test]
    fn invalid_answer_is_reported() {
        let dir = tempdir().unwrap();
        let exercises = write(&dir, "Exercises.txt", "1. 1/2 + 2 =\n");
        let answers = write(&dir, "Answers.txt", "1. 2'3/2\n");
        let result = run(&["-e", &exercises, "-a", &answers, "-d", arg(&dir)]);
        assert_eq!(read(&dir, "Grade.txt"), "Correct: 0 ()\nWrong: 1 (1)\n");
        assert!(result.stderr.starts_with("warning: answer to problem 1"));
    }

    #[test]
    fn missing_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("Nope.txt");
        let missing = missing.to_str().unwrap();
        let result = run(&["-e", missing, "-a", missing, "-d", arg(&dir)]);
        assert_eq!(result.code, 1);
        assert!(result.stderr.starts_with("error: could not read"));
        assert!(result.stderr.contains("Nope.txt"));
    }
}

mod solve {
    use super::*;
    use pretty_assertions::assert_eq;

    macro_rules! solve_tests {
        ($($name:ident: $args:expr => $stdout:expr)*) => {
        $(
            #[test]
            fn $name() {
                let result = run(&$args);
                assert_eq!(result.code, 0, "{}", result.stderr);
                assert_eq!(result.stdout, $stdout);
            }
        )*
        }
    }

    solve_tests! {
        pretty:           ["--solve", "(1+2) × 3"]                      => "(1 + 2) × 3 = 9"
        mixed_answer:     ["--solve", "1/2 + 1"]                        => "1/2 + 1 = 1'1/2"
        s_expression:     ["--solve", "(1 + 2) × 3", "-o", "s-expression"] => "(× (+ 1 2) 3)"
    }

    #[test]
    fn division_by_zero() {
        let result = run(&["--solve", "1 ÷ (2 - 2)"]);
        assert_eq!(result.code, 1);
        assert!(result.stdout.is_empty());
        assert!(result.stderr.contains("error[E0001]: Division by zero"));
    }

    #[test]
    fn malformed() {
        let result = run(&["--solve", "1 * 2"]);
        assert_eq!(result.code, 1);
        assert!(result.stderr.contains("S0001"));
    }

    #[test]
    fn overlong_chain() {
        let chain = format!("{}1", "1 + ".repeat(20_000));
        let result = run(&["--solve", &chain]);
        assert_eq!(result.code, 1);
        assert!(result.stdout.is_empty());
        assert!(result.stderr.contains("error[P0005]"), "{}", result.stderr);
    }
}

mod explain {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_code() {
        let result = run(&["--explain", "P0001"]);
        assert_eq!(result.code, 0);
        assert!(result.page);
        assert!(result.stdout.contains("not connected"));
    }

    #[test]
    fn unknown_code() {
        let result = run(&["--explain", "X9999"]);
        assert_eq!(result.code, 1);
        assert_eq!(result.stderr, "error: X9999 is not a diagnostic code");
    }
}

mod modes {
    use super::*;
    use pretty_assertions::assert_eq;

    macro_rules! mode_error_tests {
        ($($name:ident: $args:expr => $msg:expr)*) => {
        $(
            #[test]
            fn $name() {
                let result = run(&$args);
                assert_eq!(result.code, 1);
                assert!(result.stdout.is_empty());
                assert!(result.stderr.starts_with("error: "), "{}", result.stderr);
                assert!(result.stderr.contains($msg), "{}", result.stderr);
            }
        )*
        }
    }

    mode_error_tests! {
        count_only:         ["-n", "10"]                            => "-n requires"
        range_only:         ["-r", "10"]                            => "-r requires"
        exercises_only:     ["-e", "Exercises.txt"]                 => "-e requires"
        answers_only:       ["-a", "Answers.txt"]                   => "-a requires"
        generate_and_grade: ["-n", "1", "-r", "10", "-e", "x", "-a", "y"] => "cannot be combined"
        solve_and_explain:  ["--solve", "1", "--explain", "E0001"]  => "cannot be combined"
    }

    #[test]
    fn nothing_to_do() {
        let result = run(&[]);
        assert_eq!(result.code, 1);
        assert!(result.stderr.starts_with("error: nothing to do"));
    }

    #[test]
    fn non_numeric_count() {
        assert!(opts(&["-n", "ten", "-r", "10"]).is_err());
    }

    #[test]
    fn verbosity() {
        assert_eq!(opts(&["-vv", "--explain", "E0001"]).unwrap().verbosity, 2);
    }
}
