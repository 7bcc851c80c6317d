//! Line-oriented exercise, answer, and grade files.
//!
//! Every line of an exercise or answer file is an entry numbered from 1, like `3. 1/2 + 1 =` or
//! `3. 1'1/2`. Blank lines are skipped.

use libarith::{Exercise, Grade};

use log::warn;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const EXERCISE_FILE: &str = "Exercises.txt";
pub const ANSWER_FILE: &str = "Answers.txt";
pub const GRADE_FILE: &str = "Grade.txt";

/// A file that could not be read or written.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("could not read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("could not write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// A line that is not a numbered entry.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum LineError {
    #[error("line {line} has no `.` after its number")]
    MissingIndex { line: usize },
    #[error("line {line} starts with \"{index}\", which is not a problem number")]
    BadIndex { line: usize, index: String },
}

/// A numbered entry of an exercise or answer file.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Entry {
    /// The line the entry was read from.
    pub line: usize,
    pub index: usize,
    pub text: String,
}

fn read(path: &Path) -> Result<String, FileError> {
    fs::read_to_string(path).map_err(|source| FileError::Read {
        path: path.to_owned(),
        source,
    })
}

fn write(path: &Path, contents: &str) -> Result<(), FileError> {
    fs::write(path, contents).map_err(|source| FileError::Write {
        path: path.to_owned(),
        source,
    })
}

/// Splits file contents into numbered entries, skipping blank lines.
pub fn parse_entries(contents: &str) -> Vec<Result<Entry, LineError>> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(i, text)| -> Result<Entry, LineError> {
            let line = i + 1;
            let mut parts = text.splitn(2, '.');
            let index = parts.next().unwrap_or_default().trim();
            let rest = parts.next().ok_or(LineError::MissingIndex { line })?;
            let index = index.parse::<usize>().map_err(|_| LineError::BadIndex {
                line,
                index: index.to_owned(),
            })?;
            Ok(Entry {
                line,
                index,
                text: rest.trim().to_owned(),
            })
        })
        .collect()
}

/// Reads the expressions of an exercise file, without their trailing `=`.
pub fn read_exercises(path: &Path) -> Result<Vec<Result<Entry, LineError>>, FileError> {
    let entries = parse_entries(&read(path)?)
        .into_iter()
        .map(|entry| {
            entry.map(|mut entry| {
                if let Some(expression) = entry.text.strip_suffix('=') {
                    entry.text = expression.trim_end().to_owned();
                }
                entry
            })
        })
        .collect();
    Ok(entries)
}

/// Reads the answers of an answer file.
pub fn read_answers(path: &Path) -> Result<Vec<Result<Entry, LineError>>, FileError> {
    Ok(parse_entries(&read(path)?))
}

/// Renders exercises as the contents of an exercise file and an answer file.
pub fn render_exercises(exercises: &[Exercise]) -> (String, String) {
    let mut exercise_file = String::new();
    let mut answer_file = String::new();
    for (i, exercise) in exercises.iter().enumerate() {
        exercise_file.push_str(&format!("{}. {} =\n", i + 1, exercise.expression));
        answer_file.push_str(&format!("{}. {}\n", i + 1, exercise.answer));
    }
    (exercise_file, answer_file)
}

/// Writes the exercise and answer files into `dir`, returning their paths.
pub fn write_exercises(
    dir: &Path,
    exercises: &[Exercise],
) -> Result<(PathBuf, PathBuf), FileError> {
    let (exercise_contents, answer_contents) = render_exercises(exercises);
    let exercise_path = dir.join(EXERCISE_FILE);
    let answer_path = dir.join(ANSWER_FILE);
    write(&exercise_path, &exercise_contents)?;
    write(&answer_path, &answer_contents)?;
    Ok((exercise_path, answer_path))
}

/// Writes the grade file into `dir`, returning its path.
pub fn write_grade(dir: &Path, grade: &Grade) -> Result<PathBuf, FileError> {
    let path = dir.join(GRADE_FILE);
    write(&path, &format!("{}\n", grade))?;
    Ok(path)
}

/// Pairs exercises with answers by position. Exercises without an answer are paired with
/// nothing; answers without an exercise are dropped.
pub fn pair<E, A>(exercises: Vec<E>, answers: Vec<A>) -> Vec<(E, Option<A>)> {
    if answers.len() > exercises.len() {
        warn!(
            "ignoring {} answers without an exercise",
            answers.len() - exercises.len()
        );
    }
    let mut answers = answers.into_iter();
    exercises
        .into_iter()
        .map(|exercise| (exercise, answers.next()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(line: usize, index: usize, text: &str) -> Result<Entry, LineError> {
        Ok(Entry {
            line,
            index,
            text: text.to_owned(),
        })
    }

    #[test]
    fn entries_skip_blank_lines() {
        let entries = parse_entries("1. 1 + 2 =\n\n  \n2. 3/4 ÷ 1/2 =\n");
        assert_eq!(
            entries,
            vec![entry(1, 1, "1 + 2 ="), entry(4, 2, "3/4 ÷ 1/2 =")]
        );
    }

    #[test]
    fn entry_splits_on_first_dot() {
        assert_eq!(parse_entries("12. 1'1/2"), vec![entry(1, 12, "1'1/2")]);
    }

    #[test]
    fn malformed_entries() {
        assert_eq!(
            parse_entries("1 + 2 =\nfirst. 3\n"),
            vec![
                Err(LineError::MissingIndex { line: 1 }),
                Err(LineError::BadIndex {
                    line: 2,
                    index: "first".to_owned()
                }),
            ]
        );
    }

    #[test]
    fn render_layout() {
        let exercises = vec![
            Exercise {
                expression: "(1 + 2) × 3".to_owned(),
                answer: 9.into(),
            },
            Exercise {
                expression: "1/2 + 1".to_owned(),
                answer: "1'1/2".parse().unwrap(),
            },
        ];
        let (exercise_file, answer_file) = render_exercises(&exercises);
        assert_eq!(exercise_file, "1. (1 + 2) × 3 =\n2. 1/2 + 1 =\n");
        assert_eq!(answer_file, "1. 9\n2. 1'1/2\n");
    }

    #[test]
    fn pairs_by_position() {
        assert_eq!(
            pair(vec![1, 2, 3], vec!["a", "b"]),
            vec![(1, Some("a")), (2, Some("b")), (3, None)]
        );
        assert_eq!(pair(vec![1], vec!["a", "b"]), vec![(1, Some("a"))]);
    }
}
