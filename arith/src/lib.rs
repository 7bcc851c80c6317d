//! The arith app. It generates exercise files and grades answer files using
//! [libarith](libarith).

#![deny(missing_docs)]

#[cfg(test)]
mod test;

mod diagnostics;
use diagnostics::DiagnosticEmitter;

mod files;
use files::{Entry, LineError};

use libarith::diagnostics::Diagnostic;
use libarith::scanner::ScanResult;
use libarith::{
    evaluate, grade_answer, parse_expression, scan, Emit, EmitFormat, Generator, GeneratorConfig,
    Grade, Verdict, WrongReason,
};
use log::{info, warn};
use std::path::PathBuf;

/// Options to run arith with.
pub struct Opts {
    /// Number of exercises to generate.
    pub count: Option<usize>,
    /// Operands of generated exercises are drawn below this bound.
    pub range: Option<u32>,
    /// Exercise file to grade.
    pub exercise_file: Option<PathBuf>,
    /// Answer file to grade.
    pub answer_file: Option<PathBuf>,
    /// An expression to evaluate.
    pub solve: Option<String>,
    /// How the result of `solve` should be emitted.
    pub emit_format: String,
    /// When is [Some](Option::Some) diagnostic code, will explain that code.
    pub explain_diagnostic: Option<String>,
    /// Directory output files are written to.
    pub out_dir: PathBuf,
    /// Seed for exercise generation. Drawn from entropy when [None](Option::None).
    pub seed: Option<u64>,
    /// Number of times `-v` was given.
    pub verbosity: u64,
    /// When true, diagnostics will be colored.
    pub color: bool,
}

/// Parses an optional numeric argument.
fn numeric_arg<T: std::str::FromStr>(
    matches: &clap::ArgMatches,
    name: &str,
) -> Result<Option<T>, clap::Error> {
    match matches.value_of(name) {
        None => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|_| {
            clap::Error::with_description(
                &format!("invalid value \"{}\" for --{}: expected a number", value, name),
                clap::ErrorKind::InvalidValue,
            )
        }),
    }
}

/// Parses [Opts](self::Opts) from the command line or given a parser that acts on the clap
/// [App](clap::App).
pub fn get_opts<P>(parser: P, color: bool) -> Result<Opts, clap::Error>
where
    P: for<'a> FnOnce(clap::App<'a, '_>) -> Result<clap::ArgMatches<'a>, clap::Error>,
{
    let app = clap::App::new(clap::crate_name!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .arg(
            clap::Arg::with_name("count")
                .short("n")
                .value_name("count")
                .help("Number of exercises to generate. Requires -r.")
                .takes_value(true),
        )
        .arg(
            clap::Arg::with_name("range")
                .short("r")
                .value_name("range")
                .help("Generated integers are below, and denominators at most, this bound.")
                .takes_value(true),
        )
        .arg(
            clap::Arg::with_name("exercise-file")
                .short("e")
                .value_name("exercise file")
                .help("Exercise file to grade. Requires -a.")
                .takes_value(true),
        )
        .arg(
            clap::Arg::with_name("answer-file")
                .short("a")
                .value_name("answer file")
                .help("Answer file to grade. Requires -e.")
                .takes_value(true),
        )
        .arg(
            clap::Arg::with_name("solve")
                .long("solve")
                .value_name("expression")
                .help("Evaluate an expression, like \"(1 + 2) × 3\".")
                .takes_value(true),
        )
        .arg(
            clap::Arg::with_name("output-form")
                .short("o")
                .long("output-form")
                .next_line_help(true)
                .help(
                    "Emit format of --solve. Possible values:\n\
                    \tpretty:       The expression and its value, like \"1 + 2 = 3\".\n\
                    \ts-expression: Prefixed s-expression, like \"(+ 1 2)\".\n\
                    \tdebug:        Opaque internal representation. Note: this format is not stable.\n\
                    ",
                )
                .hide_possible_values(true)
                .default_value("pretty")
                .takes_value(true)
                .possible_values(&["pretty", "s-expression", "debug"]),
        )
        .arg(
            clap::Arg::with_name("explain")
                .long("explain")
                .value_name("diagnostic")
                .help("Provide a detailed explanation for a diagnostic code.")
                .takes_value(true),
        )
        .arg(
            clap::Arg::with_name("out-dir")
                .short("d")
                .long("out-dir")
                .value_name("dir")
                .help("Directory to write exercise, answer, and grade files to.")
                .default_value(".")
                .takes_value(true),
        )
        .arg(
            clap::Arg::with_name("seed")
                .long("seed")
                .value_name("seed")
                .help("Seed exercise generation, making it reproducible.")
                .takes_value(true),
        )
        .arg(
            clap::Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Log more. May be given up to three times."),
        );
    let matches = parser(app)?;

    Ok(Opts {
        count: numeric_arg(&matches, "count")?,
        range: numeric_arg(&matches, "range")?,
        exercise_file: matches.value_of("exercise-file").map(PathBuf::from),
        answer_file: matches.value_of("answer-file").map(PathBuf::from),
        solve: matches.value_of("solve").map(str::to_owned),
        emit_format: matches.value_of("output-form").unwrap_or("pretty").into(),
        explain_diagnostic: matches.value_of("explain").map(str::to_owned),
        out_dir: PathBuf::from(matches.value_of("out-dir").unwrap_or(".")),
        seed: numeric_arg(&matches, "seed")?,
        verbosity: matches.occurrences_of("verbose"),
        color,
    })
}

/// Output of an arith execution.
#[derive(Default)]
pub struct ArithResult {
    /// Exit code
    pub code: i32,
    /// Emit for stdout
    pub stdout: String,
    /// Emit for stderr
    pub stderr: String,
    /// Whether the stdout should be emit as paged
    pub page: bool,
}

impl ArithResult {
    fn ok(stdout: String) -> Self {
        Self {
            stdout,
            ..Default::default()
        }
    }

    fn error(msg: impl std::fmt::Display) -> Self {
        Self {
            code: 1,
            stderr: format!("error: {}", msg),
            ..Default::default()
        }
    }
}

/// The one thing an invocation of arith does.
enum Mode {
    Generate { count: usize, range: u32 },
    Grade { exercises: PathBuf, answers: PathBuf },
    Solve(String),
    Explain(String),
}

impl Mode {
    fn from_opts(opts: &Opts) -> Result<Self, String> {
        let generate = opts.count.is_some() || opts.range.is_some();
        let grade = opts.exercise_file.is_some() || opts.answer_file.is_some();
        let requested = [generate, grade, opts.solve.is_some(), opts.explain_diagnostic.is_some()]
            .iter()
            .filter(|&&mode| mode)
            .count();
        if requested == 0 {
            return Err(
                "nothing to do; pass -n and -r to generate exercises, or -e and -a to grade answers"
                    .to_owned(),
            );
        }
        if requested > 1 {
            return Err(
                "generating (-n, -r), grading (-e, -a), --solve, and --explain cannot be combined"
                    .to_owned(),
            );
        }

        if generate {
            return match (opts.count, opts.range) {
                (Some(count), Some(range)) => Ok(Mode::Generate { count, range }),
                (Some(_), None) => Err("-n requires a range given with -r".to_owned()),
                _ => Err("-r requires a number of exercises given with -n".to_owned()),
            };
        }
        if grade {
            return match (&opts.exercise_file, &opts.answer_file) {
                (Some(exercises), Some(answers)) => Ok(Mode::Grade {
                    exercises: exercises.clone(),
                    answers: answers.clone(),
                }),
                (Some(_), None) => Err("-e requires an answer file given with -a".to_owned()),
                _ => Err("-a requires an exercise file given with -e".to_owned()),
            };
        }
        match (&opts.solve, &opts.explain_diagnostic) {
            (Some(expression), _) => Ok(Mode::Solve(expression.clone())),
            (None, Some(code)) => Ok(Mode::Explain(code.clone())),
            (None, None) => Err("nothing to do".to_owned()),
        }
    }
}

/// Runs arith end-to-end.
pub fn run_arith(opts: Opts) -> ArithResult {
    let mode = match Mode::from_opts(&opts) {
        Ok(mode) => mode,
        Err(msg) => return ArithResult::error(msg),
    };

    match mode {
        Mode::Generate { count, range } => generate(&opts, count, range),
        Mode::Grade { exercises, answers } => grade(&opts, exercises, answers),
        Mode::Solve(expression) => solve(&opts, &expression),
        Mode::Explain(code) => explain(&code),
    }
}

fn generate(opts: &Opts, count: usize, range: u32) -> ArithResult {
    let config = GeneratorConfig::new(range);
    let mut generator = match opts.seed {
        Some(seed) => Generator::seeded(config, seed),
        None => Generator::from_entropy(config),
    };

    let exercises = match generator.generate(count) {
        Ok(exercises) => exercises,
        Err(err) => return ArithResult::error(err),
    };
    match files::write_exercises(&opts.out_dir, &exercises) {
        Ok((exercise_path, answer_path)) => ArithResult::ok(format!(
            "Generated {} exercises into {} and {}",
            exercises.len(),
            exercise_path.display(),
            answer_path.display()
        )),
        Err(err) => ArithResult::error(err),
    }
}

fn grade(opts: &Opts, exercise_path: PathBuf, answer_path: PathBuf) -> ArithResult {
    let exercises = match files::read_exercises(&exercise_path) {
        Ok(exercises) => exercises,
        Err(err) => return ArithResult::error(err),
    };
    let answers = match files::read_answers(&answer_path) {
        Ok(answers) => answers,
        Err(err) => return ArithResult::error(err),
    };

    let mut warnings = Vec::new();
    let verdicts = files::pair(exercises, answers)
        .into_iter()
        .map(|(exercise, answer)| {
            let graded = grade_entry(exercise, answer);
            if let Some(warning) = explain_verdict(opts, &exercise_path, &graded) {
                warnings.push(warning);
            }
            graded.verdict
        })
        .collect::<Vec<_>>();

    let grade = Grade::from_verdicts(&verdicts);
    info!(
        "graded {} problems: {} correct, {} wrong",
        verdicts.len(),
        grade.correct.len(),
        grade.wrong.len()
    );
    match files::write_grade(&opts.out_dir, &grade) {
        Ok(path) => ArithResult {
            stdout: format!("{}\n\nGrade written to {}", grade, path.display()),
            stderr: warnings.join("\n"),
            ..Default::default()
        },
        Err(err) => ArithResult::error(err),
    }
}

/// A verdict, with the exercise it was reached for when it could be read.
struct GradedEntry {
    exercise: Option<Entry>,
    verdict: Verdict,
}

fn grade_entry(
    exercise: Result<Entry, LineError>,
    answer: Option<Result<Entry, LineError>>,
) -> GradedEntry {
    let exercise = match exercise {
        Ok(exercise) => exercise,
        Err(err) => {
            warn!("{}", err);
            return GradedEntry {
                exercise: None,
                verdict: Verdict::Wrong(WrongReason::Unreadable),
            };
        }
    };
    let verdict = match answer {
        Some(Ok(answer)) => grade_answer(&exercise.text, &answer.text),
        Some(Err(err)) => {
            warn!("{}", err);
            Verdict::Wrong(WrongReason::Missing)
        }
        None => Verdict::Wrong(WrongReason::Missing),
    };
    GradedEntry {
        exercise: Some(exercise),
        verdict,
    }
}

/// Renders why an exercise could not be graded, if it could not.
fn explain_verdict(
    opts: &Opts,
    exercise_path: &std::path::Path,
    graded: &GradedEntry,
) -> Option<String> {
    let exercise = graded.exercise.as_ref()?;
    let origin = format!("{}:{}", exercise_path.display(), exercise.line);
    match &graded.verdict {
        Verdict::Wrong(WrongReason::InvalidExpression(err)) => Some(
            DiagnosticEmitter::new(Some(origin.as_str()), &exercise.text, opts.color)
                .emit(err.diagnostics()),
        ),
        Verdict::Wrong(WrongReason::InvalidAnswer(err)) => Some(format!(
            "warning: answer to problem {} ({}): {}",
            exercise.index, origin, err
        )),
        _ => None,
    }
}

fn solve(opts: &Opts, expression: &str) -> ArithResult {
    let emitter = DiagnosticEmitter::new(None, expression, opts.color);
    let failed = |diagnostics: &[Diagnostic]| ArithResult {
        code: 1,
        stderr: emitter.emit(diagnostics),
        ..Default::default()
    };

    let ScanResult {
        tokens,
        diagnostics,
    } = scan(expression);
    if !diagnostics.is_empty() {
        return failed(diagnostics.as_slice());
    }
    let (parsed, diagnostics) = parse_expression(tokens);
    let parsed = match parsed {
        Some(parsed) if diagnostics.is_empty() => parsed,
        _ => return failed(diagnostics.as_slice()),
    };

    match EmitFormat::from(opts.emit_format.as_str()) {
        EmitFormat::Pretty => match evaluate(&parsed) {
            Ok(evaluation) => {
                ArithResult::ok(format!("{} = {}", parsed.emit_pretty(), evaluation.value))
            }
            Err(diagnostic) => failed(std::slice::from_ref(&diagnostic)),
        },
        form => ArithResult::ok(parsed.emit(form)),
    }
}

fn explain(code: &str) -> ArithResult {
    let codes = Diagnostic::all_codes_with_explanations();
    match codes.get::<str>(code) {
        Some(explanation) => ArithResult {
            stdout: explanation.to_string(),
            page: true,
            ..Default::default()
        },
        None => ArithResult::error(format!("{} is not a diagnostic code", code)),
    }
}
