use std::{fmt::Display, path::PathBuf, process::exit, time::Instant};

use log::debug;
use logging::{pink, purple};
use sentiment::{evaluate, lines_from_file, normalize, predict_score, NeutralBand, WordValues};
use settings::{get_config_location, parse_location, read_config};

mod report;

#[derive(Debug, Default, PartialEq)]
struct Options {
    train: Option<PathBuf>,
    eval: Option<PathBuf>,
    predict: Vec<String>,
    dump: bool,
    table: bool,
}

#[derive(Debug, PartialEq)]
enum Action {
    Version,
    Help,
    Run(Options),
}

fn main() {
    let args = std::env::args().skip(1).collect::<Vec<String>>();
    let options = match parse_args(&args) {
        Ok(Action::Version) => return print_version(),
        Ok(Action::Help) => return print_help(),
        Ok(Action::Run(options)) => options,
        Err(msg) => {
            eprintln!("{}", msg);
            exit(1);
        }
    };
    let config = read_config().unwrap_or_else(|e| fail(e));
    if let Err(e) = logging::init(&config.general.log_level) {
        eprintln!("could not start logging: {}", e);
    }
    let band = NeutralBand::new(config.model.neutral_lower, config.model.neutral_upper)
        .unwrap_or_else(|e| fail(e));
    let training_file = options
        .train
        .clone()
        .unwrap_or_else(|| parse_location(&config.general.training_file));

    let now = Instant::now();
    let model = WordValues::from_file(&training_file, band).unwrap_or_else(|e| fail(e));
    debug!("training took: {}ms", now.elapsed().as_millis());

    if options.dump {
        println!("{}", model.to_json().unwrap_or_else(|e| fail(e)));
    }
    if options.table {
        println!("{}", report::model_table(&model));
    }

    if !options.predict.is_empty() {
        for review in options.predict.iter() {
            let score = predict_score(&model, &normalize(review));
            println!("Predicted: {} Review: {}", report::format_score(&score), review);
        }
        return;
    }

    let test_file = options
        .eval
        .unwrap_or_else(|| parse_location(&config.general.test_file));
    let lines = lines_from_file(&test_file).unwrap_or_else(|e| fail(e));
    let evaluation = evaluate(&model, &lines);
    purple(&format!(" {} ", test_file.display()));
    for prediction in evaluation.predictions.iter() {
        println!("{}", report::prediction_line(prediction));
    }
    pink(&format!(" {} ", report::summary(&evaluation)));
}

fn parse_args(args: &[String]) -> Result<Action, String> {
    let mut options = Options::default();
    let mut args = args.iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-v" | "--version" => return Ok(Action::Version),
            "-h" | "--help" => return Ok(Action::Help),
            "-d" | "--dump" => options.dump = true,
            "-l" | "--list" => options.table = true,
            "-t" | "--train" => options.train = Some(PathBuf::from(value(arg, args.next())?)),
            "-e" | "--eval" => options.eval = Some(PathBuf::from(value(arg, args.next())?)),
            "-p" | "--predict" => options.predict.push(value(arg, args.next())?.to_owned()),
            _ => return Err(format!("unknown option: {}", arg)),
        }
    }
    Ok(Action::Run(options))
}

const FLAGS: [&str; 14] = [
    "-v", "--version", "-h", "--help", "-d", "--dump", "-l", "--list", "-t", "--train", "-e",
    "--eval", "-p", "--predict",
];

fn value<'a>(flag: &str, next: Option<&'a String>) -> Result<&'a str, String> {
    match next {
        Some(v) if !FLAGS.contains(&v.as_str()) => Ok(v),
        _ => Err(format!("missing value for {}", flag)),
    }
}

fn fail<T>(err: impl Display) -> T {
    eprintln!("{}", err);
    exit(1);
}

fn print_version() {
    println!("reviews v{}", env!("CARGO_PKG_VERSION"),);
}

fn print_help() {
    let config_location = match get_config_location() {
        Ok((_, file)) => format!("{:#?}", file),
        Err(e) => e.to_string(),
    };
    println!(
        "\nConfig file found at {}\n",
        format!("\x1b[38;5;47m{}\x1b[0m", config_location),
    );
    print!(
        "Usage: reviews [options]
        Options:
        -t, --train <path>           Learn word scores from the reviews at <path>
        -e, --eval <path>            Compare predictions against the labeled reviews at <path>
        -p, --predict <text>         Predict a score for <text> instead of evaluating
        -d, --dump                   Print the learned word scores as JSON
        -l, --list                   Print the learned word scores, best first
        -v, --version                Print version.
        -h, --help                   Show this message.
        ",
    );
}
