use std::{
    env,
    fs::File,
    io::{self, Read},
    process::ExitCode,
    time::Instant,
};

use kaleidoscope_lexer::{
    errors::errors::Error,
    lexer::{scanner::Scanner, source::ReaderSource},
    render_error,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        let program = args.first().map(String::as_str).unwrap_or("kaleidoscope-lexer");
        eprintln!("usage: {} <file | ->", program);
        return ExitCode::from(2);
    }

    let file_path: &str = &args[1];

    let reader: Box<dyn Read> = if file_path == "-" {
        Box::new(io::stdin())
    } else {
        match File::open(file_path) {
            Ok(file) => Box::new(file),
            Err(err) => {
                let error = Error::from_open(file_path, &err);
                eprint!("{}", render_error(&error, ""));
                return ExitCode::FAILURE;
            }
        }
    };

    let file_name = if file_path == "-" {
        "stdin"
    } else {
        file_path.rsplit('/').next().unwrap_or(file_path)
    };

    let start = Instant::now();

    // The source is echoed into `seen` so errors can point at their line.
    let mut source = ReaderSource::new(reader, Some(String::from(file_name)));
    let mut seen = String::new();
    let mut echo = source.by_ref().inspect(|c| seen.push(*c));
    let mut scanner = Scanner::with_file(&mut echo, Some(String::from(file_name)));

    loop {
        let token = scanner.next_token();
        println!("{}", token);

        if token.is_eof() {
            break;
        }
    }

    drop(scanner);
    drop(echo);

    info!("Tokenized in {:?}", start.elapsed());

    let errors = source.take_errors();
    for error in &errors {
        eprint!("{}", render_error(error, &seen));
    }

    if errors.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
