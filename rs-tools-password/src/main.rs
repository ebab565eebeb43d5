use std::process::ExitCode;

use clap::Parser;

use rs_tools_core::password::{CaseMode, GenerationError, GenerationRequest, SPECIAL_CHARS};

/// Command-line flags, short-form only (the boxed help replaces clap's).
#[derive(Parser)]
#[command(disable_help_flag = true)]
struct Args {
    /// Password length
    #[arg(short = 'l', default_value_t = 15)]
    length: i64,

    /// Chars case: 1 lower, 2 upper, 3 mixed
    #[arg(short = 'c', default_value_t = 3)]
    case: i64,

    /// Add special chars
    #[arg(short = 's')]
    special: bool,

    /// Manual chars list (overrides -c and -s)
    #[arg(short = 'm')]
    manual: Option<String>,

    /// Generate <n> passwords, one per line
    #[arg(short = 'n')]
    number: Option<i64>,

    /// Show help
    #[arg(short = 'h')]
    help: bool,
}

fn help_text() -> String {
    format!(
        "\n\
        \x1b[33m┌─────  Password Generator Help  ─────\x1b[0m\n\
        \x1b[33m│\x1b[0m\n\
        \x1b[33m│\x1b[0m Usage rs-tools-password [options...]\n\
        \x1b[33m│\x1b[0m\n\
        \x1b[33m│\x1b[0m -l <\x1b[32mint\x1b[0m>  Password Length \x1b[34m(default: 15)\x1b[0m\n\
        \x1b[33m│\x1b[0m -c <\x1b[32mint\x1b[0m>  Chars Case : \x1b[34m(default: 3)\x1b[0m\n\
        \x1b[33m│\x1b[0m             - 1: Lower case\n\
        \x1b[33m│\x1b[0m             - 2: Upper case\n\
        \x1b[33m│\x1b[0m             - 3: Mixed case\n\
        \x1b[33m│\x1b[0m -s        Add special chars [\x1b[32m{SPECIAL_CHARS}\x1b[0m]\n\
        \x1b[33m│\x1b[0m -m <\x1b[32mstr\x1b[0m>  Manual chars list\n\
        \x1b[33m│\x1b[0m -n <\x1b[32mint\x1b[0m>  Generate <n> passwords\n\
        \x1b[33m│\x1b[0m\n\
        \x1b[33m│\x1b[0m \x1b[37mExample with manual chars list:\x1b[0m\n\
        \x1b[33m│\x1b[0m \x1b[37m  rs-tools-password -l 15 -m 'abcABC123@$%'\x1b[0m\n\
        \x1b[33m│\x1b[0m\n\
        \x1b[33m│\x1b[0m \x1b[37mNote: with manual chars list, use single quotes to escape special chars.\x1b[0m\n\
        \x1b[33m│\x1b[0m \x1b[37mNote: with manual chars list, -c and -s options are ignored.\x1b[0m\n\
        \x1b[33m└─────\x1b[0m\n"
    )
}

fn invalid() -> ExitCode {
    eprintln!("Invalid arguments.");
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    if args.help {
        print!("{}", help_text());
        return ExitCode::SUCCESS;
    }

    if args.length < 1 {
        return invalid();
    }

    let case_mode = match CaseMode::from_flag(args.case) {
        Ok(mode) => mode,
        Err(_) => return invalid(),
    };

    // -n 0 is a user error; a negative count simply generates nothing.
    let count = args.number.unwrap_or(1);
    if args.number == Some(0) {
        return invalid();
    }

    let request = match GenerationRequest::new(args.length as usize, case_mode, args.special, args.manual) {
        Ok(request) => request,
        Err(GenerationError::AlphabetTooSmall) => {
            eprintln!("Custom chars list is too short.");
            return ExitCode::FAILURE;
        }
        Err(_) => return invalid(),
    };

    let mut rng = rand::rng();
    for _ in 0..count {
        match request.generate(&mut rng) {
            Ok(password) => println!("{password}"),
            Err(error) => {
                eprintln!("{error}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
