use std::process::ExitCode;

use clap::Parser;

use rs_tools_core::energy;
use rs_tools_core::util::round_to;

const DEFAULT_PRICE: i64 = 2276;
const DEFAULT_WATTS: i64 = 100;

/// Command-line flags, short-form only (the boxed help replaces clap's).
#[derive(Parser)]
#[command(disable_help_flag = true)]
struct Args {
    /// Price per kWh, fixed-point ×10⁴ euros (2276 -> 0.2276€)
    #[arg(short = 'p', default_value_t = DEFAULT_PRICE)]
    price: i64,

    /// Operating time as comma-separated days,hours,minutes
    #[arg(short = 'd', default_value = "0,1,0")]
    duration: String,

    /// Device consumption in watts
    #[arg(short = 'w', default_value_t = DEFAULT_WATTS)]
    watts: i64,

    /// Show help
    #[arg(short = 'h')]
    help: bool,
}

fn help_text() -> String {
    let price_divided = DEFAULT_PRICE as f64 / 10_000.0;
    format!(
        "\n\
        \x1b[33m┌─────  kWh Consumption Calculator  ─────\x1b[0m\n\
        \x1b[33m│\x1b[0m\n\
        \x1b[33m│\x1b[0m Description:\n\
        \x1b[33m│\x1b[0m   This program calculates the cost of use in €uro and the consumption (kWh) of a device over time.\n\
        \x1b[33m│\x1b[0m\n\
        \x1b[33m│\x1b[0m Usage:\n\
        \x1b[33m│\x1b[0m   rs-tools-kwh -p {DEFAULT_PRICE} -w {DEFAULT_WATTS} -d 0,2,30\n\
        \x1b[33m│\x1b[0m\n\
        \x1b[33m│\x1b[0m Options:\n\
        \x1b[33m│\x1b[0m   -p <\x1b[32mint\x1b[0m>  : Price per kWh (in euro).\n\
        \x1b[33m│\x1b[0m                 Example: {DEFAULT_PRICE} for {price_divided}€.\n\
        \x1b[33m│\x1b[0m   -d <\x1b[32md,h,m\x1b[0m>: Define machine operating time (in days, hours, minutes).\n\
        \x1b[33m│\x1b[0m                 Example: -d 1,1,30 for 1 day, 1 hour and 30 minutes.\n\
        \x1b[33m│\x1b[0m   -w <\x1b[32mint\x1b[0m>  : Machine consumption in watts. Example: -w {DEFAULT_WATTS} for {DEFAULT_WATTS} watts.\n\
        \x1b[33m│\x1b[0m\n\
        \x1b[33m└─────\x1b[0m\n"
    )
}

fn parse_duration(input: &str) -> Option<Vec<i64>> {
    input
        .split(',')
        .map(|part| part.trim().parse::<i64>().ok())
        .collect()
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    if args.help {
        print!("{}", help_text());
        return ExitCode::SUCCESS;
    }

    let Some(duration) = parse_duration(&args.duration) else {
        eprintln!("Duration format is invalid.");
        return ExitCode::FAILURE;
    };

    let price_per_kwh = args.price as f64 / 10_000.0;

    let report = match energy::estimate(args.watts as f64, &duration, price_per_kwh) {
        Ok(report) => report,
        Err(_) => {
            eprintln!("Duration format is invalid.");
            return ExitCode::FAILURE;
        }
    };

    let operating_time = energy::format_duration(report.total_hours);
    let consumption = round_to(report.consumption_kwh, 5);
    let cost = round_to(report.cost, 5);

    println!();
    println!("\x1b[37mCalculations:\x1b[0m");
    println!();
    println!("kWh Price      : \x1b[32m{price_per_kwh}€\x1b[0m");
    println!("Device power   : \x1b[31m{}W\x1b[0m", args.watts);
    println!("Operating time : \x1b[33m{operating_time}\x1b[0m");
    println!("\x1b[37m----\x1b[0m");
    println!("Consumption    : \x1b[36m{consumption}kWh\x1b[0m");
    println!("Cost of use    : \x1b[32m{cost}€\x1b[0m");
    println!();

    ExitCode::SUCCESS
}
