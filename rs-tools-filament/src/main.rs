use std::process::ExitCode;

use clap::Parser;

use rs_tools_core::filament::Spool;
use rs_tools_core::util::round_to;

const DEFAULT_EMPTY_SPOOL_WEIGHT: i64 = 270;
const DEFAULT_ACTUAL_SPOOL_WEIGHT: i64 = 1270;
const DEFAULT_FILAMENT_DIAMETER: i64 = 175;
const DEFAULT_FILAMENT_DENSITY: i64 = 125;
const DEFAULT_SPOOL_PRICE: i64 = 20;
const CURRENCY_SYMBOL: &str = "€";

/// Command-line flags, short-form only (the boxed help replaces clap's).
#[derive(Parser)]
#[command(disable_help_flag = true)]
struct Args {
    /// Weight of the empty spool in grams
    #[arg(short = 'e', default_value_t = DEFAULT_EMPTY_SPOOL_WEIGHT)]
    empty_weight: i64,

    /// Current/total spool weight in grams
    #[arg(short = 'w', default_value_t = DEFAULT_ACTUAL_SPOOL_WEIGHT)]
    actual_weight: i64,

    /// Filament diameter, fixed-point ×100 mm (175 -> 1.75mm)
    #[arg(short = 'd', default_value_t = DEFAULT_FILAMENT_DIAMETER)]
    diameter: i64,

    /// Filament density, fixed-point ×100 g/cm³ (125 -> 1.25)
    #[arg(short = 'D', default_value_t = DEFAULT_FILAMENT_DENSITY)]
    density: i64,

    /// Spool price in euros
    #[arg(short = 'p', default_value_t = DEFAULT_SPOOL_PRICE)]
    price: i64,

    /// Show help
    #[arg(short = 'h')]
    help: bool,
}

fn help_text() -> String {
    let diameter_divided = DEFAULT_FILAMENT_DIAMETER as f64 / 100.0;
    let density_divided = DEFAULT_FILAMENT_DENSITY as f64 / 100.0;
    format!(
        "\n\
        \x1b[33m┌─────  Remaining filament calculator  ─────\x1b[0m\n\
        \x1b[33m│\x1b[0m\n\
        \x1b[33m│\x1b[0m Description:\n\
        \x1b[33m│\x1b[0m   This program estimates the total length of filament remaining on a spool.\n\
        \x1b[33m│\x1b[0m\n\
        \x1b[33m│\x1b[0m Usage:\n\
        \x1b[33m│\x1b[0m   rs-tools-filament [options...]\n\
        \x1b[33m│\x1b[0m\n\
        \x1b[33m│\x1b[0m Options:\n\
        \x1b[33m│\x1b[0m   -d <\x1b[32mint\x1b[0m>: Filament diameter. (default: {DEFAULT_FILAMENT_DIAMETER} for {diameter_divided}mm)\n\
        \x1b[33m│\x1b[0m   -D <\x1b[32mint\x1b[0m>: Filament density. (default: {DEFAULT_FILAMENT_DENSITY} for {density_divided}g/cm³)\n\
        \x1b[33m│\x1b[0m   -e <\x1b[32mint\x1b[0m>: Weight of empty spool in grams. (default: {DEFAULT_EMPTY_SPOOL_WEIGHT})\n\
        \x1b[33m│\x1b[0m   -w <\x1b[32mint\x1b[0m>: Current/total spool weight in grams (default: {DEFAULT_ACTUAL_SPOOL_WEIGHT})\n\
        \x1b[33m│\x1b[0m   -p <\x1b[32mint\x1b[0m>: Filament spool price (default: {DEFAULT_SPOOL_PRICE}{CURRENCY_SYMBOL})\n\
        \x1b[33m│\x1b[0m\n\
        \x1b[33m│\x1b[0m Notes:\n\
        \x1b[33m│\x1b[0m   - To calculate the price per meter, use -w <\x1b[32mnew spool weight\x1b[0m> -p <\x1b[32mspool price\x1b[0m>\n\
        \x1b[33m│\x1b[0m   - You should use this option when your spool is new.\n\
        \x1b[33m│\x1b[0m\n\
        \x1b[33m└─────\x1b[0m\n"
    )
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    if args.help {
        print!("{}", help_text());
        return ExitCode::SUCCESS;
    }

    let spool = Spool {
        empty_weight_g: args.empty_weight as f64,
        actual_weight_g: args.actual_weight as f64,
        diameter_mm: args.diameter as f64 / 100.0,
        density_g_cm3: args.density as f64 / 100.0,
    };

    // Price per meter is derived from the rounded length, so the report
    // stays consistent with itself.
    let remaining = round_to(spool.remaining_length_m(), 2);
    let price_per_meter = round_to(args.price as f64 / remaining, 4);

    println!();
    println!("Remaining filament: \x1b[32m{remaining}\x1b[0mm");
    println!();
    println!("Informations:");
    println!("  - Filament diameter:   \x1b[33m{}\x1b[0mmm", spool.diameter_mm);
    println!("  - Filament density:    \x1b[33m{}\x1b[0mg/cm³", spool.density_g_cm3);
    println!("  - Empty spool weight:  \x1b[33m{}\x1b[0mg", spool.empty_weight_g);
    println!("  - Actual spool weight: \x1b[33m{}\x1b[0mg", spool.actual_weight_g);
    println!("  - Spool price:         \x1b[33m{}\x1b[0m{CURRENCY_SYMBOL}", args.price);
    println!("  - Price per meter:     \x1b[33m{price_per_meter}\x1b[0m{CURRENCY_SYMBOL}/m");
    println!();

    ExitCode::SUCCESS
}
