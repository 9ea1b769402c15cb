use logprice::billing::{calculate_breakdown, PricingTable};
use logprice::cli::Cli;
use logprice::config::{Config, ConfigLoader, InputData};
use logprice::core::{parse_input, render_breakdown, render_tier_table};
use std::io::{self, IsTerminal, Read};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();

    // Handle configuration commands
    if cli.init {
        Config::init()?;
        return Ok(());
    }

    let config = match &cli.config_file {
        Some(path) => ConfigLoader::load_from_path(path)?,
        None => ConfigLoader::load(),
    };

    if cli.print {
        config.print()?;
        return Ok(());
    }

    if cli.check {
        config.check()?;
        println!("✓ Configuration valid");
        return Ok(());
    }

    let table = match config.pricing_table() {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error: Invalid pricing configuration: {}", e);
            std::process::exit(1);
        }
    };

    if cli.show_tiers {
        print!("{}", render_tier_table(&table, config.user_price));
        return Ok(());
    }

    if cli.interactive {
        #[cfg(feature = "tui")]
        {
            logprice::ui::run_calculator(&table, config.user_price)?;
        }
        #[cfg(not(feature = "tui"))]
        {
            eprintln!("TUI feature is not enabled. Please install with --features tui");
            std::process::exit(1);
        }
        return Ok(());
    }

    // One-shot calculation from command-line quantities
    if cli.has_quantities() {
        let logs = cli.logs.as_deref().unwrap_or("");
        let users = cli.users.as_deref().unwrap_or("");
        run_calculation(logs, users, &table, config.user_price);
        return Ok(());
    }

    // With piped input, read a calculation request as JSON from stdin
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        let mut raw = String::new();
        stdin.lock().read_to_string(&mut raw)?;
        let input: InputData = serde_json::from_str(&raw)?;
        run_calculation(&input.logs, &input.users, &table, config.user_price);
        return Ok(());
    }

    eprintln!("No input given. Try --logs/--users, --interactive, or pipe JSON to stdin.");
    eprintln!("See --help for details.");
    std::process::exit(2);
}

/// Validate both quantities, compute the breakdown, and print it
///
/// Validation failures report per field and exit non-zero; the calculation
/// itself cannot fail.
fn run_calculation(logs: &str, users: &str, table: &PricingTable, user_price: f64) {
    let log_count = match parse_input(logs) {
        Ok(count) => count,
        Err(e) => {
            eprintln!("Error: logs: {}", e);
            std::process::exit(1);
        }
    };
    let user_count = match parse_input(users) {
        Ok(count) => count,
        Err(e) => {
            eprintln!("Error: users: {}", e);
            std::process::exit(1);
        }
    };

    let breakdown = calculate_breakdown(log_count, user_count, table, user_price);
    println!("{}", render_breakdown(&breakdown));
}
