use anyhow::Result;
use clap::Parser;
use pop_penny::config::{self, Endpoints};
use pop_penny::{Client, Config, GapPolicy, ReportError, pipeline, stats};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "pop-penny",
    version,
    about = "Rank countries by population and total one penny per person in a base currency"
)]
struct Cli {
    /// Population year (YYYY). Prompted for when omitted.
    #[arg(short, long)]
    year: Option<String>,
    /// How many countries to list. Prompted for when omitted.
    #[arg(short = 'n', long)]
    countries: Option<String>,
    /// Base currency for the exchange rates and the total.
    #[arg(long, default_value = config::DEFAULT_BASE_CURRENCY)]
    base: String,
    /// Fail instead of skipping countries without a usable conversion rate.
    #[arg(long, default_value_t = false)]
    strict: bool,
    /// Locale for number formatting (en, de, fr, es, it, pt, nl).
    #[arg(long, default_value = "en")]
    locale: String,
    /// Print population statistics of the listed countries.
    #[arg(long, default_value_t = false)]
    stats: bool,
    /// Debug logging (RUST_LOG overrides).
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
    #[arg(long, hide = true)]
    population_url: Option<String>,
    #[arg(long, hide = true)]
    currency_url: Option<String>,
    #[arg(long, hide = true)]
    exchange_url: Option<String>,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

/// Ask on stdout, read one line from stdin.
fn prompt(question: &str) -> Result<String> {
    print!("{} ", question);
    io::stdout().flush()?;
    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Err(ReportError::InvalidInput("no input given".into()).into());
    }
    Ok(line)
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => {
            // Format up to 2 decimals, then trim trailing zeros and trailing dot.
            let s = format!("{:.2}", x);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        _ => "NA".to_string(),
    }
}

fn build_config(cli: &Cli) -> Result<Config> {
    // Both answers are validated before anything is fetched.
    let year = match &cli.year {
        Some(s) => config::parse_year(s)?,
        None => config::parse_year(&prompt(
            "From which year do you want to obtain the population?",
        )?)?,
    };
    let count = match &cli.countries {
        Some(s) => config::parse_country_count(s)?,
        None => config::parse_country_count(&prompt(
            "How many countries do you want to visualize?",
        )?)?,
    };

    let mut cfg = Config::new(year, count).with_env_api_key();
    cfg.base_currency = cli.base.trim().to_ascii_uppercase();
    cfg.locale = cli.locale.clone();
    if cli.strict {
        cfg.gap_policy = GapPolicy::Strict;
    }
    let defaults = Endpoints::default();
    cfg.endpoints = Endpoints {
        population_url: cli.population_url.clone().unwrap_or(defaults.population_url),
        currency_url: cli.currency_url.clone().unwrap_or(defaults.currency_url),
        exchange_url: cli.exchange_url.clone().unwrap_or(defaults.exchange_url),
    };
    Ok(cfg)
}

fn run(cli: Cli) -> Result<()> {
    let cfg = build_config(&cli)?;
    let client = Client::new()?;
    let report = pipeline::run(&cfg, &client, &mut io::stdout().lock())?;

    if cli.stats {
        let s = stats::population_summary(&report.rows);
        println!(
            "population  count={} total={} min={} max={} mean={} median={}",
            s.count,
            s.total,
            s.min.map_or_else(|| "NA".to_string(), |v| v.to_string()),
            s.max.map_or_else(|| "NA".to_string(), |v| v.to_string()),
            fmt_opt(s.mean),
            fmt_opt(s.median)
        );
    }

    Ok(())
}

fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<ReportError>() {
        Some(ReportError::InvalidInput(_)) => 2,
        Some(ReportError::NoDataForYear { .. }) => 3,
        Some(
            ReportError::UpstreamFetchFailed { .. }
            | ReportError::Upstream { .. }
            | ReportError::Transport { .. },
        ) => 4,
        Some(ReportError::JoinGap { .. }) => 5,
        _ => 1,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}
