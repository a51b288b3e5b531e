mod cards;
mod play;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};
use twentyfour::{Dealer, Hand, Solver, Verdict, survey, validator};

use cards::parse_rank;
use play::{Session, run_session};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Twentyfour - deal, solve and check hands of the 24 card game
#[derive(Parser, Debug)]
#[command(name = "twentyfour")]
#[command(about = "Make 24 from four cards with + - * / and parentheses")]
#[command(version)]
pub struct CliArgs {
    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Deal a random hand that has a solution
    Deal {
        /// Seed for a reproducible deal
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Find a way to make 24 from four cards
    Solve {
        /// Four card ranks: 1-13 or A, J, Q, K
        #[arg(num_args = 4, required = true, value_parser = parse_rank)]
        cards: Vec<u32>,

        /// List every distinct solution instead of the first
        #[arg(long)]
        all: bool,
    },
    /// Check an answer against four cards
    Check {
        /// Expression such as "(1+2+3)*4"
        expression: String,

        /// Four card ranks: 1-13 or A, J, Q, K
        #[arg(num_args = 4, required = true, value_parser = parse_rank)]
        cards: Vec<u32>,
    },
    /// Play rounds interactively on the terminal
    Play {
        /// Seed for a reproducible sequence of hands
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Count solvable hands over every possible deal
    Survey {
        /// Also print every unsolvable hand
        #[arg(long)]
        list: bool,
    },
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(())
}

fn hand_from_cards(cards: &[u32]) -> Result<Hand> {
    Hand::try_from(cards).context("Invalid hand")
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(&args.log_level)?;

    match args.command {
        Command::Deal { seed } => {
            let hand = match seed {
                Some(seed) => Dealer::seeded(seed).deal(),
                None => Dealer::new().deal(),
            };
            println!("{}", hand);
        }
        Command::Solve { cards, all } => {
            let hand = hand_from_cards(&cards)?;
            let solver = Solver::new();
            info!("Searching for 24 using [{}]", hand);

            if all {
                let solutions = solver.solve_all(&hand);
                if solutions.is_empty() {
                    warn!("No matching expression found");
                    println!("Unknown.");
                }
                for solution in solutions {
                    println!("{}", solution);
                }
            } else {
                match solver.solve(&hand) {
                    Some(solution) => println!("{}", solution),
                    None => {
                        warn!("No matching expression found");
                        println!("Unknown.");
                    }
                }
            }
        }
        Command::Check { expression, cards } => {
            let hand = hand_from_cards(&cards)?;
            match validator::check(&expression, &hand) {
                Ok(Verdict::Correct(_)) => println!("Correct! {} = 24", expression.trim()),
                Ok(Verdict::WrongResult(value)) => {
                    bail!("{} = {}, not 24", expression.trim(), value)
                }
                Err(e) => bail!("{} ({})", e, e.kind()),
            }
        }
        Command::Play { seed } => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            match seed {
                Some(seed) => {
                    let mut session = Session::new(Dealer::seeded(seed));
                    run_session(&mut session, stdin.lock(), stdout.lock())?;
                }
                None => {
                    let mut session = Session::new(Dealer::new());
                    run_session(&mut session, stdin.lock(), stdout.lock())?;
                }
            }
        }
        Command::Survey { list } => {
            let report = survey();
            println!(
                "Solvable hands: {} of {} distinct",
                report.solvable_hands, report.distinct_hands
            );
            println!(
                "Solvable deals: {} of {} ordered ({:.1}%)",
                report.solvable_deals,
                report.ordered_deals,
                report.solvable_ratio() * 100.0
            );
            if list {
                for hand in &report.unsolvable {
                    println!("{}", hand);
                }
            }
        }
    }

    Ok(())
}
