use clap::Parser;
use moodlog::application::{
    init_config, AnalyzeEntryService, DashboardService, ListEntriesService, ShowEntryService,
};
use moodlog::cli::{
    format_analysis, format_class, format_dashboard, format_detail, format_listing, Cli, Commands,
};
use moodlog::domain::{JournalQuery, MoodBucket, SortKey};
use moodlog::error::MoodlogError;
use moodlog::infrastructure::{open_repository, Config, MockSentimentAnalyzer};
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "moodlog=debug" } else { "moodlog=warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<(), MoodlogError> {
    let cwd = std::env::current_dir()?;
    let config = Config::resolve(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Commands::List {
            search,
            sort,
            mood,
            entries,
            json,
        } => {
            let sort = match sort {
                Some(s) => SortKey::from_str(&s)?,
                None => config.default_sort,
            };
            let query = JournalQuery::new(search, sort, MoodBucket::from_str(&mood)?);

            let repo = open_repository(entries.as_deref(), config.entries_path());
            let service = ListEntriesService::new(repo, config.mood_scale()?);
            let listing = service.execute(&query)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else {
                print!("{}", format_listing(&listing));
            }
            Ok(())
        }
        Commands::Show { id, entries } => {
            let repo = open_repository(entries.as_deref(), config.entries_path());
            let service =
                ShowEntryService::new(repo, config.mood_scale()?, config.emotion_palette());
            print!("{}", format_detail(&service.execute(id)?));
            Ok(())
        }
        Commands::Dashboard { entries, recent } => {
            let repo = open_repository(entries.as_deref(), config.entries_path());
            let service =
                DashboardService::new(repo, config.mood_scale()?, config.emotion_palette());
            let summary = service.execute(recent.unwrap_or(config.recent_limit))?;
            print!("{}", format_dashboard(&summary));
            Ok(())
        }
        Commands::Classify { mood } => {
            let class = config.mood_scale()?.classify(mood);
            println!("{}", format_class(mood, &class));
            Ok(())
        }
        Commands::Emotion { name } => {
            let color = config.emotion_palette().color_for(&name);
            println!("{}  {}", name, color);
            Ok(())
        }
        Commands::Analyze { text } => {
            let mut service = AnalyzeEntryService::new(
                MockSentimentAnalyzer,
                config.mood_scale()?,
                config.emotion_palette(),
            );
            print!("{}", format_analysis(&service.execute(&text)?));
            Ok(())
        }
        Commands::Init { path } => {
            let written = init_config(&path)?;
            println!("Wrote {}", written.display());
            Ok(())
        }
    }
}
