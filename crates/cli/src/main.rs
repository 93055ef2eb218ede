use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tubesense_core::ingest::YouTubeClient;
use tubesense_core::report::{DashboardReport, DEFAULT_PREVIEW_ROWS};
use tubesense_core::sentiment::LexiconModel;

mod render;

#[derive(Debug, Parser)]
#[command(name = "tubesense_cli")]
struct Args {
    /// Video URL (https://www.youtube.com/watch?v=...).
    #[arg(long)]
    url: String,

    /// Stop requesting pages once this many comments are collected. Defaults to MAX_COMMENTS or 200.
    #[arg(long)]
    max_comments: Option<usize>,

    /// Rows shown in the sample comments table.
    #[arg(long, default_value_t = DEFAULT_PREVIEW_ROWS)]
    preview: usize,

    /// Print the full report as JSON instead of text tables.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    dotenvy::dotenv().ok();

    let settings = match tubesense_core::config::Settings::from_env() {
        Ok(s) => s,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return std::process::ExitCode::FAILURE;
        }
    };
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    match run(&settings, &args).await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            sentry_anyhow::capture_anyhow(&err);
            tracing::error!(error = %err, url = %args.url, "analysis failed");
            eprintln!("Error: {err}");
            std::process::ExitCode::FAILURE
        }
    }
}

async fn run(settings: &tubesense_core::config::Settings, args: &Args) -> anyhow::Result<()> {
    let max_comments = args.max_comments.unwrap_or(settings.max_comments);

    let source = YouTubeClient::from_settings(settings)?;
    let model = LexiconModel::load(settings.sentiment_lexicon_path.as_deref())?;

    eprintln!("Fetching comments... Please wait.");
    let batch = tubesense_core::pipeline::analyze_url(&source, &model, &args.url, max_comments)
        .await?;
    eprintln!("Comments fetched and analyzed!");

    let report = DashboardReport::build(&batch, args.preview);
    if args.json {
        let out = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        println!("{out}");
    } else {
        print!("{}", render::text_report(&report));
    }

    Ok(())
}

fn init_sentry(settings: &tubesense_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
