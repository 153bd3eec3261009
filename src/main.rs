use std::io::stdout;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, MouseEventKind};
use crossterm::execute;
use tokio::sync::mpsc;

use vmdash::action::Action;
use vmdash::app::App;
use vmdash::config::{Config, InvalidConfig, load_config, load_config_from_path};
use vmdash::event::{Event, EventHandler};
use vmdash::logging::init_file_logging;
use vmdash::metrics::client::{MetricsClient, SnapshotSource};
use vmdash::metrics::poller::Poller;
use vmdash::process_table::{SortColumn, SortState};
use vmdash::report::render_report;
use vmdash::ui;
use vmdash::view::Dashboard;

#[derive(Parser)]
#[command(
    name = "vmdash",
    about = "Terminal dashboard for a host metrics endpoint"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base URL of the metrics server, e.g. http://localhost:8993
    #[arg(long)]
    endpoint: Option<String>,

    /// Poll interval in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Theme: dark, light
    #[arg(long)]
    theme: Option<String>,

    /// Log file (the terminal is used by the dashboard)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Fetch one snapshot, print a text report and exit.
    #[arg(long, default_value_t = false)]
    once: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let (config, invalid_config) = load_config_for_cli(&cli);

    // Logging is best effort; the dashboard runs without it.
    if let Some(path) = config.logging.file_path()
        && let Err(err) = init_file_logging(&path, &config.logging.filter)
    {
        eprintln!("vmdash: logging disabled: {err}");
    }
    if let Some(invalid) = invalid_config {
        tracing::warn!(
            path = %invalid.path.display(),
            error = %invalid.source,
            "invalid config, using defaults"
        );
    }

    let client = MetricsClient::new(
        &config.general.endpoint,
        &config.general.stats_path,
        config.general.request_timeout(),
    )
    .wrap_err("invalid metrics endpoint")?;
    tracing::info!(url = %client.url(), interval = ?config.general.poll_interval(), "starting");

    if cli.once {
        return run_once(client, &config).await;
    }

    let mut terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(std::io::stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));

    let result = run(&mut terminal, client, &config).await;

    execute!(stdout(), DisableMouseCapture)?;
    ratatui::restore();

    result
}

async fn run(
    terminal: &mut ratatui::DefaultTerminal,
    client: MetricsClient,
    config: &Config,
) -> Result<()> {
    let mut app = App::new(config, client.url().to_string());

    let (poll_tx, poll_rx) = mpsc::unbounded_channel();
    let mut events = EventHandler::new(poll_rx);
    app.attach_poller(Poller::spawn(
        client,
        config.general.poll_interval(),
        poll_tx,
    ));

    terminal.draw(|frame| ui::draw(frame, &mut app))?;

    while app.running {
        let Some(event) = events.next().await else {
            break;
        };
        let should_draw = match event {
            Event::Key(key) => {
                if key.kind == crossterm::event::KeyEventKind::Press {
                    let action = app.map_key(key);
                    app.dispatch(action);
                    true
                } else {
                    false
                }
            }
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(crossterm::event::MouseButton::Left) {
                    app.dispatch(Action::ClickAt(mouse.column, mouse.row));
                    true
                } else {
                    false
                }
            }
            Event::Poll(update) => {
                app.on_poll(update);
                true
            }
            Event::Resize => true,
        };
        if should_draw {
            terminal.draw(|frame| ui::draw(frame, &mut app))?;
        }
    }

    tracing::info!("shutting down");
    Ok(())
}

async fn run_once(client: MetricsClient, config: &Config) -> Result<()> {
    let snapshot = client
        .fetch()
        .await
        .map_err(|err| eyre!("poll of {} failed: {err}", client.url()))?;

    let sort = SortState::new(SortColumn::from_str_config(&config.general.default_sort));
    let mut dashboard = Dashboard::new(sort);
    dashboard.apply_snapshot(snapshot);

    println!(
        "{}",
        render_report(client.url().as_str(), &dashboard.view, sort)
    );
    Ok(())
}

fn load_config_for_cli(cli: &Cli) -> (Config, Option<InvalidConfig>) {
    let (mut config, invalid) = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(ref endpoint) = cli.endpoint {
        config.general.endpoint = endpoint.clone();
    }
    if let Some(interval) = cli.interval_ms {
        config.general.poll_interval_ms = interval;
    }
    if let Some(ref theme) = cli.theme {
        config.general.theme = theme.clone();
    }
    if let Some(ref path) = cli.log_file {
        config.logging.file = Some(path.clone());
    }

    (config, invalid)
}
