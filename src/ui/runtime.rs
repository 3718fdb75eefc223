use crate::brewery::{fetch_until_shutdown, BreweryClient, BreweryListing, ListingQuery};
use crate::config::Config;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::plain::render_plain;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// How long pending tasks get to wind down once the UI has exited.
const RUNTIME_SHUTDOWN_GRACE: Duration = Duration::from_millis(200);

/// Interactive table: fetch in the background, draw until the user quits.
pub fn run(config: &Config, query: ListingQuery) -> anyhow::Result<()> {
    let client = BreweryClient::new(config.endpoint_url()?)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;
    let shutdown = ShutdownHandle::new();
    let tick_rate = config.tick_rate();

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate, shutdown.clone());

    let fetch_tx = events.sender();
    let fetch_shutdown = shutdown.clone();
    let category = config.source.brewery_type.clone();
    runtime.spawn(async move {
        if let Some(result) = fetch_until_shutdown(&client, &category, &fetch_shutdown).await {
            let _ = fetch_tx.send(AppEvent::Fetched(result));
        }
    });

    let mut app = App::new(config.view.page_size, query);
    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize) => {}
            Ok(AppEvent::Fetched(result)) => app.on_fetched(result),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // Stops the input thread and drops an in-flight fetch.
    shutdown.signal();
    runtime.shutdown_timeout(RUNTIME_SHUTDOWN_GRACE);
    drop(guard);
    Ok(())
}

/// Non-interactive mode: fetch once and return the requested page as text.
pub fn run_print(config: &Config, query: ListingQuery) -> anyhow::Result<String> {
    let client = BreweryClient::new(config.endpoint_url()?)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let records = runtime.block_on(client.fetch_category(&config.source.brewery_type))?;
    let listing = BreweryListing::with_query(records, config.view.page_size, query);
    Ok(render_plain(&listing))
}
