//! Skycast - multi-day weather forecasts in the terminal
//!
//! 1. Event (keyboard) -> `ForecastScreen::handle_event()` -> Actions
//! 2. Actions dispatched to the effect store (logged by `ActionLogMiddleware`)
//! 3. Reducer updates state and returns effects
//! 4. Effects run on the task manager; results come back as actions
//! 5. If state changed, re-render
//!
//! # Usage
//!
//! ```sh
//! skycast --city London
//! skycast --base-url http://forecast.local:8080 --refresh-secs 600 --log-file skycast.log
//! ```

use std::cell::RefCell;
use std::io;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tracing::info;
use tui_dispatch::{EffectRuntime, EffectStoreWithMiddleware, EventKind, EventOutcome};

use skycast_tui::action::Action;
use skycast_tui::api::{ForecastProvider, HttpForecastProvider};
use skycast_tui::components::{Component, ForecastScreen, ForecastScreenProps};
use skycast_tui::config::{AppConfig, Args};
use skycast_tui::effect::handle_effect;
use skycast_tui::logging::{self, ActionLogMiddleware};
use skycast_tui::reducer::reducer;
use skycast_tui::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from(Args::parse());

    if let Some(path) = &config.log_file {
        logging::init_file_logging(path, &config.log_filter)?;
    }

    let provider: Arc<dyn ForecastProvider> = Arc::new(
        HttpForecastProvider::new(config.base_url.clone(), config.http_timeout)
            .context("failed to create forecast client")?,
    );
    info!(base_url = %config.base_url, timeout = ?config.http_timeout, "Starting skycast");

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, config, provider).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result.context("terminal I/O failed")
}

fn map_event(
    screen: &mut ForecastScreen,
    event: &EventKind,
    state: &AppState,
) -> EventOutcome<Action> {
    if let EventKind::Resize(width, height) = event {
        return EventOutcome::action(Action::UiTerminalResize(*width, *height)).with_render();
    }

    let props = ForecastScreenProps {
        state,
        is_focused: true,
    };
    EventOutcome::from_actions(screen.handle_event(event, props))
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    config: AppConfig,
    provider: Arc<dyn ForecastProvider>,
) -> io::Result<()> {
    let store = EffectStoreWithMiddleware::new(
        AppState::new(config.theme, config.tick_interval),
        reducer,
        ActionLogMiddleware,
    );
    let mut runtime = EffectRuntime::from_store(store);

    // Animation clock
    runtime
        .subscriptions()
        .interval("tick", config.tick_interval, || Action::Tick);

    if let Some(every) = config.refresh_interval {
        runtime
            .subscriptions()
            .interval("refresh", every, || Action::ForecastRefresh);
    }

    let size = terminal.size()?;
    runtime.enqueue(Action::UiTerminalResize(size.width, size.height));

    if let Some(city) = config.initial_city {
        runtime.enqueue(Action::CityInputChange(city.clone()));
        runtime.enqueue(Action::ForecastRequest(city));
    }

    let screen = RefCell::new(ForecastScreen::new());

    runtime
        .run(
            terminal,
            |frame, area, state, render_ctx| {
                let props = ForecastScreenProps {
                    state,
                    is_focused: render_ctx.is_focused(),
                };
                screen.borrow_mut().render(frame, area, props);
            },
            |event, state| map_event(&mut screen.borrow_mut(), event, state),
            |action| matches!(action, Action::Quit),
            |effect, ctx| handle_effect(effect, ctx, &provider),
        )
        .await
}
