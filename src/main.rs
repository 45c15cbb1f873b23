mod logging;

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::{Duration, Instant};

use typeahead::app::{Autocomplete, WidgetOptions};
use typeahead::core::event::{InputEvent, KeyCode, KeyModifiers};
use typeahead::kernel::services::adapters::{
    ensure_settings_file, load_settings, settings_path, ShowCatalog, CONFIG_ENV,
};
use typeahead::kernel::services::ports::{Lookup, WidgetConfig};
use typeahead::kernel::SimpleItem;
use typeahead::tui::crossterm::into_input_event;
use typeahead::tui::terminal_guard::{TerminalGuard, TerminationSignal};
use typeahead::ui::backend::terminal::RatatuiTerminal;
use typeahead::ui::backend::Backend;
use typeahead::ui::core::geom::{Pos, Rect};
use typeahead::ui::core::painter::Painter;
use typeahead::ui::core::style::Mod;
use typeahead::ui::core::theme::{Theme, Token};

const FRAME_POLL: Duration = Duration::from_millis(50);
const SIGNAL_GRACE: Duration = Duration::from_secs(2);
const FAILURE_MARKER: &str = "!fail";
const DEMO_PLACEHOLDER: &str = "Search Shows..";

type Selection = Rc<RefCell<Option<SimpleItem>>>;

fn main() -> io::Result<()> {
    if std::env::args().skip(1).any(|arg| arg == "--write-config") {
        return write_config();
    }

    let _logging = logging::init();

    let config = load_config();
    let catalog = ShowCatalog::embedded()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?
        .with_failure_marker(FAILURE_MARKER);
    tracing::info!(shows = catalog.len(), "catalog ready");

    let selection: Selection = Rc::new(RefCell::new(None));
    let sink = selection.clone();
    let lookup: Arc<dyn Lookup<SimpleItem>> = Arc::new(catalog);
    let options = WidgetOptions::new(lookup)
        .with_config(config)
        .on_select(move |item: SimpleItem| {
            tracing::info!(id = %item.id, name = %item.name, "show selected");
            *sink.borrow_mut() = Some(item);
        });
    let mut widget = Autocomplete::new(options)?;

    let guard = TerminalGuard::new()?;
    let (signal_tx, signal_rx) = mpsc::channel();
    #[cfg(unix)]
    typeahead::tui::terminal_guard::install_termination_signals(
        guard.restorer(),
        signal_tx,
        SIGNAL_GRACE,
    )?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let mut terminal = RatatuiTerminal::new(io::stdout())?;
    let result = run(&mut terminal, &mut widget, &selection, &signal_rx);

    drop(widget);
    drop(terminal);
    drop(guard);
    if let Err(e) = &result {
        tracing::error!(error = %e, "event loop failed");
    }
    result
}

/// Create the settings file with defaults so it can be edited, then exit.
fn write_config() -> io::Result<()> {
    let path = settings_path().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("Cannot determine settings path; set {}", CONFIG_ENV),
        )
    })?;
    ensure_settings_file(&path)?;
    println!("{}", path.display());
    Ok(())
}

fn load_config() -> WidgetConfig {
    let demo_defaults = WidgetConfig {
        placeholder: DEMO_PLACEHOLDER.to_string(),
        ..WidgetConfig::default()
    };
    let Some(path) = settings_path() else {
        return demo_defaults;
    };
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file");
        return demo_defaults;
    }
    match load_settings(&path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "settings loaded");
            config
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "invalid settings, using defaults");
            demo_defaults
        }
    }
}

fn run(
    terminal: &mut RatatuiTerminal,
    widget: &mut Autocomplete<SimpleItem>,
    selection: &Selection,
    signals: &Receiver<TerminationSignal>,
) -> io::Result<()> {
    let theme = Theme::default();
    let mut dirty = true;

    loop {
        if let Ok(signal) = signals.try_recv() {
            tracing::info!(?signal, "shutting down");
            return Ok(());
        }

        if dirty {
            terminal.draw(|backend, area| {
                draw(backend, area, widget, selection.borrow().as_ref(), &theme)
            })?;
            dirty = false;
        }

        let now = Instant::now();
        let timeout = widget
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
            .unwrap_or(FRAME_POLL)
            .min(FRAME_POLL);

        if crossterm::event::poll(timeout)? {
            let event = into_input_event(crossterm::event::read()?);
            if is_quit(&event) {
                return Ok(());
            }
            dirty |= widget.handle_input(&event, Instant::now());
        }
        dirty |= widget.tick(Instant::now());
    }
}

fn is_quit(event: &InputEvent) -> bool {
    let Some(key) = event.as_key() else {
        return false;
    };
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn draw(
    backend: &mut dyn Backend,
    area: Rect,
    widget: &mut Autocomplete<SimpleItem>,
    selected: Option<&SimpleItem>,
    theme: &Theme,
) {
    if area.h < 3 {
        widget.render(backend, area);
        return;
    }

    let (header, rest) = area.split_top(1);
    let body = Rect::new(rest.x, rest.y, rest.w, rest.h - 1);
    let footer = Rect::new(rest.x, rest.bottom() - 1, rest.w, 1);

    let mut painter = Painter::new();
    painter.text_clipped(
        Pos::new(header.x, header.y),
        format!(
            "[{}] Esc quits, Enter or click selects, \"{}\" fails the lookup",
            widget.root_class(),
            FAILURE_MARKER
        ),
        theme.fg(Token::StatusFg),
        header,
    );
    let footer_text = match selected {
        Some(item) => format!("Selected: {} (#{})", item.name, item.id),
        None => "Nothing selected yet".to_string(),
    };
    painter.text_clipped(
        Pos::new(footer.x, footer.y),
        footer_text,
        theme.fg(Token::FooterFg).add_mod(Mod::BOLD),
        footer,
    );
    backend.draw(area, painter.cmds());

    widget.render(backend, body);
}
