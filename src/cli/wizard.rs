//! Full-screen TUI for the init script wizard
//!
//! This module puts a ratatui front end on [`WizardController`]. The controller
//! owns every decision; this file only maps keys to controller operations and
//! draws the current page.
//!
//! # Layout
//!
//! - Header with the page title and progress dots
//! - Page body (method list, target directory, or scheme list)
//! - Status line fed by a [`NotificationChannel`]
//! - Mini buffer echoing the special key being typed
//! - Help bar with the keys valid on the current page
//!
//! Overlays (drawn last, topmost first): alert dialog, quit confirmation,
//! the multi-line help overlay, which only a mouse click dismisses, and the
//! special key editor opened from the scheme page.

use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Terminal,
};
use tracing::warn;

use super::args::Cli;
use super::file_selector::TuiDirectoryPicker;
use crate::display::NotificationChannel;
use crate::scheme::SchemeDescriptor;
use crate::wizard::{
    AlertQueue, PathChange, WizardController, WizardError, WizardPage, WizardResult,
};

/// How long transient status messages stay up
const STATUS_DURATION: Duration = Duration::from_secs(3);

const HELP_TEXT: &str = "rcwizard keys\n\
    \n\
    Up/Down     move the highlight\n\
    Enter       confirm and continue\n\
    Backspace   previous page\n\
    c           change directory\n\
    Left/Right  cycle the init file name\n\
    k           edit special keys (scheme page)\n\
    q / Esc     quit without saving\n\
    \n\
    Click anywhere to close this help.";

// ============================================================================
// View State
// ============================================================================

/// Special key bindings being edited, committed only on save
#[derive(Debug, Clone)]
struct KeyEditor {
    rows: Vec<(String, String)>,
    selected: usize,
    /// Text typed for the selected row
    editing: Option<String>,
}

impl KeyEditor {
    fn new(rows: Vec<(String, String)>) -> Self {
        Self {
            rows,
            selected: 0,
            editing: None,
        }
    }
}

/// Controller plus the purely visual state around it
pub struct WizardView {
    controller: WizardController,
    alerts: AlertQueue,
    notifications: NotificationChannel,
    /// Highlighted row on the method page (0 = create, 1 = select)
    method_selected: usize,
    /// Highlighted row on the scheme page
    scheme_selected: usize,
    show_quit_confirm: bool,
    key_editor: Option<KeyEditor>,
    /// Force a full redraw (set after the directory picker returns)
    needs_redraw: bool,
}

impl WizardView {
    /// `alerts` must be the queue the controller's alert sink writes to
    pub fn new(controller: WizardController, alerts: AlertQueue) -> Self {
        Self {
            controller,
            alerts,
            notifications: NotificationChannel::default().with_overlay(),
            method_selected: 0,
            scheme_selected: 0,
            show_quit_confirm: false,
            key_editor: None,
            needs_redraw: false,
        }
    }

    pub fn controller(&self) -> &WizardController {
        &self.controller
    }

    pub fn notifications(&self) -> &NotificationChannel {
        &self.notifications
    }

    pub fn alerts(&self) -> &AlertQueue {
        &self.alerts
    }

    pub fn is_quit_confirm_shown(&self) -> bool {
        self.show_quit_confirm
    }

    pub fn is_key_editor_open(&self) -> bool {
        self.key_editor.is_some()
    }

    /// Scheme under the highlight on the scheme page
    pub fn highlighted_scheme(&self) -> Option<&SchemeDescriptor> {
        self.controller.schemes().get(self.scheme_selected)
    }

    /// Handle one key press. Returns the result once the wizard closes.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Result<Option<WizardResult>> {
        // An open alert swallows keys until acknowledged
        if self.alerts.peek().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.alerts.pop();
            }
            return Ok(None);
        }

        if self.show_quit_confirm {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    return Ok(Some(self.controller.cancel()?));
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.show_quit_confirm = false;
                }
                _ => {}
            }
            return Ok(None);
        }

        // The editor takes every key, including the global ones
        if self.key_editor.is_some() {
            return self.handle_key_editor(key, now);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.show_quit_confirm = true;
                return Ok(None);
            }
            KeyCode::Char('?') => {
                self.notifications.pretty_print(HELP_TEXT);
                return Ok(None);
            }
            _ => {}
        }

        match self.controller.page() {
            WizardPage::SelectMethod => self.handle_select_method(key),
            WizardPage::CreateRcFile | WizardPage::SelectRcFile => self.handle_target_page(key, now),
            WizardPage::SchemePick => self.handle_scheme_pick(key, now),
            WizardPage::Finished | WizardPage::Cancelled => Ok(None),
        }
    }

    /// A click anywhere closes the help overlay
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if matches!(mouse.kind, MouseEventKind::Down(_)) {
            self.notifications.dismiss_overlay();
        }
    }

    fn status(&mut self, message: &str, now: Instant) {
        self.notifications.show_at(message, Some(STATUS_DURATION), now);
    }

    /// Show a recoverable error on the status line; propagate the rest
    fn report(&mut self, err: WizardError, now: Instant) -> Result<()> {
        match err {
            // Alert is already queued by the controller
            WizardError::NoScriptFound { .. } => {
                self.status(&err.to_string(), now);
                Ok(())
            }
            WizardError::UnknownScheme { id } => {
                warn!(id = %id, "scheme list out of sync with catalog");
                Ok(())
            }
            WizardError::NoSchemeAvailable => {
                let message = self.controller.message("noSchemeAvailable", &[]);
                self.status(&message, now);
                Ok(())
            }
            WizardError::MethodNotChosen | WizardError::InvalidFilenameIndex { .. } => {
                self.status(&err.to_string(), now);
                Ok(())
            }
            WizardError::Closed { .. } | WizardError::Io(_) => Err(err.into()),
        }
    }

    fn finish(&mut self, now: Instant) -> Result<Option<WizardResult>> {
        match self.controller.finish() {
            Ok(result) => Ok(Some(result)),
            Err(e) => {
                self.report(e, now)?;
                Ok(None)
            }
        }
    }

    fn handle_select_method(&mut self, key: KeyEvent) -> Result<Option<WizardResult>> {
        match key.code {
            KeyCode::Up => self.method_selected = 0,
            KeyCode::Down => self.method_selected = 1,
            KeyCode::Enter => {
                self.controller.choose_method(self.method_selected)?;
            }
            _ => {}
        }
        Ok(None)
    }

    fn handle_target_page(&mut self, key: KeyEvent, now: Instant) -> Result<Option<WizardResult>> {
        let for_select_page = self.controller.page() == WizardPage::SelectRcFile;

        match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.needs_redraw = true;
                match self.controller.request_path_change(for_select_page) {
                    Ok(PathChange::Changed(path)) => {
                        let message = self
                            .controller
                            .message("pathChanged", &[&path.display().to_string()]);
                        self.status(&message, now);
                    }
                    Ok(PathChange::Unchanged) => {}
                    Err(e) => self.report(e, now)?,
                }
            }
            KeyCode::Left | KeyCode::Right => {
                let len = self.controller.defaults().filename_candidates.len();
                if len > 0 {
                    let current = self.controller.state().chosen_filename_index();
                    let next = if key.code == KeyCode::Right {
                        (current + 1) % len
                    } else {
                        (current + len - 1) % len
                    };
                    if let Err(e) = self.controller.select_filename(next) {
                        self.report(e, now)?;
                    }
                }
            }
            KeyCode::Enter if for_select_page => return self.finish(now),
            KeyCode::Enter => {
                self.controller.advance()?;
                self.sync_scheme_highlight();

                let loaded = self.controller.schemes().len().to_string();
                let mut message = self.controller.message("schemesLoaded", &[&loaded]);
                let skipped = self.controller.skipped_schemes();
                if skipped > 0 {
                    message.push_str(" · ");
                    message.push_str(
                        &self
                            .controller
                            .message("schemesSkipped", &[&skipped.to_string()]),
                    );
                }
                self.status(&message, now);
            }
            KeyCode::Backspace => {
                self.controller.back()?;
            }
            _ => {}
        }
        Ok(None)
    }

    fn handle_scheme_pick(&mut self, key: KeyEvent, now: Instant) -> Result<Option<WizardResult>> {
        let count = self.controller.schemes().len();

        match key.code {
            KeyCode::Up | KeyCode::Down if count > 0 => {
                self.scheme_selected = if key.code == KeyCode::Up {
                    self.scheme_selected.saturating_sub(1)
                } else {
                    (self.scheme_selected + 1).min(count - 1)
                };
                let id = self.controller.schemes()[self.scheme_selected].id.clone();
                if let Err(e) = self.controller.select_scheme(&id) {
                    self.report(e, now)?;
                }
            }
            KeyCode::Char('k') | KeyCode::Char('K') => {
                let rows = self.controller.state().special_keys_with_stock();
                self.key_editor = Some(KeyEditor::new(rows));
            }
            KeyCode::Enter => return self.finish(now),
            KeyCode::Backspace => {
                self.controller.back()?;
            }
            _ => {}
        }
        Ok(None)
    }

    /// Point the scheme highlight at the controller's chosen scheme
    fn sync_scheme_highlight(&mut self) {
        self.scheme_selected = self
            .controller
            .chosen_scheme()
            .and_then(|chosen| self.controller.schemes().iter().position(|s| s == chosen))
            .unwrap_or(0);
    }

    fn handle_key_editor(&mut self, key: KeyEvent, now: Instant) -> Result<Option<WizardResult>> {
        let Some(editor) = self.key_editor.as_mut() else {
            return Ok(None);
        };

        if let Some(buffer) = editor.editing.as_mut() {
            match key.code {
                KeyCode::Char(c) => buffer.push(c),
                KeyCode::Backspace => {
                    buffer.pop();
                }
                KeyCode::Enter => {
                    let value = buffer.trim().to_string();
                    if let Some(row) = editor.rows.get_mut(editor.selected).filter(|_| !value.is_empty()) {
                        row.1 = value;
                    }
                    editor.editing = None;
                }
                KeyCode::Esc => editor.editing = None,
                _ => {}
            }
        } else {
            match key.code {
                KeyCode::Up => editor.selected = editor.selected.saturating_sub(1),
                KeyCode::Down => {
                    editor.selected = (editor.selected + 1).min(editor.rows.len().saturating_sub(1));
                }
                KeyCode::Enter => {
                    editor.editing = editor.rows.get(editor.selected).map(|(_, key)| key.clone());
                }
                KeyCode::Char('s') | KeyCode::Char('S') => {
                    let bindings = editor.rows.clone();
                    self.key_editor = None;
                    self.controller.set_special_key_bindings(bindings)?;
                    self.notifications.echo_mini_buffer("");
                    self.status("Special keys saved", now);
                    return Ok(None);
                }
                KeyCode::Esc => {
                    self.key_editor = None;
                    self.notifications.echo_mini_buffer("");
                    return Ok(None);
                }
                _ => {}
            }
        }

        self.echo_editor_line();
        Ok(None)
    }

    /// Mirror the row being typed into the mini buffer
    fn echo_editor_line(&mut self) {
        let line = match &self.key_editor {
            Some(KeyEditor {
                rows,
                selected,
                editing: Some(buffer),
            }) => match rows.get(*selected) {
                Some((name, _)) => format!("{}: {}_", name, buffer),
                None => String::new(),
            },
            _ => String::new(),
        };
        self.notifications.echo_mini_buffer(&line);
    }
}

// ============================================================================
// Terminal Setup/Teardown
// ============================================================================

/// Setup terminal for TUI rendering with panic-safe cleanup
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    restore_terminal()?;

    // Install panic hook for clean terminal restoration
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        teardown_terminal();
        original_hook(panic_info);
    }));

    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Enter raw mode and the alternate screen (again, after the picker)
pub fn restore_terminal() -> std::io::Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    Ok(())
}

/// Restore terminal to normal state
pub fn teardown_terminal() {
    let _ = stdout().execute(DisableMouseCapture);
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
}

// ============================================================================
// Entry Point
// ============================================================================

/// Run the full-screen wizard and return its result
pub fn run_wizard(cli: &Cli) -> Result<WizardResult> {
    let alerts = AlertQueue::new();
    let collaborators = cli.collaborators(TuiDirectoryPicker, Box::new(alerts.clone()));

    let mut controller = WizardController::new(cli.host_defaults(), collaborators)?;
    controller.set_special_key_bindings(cli.keys.iter().cloned())?;

    let mut view = WizardView::new(controller, alerts);

    let mut terminal = setup_terminal()?;
    let result = run_wizard_loop(&mut terminal, &mut view);
    teardown_terminal();

    result
}

// ============================================================================
// Event Loop
// ============================================================================

fn run_wizard_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    view: &mut WizardView,
) -> Result<WizardResult> {
    loop {
        if view.needs_redraw {
            terminal.clear()?;
            view.needs_redraw = false;
        }

        view.notifications.tick(Instant::now());
        terminal.draw(|f| render_wizard(f, view))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(result) = view.handle_key(key, Instant::now())? {
                        return Ok(result);
                    }
                }
                Event::Mouse(mouse) => view.handle_mouse(mouse),
                _ => {}
            }
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Create a centered rectangle with fixed dimensions
fn centered_fixed_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.width.saturating_sub(width) / 2;
    let y = area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn page_number(page: WizardPage) -> usize {
    match page {
        WizardPage::SelectMethod => 1,
        WizardPage::CreateRcFile | WizardPage::SelectRcFile => 2,
        WizardPage::SchemePick | WizardPage::Finished | WizardPage::Cancelled => 3,
    }
}

fn render_wizard(f: &mut Frame, view: &WizardView) {
    let area = centered_fixed_rect(72, 24, f.area());
    f.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Page body
            Constraint::Length(1), // Status line
            Constraint::Length(1), // Mini buffer
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    render_header(f, chunks[0], view);
    render_page(f, chunks[1], view);

    let status = Paragraph::new(Line::from(Span::styled(
        view.notifications.current(),
        Style::default().fg(Color::Yellow),
    )));
    f.render_widget(status, chunks[2]);

    let mini_buffer = Paragraph::new(Line::from(Span::styled(
        view.notifications.mini_buffer(),
        Style::default().fg(Color::Cyan),
    )));
    f.render_widget(mini_buffer, chunks[3]);
    render_help_bar(f, chunks[4], view);

    if let Some(editor) = &view.key_editor {
        render_key_editor(f, editor);
    }

    if let Some(overlay) = view.notifications.overlay().filter(|o| o.is_visible()) {
        render_help_overlay(f, overlay.lines());
    }
    if view.show_quit_confirm {
        render_quit_confirm_overlay(f);
    }
    if let Some(alert) = view.alerts.peek() {
        render_alert_overlay(f, &alert.title, &alert.message);
    }
}

fn render_header(f: &mut Frame, area: Rect, view: &WizardView) {
    let page = view.controller.page();
    let current = page_number(page);
    let dots: String = (1..=3)
        .map(|n| if n <= current { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ");

    let title = view.controller.message("wizardTitle", &[]);
    let header = Paragraph::new(vec![
        Line::from(Span::styled(title, Style::default().fg(Color::Cyan).bold())),
        Line::from(vec![
            Span::styled(page.title(), Style::default().fg(Color::White).bold()),
            Span::raw("  "),
            Span::styled(dots, Style::default().fg(Color::DarkGray)),
        ]),
    ])
    .alignment(Alignment::Center);
    f.render_widget(header, area);
}

fn render_page(f: &mut Frame, area: Rect, view: &WizardView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    match view.controller.page() {
        WizardPage::SelectMethod => render_select_method(f, inner, view),
        WizardPage::CreateRcFile | WizardPage::SelectRcFile => render_target_page(f, inner, view),
        WizardPage::SchemePick => render_scheme_pick(f, inner, view),
        WizardPage::Finished | WizardPage::Cancelled => {}
    }
}

fn render_select_method(f: &mut Frame, area: Rect, view: &WizardView) {
    let options = [
        view.controller.message("methodCreate", &[]),
        view.controller.message("methodSelect", &[]),
    ];
    let items: Vec<ListItem> = options
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let style = if i == view.method_selected {
                Style::default().fg(Color::Black).bg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("  {}", label)).style(style)
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(view.method_selected));
    f.render_stateful_widget(List::new(items), area, &mut list_state);
}

fn render_target_page(f: &mut Frame, area: Rect, view: &WizardView) {
    let target = view.controller.state().target();
    let filename = view.controller.chosen_filename().unwrap_or("-");

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Directory: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                target.path().display().to_string(),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  File name: ", Style::default().fg(Color::DarkGray)),
            Span::styled("◂ ", Style::default().fg(Color::Cyan)),
            Span::styled(filename, Style::default().fg(Color::Green).bold()),
            Span::styled(" ▸", Style::default().fg(Color::Cyan)),
        ]),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_scheme_pick(f: &mut Frame, area: Rect, view: &WizardView) {
    let schemes = view.controller.schemes();
    if schemes.is_empty() {
        let message = view.controller.message("noSchemeAvailable", &[]);
        let para = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(Color::Red).italic(),
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        f.render_widget(para, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let items: Vec<ListItem> = schemes
        .iter()
        .enumerate()
        .map(|(i, scheme)| {
            let style = if i == view.scheme_selected {
                Style::default().fg(Color::Black).bg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("  {}", view.controller.scheme_name(scheme))).style(style)
        })
        .collect();
    let mut list_state = ListState::default();
    list_state.select(Some(view.scheme_selected));
    f.render_stateful_widget(List::new(items), chunks[0], &mut list_state);

    let description = view.controller.scheme_description().unwrap_or_default();
    let icon = view
        .controller
        .chosen_scheme()
        .map(|s| s.icon.clone())
        .unwrap_or_default();
    let detail = Paragraph::new(vec![
        Line::from(Span::styled(description, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(Span::styled(icon, Style::default().fg(Color::DarkGray))),
    ])
    .block(
        Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .wrap(Wrap { trim: true });
    f.render_widget(detail, chunks[1]);
}

fn render_help_bar(f: &mut Frame, area: Rect, view: &WizardView) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Cyan));
    let text = |t: &'static str| Span::styled(t, Style::default().fg(Color::DarkGray));

    let mut spans = match view.controller.page() {
        WizardPage::SelectMethod => vec![key("↑↓"), text(" choose  "), key("Enter"), text(" next  ")],
        WizardPage::CreateRcFile => vec![
            key("c"),
            text(" directory  "),
            key("←→"),
            text(" file name  "),
            key("Enter"),
            text(" schemes  "),
            key("Bksp"),
            text(" back  "),
        ],
        WizardPage::SelectRcFile => vec![
            key("c"),
            text(" directory  "),
            key("←→"),
            text(" file name  "),
            key("Enter"),
            text(" finish  "),
            key("Bksp"),
            text(" back  "),
        ],
        WizardPage::SchemePick => vec![
            key("↑↓"),
            text(" scheme  "),
            key("k"),
            text(" keys  "),
            key("Enter"),
            text(" finish  "),
            key("Bksp"),
            text(" back  "),
        ],
        WizardPage::Finished | WizardPage::Cancelled => vec![],
    };

    spans.extend([key("?"), text(" help  "), key("q"), text(" quit")]);
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_key_editor(f: &mut Frame, editor: &KeyEditor) {
    let height = (editor.rows.len() as u16).saturating_add(4);
    let area = centered_fixed_rect(48, height, f.area());
    f.render_widget(Clear, area);

    let items: Vec<ListItem> = editor
        .rows
        .iter()
        .enumerate()
        .map(|(i, (name, key))| {
            let value = match (&editor.editing, i == editor.selected) {
                (Some(buffer), true) => format!("{}_", buffer),
                _ => key.clone(),
            };
            let style = if i == editor.selected {
                Style::default().fg(Color::Black).bg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("  {:<20} {}", name, value)).style(style)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Special keys ")
        .title_alignment(Alignment::Center)
        .title_bottom(Line::from(" Enter edit · s save · Esc close ").centered());

    let mut list_state = ListState::default();
    list_state.select(Some(editor.selected));
    f.render_stateful_widget(List::new(items).block(block), area, &mut list_state);
}

fn render_help_overlay(f: &mut Frame, lines: &[String]) {
    let height = (lines.len() as u16).saturating_add(2);
    let area = centered_fixed_rect(50, height, f.area());
    f.render_widget(Clear, area);

    let text: Vec<Line> = lines.iter().map(|l| Line::from(l.as_str())).collect();
    let para = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .style(Style::default().bg(Color::Rgb(30, 53, 74))),
    );
    f.render_widget(para, area);
}

fn render_quit_confirm_overlay(f: &mut Frame) {
    let area = centered_fixed_rect(40, 5, f.area());
    f.render_widget(Clear, area);

    let para = Paragraph::new(vec![
        Line::from(Span::styled(
            "Quit without saving?",
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(vec![
            Span::styled("y", Style::default().fg(Color::Cyan)),
            Span::styled(" yes   ", Style::default().fg(Color::DarkGray)),
            Span::styled("n", Style::default().fg(Color::Cyan)),
            Span::styled(" no", Style::default().fg(Color::DarkGray)),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(para, area);
}

fn render_alert_overlay(f: &mut Frame, title: &str, message: &str) {
    let area = centered_fixed_rect(56, 6, f.area());
    f.render_widget(Clear, area);

    let para = Paragraph::new(vec![
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(Span::styled(
            "Enter to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(format!(" {} ", title))
            .title_style(Style::default().fg(Color::Red).bold())
            .title_alignment(Alignment::Center),
    );
    f.render_widget(para, area);
}
