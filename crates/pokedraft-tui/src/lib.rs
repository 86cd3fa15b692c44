// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use pokedraft_app::{
    AddOutcome, AppCommand, AppEvent, AppState, CancelToken, Candidate, Extent, FocusArea, Picker,
    PickerCommand, PickerConfig, PickerEvent, SharedSelection, TeamSummary,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

const DROPDOWN_ROWS: u16 = 6;
const STATUS_CLEAR_DELAY: Duration = Duration::from_secs(4);

pub trait AppRuntime {
    /// Fetches the full catalog. `Ok(None)` means the fetch was cancelled.
    fn load_candidates(&mut self, cancel: &CancelToken) -> Result<Option<Vec<Candidate>>>;

    fn spawn_candidate_fetch(
        &mut self,
        cancel: CancelToken,
        tx: Sender<InternalEvent>,
    ) -> Result<()> {
        let event = match self.load_candidates(&cancel) {
            Ok(Some(candidates)) => InternalEvent::CatalogLoaded(candidates),
            Ok(None) => return Ok(()),
            Err(error) => InternalEvent::CatalogFailed(format!("{error:#}")),
        };
        tx.send(event)
            .map_err(|_| anyhow::anyhow!("catalog event channel closed"))?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
    BlurElapsed { token: u64 },
    CatalogLoaded(Vec<Candidate>),
    CatalogFailed(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ScreenAreas {
    first_name: Rect,
    first_name_error: Rect,
    last_name: Rect,
    last_name_error: Rect,
    team_input: Rect,
    dropdown: Rect,
    badges: Rect,
    status: Rect,
}

impl ScreenAreas {
    fn field_at(&self, position: Position) -> Option<FocusArea> {
        [
            (self.first_name, FocusArea::FirstName),
            (self.last_name, FocusArea::LastName),
            (self.team_input, FocusArea::TeamSearch),
            (self.badges, FocusArea::Badges),
        ]
        .into_iter()
        .find(|(area, _)| area.contains(position))
        .map(|(_, field)| field)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct DropdownRow {
    label: String,
    focused: bool,
    picked: bool,
}

struct ViewData {
    picker: Picker,
    team: SharedSelection,
    cancel: CancelToken,
    areas: ScreenAreas,
    status_token: u64,
}

impl ViewData {
    fn new(config: PickerConfig) -> Self {
        let team = SharedSelection::new(config.max_team_size);
        Self {
            picker: Picker::new(config, team.clone()),
            team,
            cancel: CancelToken::new(),
            areas: ScreenAreas::default(),
            status_token: 0,
        }
    }
}

pub fn run_app<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    config: PickerConfig,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen, EnableMouseCapture)
        .context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::new(config);
    let (internal_tx, internal_rx) = mpsc::channel();
    start_catalog_fetch(state, runtime, &mut view_data, &internal_tx);

    let mut result = Ok(());
    loop {
        process_internal_events(state, &mut view_data, &internal_tx, &internal_rx);

        match terminal.size() {
            Ok(size) => sync_layout(&mut view_data, Rect::new(0, 0, size.width, size.height)),
            Err(error) => {
                result = Err(error).context("read terminal size");
                break;
            }
        }
        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }
        observe_last_row(state, &mut view_data, &internal_tx);

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(state, runtime, &mut view_data, &internal_tx, key) {
                        break;
                    }
                }
                Event::Mouse(mouse) => {
                    handle_mouse_event(state, &mut view_data, &internal_tx, mouse);
                }
                _ => {}
            }
        }
    }

    view_data.cancel.cancel();
    log::info!("leaving with {} pokemon on the team", view_data.team.len());
    disable_raw_mode().context("disable raw mode")?;
    execute!(
        io::stdout(),
        terminal::LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("leave alternate screen")?;
    result
}

fn start_catalog_fetch<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
) {
    view_data.cancel.cancel();
    view_data.cancel = CancelToken::new();
    log::info!("fetching catalog");
    dispatch_picker(state, view_data, tx, PickerCommand::FetchStarted);
    if let Err(error) = runtime.spawn_candidate_fetch(view_data.cancel.clone(), tx.clone()) {
        log::warn!("catalog fetch did not start: {error:#}");
        dispatch_picker(
            state,
            view_data,
            tx,
            PickerCommand::FetchFailed(format!("{error:#}")),
        );
    }
}

fn process_internal_events(
    state: &mut AppState,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
            InternalEvent::BlurElapsed { token } => {
                dispatch_picker(state, view_data, tx, PickerCommand::BlurElapsed { token });
            }
            InternalEvent::CatalogLoaded(candidates) => {
                dispatch_picker(state, view_data, tx, PickerCommand::FetchFinished(candidates));
            }
            InternalEvent::CatalogFailed(error) => {
                dispatch_picker(state, view_data, tx, PickerCommand::FetchFailed(error));
            }
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(STATUS_CLEAR_DELAY);
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn schedule_blur_close(internal_tx: &Sender<InternalEvent>, token: u64, delay: Duration) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(delay);
        let _ = sender.send(InternalEvent::BlurElapsed { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    let events = state.dispatch(AppCommand::SetStatus(message.into()));
    track_status(view_data, internal_tx, &events);
}

fn track_status(
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    events: &[AppEvent],
) {
    if events
        .iter()
        .any(|event| matches!(event, AppEvent::StatusUpdated(_)))
    {
        view_data.status_token = view_data.status_token.saturating_add(1);
        schedule_status_clear(internal_tx, view_data.status_token);
    }
}

fn dispatch_app(
    state: &mut AppState,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    command: AppCommand,
) {
    let events = state.dispatch(command);
    apply_app_events(state, view_data, tx, &events);
}

fn apply_app_events(
    state: &mut AppState,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    events: &[AppEvent],
) {
    track_status(view_data, tx, events);
    for event in events {
        if let AppEvent::FocusMoved { from, to } = event {
            if *from == FocusArea::TeamSearch {
                dispatch_picker(state, view_data, tx, PickerCommand::Blur);
            }
            if *to == FocusArea::TeamSearch {
                dispatch_picker(state, view_data, tx, PickerCommand::Focus);
            }
        }
    }
}

fn dispatch_picker(
    state: &mut AppState,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    command: PickerCommand,
) {
    let events = view_data.picker.dispatch(command);
    for event in events {
        match event {
            PickerEvent::BlurScheduled { token, delay } => schedule_blur_close(tx, token, delay),
            PickerEvent::Selected { name, outcome } => {
                emit_status(state, view_data, tx, selection_status(&name, &outcome));
                if outcome.changed() {
                    let events = state.sync_summary(&view_data.team);
                    apply_app_events(state, view_data, tx, &events);
                }
            }
            PickerEvent::CatalogLoaded(count) => {
                emit_status(state, view_data, tx, format!("{count} pokemon loaded"));
            }
            PickerEvent::CatalogFailed(error) => {
                emit_status(
                    state,
                    view_data,
                    tx,
                    format!("catalog unavailable: {error} (ctrl+r retries)"),
                );
            }
            PickerEvent::Opened
            | PickerEvent::Closed
            | PickerEvent::FocusChanged(_)
            | PickerEvent::Scrolled(_)
            | PickerEvent::PageAdvanced(_) => {}
        }
    }
}

fn selection_status(name: &str, outcome: &AddOutcome) -> String {
    match outcome {
        AddOutcome::Appended => format!("added {name}"),
        AddOutcome::Replaced { evicted } => format!("{name} replaced {}", evicted.name),
        AddOutcome::Duplicate => format!("{name} is already on the team"),
    }
}

fn handle_key_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c')) {
        return true;
    }

    if state.summary.is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            dispatch_app(state, view_data, internal_tx, AppCommand::CloseSummary);
        }
        return false;
    }

    match (key.code, ctrl) {
        (KeyCode::Tab, _) => {
            dispatch_app(state, view_data, internal_tx, AppCommand::NextField);
            return false;
        }
        (KeyCode::BackTab, _) => {
            dispatch_app(state, view_data, internal_tx, AppCommand::PrevField);
            return false;
        }
        (KeyCode::Char('s'), true) => {
            let events = state.submit(&view_data.team);
            apply_app_events(state, view_data, internal_tx, &events);
            return false;
        }
        (KeyCode::Char('r'), true) => {
            if view_data.picker.fetch_failed() {
                start_catalog_fetch(state, runtime, view_data, internal_tx);
            } else if view_data.picker.is_loading() {
                emit_status(state, view_data, internal_tx, "catalog is still loading");
            } else {
                emit_status(state, view_data, internal_tx, "catalog already loaded");
            }
            return false;
        }
        _ => {}
    }

    match state.focus {
        FocusArea::FirstName | FocusArea::LastName => {
            handle_name_key(state, view_data, internal_tx, key);
        }
        FocusArea::TeamSearch => handle_search_key(state, view_data, internal_tx, key),
        FocusArea::Badges => handle_badge_key(state, view_data, internal_tx, key),
    }
    false
}

fn handle_name_key(
    state: &mut AppState,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let field = if state.focus == FocusArea::FirstName {
        &mut state.form.first_name
    } else {
        &mut state.form.last_name
    };
    match key.code {
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => field.push(ch),
        KeyCode::Backspace => {
            field.pop();
        }
        KeyCode::Enter => {
            dispatch_app(state, view_data, tx, AppCommand::NextField);
            return;
        }
        _ => return,
    }
    // Errors already on screen follow the edits; fresh fields stay quiet until submit.
    if !state.form_errors.is_empty() {
        state.form_errors = state.form.errors();
    }
}

fn handle_search_key(
    state: &mut AppState,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let command = match key.code {
        KeyCode::Char('u') if ctrl => PickerCommand::Input(String::new()),
        KeyCode::Char(ch) if !ctrl => {
            let mut text = view_data.picker.input().to_owned();
            text.push(ch);
            PickerCommand::Input(text)
        }
        KeyCode::Backspace => {
            let mut text = view_data.picker.input().to_owned();
            text.pop();
            PickerCommand::Input(text)
        }
        KeyCode::Down => PickerCommand::ArrowDown,
        KeyCode::Up => PickerCommand::ArrowUp,
        KeyCode::Enter => PickerCommand::Enter,
        KeyCode::PageDown => PickerCommand::ScrollBy(i32::from(DROPDOWN_ROWS)),
        KeyCode::PageUp => PickerCommand::ScrollBy(-i32::from(DROPDOWN_ROWS)),
        _ => return,
    };
    dispatch_picker(state, view_data, tx, command);
}

fn handle_badge_key(
    state: &mut AppState,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let names = view_data.team.names();
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => {
            state.badge_cursor = state.badge_cursor.saturating_sub(1);
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if state.badge_cursor + 1 < names.len() {
                state.badge_cursor += 1;
            }
        }
        KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('x') => {
            let Some(name) = names.get(state.badge_cursor) else {
                return;
            };
            if view_data.team.remove(name).is_some() {
                log::info!("badge removed: {name}");
                emit_status(state, view_data, tx, format!("removed {name}"));
                let events = state.sync_summary(&view_data.team);
                apply_app_events(state, view_data, tx, &events);
            }
        }
        _ => {}
    }
}

fn handle_mouse_event(
    state: &mut AppState,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    mouse: MouseEvent,
) {
    if state.summary.is_some() {
        return;
    }
    let position = Position::new(mouse.column, mouse.row);
    let row = dropdown_row_at(view_data, position);
    match mouse.kind {
        MouseEventKind::Moved => {
            if let Some(index) = row {
                dispatch_picker(state, view_data, tx, PickerCommand::Hover(index));
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(index) = row {
                dispatch_picker(state, view_data, tx, PickerCommand::Click(index));
            } else if let Some(field) = view_data.areas.field_at(position) {
                dispatch_app(state, view_data, tx, AppCommand::FocusField(field));
            }
        }
        MouseEventKind::ScrollDown if view_data.areas.dropdown.contains(position) => {
            dispatch_picker(state, view_data, tx, PickerCommand::ScrollBy(1));
        }
        MouseEventKind::ScrollUp if view_data.areas.dropdown.contains(position) => {
            dispatch_picker(state, view_data, tx, PickerCommand::ScrollBy(-1));
        }
        _ => {}
    }
}

fn dropdown_row_at(view_data: &ViewData, position: Position) -> Option<usize> {
    if !view_data.picker.is_open() {
        return None;
    }
    let inner = dropdown_block().inner(view_data.areas.dropdown);
    if !inner.contains(position) {
        return None;
    }
    view_data
        .picker
        .rows()
        .row_at(i32::from(position.y))
        .filter(|index| *index < view_data.picker.window().len())
}

/// Recomputes the screen layout and hands the dropdown geometry to the picker.
fn sync_layout(view_data: &mut ViewData, area: Rect) {
    let areas = screen_areas(area);
    view_data.areas = areas;
    let inner = dropdown_block().inner(areas.dropdown);
    let message_lines = i32::from(view_data.picker.status_message().is_some());
    let viewport = Extent::new(
        i32::from(inner.y) + message_lines,
        (i32::from(inner.height) - message_lines).max(0),
    );
    view_data.picker.set_viewport(viewport, 1);
}

fn observe_last_row(state: &mut AppState, view_data: &mut ViewData, tx: &Sender<InternalEvent>) {
    let picker = &view_data.picker;
    if !picker.is_open() {
        return;
    }
    let Some(last) = picker.window().len().checked_sub(1) else {
        return;
    };
    let visible = picker.rows().is_row_visible(last);
    dispatch_picker(state, view_data, tx, PickerCommand::LastRowVisible(visible));
}

fn screen_areas(area: Rect) -> ScreenAreas {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(DROPDOWN_ROWS + 2),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);
    ScreenAreas {
        first_name: layout[1],
        first_name_error: layout[2],
        last_name: layout[3],
        last_name_error: layout[4],
        team_input: layout[5],
        dropdown: layout[6],
        badges: layout[7],
        status: layout[9],
    }
}

fn dropdown_block() -> Block<'static> {
    Block::default().title("pokemon").borders(Borders::ALL)
}

fn field_block(title: String, focused: bool) -> Block<'static> {
    let style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(style)
}

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData) {
    let area = frame.area();
    let areas = screen_areas(area);

    let header = Paragraph::new("Build your team: name yourself, then pick your pokemon")
        .block(Block::default().title("pokedraft").borders(Borders::ALL));
    frame.render_widget(header, Rect { height: 3, ..area });

    render_text_field(
        frame,
        areas.first_name,
        "first name",
        &state.form.first_name,
        state.focus == FocusArea::FirstName,
    );
    render_field_error(frame, areas.first_name_error, state.form_errors.first_name);
    render_text_field(
        frame,
        areas.last_name,
        "last name",
        &state.form.last_name,
        state.focus == FocusArea::LastName,
    );
    render_field_error(frame, areas.last_name_error, state.form_errors.last_name);

    let team_title = format!(
        "team {}/{}",
        view_data.team.len(),
        view_data.team.capacity()
    );
    render_text_field(
        frame,
        areas.team_input,
        &team_title,
        view_data.picker.input(),
        state.focus == FocusArea::TeamSearch,
    );

    if view_data.picker.is_open() {
        let lines = dropdown_lines(view_data);
        frame.render_widget(Paragraph::new(lines).block(dropdown_block()), areas.dropdown);
    }

    let badges = Paragraph::new(Line::from(badge_spans(state, view_data))).block(field_block(
        "badges".to_owned(),
        state.focus == FocusArea::Badges,
    ));
    frame.render_widget(badges, areas.badges);

    let status = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, areas.status);

    if let Some(summary) = &state.summary {
        let popup = centered_rect(60, 50, area);
        frame.render_widget(Clear, popup);
        let body = Paragraph::new(summary_text(summary, &view_data.team)).block(
            Block::default()
                .title("team created")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
        frame.render_widget(body, popup);
    }
}

fn render_text_field(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    title: &str,
    value: &str,
    focused: bool,
) {
    let text = if focused {
        format!("{value}_")
    } else {
        value.to_owned()
    };
    frame.render_widget(
        Paragraph::new(text).block(field_block(title.to_owned(), focused)),
        area,
    );
}

fn render_field_error(frame: &mut ratatui::Frame<'_>, area: Rect, error: Option<&'static str>) {
    if let Some(message) = error {
        frame.render_widget(
            Paragraph::new(message).style(Style::default().fg(Color::Red)),
            area,
        );
    }
}

fn dropdown_lines(view_data: &ViewData) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(message) = view_data.picker.status_message() {
        lines.push(Line::from(Span::styled(
            message,
            Style::default().add_modifier(Modifier::ITALIC),
        )));
    }
    for row in dropdown_rows(view_data) {
        let mut style = Style::default();
        if row.focused {
            style = style.bg(Color::Blue).add_modifier(Modifier::BOLD);
        }
        if row.picked {
            style = style.fg(Color::Green);
        }
        lines.push(Line::from(Span::styled(row.label, style)));
    }
    lines
}

/// Rows currently inside the dropdown viewport, top to bottom.
fn dropdown_rows(view_data: &ViewData) -> Vec<DropdownRow> {
    let picker = &view_data.picker;
    let rows = picker.rows();
    let focused = picker.focused_index();
    picker
        .window()
        .iter()
        .enumerate()
        .skip(rows.first_visible_row())
        .take_while(|(index, _)| rows.is_row_visible(*index))
        .map(|(index, candidate)| DropdownRow {
            label: candidate.name.clone(),
            focused: focused == Some(index),
            picked: view_data.team.contains(&candidate.name),
        })
        .collect()
}

fn badge_labels(view_data: &ViewData) -> Vec<String> {
    view_data
        .team
        .names()
        .into_iter()
        .map(|name| format!("[{name} x]"))
        .collect()
}

fn badge_spans(state: &AppState, view_data: &ViewData) -> Vec<Span<'static>> {
    let labels = badge_labels(view_data);
    if labels.is_empty() {
        return vec![Span::styled(
            "no pokemon picked yet",
            Style::default().fg(Color::DarkGray),
        )];
    }
    let mut spans = Vec::with_capacity(labels.len() * 2);
    for (index, label) in labels.into_iter().enumerate() {
        let style = if state.focus == FocusArea::Badges && index == state.badge_cursor {
            Style::default().bg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    spans
}

fn summary_text(summary: &TeamSummary, team: &SharedSelection) -> String {
    let mut lines = vec![summary.headline(), String::new()];
    lines.extend(
        summary
            .members
            .iter()
            .map(|member| format!("  - {}", member.name)),
    );
    lines.push(String::new());
    match team.to_json() {
        Ok(json) => lines.push(format!("team: {json}")),
        Err(error) => lines.push(format!("team: unavailable ({error})")),
    }
    lines.push("esc to close".to_owned());
    lines.join("\n")
}

fn status_text(state: &AppState, view_data: &ViewData) -> String {
    if state.summary.is_some() {
        return "esc close | ctrl+q quit".to_owned();
    }
    let hints = match state.focus {
        FocusArea::FirstName | FocusArea::LastName => "type | enter next",
        FocusArea::TeamSearch => "type to filter | up/down | enter pick | ctrl+u clear",
        FocusArea::Badges => "left/right | x remove",
    };
    let default = format!("{hints} | tab/shift+tab | ctrl+s submit | ctrl+q quit");
    let label = state.focus.label().to_uppercase();
    let loading = if view_data.picker.is_loading() {
        " | loading catalog"
    } else {
        ""
    };
    match &state.status_line {
        Some(status) => format!("{label} | {status}{loading} | {default}"),
        None => format!("{label}{loading} | {default}"),
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
