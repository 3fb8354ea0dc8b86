// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs};
use salon_app::catalog::{APP_VERSION, Catalog, MANAGER_EMAIL, MANAGER_NAME};
use salon_app::{
    AppCommand, AppEvent, AppMode, AppState, Appointment, AuthForm, AuthOutcome, AuthScreen,
    CategoryOption, Customer, FieldKind, ListRecord, ListViewModel, Route, SalonScreens, Service,
    SettingItem, SettingItemKind, TabKind, format_clock, format_duration_minutes,
    format_long_date, format_rupees, last_visit_label, relative_day_label,
};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use time::Date;
use tracing::{debug, info};

pub const DEFAULT_STATUS_CLEAR: Duration = Duration::from_secs(4);

const CURSOR_MARK: &str = "›";
const LINK_ARROW: &str = "→";
const POPULAR_MARK: &str = "★";
const LOG_OUT_LABEL: &str = "Log out";
const QUICK_ACTIONS: [&str; 3] = ["New Appointment", "Add Customer", "New Payment"];
const SOCIAL_SIGN_IN: [&str; 2] = ["Google", "Facebook"];

pub trait AppRuntime {
    fn load_catalog(&mut self) -> Result<Catalog>;
    fn submit_auth(&mut self, form: &AuthForm) -> Result<AuthOutcome>;
    /// Follows a settings link and returns the status line to show.
    fn follow_setting_link(&mut self, item: &SettingItem) -> Result<String>;
    fn status_clear_after(&self) -> Duration {
        DEFAULT_STATUS_CLEAR
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AuthUiState {
    form: AuthForm,
    field_index: usize,
}

impl AuthUiState {
    fn blank(screen: AuthScreen) -> Self {
        Self {
            form: AuthForm::blank_for(screen),
            field_index: 0,
        }
    }

    fn field_kind(&self) -> Option<FieldKind> {
        self.form
            .fields()
            .get(self.field_index)
            .map(|field| field.kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct ListCursors {
    appointments: usize,
    customers: usize,
    services: usize,
    settings: usize,
}

#[derive(Debug)]
struct ViewData {
    screens: SalonScreens,
    auth: AuthUiState,
    cursors: ListCursors,
    help_visible: bool,
    status_token: u64,
    status_clear_after: Duration,
}

impl ViewData {
    fn new(screens: SalonScreens, route: Route) -> Self {
        let screen = match route {
            Route::Auth(screen) => screen,
            Route::Main => AuthScreen::Login,
        };
        Self {
            screens,
            auth: AuthUiState::blank(screen),
            cursors: ListCursors::default(),
            help_visible: false,
            status_token: 0,
            status_clear_after: DEFAULT_STATUS_CLEAR,
        }
    }
}

/// Type-erased access to whichever list screen is active.
trait ListControl {
    fn query(&self) -> &str;
    fn set_text_query(&mut self, query: &str);
    fn clear_text_query(&mut self);
    fn supports_search(&self) -> bool;
    fn step_category(&mut self, delta: isize) -> Option<&'static str>;
    fn has_categories(&self) -> bool;
    fn visible_count(&self) -> usize;
}

impl<R: ListRecord> ListControl for ListViewModel<R> {
    fn query(&self) -> &str {
        ListViewModel::query(self)
    }

    fn set_text_query(&mut self, query: &str) {
        ListViewModel::set_text_query(self, query);
    }

    fn clear_text_query(&mut self) {
        ListViewModel::clear_text_query(self);
    }

    fn supports_search(&self) -> bool {
        ListViewModel::supports_search(self)
    }

    fn step_category(&mut self, delta: isize) -> Option<&'static str> {
        ListViewModel::step_category(self, delta)
    }

    fn has_categories(&self) -> bool {
        !self.category_options().is_empty()
    }

    fn visible_count(&self) -> usize {
        ListViewModel::visible_count(self)
    }
}

fn active_list(
    view_data: &mut ViewData,
    tab: TabKind,
) -> Option<(&mut dyn ListControl, &mut usize)> {
    let screens = &mut view_data.screens;
    let cursors = &mut view_data.cursors;
    match tab {
        TabKind::Appointments => Some((
            &mut screens.appointments as &mut dyn ListControl,
            &mut cursors.appointments,
        )),
        TabKind::Customers => Some((
            &mut screens.customers as &mut dyn ListControl,
            &mut cursors.customers,
        )),
        TabKind::Services => Some((
            &mut screens.services as &mut dyn ListControl,
            &mut cursors.services,
        )),
        TabKind::Dashboard | TabKind::Settings => None,
    }
}

fn clamp_cursor(cursor: &mut usize, len: usize) {
    *cursor = (*cursor).min(len.saturating_sub(1));
}

pub fn run_app<R: AppRuntime>(state: &mut AppState, runtime: &mut R) -> Result<()> {
    let screens = load_screens(runtime)?;
    let mut view_data = ViewData::new(screens, state.route);
    view_data.status_clear_after = runtime.status_clear_after();

    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    let (internal_tx, internal_rx) = mpsc::channel();

    let mut result = Ok(());
    loop {
        process_internal_events(state, &view_data, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = match event::poll(Duration::from_millis(120)).context("poll event") {
            Ok(has_event) => has_event,
            Err(error) => {
                result = Err(error);
                break;
            }
        };
        if !has_event {
            continue;
        }
        match event::read().context("read event") {
            Ok(Event::Key(key)) => {
                if handle_key_event(state, runtime, &mut view_data, &internal_tx, key) {
                    break;
                }
            }
            Ok(_) => {}
            Err(error) => {
                result = Err(error);
                break;
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn load_screens<R: AppRuntime>(runtime: &mut R) -> Result<SalonScreens> {
    let catalog = runtime.load_catalog().context("load catalog")?;
    SalonScreens::from_catalog(catalog).context("build screens from catalog")
}

fn process_internal_events(
    state: &mut AppState,
    view_data: &ViewData,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64, after: Duration) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(after);
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn bump_status_token(view_data: &mut ViewData, internal_tx: &Sender<InternalEvent>) {
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(
        internal_tx,
        view_data.status_token,
        view_data.status_clear_after,
    );
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.dispatch(AppCommand::SetStatus(message.into()));
    bump_status_token(view_data, internal_tx);
}

fn dispatch(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    command: AppCommand,
) -> Vec<AppEvent> {
    let events = state.dispatch(command);
    for event in &events {
        match event {
            AppEvent::TabChanged(tab) => debug!(tab = tab.label(), "tab changed"),
            AppEvent::RouteChanged(route) => info!(?route, "route changed"),
            AppEvent::ModeChanged(mode) => debug!(?mode, "mode changed"),
            AppEvent::StatusUpdated(_) | AppEvent::StatusCleared => {}
        }
    }
    if events
        .iter()
        .any(|event| matches!(event, AppEvent::StatusUpdated(_)))
    {
        bump_status_token(view_data, internal_tx);
    }
    events
}

fn handle_key_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
    {
        return true;
    }

    if view_data.help_visible {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            view_data.help_visible = false;
        }
        return false;
    }

    match state.route {
        Route::Auth(_) => handle_auth_key(state, runtime, view_data, internal_tx, key),
        Route::Main if state.mode == AppMode::Search => {
            handle_search_key(state, view_data, internal_tx, key);
        }
        Route::Main => handle_nav_key(state, runtime, view_data, internal_tx, key),
    }
    false
}

fn handle_nav_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match (key.code, key.modifiers) {
        (KeyCode::Char('?'), _) => view_data.help_visible = true,
        (KeyCode::Char('f'), KeyModifiers::NONE) | (KeyCode::Tab, _) => {
            dispatch(state, view_data, internal_tx, AppCommand::NextTab);
        }
        (KeyCode::Char('b'), KeyModifiers::NONE) | (KeyCode::BackTab, _) => {
            dispatch(state, view_data, internal_tx, AppCommand::PrevTab);
        }
        (KeyCode::Char(digit @ '1'..='5'), _) => {
            let index = digit as usize - '1' as usize;
            dispatch(
                state,
                view_data,
                internal_tx,
                AppCommand::SetActiveTab(TabKind::ALL[index]),
            );
        }
        (KeyCode::Char('/'), _) => start_search(state, view_data, internal_tx),
        (KeyCode::Char('[') | KeyCode::Char('h'), KeyModifiers::NONE) => {
            step_category(state, view_data, internal_tx, -1);
        }
        (KeyCode::Char(']') | KeyCode::Char('l'), KeyModifiers::NONE) => {
            step_category(state, view_data, internal_tx, 1);
        }
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => {
            move_cursor(state, view_data, 1);
        }
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => {
            move_cursor(state, view_data, -1);
        }
        (KeyCode::Char('g'), KeyModifiers::NONE) => move_cursor(state, view_data, isize::MIN),
        (KeyCode::Char('G'), _) => move_cursor(state, view_data, isize::MAX),
        (KeyCode::Enter, _) => activate_selection(state, runtime, view_data, internal_tx),
        (KeyCode::Esc, _) => {
            if let Some((list, cursor)) = active_list(view_data, state.active_tab)
                && !list.query().is_empty()
            {
                list.clear_text_query();
                clamp_cursor(cursor, list.visible_count());
                emit_status(state, view_data, internal_tx, "search cleared");
            }
        }
        _ => {}
    }
}

fn start_search(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let searchable = active_list(view_data, state.active_tab)
        .is_some_and(|(list, _)| list.supports_search());
    if !searchable {
        let message = format!("no search on {}", state.active_tab.label());
        emit_status(state, view_data, internal_tx, message);
        return;
    }
    dispatch(state, view_data, internal_tx, AppCommand::EnterSearch);
}

fn step_category(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    delta: isize,
) {
    let tab = state.active_tab;
    let Some((list, cursor)) = active_list(view_data, tab) else {
        return;
    };
    if !list.has_categories() {
        let message = format!("no categories on {}", tab.label());
        emit_status(state, view_data, internal_tx, message);
        return;
    }
    if list.step_category(delta).is_some() {
        clamp_cursor(cursor, list.visible_count());
    }
}

fn handle_search_key(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            dispatch(state, view_data, internal_tx, AppCommand::ExitToNav);
        }
        KeyCode::Backspace => edit_query(state, view_data, |query| {
            query.pop();
        }),
        KeyCode::Char('u') if ctrl => edit_query(state, view_data, String::clear),
        KeyCode::Char(ch) if !ctrl => edit_query(state, view_data, |query| query.push(ch)),
        _ => {}
    }
}

fn edit_query(state: &AppState, view_data: &mut ViewData, edit: impl FnOnce(&mut String)) {
    let Some((list, cursor)) = active_list(view_data, state.active_tab) else {
        return;
    };
    let mut query = list.query().to_owned();
    edit(&mut query);
    list.set_text_query(&query);
    clamp_cursor(cursor, list.visible_count());
}

fn move_cursor(state: &AppState, view_data: &mut ViewData, delta: isize) {
    let (len, cursor) = match state.active_tab {
        TabKind::Settings => (
            settings_entry_count(view_data),
            &mut view_data.cursors.settings,
        ),
        tab => match active_list(view_data, tab) {
            Some((list, cursor)) => (list.visible_count(), cursor),
            None => return,
        },
    };
    if len == 0 {
        *cursor = 0;
        return;
    }
    let next = (*cursor as isize).saturating_add(delta);
    *cursor = next.clamp(0, len as isize - 1) as usize;
}

/// Settings items plus the trailing log-out entry.
fn settings_entry_count(view_data: &ViewData) -> usize {
    view_data.screens.settings.item_count() + 1
}

fn activate_selection<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    match state.active_tab {
        TabKind::Settings => activate_setting(state, runtime, view_data, internal_tx),
        TabKind::Dashboard => {}
        tab => {
            if let Some(summary) = selected_summary(view_data, tab) {
                emit_status(state, view_data, internal_tx, summary);
            }
        }
    }
}

fn activate_setting<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let index = view_data.cursors.settings;
    let Some(item) = view_data.screens.settings.item(index).cloned() else {
        if index + 1 == settings_entry_count(view_data) {
            sign_out(state, view_data, internal_tx);
        }
        return;
    };

    match item.kind {
        SettingItemKind::Toggle(key) => {
            let enabled = view_data.screens.settings.toggle(key);
            info!(setting = key.as_str(), enabled, "setting toggled");
            let label = if enabled { "on" } else { "off" };
            emit_status(
                state,
                view_data,
                internal_tx,
                format!("{} {label}", item.title),
            );
        }
        SettingItemKind::Link => match runtime.follow_setting_link(&item) {
            Ok(message) => emit_status(state, view_data, internal_tx, message),
            Err(error) => emit_status(
                state,
                view_data,
                internal_tx,
                format!("{} unavailable: {error}", item.title),
            ),
        },
    }
}

fn sign_out(state: &mut AppState, view_data: &mut ViewData, internal_tx: &Sender<InternalEvent>) {
    dispatch(state, view_data, internal_tx, AppCommand::SignOut);
    view_data.auth = AuthUiState::blank(AuthScreen::Login);
    view_data.cursors = ListCursors::default();
}

fn selected_summary(view_data: &ViewData, tab: TabKind) -> Option<String> {
    let screens = &view_data.screens;
    let today = screens.today();
    match tab {
        TabKind::Appointments => screens
            .appointments
            .visible()
            .nth(view_data.cursors.appointments)
            .map(|appointment| {
                format!(
                    "{}: {}, {} {}",
                    appointment.customer,
                    appointment.service,
                    relative_day_label(appointment.date, today),
                    format_clock(appointment.time)
                )
            }),
        TabKind::Customers => screens
            .customers
            .visible()
            .nth(view_data.cursors.customers)
            .map(|customer| {
                format!(
                    "{}: prefers {}",
                    customer.name,
                    customer.preferred_services.join(", ")
                )
            }),
        TabKind::Services => screens
            .services
            .visible()
            .nth(view_data.cursors.services)
            .map(|service| format!("{}: {}", service.name, service.description)),
        TabKind::Dashboard | TabKind::Settings => None,
    }
}

fn handle_auth_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let is_toggle = view_data.auth.field_kind() == Some(FieldKind::Toggle);
    match key.code {
        KeyCode::Char('s') if ctrl => submit_auth(state, runtime, view_data, internal_tx),
        KeyCode::Char('r') if ctrl => {
            switch_auth_screen(state, view_data, internal_tx, AuthScreen::Register);
        }
        KeyCode::Char('l') if ctrl => {
            switch_auth_screen(state, view_data, internal_tx, AuthScreen::Login);
        }
        KeyCode::Tab | KeyCode::Down => move_auth_field(view_data, 1),
        KeyCode::BackTab | KeyCode::Up => move_auth_field(view_data, -1),
        KeyCode::Enter if is_toggle => toggle_auth_field(view_data),
        KeyCode::Enter => submit_auth(state, runtime, view_data, internal_tx),
        KeyCode::Char(' ') if is_toggle => toggle_auth_field(view_data),
        KeyCode::Backspace => {
            let index = view_data.auth.field_index;
            if let Some(text) = view_data.auth.form.text_mut(index) {
                text.pop();
            }
        }
        KeyCode::Char(ch) if !ctrl => {
            let index = view_data.auth.field_index;
            if let Some(text) = view_data.auth.form.text_mut(index) {
                text.push(ch);
            }
        }
        _ => {}
    }
}

fn move_auth_field(view_data: &mut ViewData, delta: isize) {
    let len = view_data.auth.form.fields().len() as isize;
    let current = view_data.auth.field_index as isize;
    view_data.auth.field_index = (current + delta).rem_euclid(len) as usize;
}

fn toggle_auth_field(view_data: &mut ViewData) {
    let index = view_data.auth.field_index;
    view_data.auth.form.toggle(index);
}

fn switch_auth_screen(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    screen: AuthScreen,
) {
    let command = match screen {
        AuthScreen::Login => AppCommand::ShowLogin,
        AuthScreen::Register => AppCommand::ShowRegister,
    };
    dispatch(state, view_data, internal_tx, command);
    if view_data.auth.form.screen() != screen {
        view_data.auth = AuthUiState::blank(screen);
    }
}

fn submit_auth<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let outcome = match runtime.submit_auth(&view_data.auth.form) {
        Ok(outcome) => outcome,
        Err(error) => {
            emit_status(
                state,
                view_data,
                internal_tx,
                format!("sign-in failed: {error}"),
            );
            return;
        }
    };
    match load_screens(runtime) {
        Ok(screens) => view_data.screens = screens,
        Err(error) => {
            emit_status(
                state,
                view_data,
                internal_tx,
                format!("load failed: {error:#}"),
            );
            return;
        }
    }
    view_data.cursors = ListCursors::default();
    view_data.auth = AuthUiState::blank(AuthScreen::Login);
    dispatch(state, view_data, internal_tx, AppCommand::SignIn);
    if !outcome.account.is_empty() {
        let message = format!("signed in as {}", outcome.account);
        emit_status(state, view_data, internal_tx, message);
    }
}

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData) {
    match state.route {
        Route::Auth(_) => render_auth(frame, state, view_data),
        Route::Main => render_main(frame, state, view_data),
    }

    if view_data.help_visible {
        let area = centered_rect(70, 60, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn render_main(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let selected = TabKind::ALL
        .iter()
        .position(|tab| *tab == state.active_tab)
        .unwrap_or(0);
    let tab_titles = TabKind::ALL
        .iter()
        .enumerate()
        .map(|(index, tab)| format!(" {} {} ", index + 1, tab.title()))
        .collect::<Vec<String>>();
    let tabs = Tabs::new(tab_titles)
        .block(Block::default().title("salon").borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .select(selected);
    frame.render_widget(tabs, layout[0]);

    let screens = &view_data.screens;
    let today = screens.today();
    let search_mode = state.mode == AppMode::Search;
    match state.active_tab {
        TabKind::Dashboard => {
            let body = Paragraph::new(render_dashboard_text(view_data))
                .block(Block::default().borders(Borders::ALL).title("dashboard"));
            frame.render_widget(body, layout[1]);
        }
        TabKind::Appointments => render_list(
            frame,
            layout[1],
            &screens.appointments,
            search_mode,
            view_data.cursors.appointments,
            &ListLayout {
                title: "appointments",
                columns: &["Customer", "Service", "Day", "Time", "Status"],
                empty: "No appointments found",
                cells: |appointment, today| appointment_cells(appointment, today).to_vec(),
            },
            today,
        ),
        TabKind::Customers => render_list(
            frame,
            layout[1],
            &screens.customers,
            search_mode,
            view_data.cursors.customers,
            &ListLayout {
                title: "customers",
                columns: &["", "Name", "Phone", "Email", "Last visit", "Visits", "Spent"],
                empty: "No customers found",
                cells: |customer, today| customer_cells(customer, today).to_vec(),
            },
            today,
        ),
        TabKind::Services => render_list(
            frame,
            layout[1],
            &screens.services,
            search_mode,
            view_data.cursors.services,
            &ListLayout {
                title: "services",
                columns: &["", "Name", "Category", "Price", "Duration", "Description"],
                empty: "No services found",
                cells: |service, _| service_cells(service).to_vec(),
            },
            today,
        ),
        TabKind::Settings => {
            let body = Paragraph::new(render_settings_text(view_data))
                .block(Block::default().borders(Borders::ALL).title("settings"));
            frame.render_widget(body, layout[1]);
        }
    }

    let status_widget = Paragraph::new(status_text(state))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_widget, layout[2]);
}

struct ListLayout<R> {
    title: &'static str,
    columns: &'static [&'static str],
    empty: &'static str,
    cells: fn(&R, Date) -> Vec<String>,
}

fn render_list<R: ListRecord>(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    view: &ListViewModel<R>,
    search_mode: bool,
    cursor: usize,
    list_layout: &ListLayout<R>,
    today: Date,
) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(1)])
        .split(area);

    let header = Paragraph::new(list_header_text(view, search_mode))
        .block(Block::default().borders(Borders::ALL).title(list_layout.title));
    frame.render_widget(header, sections[0]);

    let visible = view.visible_records();
    if visible.is_empty() {
        let empty = Paragraph::new(list_layout.empty)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, sections[1]);
        return;
    }

    let header_row = Row::new(list_layout.columns.iter().map(|label| {
        Cell::from(*label).style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    }));
    let rows = visible.iter().enumerate().map(|(index, record)| {
        let style = if index == cursor {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Row::new((list_layout.cells)(record, today)).style(style)
    });
    let widths = vec![Constraint::Min(4); list_layout.columns.len()];
    let table = Table::new(rows, widths)
        .header(header_row)
        .column_spacing(1)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} of {}", visible.len(), view.records().len())),
        );
    frame.render_widget(table, sections[1]);
}

fn chips_text(options: &[CategoryOption], active: Option<&str>) -> String {
    options
        .iter()
        .map(|option| {
            if Some(option.id) == active {
                format!("[{}]", option.label)
            } else {
                format!(" {} ", option.label)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn list_header_text<R: ListRecord>(view: &ListViewModel<R>, search_mode: bool) -> String {
    let caret = if search_mode { "_" } else { "" };
    let search = if view.query().is_empty() && !search_mode {
        let fields = view.search_fields().collect::<Vec<_>>().join(", ");
        format!("search {fields}: / to type")
    } else {
        format!("search: {}{caret}", view.query())
    };
    if view.category_options().is_empty() {
        search
    } else {
        let chips = chips_text(view.category_options(), view.active_category());
        format!("{chips}\n{search}")
    }
}

fn appointment_cells(appointment: &Appointment, today: Date) -> [String; 5] {
    [
        appointment.customer.clone(),
        appointment.service.clone(),
        relative_day_label(appointment.date, today),
        format_clock(appointment.time),
        appointment.status.label().to_owned(),
    ]
}

fn customer_cells(customer: &Customer, today: Date) -> [String; 7] {
    [
        customer.initials(),
        customer.name.clone(),
        customer.phone.clone(),
        customer.email.clone(),
        last_visit_label(customer.last_visit, today),
        customer.total_visits.to_string(),
        format_rupees(customer.total_spent_paise),
    ]
}

fn service_cells(service: &Service) -> [String; 6] {
    let popular = if service.popular { POPULAR_MARK } else { "" };
    [
        popular.to_owned(),
        service.name.clone(),
        service.category.label().to_owned(),
        format_rupees(service.price_paise),
        format_duration_minutes(service.duration_minutes),
        service.description.clone(),
    ]
}

fn render_dashboard_text(view_data: &ViewData) -> String {
    let dashboard = &view_data.screens.dashboard;
    let mut lines = vec![
        format!("Hello, {MANAGER_NAME}"),
        format_long_date(dashboard.today),
        String::new(),
        dashboard
            .stats
            .iter()
            .map(|stat| format!("{}: {}", stat.title, stat.value))
            .collect::<Vec<_>>()
            .join("   |   "),
        String::new(),
        "Quick Actions".to_owned(),
        format!("  {}", QUICK_ACTIONS.join("  ·  ")),
        String::new(),
        "Today's Appointments   See All".to_owned(),
    ];
    if dashboard.todays_appointments.is_empty() {
        lines.push("  No appointments today".to_owned());
    }
    for appointment in &dashboard.todays_appointments {
        lines.push(format!(
            "  {:>8}  {}  {}",
            format_clock(appointment.time),
            appointment.customer,
            appointment.service
        ));
    }
    lines.push(String::new());
    lines.push("Monthly Performance".to_owned());
    lines.push("  Revenue Chart".to_owned());
    lines.join("\n")
}

fn render_settings_text(view_data: &ViewData) -> String {
    let settings = &view_data.screens.settings;
    let cursor = view_data.cursors.settings;
    let mut lines = vec![
        format!("{MANAGER_NAME}  <{MANAGER_EMAIL}>"),
        String::new(),
    ];
    let mut index = 0;
    for section in settings.sections() {
        lines.push(section.title.clone());
        for item in &section.items {
            let marker = if index == cursor { CURSOR_MARK } else { " " };
            let trailing = match item.toggle_key() {
                Some(key) => {
                    if settings.value(key) {
                        "[on]".to_owned()
                    } else {
                        "[off]".to_owned()
                    }
                }
                None => match &item.badge {
                    Some(badge) => format!("({badge}) {LINK_ARROW}"),
                    None => LINK_ARROW.to_owned(),
                },
            };
            lines.push(format!(
                "{marker} {}  {trailing}  {}",
                item.title, item.description
            ));
            index += 1;
        }
        lines.push(String::new());
    }
    let marker = if index == cursor { CURSOR_MARK } else { " " };
    lines.push(format!("{marker} {LOG_OUT_LABEL}"));
    lines.push(String::new());
    lines.push(format!("Version {APP_VERSION}"));
    lines.join("\n")
}

fn render_auth(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData) {
    let area = centered_rect(60, 70, frame.area());
    let title = match view_data.auth.form.screen() {
        AuthScreen::Login => "sign in",
        AuthScreen::Register => "create account",
    };
    let form = Paragraph::new(render_auth_text(&view_data.auth)).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Magenta)),
    );
    frame.render_widget(form, area);

    let status_area = Rect {
        y: frame.area().bottom().saturating_sub(3),
        height: 3.min(frame.area().height),
        ..frame.area()
    };
    let status = Paragraph::new(status_text(state))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, status_area);
}

fn render_auth_text(auth: &AuthUiState) -> String {
    let (heading, switch_hint) = match auth.form.screen() {
        AuthScreen::Login => (
            "Welcome back! Sign in to manage your salon.",
            "Don't have an account? ctrl+r to sign up",
        ),
        AuthScreen::Register => (
            "Create your salon account.",
            "Already have an account? ctrl+l to sign in",
        ),
    };
    let mut lines = vec![heading.to_owned(), String::new()];
    for (index, field) in auth.form.fields().iter().enumerate() {
        let marker = if index == auth.field_index {
            CURSOR_MARK
        } else {
            " "
        };
        let value = auth.form.display_value(index);
        match field.kind {
            FieldKind::Toggle => lines.push(format!("{marker} {value} {}", field.label)),
            FieldKind::Text | FieldKind::Secret => {
                lines.push(format!("{marker} {}: {value}", field.label));
            }
        }
    }
    if auth.form.screen() == AuthScreen::Login {
        lines.push("  Forgot Password?".to_owned());
    }
    lines.push(String::new());
    lines.push("enter or ctrl+s submit".to_owned());
    if auth.form.screen() == AuthScreen::Login {
        lines.push("── OR ──".to_owned());
        let social = SOCIAL_SIGN_IN.map(|name| format!("[ {name} ]")).join("  ");
        lines.push(format!("  {social}"));
    }
    lines.push(switch_hint.to_owned());
    lines.join("\n")
}

fn status_text(state: &AppState) -> String {
    let (mode, hints) = match (state.route, state.mode) {
        (Route::Auth(_), _) => ("AUTH", "tab/shift+tab field | space toggle | ctrl+q quit"),
        (Route::Main, AppMode::Search) => ("SEARCH", "type to filter | ctrl+u clear | esc done"),
        (Route::Main, AppMode::Nav) => (
            "NAV",
            "f/b 1-5 tabs | / search | [/] category | j/k move | enter open | ? help | ctrl+q",
        ),
    };
    match &state.status_line {
        Some(status) => format!("{mode} | {status} | {hints}"),
        None => format!("{mode} | {hints}"),
    }
}

fn help_overlay_text() -> &'static str {
    "global: ctrl+q or ctrl+c quit | ? help\n\
tabs: f/tab next | b/shift+tab prev | 1-5 jump\n\
lists: / search | esc clear search | [/] or h/l category | j/k g/G move | enter details\n\
search: type to filter | backspace | ctrl+u clear | esc or enter done\n\
settings: enter toggle or open | Log out at the bottom\n\
auth: tab/shift+tab field | space toggle | enter or ctrl+s submit | ctrl+r sign up | ctrl+l sign in"
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

#[cfg(test)]
mod tests {
    use super::{
        AppRuntime, AuthUiState, InternalEvent, ViewData, appointment_cells, chips_text,
        customer_cells, handle_key_event, list_header_text, process_internal_events,
        render_auth_text, render_dashboard_text, render_settings_text, service_cells,
        status_text,
    };
    use anyhow::anyhow;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use salon_app::catalog::Catalog;
    use salon_app::{
        ALL_CATEGORY, AppMode, AppState, AuthForm, AuthOutcome, AuthScreen, CategoryOption,
        ListConfig, ListViewModel, Route, SalonScreens, Service, SettingItem, SettingKey, TabKind,
    };
    use salon_testkit::{SalonFaker, reference_date};
    use std::sync::mpsc;

    #[derive(Debug, Default)]
    struct TestRuntime {
        catalog_loads: usize,
        submitted: Vec<AuthScreen>,
        followed_links: Vec<String>,
        fail_links: bool,
    }

    impl AppRuntime for TestRuntime {
        fn load_catalog(&mut self) -> anyhow::Result<Catalog> {
            self.catalog_loads += 1;
            Ok(Catalog::demo())
        }

        fn submit_auth(&mut self, form: &AuthForm) -> anyhow::Result<AuthOutcome> {
            self.submitted.push(form.screen());
            Ok(form.submit())
        }

        fn follow_setting_link(&mut self, item: &SettingItem) -> anyhow::Result<String> {
            if self.fail_links {
                return Err(anyhow!("offline"));
            }
            self.followed_links.push(item.id.clone());
            Ok(format!("navigate to {}", item.id))
        }
    }

    fn view_data_for_test(route: Route) -> ViewData {
        let screens = SalonScreens::from_catalog(Catalog::demo()).expect("demo catalog is valid");
        ViewData::new(screens, route)
    }

    fn internal_tx() -> mpsc::Sender<InternalEvent> {
        let (tx, _rx) = mpsc::channel();
        tx
    }

    fn press(
        state: &mut AppState,
        runtime: &mut TestRuntime,
        view_data: &mut ViewData,
        code: KeyCode,
    ) -> bool {
        handle_key_event(
            state,
            runtime,
            view_data,
            &internal_tx(),
            KeyEvent::new(code, KeyModifiers::NONE),
        )
    }

    fn type_text(
        state: &mut AppState,
        runtime: &mut TestRuntime,
        view_data: &mut ViewData,
        text: &str,
    ) {
        for ch in text.chars() {
            press(state, runtime, view_data, KeyCode::Char(ch));
        }
    }

    #[test]
    fn ctrl_q_quits() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = view_data_for_test(Route::Main);

        let should_quit = handle_key_event(
            &mut state,
            &mut runtime,
            &mut view_data,
            &internal_tx(),
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        );
        assert!(should_quit);
    }

    #[test]
    fn tab_keys_cycle_and_number_keys_jump() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = view_data_for_test(Route::Main);

        press(&mut state, &mut runtime, &mut view_data, KeyCode::Tab);
        assert_eq!(state.active_tab, TabKind::Appointments);
        press(&mut state, &mut runtime, &mut view_data, KeyCode::Char('b'));
        press(&mut state, &mut runtime, &mut view_data, KeyCode::Char('b'));
        assert_eq!(state.active_tab, TabKind::Settings);
        press(&mut state, &mut runtime, &mut view_data, KeyCode::Char('4'));
        assert_eq!(state.active_tab, TabKind::Services);
    }

    #[test]
    fn slash_search_filters_customers_by_name() {
        let mut state = AppState::new(Route::Main, TabKind::Customers);
        let mut runtime = TestRuntime::default();
        let mut view_data = view_data_for_test(Route::Main);

        press(&mut state, &mut runtime, &mut view_data, KeyCode::Char('/'));
        assert_eq!(state.mode, AppMode::Search);
        type_text(&mut state, &mut runtime, &mut view_data, "VERMA");
        let ids: Vec<_> = view_data
            .screens
            .customers
            .visible()
            .map(|customer| customer.id.get())
            .collect();
        assert_eq!(ids, vec![2]);

        press(&mut state, &mut runtime, &mut view_data, KeyCode::Backspace);
        assert_eq!(view_data.screens.customers.query(), "VERM");

        press(&mut state, &mut runtime, &mut view_data, KeyCode::Esc);
        assert_eq!(state.mode, AppMode::Nav);
        assert_eq!(view_data.screens.customers.query(), "VERM");

        press(&mut state, &mut runtime, &mut view_data, KeyCode::Esc);
        assert_eq!(view_data.screens.customers.query(), "");
        assert_eq!(state.status_line.as_deref(), Some("search cleared"));
    }

    #[test]
    fn search_is_refused_outside_list_tabs() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = view_data_for_test(Route::Main);

        press(&mut state, &mut runtime, &mut view_data, KeyCode::Char('/'));
        assert_eq!(state.mode, AppMode::Nav);
        assert_eq!(state.status_line.as_deref(), Some("no search on dashboard"));
    }

    #[test]
    fn search_is_refused_on_lists_without_text_fields() {
        fn service_category(service: &Service) -> &str {
            service.category.as_str()
        }

        let mut state = AppState::new(Route::Main, TabKind::Services);
        let mut runtime = TestRuntime::default();
        let mut view_data = view_data_for_test(Route::Main);
        let records = view_data.screens.services.records().to_vec();
        let config = ListConfig::new("services")
            .category_field(
                "category",
                service_category,
                [CategoryOption::new("hair", "Hair")],
            )
            .all_option(ALL_CATEGORY);
        view_data.screens.services = ListViewModel::new(records, config).expect("valid config");

        press(&mut state, &mut runtime, &mut view_data, KeyCode::Char('/'));
        assert_eq!(state.mode, AppMode::Nav);
        assert_eq!(state.status_line.as_deref(), Some("no search on services"));
    }

    #[test]
    fn brackets_step_appointment_buckets_and_wrap() {
        let mut state = AppState::new(Route::Main, TabKind::Appointments);
        let mut runtime = TestRuntime::default();
        let mut view_data = view_data_for_test(Route::Main);

        press(&mut state, &mut runtime, &mut view_data, KeyCode::Char(']'));
        assert_eq!(
            view_data.screens.appointments.active_category(),
            Some("past")
        );
        press(&mut state, &mut runtime, &mut view_data, KeyCode::Char(']'));
        press(&mut state, &mut runtime, &mut view_data, KeyCode::Char(']'));
        assert_eq!(
            view_data.screens.appointments.active_category(),
            Some("upcoming")
        );
        press(&mut state, &mut runtime, &mut view_data, KeyCode::Char('['));
        assert_eq!(
            view_data.screens.appointments.active_category(),
            Some("cancelled")
        );
        assert_eq!(view_data.screens.appointments.visible_count(), 2);
    }

    #[test]
    fn customers_have_no_categories() {
        let mut state = AppState::new(Route::Main, TabKind::Customers);
        let mut runtime = TestRuntime::default();
        let mut view_data = view_data_for_test(Route::Main);

        press(&mut state, &mut runtime, &mut view_data, KeyCode::Char(']'));
        assert_eq!(
            state.status_line.as_deref(),
            Some("no categories on customers")
        );
    }

    #[test]
    fn cursor_clamps_when_filter_shrinks_results() {
        let mut state = AppState::new(Route::Main, TabKind::Services);
        let mut runtime = TestRuntime::default();
        let mut view_data = view_data_for_test(Route::Main);

        press(&mut state, &mut runtime, &mut view_data, KeyCode::Char('G'));
        assert_eq!(view_data.cursors.services, 7);
        press(&mut state, &mut runtime, &mut view_data, KeyCode::Char(']'));
        assert_eq!(view_data.screens.services.active_category(), Some("hair"));
        assert_eq!(view_data.cursors.services, 2);
        press(&mut state, &mut runtime, &mut view_data, KeyCode::Char('g'));
        assert_eq!(view_data.cursors.services, 0);
        press(&mut state, &mut runtime, &mut view_data, KeyCode::Up);
        assert_eq!(view_data.cursors.services, 0);
    }

    #[test]
    fn enter_on_list_row_shows_summary() {
        let mut state = AppState::new(Route::Main, TabKind::Appointments);
        let mut runtime = TestRuntime::default();
        let mut view_data = view_data_for_test(Route::Main);

        press(&mut state, &mut runtime, &mut view_data, KeyCode::Char('j'));
        press(&mut state, &mut runtime, &mut view_data, KeyCode::Enter);
        assert_eq!(
            state.status_line.as_deref(),
            Some("Rahul Verma: Beard Trim, Today 11:45 AM")
        );
    }

    #[test]
    fn settings_enter_toggles_and_follows_links() {
        let mut state = AppState::new(Route::Main, TabKind::Settings);
        let mut runtime = TestRuntime::default();
        let mut view_data = view_data_for_test(Route::Main);

        press(&mut state, &mut runtime, &mut view_data, KeyCode::Enter);
        assert_eq!(runtime.followed_links, vec!["business-profile".to_owned()]);
        assert_eq!(
            state.status_line.as_deref(),
            Some("navigate to business-profile")
        );

        for _ in 0..5 {
            press(&mut state, &mut runtime, &mut view_data, KeyCode::Char('j'));
        }
        press(&mut state, &mut runtime, &mut view_data, KeyCode::Enter);
        assert!(view_data.screens.settings.value(SettingKey::DarkMode));
        assert_eq!(state.status_line.as_deref(), Some("Dark Mode on"));
    }

    #[test]
    fn failing_link_reports_status() {
        let mut state = AppState::new(Route::Main, TabKind::Settings);
        let mut runtime = TestRuntime {
            fail_links: true,
            ..TestRuntime::default()
        };
        let mut view_data = view_data_for_test(Route::Main);

        press(&mut state, &mut runtime, &mut view_data, KeyCode::Enter);
        assert_eq!(
            state.status_line.as_deref(),
            Some("Business Profile unavailable: offline")
        );
    }

    #[test]
    fn log_out_entry_returns_to_login() {
        let mut state = AppState::new(Route::Main, TabKind::Settings);
        let mut runtime = TestRuntime::default();
        let mut view_data = view_data_for_test(Route::Main);

        press(&mut state, &mut runtime, &mut view_data, KeyCode::Char('G'));
        assert_eq!(view_data.cursors.settings, 13);
        press(&mut state, &mut runtime, &mut view_data, KeyCode::Enter);
        assert_eq!(state.route, Route::Auth(AuthScreen::Login));
        assert_eq!(view_data.cursors.settings, 0);
    }

    #[test]
    fn login_form_typing_and_submit_signs_in() {
        let mut state = AppState::new(Route::Auth(AuthScreen::Login), TabKind::Dashboard);
        let mut runtime = TestRuntime::default();
        let mut view_data = view_data_for_test(state.route);

        type_text(&mut state, &mut runtime, &mut view_data, "me@salon.test");
        press(&mut state, &mut runtime, &mut view_data, KeyCode::Tab);
        type_text(&mut state, &mut runtime, &mut view_data, "secret");
        assert_eq!(view_data.auth.form.display_value(1), "••••••");

        press(&mut state, &mut runtime, &mut view_data, KeyCode::Tab);
        press(&mut state, &mut runtime, &mut view_data, KeyCode::Char(' '));
        assert_eq!(view_data.auth.form.display_value(1), "secret");

        press(&mut state, &mut runtime, &mut view_data, KeyCode::BackTab);
        press(&mut state, &mut runtime, &mut view_data, KeyCode::Enter);
        assert_eq!(state.route, Route::Main);
        assert_eq!(state.active_tab, TabKind::Dashboard);
        assert_eq!(runtime.submitted, vec![AuthScreen::Login]);
        assert_eq!(runtime.catalog_loads, 1);
        assert_eq!(
            state.status_line.as_deref(),
            Some("signed in as me@salon.test")
        );
        assert_eq!(view_data.auth, AuthUiState::blank(AuthScreen::Login));
    }

    #[test]
    fn ctrl_r_and_ctrl_l_switch_auth_screens() {
        let mut state = AppState::new(Route::Auth(AuthScreen::Login), TabKind::Dashboard);
        let mut runtime = TestRuntime::default();
        let mut view_data = view_data_for_test(state.route);
        let tx = internal_tx();

        handle_key_event(
            &mut state,
            &mut runtime,
            &mut view_data,
            &tx,
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL),
        );
        assert_eq!(state.route, Route::Auth(AuthScreen::Register));
        assert_eq!(view_data.auth.form.fields().len(), 8);

        handle_key_event(
            &mut state,
            &mut runtime,
            &mut view_data,
            &tx,
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
        );
        assert_eq!(state.route, Route::Main);
        assert_eq!(runtime.submitted, vec![AuthScreen::Register]);
        assert_eq!(state.status_line.as_deref(), Some("signed in"));
    }

    #[test]
    fn help_overlay_swallows_keys_until_closed() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = view_data_for_test(Route::Main);

        press(&mut state, &mut runtime, &mut view_data, KeyCode::Char('?'));
        assert!(view_data.help_visible);
        press(&mut state, &mut runtime, &mut view_data, KeyCode::Char('f'));
        assert_eq!(state.active_tab, TabKind::Dashboard);
        press(&mut state, &mut runtime, &mut view_data, KeyCode::Esc);
        assert!(!view_data.help_visible);
    }

    #[test]
    fn stale_clear_tokens_are_ignored() {
        let mut state = AppState::default();
        let mut view_data = view_data_for_test(Route::Main);
        let (tx, rx) = mpsc::channel();
        state.dispatch(salon_app::AppCommand::SetStatus("hello".to_owned()));
        view_data.status_token = 2;

        tx.send(InternalEvent::ClearStatus { token: 1 })
            .expect("send stale token");
        process_internal_events(&mut state, &view_data, &rx);
        assert_eq!(state.status_line.as_deref(), Some("hello"));

        tx.send(InternalEvent::ClearStatus { token: 2 })
            .expect("send current token");
        process_internal_events(&mut state, &view_data, &rx);
        assert!(state.status_line.is_none());
    }

    #[test]
    fn list_header_shows_chips_and_query() {
        let mut view_data = view_data_for_test(Route::Main);
        view_data.screens.services.set_text_query("hair");
        let text = list_header_text(&view_data.screens.services, true);
        assert_eq!(
            text,
            "[All]  Hair   Face   Nails   Spa   Packages \nsearch: hair_"
        );
        assert_eq!(
            list_header_text(&view_data.screens.customers, false),
            "search name, phone, email: / to type"
        );
        assert_eq!(chips_text(&[], None), "");
    }

    #[test]
    fn row_cells_format_domain_values() {
        let screens = view_data_for_test(Route::Main).screens;
        let today = reference_date();

        let appointment = &screens.appointments.records()[3];
        assert_eq!(
            appointment_cells(appointment, today),
            [
                "Vikram Singh".to_owned(),
                "Hair Color".to_owned(),
                "Tomorrow".to_owned(),
                "4:00 PM".to_owned(),
                "Confirmed".to_owned(),
            ]
        );

        let customer = &screens.customers.records()[2];
        let cells = customer_cells(customer, today);
        assert_eq!(cells[0], "AP");
        assert_eq!(cells[4], "1 week ago");
        assert_eq!(cells[6], "₹8,750");

        let service = &screens.services.records()[7];
        let cells = service_cells(service);
        assert_eq!(cells[0], "");
        assert_eq!(cells[3], "₹8,000");
        assert_eq!(cells[4], "180 min");
    }

    #[test]
    fn dashboard_text_lists_todays_appointments() {
        let view_data = view_data_for_test(Route::Main);
        let text = render_dashboard_text(&view_data);
        assert!(text.starts_with("Hello, Salon Manager\nJune 29, 2025"));
        assert!(text.contains("Appointments: 24   |   Customers: 156   |   Revenue: ₹12,450"));
        assert!(text.contains("10:30 AM  Priya Sharma  Haircut & Styling"));
        assert!(!text.contains("Vikram Singh"));
        assert!(text.contains("Today's Appointments   See All"));
        assert!(text.ends_with("Monthly Performance\n  Revenue Chart"));
    }

    #[test]
    fn settings_text_marks_cursor_badges_and_toggles() {
        let mut view_data = view_data_for_test(Route::Main);
        view_data.cursors.settings = 4;
        let text = render_settings_text(&view_data);
        assert!(text.contains("› Notifications  [on]  Enable push notifications"));
        assert!(text.contains("  Dark Mode  [off]"));
        assert!(text.contains("Subscription Plan  (Basic) →"));
        assert!(text.contains("  Log out"));
        assert!(text.ends_with(&format!("Version {}", salon_app::catalog::APP_VERSION)));
    }

    #[test]
    fn auth_text_masks_password_and_marks_focus() {
        let mut auth = AuthUiState::blank(AuthScreen::Login);
        auth.form.text_mut(1).expect("password").push_str("abc");
        auth.field_index = 1;
        let text = render_auth_text(&auth);
        assert!(text.contains("› Password: •••"));
        assert!(text.contains("  [ ] Remember me"));
        assert!(text.contains("ctrl+r to sign up"));
        assert!(text.contains("[ ] Remember me\n  Forgot Password?"));
        assert!(text.contains("── OR ──\n  [ Google ]  [ Facebook ]"));

        let register = render_auth_text(&AuthUiState::blank(AuthScreen::Register));
        assert!(!register.contains("Forgot Password?"));
        assert!(!register.contains("Google"));
    }

    #[test]
    fn status_text_reflects_route_and_mode() {
        let mut state = AppState::new(Route::Auth(AuthScreen::Login), TabKind::Dashboard);
        assert!(status_text(&state).starts_with("AUTH | "));
        state.route = Route::Main;
        state.mode = AppMode::Search;
        state.status_line = Some("hi".to_owned());
        assert!(status_text(&state).starts_with("SEARCH | hi | "));
    }

    #[test]
    fn generated_catalogs_render_every_row() {
        let mut faker = SalonFaker::new(17);
        let catalog = Catalog {
            appointments: faker.appointments(12),
            customers: faker.customers(9),
            services: faker.services(6),
            ..Catalog::demo()
        };
        let screens = SalonScreens::from_catalog(catalog).expect("generated ids are unique");
        let today = screens.today();
        for appointment in screens.appointments.records() {
            assert_eq!(appointment_cells(appointment, today)[0], appointment.customer);
        }
        for customer in screens.customers.records() {
            assert!(!customer_cells(customer, today)[0].is_empty());
        }
        for service in screens.services.records() {
            assert!(service_cells(service)[3].starts_with('₹'));
        }
    }
}
