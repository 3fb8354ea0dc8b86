// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{AppMode, AuthScreen, Route, TabKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub route: Route,
    pub mode: AppMode,
    pub active_tab: TabKind,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            route: Route::Main,
            mode: AppMode::Nav,
            active_tab: TabKind::Dashboard,
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    NextTab,
    PrevTab,
    SetActiveTab(TabKind),
    EnterSearch,
    ExitToNav,
    ShowLogin,
    ShowRegister,
    SignIn,
    SignOut,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    RouteChanged(Route),
    ModeChanged(AppMode),
    TabChanged(TabKind),
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn new(route: Route, active_tab: TabKind) -> Self {
        Self {
            route,
            active_tab,
            ..Self::default()
        }
    }

    pub fn signed_in(&self) -> bool {
        self.route == Route::Main
    }

    /// Applies a command and reports what changed. Commands that do not
    /// apply to the current route produce no events.
    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::NextTab if self.signed_in() => self.rotate_tab(1),
            AppCommand::PrevTab if self.signed_in() => self.rotate_tab(-1),
            AppCommand::SetActiveTab(tab) if self.signed_in() => self.select_tab(tab),
            AppCommand::EnterSearch if self.signed_in() && self.active_tab.has_list() => {
                if self.mode == AppMode::Search {
                    return Vec::new();
                }
                self.mode = AppMode::Search;
                vec![AppEvent::ModeChanged(self.mode)]
            }
            AppCommand::ExitToNav => {
                if self.mode == AppMode::Nav {
                    return Vec::new();
                }
                self.mode = AppMode::Nav;
                vec![AppEvent::ModeChanged(self.mode)]
            }
            AppCommand::ShowLogin if !self.signed_in() => {
                self.change_route(Route::Auth(AuthScreen::Login))
            }
            AppCommand::ShowRegister if !self.signed_in() => {
                self.change_route(Route::Auth(AuthScreen::Register))
            }
            AppCommand::SignIn if !self.signed_in() => {
                self.active_tab = TabKind::Dashboard;
                let mut events = self.change_route(Route::Main);
                events.push(AppEvent::TabChanged(self.active_tab));
                events.push(self.set_status("signed in"));
                events
            }
            AppCommand::SignOut if self.signed_in() => {
                let mut events = self.change_route(Route::Auth(AuthScreen::Login));
                events.push(self.set_status("signed out"));
                events
            }
            AppCommand::SetStatus(message) => vec![self.set_status(&message)],
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
            _ => Vec::new(),
        }
    }

    fn change_route(&mut self, route: Route) -> Vec<AppEvent> {
        let mut events = Vec::new();
        if self.mode != AppMode::Nav {
            self.mode = AppMode::Nav;
            events.push(AppEvent::ModeChanged(self.mode));
        }
        self.route = route;
        events.push(AppEvent::RouteChanged(route));
        events
    }

    fn select_tab(&mut self, tab: TabKind) -> Vec<AppEvent> {
        if tab == self.active_tab {
            return Vec::new();
        }
        let mut events = Vec::new();
        if self.mode == AppMode::Search {
            self.mode = AppMode::Nav;
            events.push(AppEvent::ModeChanged(self.mode));
        }
        self.active_tab = tab;
        events.push(AppEvent::TabChanged(tab));
        events
    }

    fn rotate_tab(&mut self, delta: isize) -> Vec<AppEvent> {
        let tabs = TabKind::ALL;
        let current = tabs
            .iter()
            .position(|tab| *tab == self.active_tab)
            .unwrap_or(0) as isize;
        let len = tabs.len() as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.select_tab(tabs[next])
    }

    fn set_status(&mut self, message: &str) -> AppEvent {
        self.status_line = Some(message.to_owned());
        AppEvent::StatusUpdated(message.to_owned())
    }
}
