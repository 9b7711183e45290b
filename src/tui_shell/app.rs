use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::controller::ActivityController;
use crate::render::ParticipantRow;

use super::input::Input;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Focus {
    Activities,
    Email,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum LoginField {
    Username,
    Password,
}

#[derive(Debug)]
pub(super) struct LoginForm {
    pub(super) username: Input,
    pub(super) password: Input,
    pub(super) field: LoginField,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            username: Input::default(),
            password: Input::default(),
            field: LoginField::Username,
        }
    }
}

impl LoginForm {
    pub(super) fn active_mut(&mut self) -> &mut Input {
        match self.field {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

pub(super) struct App {
    pub(super) controller: ActivityController,

    pub(super) focus: Focus,
    /// Index into the controller's activity options.
    pub(super) selected_option: usize,
    /// Index into the flattened participant rows.
    pub(super) selected_row: usize,
    pub(super) email: Input,
    pub(super) login: LoginForm,

    pub(super) quit: bool,
}

impl App {
    pub(super) fn new(controller: ActivityController) -> Self {
        Self {
            controller,
            focus: Focus::Activities,
            selected_option: 0,
            selected_row: 0,
            email: Input::default(),
            login: LoginForm::default(),
            quit: false,
        }
    }

    /// Participant rows across all cards, in display order.
    pub(super) fn rows(&self) -> Vec<&ParticipantRow> {
        self.controller
            .cards()
            .iter()
            .flat_map(|c| c.participants.iter())
            .collect()
    }

    pub(super) fn selected_activity(&self) -> Option<&str> {
        self.controller
            .options()
            .get(self.selected_option)
            .map(String::as_str)
    }

    pub(super) fn refresh(&mut self) {
        self.controller.load_and_render().ok();
        self.clamp_selection();
    }

    /// Selections point into data that a re-render may have replaced.
    fn clamp_selection(&mut self) {
        let rows = self.rows().len();
        self.selected_row = self.selected_row.min(rows.saturating_sub(1));
        let options = self.controller.options().len();
        self.selected_option = self.selected_option.min(options.saturating_sub(1));
    }

    pub(super) fn tick(&mut self, now: Instant) {
        self.controller.tick(now);
    }

    pub(super) fn handle_key(&mut self, key: KeyEvent) {
        if self.controller.login_open() {
            self.handle_login_key(key);
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        match self.focus {
            Focus::Activities => self.handle_activities_key(key),
            Focus::Email => self.handle_email_key(key),
        }
    }

    fn handle_activities_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Tab => self.focus = Focus::Email,
            KeyCode::Up => self.selected_row = self.selected_row.saturating_sub(1),
            KeyCode::Down => {
                let rows = self.rows().len();
                if self.selected_row + 1 < rows {
                    self.selected_row += 1;
                }
            }
            KeyCode::Left => self.cycle_option(-1),
            KeyCode::Right => self.cycle_option(1),
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Char('l') => {
                if self.controller.session().is_none() {
                    self.controller.open_login();
                }
            }
            KeyCode::Char('o') => self.controller.logout(),
            KeyCode::Char('d') | KeyCode::Delete => self.unregister_selected(),
            _ => {}
        }
    }

    fn handle_email_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Tab => self.focus = Focus::Activities,
            KeyCode::Enter => self.submit_signup(),
            KeyCode::Left => self.email.move_left(),
            KeyCode::Right => self.email.move_right(),
            KeyCode::Up => self.cycle_option(-1),
            KeyCode::Down => self.cycle_option(1),
            KeyCode::Backspace => self.email.backspace(),
            KeyCode::Delete => self.email.delete(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.email.insert_char(c)
            }
            _ => {}
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.controller.close_login(),
            KeyCode::Tab | KeyCode::BackTab => {
                self.login.field = match self.login.field {
                    LoginField::Username => LoginField::Password,
                    LoginField::Password => LoginField::Username,
                };
            }
            KeyCode::Enter => self.submit_login(),
            KeyCode::Left => self.login.active_mut().move_left(),
            KeyCode::Right => self.login.active_mut().move_right(),
            KeyCode::Backspace => self.login.active_mut().backspace(),
            KeyCode::Delete => self.login.active_mut().delete(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.login.active_mut().insert_char(c)
            }
            _ => {}
        }
    }

    fn cycle_option(&mut self, delta: isize) {
        let n = self.controller.options().len();
        if n == 0 {
            return;
        }
        let cur = self.selected_option.min(n - 1) as isize;
        self.selected_option = (cur + delta).rem_euclid(n as isize) as usize;
    }

    fn submit_login(&mut self) {
        let username = self.login.username.buf.clone();
        let password = self.login.password.buf.clone();
        if self.controller.login(&username, &password).is_ok() {
            self.login.reset();
        }
    }

    fn submit_signup(&mut self) {
        let activity = self.selected_activity().unwrap_or_default().to_string();
        let email = self.email.buf.clone();
        if self.controller.signup(&activity, &email).is_ok() {
            self.email.clear();
            self.clamp_selection();
        }
    }

    fn unregister_selected(&mut self) {
        let Some(row) = self.rows().get(self.selected_row).map(|r| (*r).clone()) else {
            return;
        };
        if self.controller.unregister(&row.activity, &row.email).is_ok() {
            self.clamp_selection();
        }
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;
