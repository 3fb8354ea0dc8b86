// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use tracing::{info, warn};

use crate::AuthScreen;

const MASK_CHAR: char = '•';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Secret,
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub label: &'static str,
    pub kind: FieldKind,
}

const fn field(label: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { label, kind }
}

const LOGIN_FIELDS: [FieldSpec; 4] = [
    field("Email Address", FieldKind::Text),
    field("Password", FieldKind::Secret),
    field("Show password", FieldKind::Toggle),
    field("Remember me", FieldKind::Toggle),
];

const REGISTER_FIELDS: [FieldSpec; 8] = [
    field("Full Name", FieldKind::Text),
    field("Email Address", FieldKind::Text),
    field("Phone Number", FieldKind::Text),
    field("Password", FieldKind::Secret),
    field("Confirm Password", FieldKind::Secret),
    field("Show password", FieldKind::Toggle),
    field("Show confirm password", FieldKind::Toggle),
    field("I agree to the Terms & Conditions", FieldKind::Toggle),
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginFormInput {
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub remember_me: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegisterFormInput {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub show_password: bool,
    pub show_confirm_password: bool,
    pub agree_terms: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthForm {
    Login(LoginFormInput),
    Register(RegisterFormInput),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    pub screen: AuthScreen,
    pub account: String,
}

impl AuthForm {
    pub fn blank_for(screen: AuthScreen) -> Self {
        match screen {
            AuthScreen::Login => Self::Login(LoginFormInput::default()),
            AuthScreen::Register => Self::Register(RegisterFormInput::default()),
        }
    }

    pub fn screen(&self) -> AuthScreen {
        match self {
            Self::Login(_) => AuthScreen::Login,
            Self::Register(_) => AuthScreen::Register,
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Self::Login(_) => &LOGIN_FIELDS,
            Self::Register(_) => &REGISTER_FIELDS,
        }
    }

    pub fn text_mut(&mut self, index: usize) -> Option<&mut String> {
        match self {
            Self::Login(form) => match index {
                0 => Some(&mut form.email),
                1 => Some(&mut form.password),
                _ => None,
            },
            Self::Register(form) => match index {
                0 => Some(&mut form.full_name),
                1 => Some(&mut form.email),
                2 => Some(&mut form.phone),
                3 => Some(&mut form.password),
                4 => Some(&mut form.confirm_password),
                _ => None,
            },
        }
    }

    fn toggle_mut(&mut self, index: usize) -> Option<&mut bool> {
        match self {
            Self::Login(form) => match index {
                2 => Some(&mut form.show_password),
                3 => Some(&mut form.remember_me),
                _ => None,
            },
            Self::Register(form) => match index {
                5 => Some(&mut form.show_password),
                6 => Some(&mut form.show_confirm_password),
                7 => Some(&mut form.agree_terms),
                _ => None,
            },
        }
    }

    /// Flips a checkbox field and returns its new value.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let value = self.toggle_mut(index)?;
        *value = !*value;
        Some(*value)
    }

    fn secret_revealed(&self, index: usize) -> bool {
        match self {
            Self::Login(form) => index == 1 && form.show_password,
            Self::Register(form) => match index {
                3 => form.show_password,
                4 => form.show_confirm_password,
                _ => false,
            },
        }
    }

    pub fn text(&self, index: usize) -> Option<&str> {
        let value = match self {
            Self::Login(form) => match index {
                0 => &form.email,
                1 => &form.password,
                _ => return None,
            },
            Self::Register(form) => match index {
                0 => &form.full_name,
                1 => &form.email,
                2 => &form.phone,
                3 => &form.password,
                4 => &form.confirm_password,
                _ => return None,
            },
        };
        Some(value)
    }

    pub fn checked(&self, index: usize) -> Option<bool> {
        match self {
            Self::Login(form) => match index {
                2 => Some(form.show_password),
                3 => Some(form.remember_me),
                _ => None,
            },
            Self::Register(form) => match index {
                5 => Some(form.show_password),
                6 => Some(form.show_confirm_password),
                7 => Some(form.agree_terms),
                _ => None,
            },
        }
    }

    pub fn display_value(&self, index: usize) -> String {
        let Some(spec) = self.fields().get(index) else {
            return String::new();
        };
        match spec.kind {
            FieldKind::Toggle => {
                let checked = self.checked(index).unwrap_or(false);
                if checked { "[x]" } else { "[ ]" }.to_owned()
            }
            FieldKind::Text => self.text(index).unwrap_or_default().to_owned(),
            FieldKind::Secret => {
                let value = self.text(index).unwrap_or_default();
                if self.secret_revealed(index) {
                    value.to_owned()
                } else {
                    MASK_CHAR.to_string().repeat(value.chars().count())
                }
            }
        }
    }

    fn account(&self) -> &str {
        match self {
            Self::Login(form) => form.email.trim(),
            Self::Register(form) => form.email.trim(),
        }
    }

    /// Placeholder sign-in: any input is accepted and nothing is verified.
    pub fn submit(&self) -> AuthOutcome {
        let screen = self.screen();
        info!(?screen, account = self.account(), "auth form submitted");
        warn!("sign-in is a stub; credentials are not verified");
        AuthOutcome {
            screen,
            account: self.account().to_owned(),
        }
    }
}
