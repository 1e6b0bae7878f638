//! Application state and event handling
//!
//! This is the core of storefront, managing:
//! - The selected theme (persisted) and the current page
//! - The product fetch owned by the mounted home page
//! - Keyboard input, including the contact form

use crate::catalog::{spawn_fetch, FetchError, FetchResult, FetchState, ProductSource};
use crate::config::{load_theme, save_theme, PreferenceStore, ThemeName};
use crate::types::Page;
use crate::ui::theme::{resolve_style_bundle, StyleBundle};
use crate::ui::view::FormField;
use crossterm::event::{KeyCode, KeyEvent};
use std::sync::mpsc::{Receiver, TryRecvError};
use std::sync::Arc;

/// Main application state
pub struct App {
    pub should_quit: bool,

    // Theme state
    pub theme_name: ThemeName,
    pub theme: StyleBundle,

    // Page state
    pub page: Page,

    // Home page state
    pub fetch: FetchState,
    pub product_scroll: usize,
    in_flight: Option<Receiver<FetchResult>>,

    // Contact page state
    pub contact: ContactForm,

    source: Arc<dyn ProductSource>,
    store: Box<dyn PreferenceStore>,
}

/// Which contact form control has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(FormField),
    Send,
}

impl FormFocus {
    fn next(self) -> Self {
        match self {
            FormFocus::Field(FormField::Name) => FormFocus::Field(FormField::Email),
            FormFocus::Field(FormField::Email) => FormFocus::Field(FormField::Message),
            FormFocus::Field(FormField::Message) => FormFocus::Send,
            FormFocus::Send => FormFocus::Field(FormField::Name),
        }
    }

    fn prev(self) -> Self {
        match self {
            FormFocus::Field(FormField::Name) => FormFocus::Send,
            FormFocus::Field(FormField::Email) => FormFocus::Field(FormField::Name),
            FormFocus::Field(FormField::Message) => FormFocus::Field(FormField::Email),
            FormFocus::Send => FormFocus::Field(FormField::Message),
        }
    }
}

/// Contents of the contact form; never submitted anywhere
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub focus: Option<FormFocus>,
}

impl ContactForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }
}

/// Input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    FormInput,
}

impl App {
    /// Create a new App instance and mount the home page
    pub fn new(store: Box<dyn PreferenceStore>, source: Arc<dyn ProductSource>) -> Self {
        let theme_name = load_theme(store.as_ref());
        tracing::info!("Starting with theme {}", theme_name.as_str());

        let mut app = Self {
            should_quit: false,
            theme_name,
            theme: resolve_style_bundle(theme_name),
            page: Page::Home,
            fetch: FetchState::default(),
            product_scroll: 0,
            in_flight: None,
            contact: ContactForm::default(),
            source,
            store,
        };
        app.mount_home();
        app
    }

    #[cfg(test)]
    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }

    /// Get current input mode
    pub fn state(&self) -> AppState {
        if self.page == Page::Contact && self.contact.focus.is_some() {
            AppState::FormInput
        } else {
            AppState::Normal
        }
    }

    /// Select a theme and persist it
    pub fn select_theme(&mut self, theme: ThemeName) {
        tracing::debug!("Theme {} -> {}", self.theme_name.as_str(), theme.as_str());
        self.theme_name = theme;
        self.theme = resolve_style_bundle(theme);
        // Column count differs per theme, so the row count may have shrunk
        self.product_scroll = self.product_scroll.min(self.product_rows().saturating_sub(1));
        save_theme(self.store.as_mut(), theme);
    }

    /// Switch to a page; entering the home page starts a new fetch
    pub fn navigate(&mut self, page: Page) {
        let previous = std::mem::replace(&mut self.page, page);
        if previous == page {
            return;
        }
        tracing::debug!("Page {} -> {}", previous.id(), page.id());

        if previous == Page::Home {
            self.unmount_home();
        }
        if previous == Page::Contact {
            self.contact.focus = None;
        }
        if page == Page::Home {
            self.mount_home();
        }
    }

    /// Navigate by page identifier; unknown identifiers go to the home page
    pub fn navigate_to_id(&mut self, id: &str) {
        self.navigate(Page::from_id(id));
    }

    fn mount_home(&mut self) {
        self.fetch = FetchState::default();
        self.product_scroll = 0;
        if self.fetch.begin() {
            self.in_flight = Some(spawn_fetch(Arc::clone(&self.source)));
        }
    }

    fn unmount_home(&mut self) {
        // Dropping the receiver discards whatever the worker sends later
        self.in_flight = None;
        self.fetch = FetchState::default();
    }

    /// Pick up the fetch result if it has arrived. Returns true on change.
    pub fn poll_fetch(&mut self) -> bool {
        let Some(rx) = &self.in_flight else {
            return false;
        };

        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => Err(FetchError::Transport(
                "request worker stopped unexpectedly".to_string(),
            )),
        };

        self.in_flight = None;
        let changed = self.fetch.settle(result);
        tracing::debug!("Catalog fetch {}", self.fetch.label());
        changed
    }

    /// Number of grid rows the current products occupy
    fn product_rows(&self) -> usize {
        let columns = usize::from(self.theme.grid_columns.max(1));
        self.fetch.products().len().div_ceil(columns)
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.state() {
            AppState::FormInput => self.handle_form_key(key),
            AppState::Normal => self.handle_normal_key(key),
        }
    }

    /// Handle key in normal state
    fn handle_normal_key(&mut self, key: KeyEvent) {
        // Global keys (work on all pages)
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('1') | KeyCode::Char('h') => self.navigate(Page::Home),
            KeyCode::Char('2') | KeyCode::Char('a') => self.navigate(Page::About),
            KeyCode::Char('3') | KeyCode::Char('c') => self.navigate(Page::Contact),
            KeyCode::Tab => self.navigate(self.page.next()),
            KeyCode::BackTab => self.navigate(self.page.prev()),
            KeyCode::Char('t') => self.select_theme(self.theme_name.next()),
            KeyCode::F(n @ 1..=3) => {
                if let Some(theme) = ThemeName::all().get(usize::from(n - 1)) {
                    self.select_theme(*theme);
                }
            }
            _ => {}
        }

        // Page-specific handling
        match self.page {
            Page::Home => self.handle_home_key(key),
            Page::About => {}
            Page::Contact => self.handle_contact_key(key),
        }
    }

    /// Handle keys on the home page
    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.product_scroll < self.product_rows().saturating_sub(1) {
                    self.product_scroll += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.product_scroll = self.product_scroll.saturating_sub(1);
            }
            _ => {}
        }
    }

    /// Handle keys on the contact page outside the form
    fn handle_contact_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char('i')) {
            self.contact.focus = Some(FormFocus::Field(FormField::Name));
        }
    }

    /// Handle keys while a form control is focused
    fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(focus) = self.contact.focus else {
            return;
        };

        match (key.code, focus) {
            (KeyCode::Esc, _) => self.contact.focus = None,
            (KeyCode::Tab, _) | (KeyCode::Down, _) => self.contact.focus = Some(focus.next()),
            (KeyCode::BackTab, _) | (KeyCode::Up, _) => self.contact.focus = Some(focus.prev()),
            (KeyCode::Enter, FormFocus::Send) => self.submit_contact(),
            (KeyCode::Enter, FormFocus::Field(_)) => self.contact.focus = Some(focus.next()),
            (KeyCode::Backspace, FormFocus::Field(field)) => {
                self.contact.value_mut(field).pop();
            }
            (KeyCode::Char(c), FormFocus::Field(field)) => {
                self.contact.value_mut(field).push(c);
            }
            _ => {}
        }
    }

    /// The send control is a placeholder: nothing is submitted
    fn submit_contact(&self) {
        tracing::debug!("Contact form send activated; no submission handler");
    }

    #[cfg(test)]
    fn wait_for_fetch(&mut self) {
        if let Some(rx) = self.in_flight.take() {
            let result = rx
                .recv_timeout(std::time::Duration::from_secs(5))
                .expect("fetch did not settle");
            self.fetch.settle(result);
        }
    }
}
