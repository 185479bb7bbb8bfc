//! View state and the reducer that owns every transition.
//!
//! `reduce` is pure: it never touches the store, the network or a timer.
//! Anything with a side effect comes back as an `Effect` for the controller
//! to run, and its outcome re-enters as another `Action`.

use crate::defaults::Defaults;
use crate::quotes::{curate, Quote};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Explore,
    Reflect,
    Profile,
}

impl Screen {
    pub const ALL: [Screen; 4] = [Screen::Home, Screen::Explore, Screen::Reflect, Screen::Profile];

    pub fn label(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Explore => "Explore",
            Screen::Reflect => "Reflect",
            Screen::Profile => "Profile",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Screen {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Screen {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Modal, dismiss-only messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    ReflectionSaved,
    UnlockPrompt,
    SaveFailed(String),
}

impl Notice {
    pub fn lines(&self) -> Vec<String> {
        match self {
            Notice::ReflectionSaved => vec!["Reflection saved!".to_string()],
            Notice::UnlockPrompt => vec!["Watch a rewarded ad to unlock this theme!".to_string()],
            Notice::SaveFailed(reason) => vec![
                "Could not save your reflection.".to_string(),
                String::new(),
                reason.clone(),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    NavigateTo(Screen),
    NextQuote,
    SetReflection(String),
    SaveReflection,
    UnlockTheme,
    DismissNotice,

    /* outcomes of effects */
    QuotesLoaded(Vec<Quote>),
    ReflectionSaved,
    ReflectionSaveFailed(String),
    ThemeUnlocked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    PersistReflection(String),
    ScheduleUnlock,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub active_screen: Screen,
    pub quotes: Vec<Quote>,
    pub quote_index: usize,
    pub reflection: String,
    pub theme_unlocked: bool,
    pub unlock_pending: bool,
    pub notice: Option<Notice>,
}

impl AppState {
    pub fn new(reflection: String) -> Self {
        Self { reflection, ..Self::default() }
    }

    pub fn current_quote(&self) -> Option<&Quote> {
        self.quotes.get(self.quote_index)
    }

    pub fn current_quote_text(&self) -> &str {
        self.current_quote()
            .map(|q| q.text.as_str())
            .unwrap_or(Defaults::LOADING_QUOTE)
    }

    pub fn can_cycle(&self) -> bool {
        !self.quotes.is_empty()
    }
}

pub fn reduce(state: &AppState, action: Action) -> (AppState, Vec<Effect>) {
    let mut next = state.clone();
    let mut effects = Vec::new();

    match action {
        Action::NavigateTo(screen) => next.active_screen = screen,

        Action::NextQuote => {
            if next.can_cycle() {
                next.quote_index = (next.quote_index + 1) % next.quotes.len();
            }
        }

        Action::SetReflection(text) => next.reflection = text,

        Action::SaveReflection => effects.push(Effect::PersistReflection(next.reflection.clone())),

        Action::UnlockTheme => {
            next.notice = Some(Notice::UnlockPrompt);
            if !next.unlock_pending && !next.theme_unlocked {
                next.unlock_pending = true;
                effects.push(Effect::ScheduleUnlock);
            }
        }

        Action::DismissNotice => next.notice = None,

        Action::QuotesLoaded(raw) => {
            next.quotes = curate(raw);
            next.quote_index = 0;
        }

        Action::ReflectionSaved => next.notice = Some(Notice::ReflectionSaved),

        Action::ReflectionSaveFailed(reason) => next.notice = Some(Notice::SaveFailed(reason)),

        Action::ThemeUnlocked => {
            next.unlock_pending = false;
            next.theme_unlocked = true;
        }
    }

    (next, effects)
}
