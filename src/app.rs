use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    prelude::Frame,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Terminal,
};
use std::io;
use time::UtcOffset;
use tracing::info;

use crate::config::Config;
use crate::controller::Controller;
use crate::defaults::Defaults;
use crate::screens::{home::greeting_now, notice, ConfirmQuitScreen, Screens};
use crate::state::{Action, AppState, Screen};
use crate::ui::common_nav::{is_ctrl, nav_target};
use crate::ui::help::help_modal;
use crate::ui::layout::page_layout;
use crate::ui::style::{button_spans, Palette};

const PAGE_WIDTH: u16 = 72;

#[derive(Debug, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Dispatch(Action),
    Pop,
    Quit,
}

/// Everything a screen needs to draw itself.
pub struct ViewCtx<'a> {
    pub state: &'a AppState,
    pub palette: Palette,
    pub greeting: &'a str,
}

pub trait ScreenWidget {
    fn draw(&self, f: &mut Frame<'_>, area: Rect, ctx: &ViewCtx<'_>);
    fn on_key(&mut self, key: KeyEvent, state: &AppState) -> Transition;

    /// Text-entry screens keep bare letters and digits for themselves.
    fn typing(&self) -> bool { false }

    fn legend(&self) -> Paragraph<'static>;
}

/* ───────────────────────── Rendering ───────────────────────── */

fn nav_bar(active: Screen, palette: &Palette) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    for (i, screen) in Screen::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.extend(button_spans(screen.label(), *screen == active, palette));
    }
    Line::from(spans)
}

/// Draw one frame from state. Nothing here mutates.
pub fn render(
    f: &mut Frame<'_>,
    screens: &Screens,
    state: &AppState,
    greeting: &str,
    confirm_quit: Option<&ConfirmQuitScreen>,
) {
    let size = f.size();
    let palette = Palette::for_theme(state.theme_unlocked);
    let page = page_layout(size, PAGE_WIDTH);
    let screen = screens.get(state.active_screen);
    let ctx = ViewCtx { state, palette, greeting };

    let nav = Paragraph::new(nav_bar(state.active_screen, &palette))
        .block(Block::default().borders(Borders::ALL).border_style(palette.border()));
    f.render_widget(nav, page.nav);

    f.render_widget(Block::default().borders(Borders::ALL).border_style(palette.border()), page.body);
    screen.draw(f, page.body_inner, &ctx);

    f.render_widget(Block::default().borders(Borders::ALL), page.legend);
    let legend = if state.notice.is_some() { help_modal() } else { screen.legend() };
    f.render_widget(legend, page.legend_inner);

    if let Some(n) = &state.notice {
        notice::draw(f, size, n, &palette);
    }
    if let Some(confirm) = confirm_quit {
        confirm.draw(f, size, &palette);
    }
}

/* ───────────────────────── App ───────────────────────── */

pub struct App {
    controller: Controller,
    screens: Screens,
    confirm_quit: Option<ConfirmQuitScreen>,
    user_name: String,
    offset: UtcOffset,
}

impl App {
    pub fn new(controller: Controller, user_name: impl Into<String>, offset: UtcOffset) -> Self {
        Self {
            controller,
            screens: Screens::default(),
            confirm_quit: None,
            user_name: user_name.into(),
            offset,
        }
    }

    #[cfg(test)]
    fn state(&self) -> &AppState {
        self.controller.state()
    }

    pub fn draw(&self, f: &mut Frame<'_>) {
        let greeting = greeting_now(self.offset, &self.user_name);
        render(f, &self.screens, self.controller.state(), &greeting, self.confirm_quit.as_ref());
    }

    /// Route one key press. Returns false when the app should exit.
    pub fn on_key(&mut self, k: KeyEvent) -> bool {
        // GLOBAL HOTKEY: Ctrl+Q shows confirm quit from anywhere
        if is_ctrl(k, 'q') {
            self.confirm_quit.get_or_insert_with(ConfirmQuitScreen::new);
            return true;
        }

        let transition = if let Some(confirm) = self.confirm_quit.as_mut() {
            confirm.on_key(k)
        } else if self.controller.state().notice.is_some() {
            notice::on_key(k)
        } else {
            let active = self.controller.state().active_screen;
            let screen = self.screens.get_mut(active);
            match nav_target(k, active, screen.typing()) {
                Some(target) => Transition::Dispatch(Action::NavigateTo(target)),
                None => screen.on_key(k, self.controller.state()),
            }
        };

        match transition {
            Transition::Stay => {}
            Transition::Dispatch(action) => self.controller.dispatch(action),
            Transition::Pop => self.confirm_quit = None,
            Transition::Quit => return false,
        }
        true
    }

    fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.controller.pump();
            terminal.draw(|f| self.draw(f))?;

            if event::poll(Defaults::TICK)? {
                match event::read()? {
                    Event::Key(k) if k.kind == KeyEventKind::Press => {
                        if !self.on_key(k) {
                            return Ok(());
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    fn shutdown(&mut self) {
        self.controller.shutdown();
    }
}

pub fn run(config: &Config, controller: Controller, offset: UtcOffset) -> Result<()> {
    // terminal init
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?; // clean start

    info!(data_dir = %config.data_dir.display(), "ui started");
    let mut app = App::new(controller, config.user_name.clone(), offset);
    let result = app.event_loop(&mut terminal);
    app.shutdown();

    // restore even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!("ui stopped");
    result
}
