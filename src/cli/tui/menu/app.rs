use ratatui::{backend::Backend, crossterm::event::Event, widgets::ListState, Frame, Terminal};

use super::events::{action_for, EventSource};
use super::screen;
use super::state::{MenuPhase, MenuState};
use super::theme::Theme;
use crate::catalog::{ChoiceList, ImageRecord};
use crate::error::{ChooserError, Result};

/// Single-select image menu
pub struct Menu<'a> {
    choices: &'a ChoiceList,
    title: &'a str,
    theme: &'a Theme,
    state: MenuState,
    /// Scroll offset survives between frames
    list_state: ListState,
    /// Visible entries in the last frame, used for paging
    page: usize,
}

impl<'a> Menu<'a> {
    pub fn new(choices: &'a ChoiceList, title: &'a str, theme: &'a Theme) -> Self {
        Self {
            choices,
            title,
            theme,
            state: MenuState::new(choices.len()),
            list_state: ListState::default().with_selected(Some(0)),
            page: 1,
        }
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    /// Draw, wait for a key, repeat until an entry is confirmed.
    ///
    /// Consumes the menu so its widget state is gone by the time the caller
    /// tears down the terminal. An empty list fails before anything is drawn.
    pub fn run<B, E>(mut self, terminal: &mut Terminal<B>, events: &mut E) -> Result<ImageRecord>
    where
        B: Backend,
        E: EventSource,
    {
        if self.choices.is_empty() {
            return Err(ChooserError::EmptyMenu);
        }

        loop {
            terminal.draw(|frame| self.render(frame))?;
            self.state.rendered();

            let event = events.next_event()?;
            match self.handle_event(event) {
                // The highlight is clamped to the list, so only an empty
                // list could miss here
                MenuPhase::Confirmed(index) => {
                    return self
                        .choices
                        .get(index)
                        .cloned()
                        .ok_or(ChooserError::EmptyMenu);
                }
                MenuPhase::Aborted => return Err(ChooserError::Interrupted),
                _ => {}
            }
        }
    }

    /// Render the banner and the choice box
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        screen::render_banner(frame, area, self.title, self.theme);

        let body = screen::body_area(area, self.theme.banner_height);
        self.list_state.select(Some(self.state.selected()));
        self.page = screen::render_choices(
            frame,
            body,
            self.choices,
            self.theme,
            &mut self.list_state,
        );
    }

    fn handle_event(&mut self, event: Event) -> MenuPhase {
        match event {
            Event::Key(key) => match action_for(&key) {
                Some(action) => self.state.apply(action, self.page),
                None => {
                    self.state.ignore();
                    self.state.phase()
                }
            },
            // Resizes and everything else only need a redraw
            _ => {
                self.state.ignore();
                self.state.phase()
            }
        }
    }
}
