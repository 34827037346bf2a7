/// Where the menu is in its render/input cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuPhase {
    Rendering,
    AwaitingInput,
    Navigating,
    /// Holds the index of the chosen entry
    Confirmed(usize),
    Aborted,
}

/// A user intent derived from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Up,
    Down,
    PageUp,
    PageDown,
    First,
    Last,
    Confirm,
    Interrupt,
}

/// Highlight position over `len` entries.
///
/// Movement clamps at both ends; there is no wraparound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    selected: usize,
    len: usize,
    phase: MenuPhase,
}

impl MenuState {
    pub fn new(len: usize) -> Self {
        Self {
            selected: 0,
            len,
            phase: MenuPhase::Rendering,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn phase(&self) -> MenuPhase {
        self.phase
    }

    /// Called once the current frame is on screen
    pub fn rendered(&mut self) {
        if self.phase == MenuPhase::Rendering || self.phase == MenuPhase::Navigating {
            self.phase = MenuPhase::AwaitingInput;
        }
    }

    /// A key that maps to nothing still triggers a redraw
    pub fn ignore(&mut self) {
        if self.phase == MenuPhase::AwaitingInput {
            self.phase = MenuPhase::Rendering;
        }
    }

    /// Apply an action. `page` is the number of visible rows.
    pub fn apply(&mut self, action: MenuAction, page: usize) -> MenuPhase {
        let last = self.len.saturating_sub(1);
        let page = page.max(1);

        self.phase = match action {
            MenuAction::Up => self.move_to(self.selected.saturating_sub(1)),
            MenuAction::Down => self.move_to((self.selected + 1).min(last)),
            MenuAction::PageUp => self.move_to(self.selected.saturating_sub(page)),
            MenuAction::PageDown => self.move_to((self.selected + page).min(last)),
            MenuAction::First => self.move_to(0),
            MenuAction::Last => self.move_to(last),
            MenuAction::Confirm if !self.is_empty() => MenuPhase::Confirmed(self.selected),
            MenuAction::Confirm => MenuPhase::Rendering,
            MenuAction::Interrupt => MenuPhase::Aborted,
        };
        self.phase
    }

    fn move_to(&mut self, index: usize) -> MenuPhase {
        self.selected = index;
        MenuPhase::Navigating
    }
}
