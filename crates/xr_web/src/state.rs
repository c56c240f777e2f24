use chrono::NaiveDate;
use xr_core::DateWindow;
use xr_sources::ArticleManager;

pub struct AppState {
    pub manager: ArticleManager,
    today: Option<fn() -> NaiveDate>,
}

impl AppState {
    pub fn new(manager: ArticleManager) -> Self {
        Self { manager, today: None }
    }

    /// Pins "today" to a fixed clock instead of the local wall clock.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn window(&self) -> DateWindow {
        match self.today {
            Some(today) => DateWindow::ending_on(today()),
            None => DateWindow::current(),
        }
    }
}
