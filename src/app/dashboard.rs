pub const PROJECTS_COMING_SOON: &str = "Projects feature coming soon!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum DashboardButton {
    #[default]
    Talent,
    Projects,
}

impl DashboardButton {
    pub(crate) const ALL: [DashboardButton; 2] = [DashboardButton::Talent, DashboardButton::Projects];

    pub(crate) fn label(self) -> &'static str {
        match self {
            DashboardButton::Talent => "Talent",
            DashboardButton::Projects => "Projects",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct DashboardState {
    focus: DashboardButton,
}

impl DashboardState {
    pub(crate) fn focus(&self) -> DashboardButton {
        self.focus
    }

    pub(crate) fn focus_step(&mut self, delta: i32) {
        let len = DashboardButton::ALL.len() as i32;
        let index = DashboardButton::ALL
            .iter()
            .position(|b| *b == self.focus)
            .unwrap_or(0) as i32;
        self.focus = DashboardButton::ALL[(index + delta).rem_euclid(len) as usize];
    }
}
