mod components;
mod view;

pub use view::{DashboardView, LoginView, PopupRender, ScreenView, TalentView, UiContext, draw};
