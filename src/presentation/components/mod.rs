mod dashboard;
mod footer;
mod layout;
mod login;
mod popup;
mod talent;

pub use dashboard::render_dashboard;
pub use footer::{render_footer, render_header};
pub use login::render_login;
pub use popup::render_popup;
pub use talent::render_talent;
