#![deny(rust_2018_idioms)]

mod app;
pub mod clock;
pub mod form;
pub mod io;
mod presentation;

#[cfg(test)]
mod tests;

pub use app::{
    Credentials, DEFAULT_PASSWORD, DEFAULT_TITLE, DEFAULT_USERNAME, INVALID_LOGIN, Navigator,
    PROJECTS_COMING_SOON, Screen, Session, TalentUI, UiOptions,
};
pub use clock::{Clock, ManualClock, SystemClock};
pub use form::{
    FieldError, FieldName, SubmitOutcome, TalentForm, TalentRecord, ValidationErrors,
};
pub use io::{DocumentFormat, OutputDestination, OutputOptions};

pub mod prelude {
    pub use super::{
        Clock, DocumentFormat, OutputDestination, OutputOptions, SystemClock, TalentForm,
        TalentRecord, TalentUI, UiOptions,
    };
}
