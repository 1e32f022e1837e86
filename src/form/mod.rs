mod actions;
mod error;
mod field;
mod record;
mod reducers;
mod skills;
mod state;
mod talent;
mod timer;
mod validation;

pub use actions::FormCommand;
pub use error::FieldError;
pub use field::FieldName;
pub use record::{TalentRecord, format_availability};
pub use reducers::{FormEngine, FormEvent};
pub use skills::{AddOutcome, CatalogChip, DEFAULT_SKILLS, SkillCatalog, SkillSet, SkillView, partition};
pub use state::{DATE_INPUT_FORMAT, FormState, parse_date};
pub use talent::{Phase, SUCCESS_MESSAGE, SubmitOutcome, TalentForm};
pub use timer::{DEFAULT_RESET_DELAY, ResetTimer};
pub use validation::{ErrorField, ValidationErrors, is_valid_email, is_valid_phone_number, validate};

/// Choices offered by the experience level selector.
pub const EXPERIENCE_LEVELS: [&str; 4] = ["Junior", "Staff", "Senior", "Principal"];
