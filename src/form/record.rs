use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::state::FormState;

const AVAILABILITY_FORMAT: &str = "%m/%d/%Y";

/// Immutable snapshot of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentRecord {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub experience_level: String,
    pub location: String,
    pub email: String,
    pub phone_number: String,
    pub availability: String,
    pub skills: Vec<String>,
}

impl TalentRecord {
    pub(crate) fn snapshot(state: &FormState) -> Self {
        Self {
            first_name: state.first_name().to_string(),
            last_name: state.last_name().to_string(),
            position: state.position().to_string(),
            experience_level: state.experience_level().to_string(),
            location: state.location().to_string(),
            email: state.email().to_string(),
            phone_number: state.phone_number().to_string(),
            availability: format_availability(state.start_date(), state.end_date()),
            skills: state.skills().to_vec(),
        }
    }
}

pub fn format_availability(start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "{} - {}",
        start.format(AVAILABILITY_FORMAT),
        end.format(AVAILABILITY_FORMAT)
    )
}
