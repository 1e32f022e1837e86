use super::field::FieldName;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    SetField { name: FieldName, value: String },
    /// Shift a date slot by whole days.
    StepDate { name: FieldName, days: i64 },
    AddDraftSkill,
    ToggleSkill(String),
    Submit,
    Reset,
}
