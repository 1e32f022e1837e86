use std::{sync::Arc, time::Duration};

use chrono::NaiveDate;
use talentui::{
    FieldError, FieldName, ManualClock, SubmitOutcome, TalentForm,
    form::{AddOutcome, ErrorField, SUCCESS_MESSAGE, SkillCatalog, validate},
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
}

fn form() -> (TalentForm, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(day(1)));
    (TalentForm::new(SkillCatalog::default(), clock.clone()), clock)
}

fn fill_valid(form: &mut TalentForm) {
    for (name, value) in [
        (FieldName::FirstName, "Grace"),
        (FieldName::LastName, "Hopper"),
        (FieldName::Position, "Admiral"),
        (FieldName::ExperienceLevel, "Principal"),
        (FieldName::Location, "Arlington"),
        (FieldName::Email, "x@y.com"),
        (FieldName::PhoneNumber, "5551234567"),
    ] {
        form.set_field(name, value).unwrap();
    }
    form.set_end_date(day(2));
    form.toggle_skill("Java");
}

#[test]
fn validation_is_deterministic() {
    let (mut form, _) = form();
    fill_valid(&mut form);
    form.set_field(FieldName::Email, "abc").unwrap();
    assert_eq!(validate(form.state()), validate(form.state()));
    assert_eq!(&validate(form.state()), form.errors());
}

#[test]
fn each_rule_reports_only_its_own_field() {
    let cases: [(FieldName, &str, ErrorField); 7] = [
        (FieldName::FirstName, "  ", ErrorField::FirstName),
        (FieldName::LastName, "", ErrorField::LastName),
        (FieldName::Position, "\t", ErrorField::Position),
        (FieldName::ExperienceLevel, "", ErrorField::ExperienceLevel),
        (FieldName::Location, " ", ErrorField::Location),
        (FieldName::Email, "a@b", ErrorField::Email),
        (FieldName::PhoneNumber, "12345678901234567", ErrorField::PhoneNumber),
    ];
    for (name, value, expected) in cases {
        let (mut form, _) = form();
        fill_valid(&mut form);
        form.set_field(name, value).unwrap();
        let fields: Vec<ErrorField> = form.errors().fields().collect();
        assert_eq!(fields, vec![expected], "setting {name} to {value:?}");
        assert!(!form.is_valid());
    }
}

#[test]
fn equal_dates_are_rejected() {
    let (mut form, _) = form();
    fill_valid(&mut form);
    assert!(form.is_valid());
    form.set_field(FieldName::EndDate, "2025-06-01").unwrap();
    assert_eq!(
        form.errors().get(ErrorField::Dates),
        Some("Start date must be before end date")
    );
    form.set_field(FieldName::StartDate, "2025-05-31").unwrap();
    assert!(form.is_valid());
}

#[test]
fn malformed_dates_leave_the_store_untouched() {
    let (mut form, _) = form();
    let err = form.set_field(FieldName::StartDate, "06/01/2025").unwrap_err();
    assert!(matches!(err, FieldError::InvalidDate { .. }));
    assert_eq!(form.state().start_date(), day(1));
    assert!(matches!(
        "nickname".parse::<FieldName>(),
        Err(FieldError::UnknownField(_))
    ));
}

#[test]
fn skill_operations() {
    let (mut form, _) = form();
    assert!(form.toggle_skill("Java"));
    assert!(!form.toggle_skill("Java"));
    assert!(form.state().skills().is_empty());

    assert_eq!(form.add_skill(""), AddOutcome::Empty);
    assert_eq!(form.add_skill("   "), AddOutcome::Empty);
    assert_eq!(form.state().draft_skill(), "   ");
    assert!(form.state().skills().is_empty());

    form.toggle_skill("Java");
    assert_eq!(form.add_skill("Java"), AddOutcome::Duplicate);
    assert_eq!(form.state().skills().len(), 1);
    assert_eq!(form.state().draft_skill(), "");

    assert_eq!(form.add_skill("  Rust "), AddOutcome::Added);
    let view = form.skill_view();
    assert_eq!(view.custom, vec!["Rust"]);
    assert!(view.catalog.iter().any(|chip| chip.name == "Java" && chip.highlighted));
    assert!(view.catalog.iter().any(|chip| chip.name == "React" && !chip.highlighted));
}

#[test]
fn invalid_submit_is_a_silent_noop() {
    let (mut form, clock) = form();
    assert_eq!(form.submit(), SubmitOutcome::Invalid);
    assert_eq!(form.success_message(), None);
    assert!(!form.is_reset_pending());
    clock.advance(Duration::from_secs(10));
    assert!(!form.tick());
}

#[test]
fn accepted_submission_clears_after_the_delay() {
    let (mut form, clock) = form();
    fill_valid(&mut form);
    let SubmitOutcome::Accepted(record) = form.submit() else {
        panic!("expected the submission to be accepted");
    };
    assert_eq!(record.availability, "06/01/2025 - 06/02/2025");
    assert_eq!(record.skills, vec!["Java".to_string()]);
    assert_eq!(form.success_message(), Some(SUCCESS_MESSAGE));
    assert_eq!(form.submit(), SubmitOutcome::ResetPending);

    clock.advance(Duration::from_millis(2999));
    assert!(!form.tick());
    clock.advance(Duration::from_millis(1));
    assert!(form.tick());

    assert_eq!(form.state().first_name(), "");
    assert_eq!(form.state().email(), "");
    assert!(form.state().skills().is_empty());
    assert_eq!(form.state().end_date(), day(1));
    assert_eq!(form.success_message(), None);
    assert!(form.is_pristine());
}

#[test]
fn manual_reset_preempts_the_scheduled_clear() {
    let (mut form, clock) = form();
    fill_valid(&mut form);
    assert!(matches!(form.submit(), SubmitOutcome::Accepted(_)));
    form.reset();
    form.reset();
    assert!(!form.is_reset_pending());

    form.set_field(FieldName::FirstName, "Katherine").unwrap();
    clock.advance(Duration::from_secs(3));
    assert!(!form.tick());
    assert_eq!(form.state().first_name(), "Katherine");
}

#[test]
fn custom_catalog_and_delay() {
    let clock = Arc::new(ManualClock::new(day(1)));
    let mut form = TalentForm::new(SkillCatalog::new(["Go", "Zig"]), clock.clone())
        .with_reset_delay(Duration::from_millis(500));
    fill_valid(&mut form);
    // Java is not in this catalog, so it shows up as a custom skill.
    assert_eq!(form.skill_view().custom, vec!["Java"]);
    assert!(matches!(form.submit(), SubmitOutcome::Accepted(_)));
    clock.advance(Duration::from_millis(500));
    assert!(form.tick());
}
