mod common;

use common::{date, session_on, RecordingSurface};
use expense_ledger::core::{
    Command, CommandOutcome, ExpenseForm, ExpenseSession, ListView, DELETE_CONFIRMATION,
};
use expense_ledger::currency::Money;
use expense_ledger::errors::{ValidationError, INVALID_INPUT_MESSAGE};
use expense_ledger::ledger::{ExpenseId, LedgerState};
use insta::assert_snapshot;

fn add(
    session: &mut ExpenseSession,
    surface: &mut RecordingSurface,
    form: ExpenseForm,
) -> CommandOutcome {
    session
        .dispatch(Command::AddExpense(form), surface)
        .expect("dispatch add")
}

fn delete(session: &mut ExpenseSession, surface: &mut RecordingSurface, id: u64) -> CommandOutcome {
    session
        .dispatch(Command::DeleteExpense(ExpenseId::new(id)), surface)
        .expect("dispatch delete")
}

#[test]
fn add_two_then_delete_first() {
    let mut session = session_on(date(2024, 1, 7));
    let mut surface = RecordingSurface::answering([true]);

    let coffee = add(
        &mut session,
        &mut surface,
        ExpenseForm::new("Coffee", "150", "Food").with_date("2024-01-05"),
    );
    assert_eq!(coffee, CommandOutcome::Added(ExpenseId::new(1)));
    assert_eq!(surface.last_total(), Some("₹150.00"));

    add(
        &mut session,
        &mut surface,
        ExpenseForm::new("Bus", "50", "Transport").with_date("2024-01-06"),
    );
    assert_eq!(surface.last_total(), Some("₹200.00"));

    let summaries: Vec<String> = surface
        .last_view()
        .expect("list rendered")
        .rows()
        .iter()
        .map(|row| row.summary())
        .collect();
    assert_snapshot!(summaries.join("\n"), @r"
    Coffee | ₹150.00 | Food | 05 Jan 2024
    Bus | ₹50.00 | Transport | 06 Jan 2024
    ");

    let removed = delete(&mut session, &mut surface, 1);
    assert!(matches!(removed, CommandOutcome::Deleted(ref record) if record.description == "Coffee"));
    assert_eq!(surface.confirmations, vec![DELETE_CONFIRMATION.to_string()]);
    assert_eq!(surface.last_total(), Some("₹50.00"));

    let remaining: Vec<_> = session
        .ledger()
        .all()
        .iter()
        .map(|record| record.description.as_str())
        .collect();
    assert_eq!(remaining, vec!["Bus"]);
}

#[test]
fn initial_refresh_shows_empty_state() {
    let mut session = session_on(date(2024, 1, 7));
    let mut surface = RecordingSurface::default();

    let outcome = session
        .dispatch(Command::Refresh, &mut surface)
        .expect("refresh");

    assert_eq!(outcome, CommandOutcome::Refreshed);
    assert_eq!(surface.views, vec![ListView::Empty]);
    assert_eq!(surface.last_total(), Some("₹0.00"));
    assert_eq!(session.state(), LedgerState::Empty);
}

#[test]
fn rejected_inputs_leave_ledger_and_display_untouched() {
    let cases = [
        (ExpenseForm::new("", "10", "Food"), ValidationError::EmptyDescription),
        (ExpenseForm::new("   ", "10", "Food"), ValidationError::EmptyDescription),
        (ExpenseForm::new("Tea", "0", "Food"), ValidationError::NonPositiveAmount),
        (ExpenseForm::new("Tea", "-3", "Food"), ValidationError::NonPositiveAmount),
        (ExpenseForm::new("Tea", "10", ""), ValidationError::EmptyCategory),
        (
            ExpenseForm::new("Tea", "10", "Food").with_date(""),
            ValidationError::EmptyDate,
        ),
    ];

    for (form, expected) in cases {
        let mut session = session_on(date(2024, 1, 7));
        let mut surface = RecordingSurface::default();

        let outcome = add(&mut session, &mut surface, form);

        assert_eq!(outcome, CommandOutcome::Rejected(expected));
        assert_eq!(surface.alerts, vec![INVALID_INPUT_MESSAGE.to_string()]);
        assert!(surface.views.is_empty());
        assert!(session.ledger().is_empty());
    }
}

#[test]
fn non_numeric_amount_is_rejected() {
    let mut session = session_on(date(2024, 1, 7));
    let mut surface = RecordingSurface::default();

    let outcome = add(&mut session, &mut surface, ExpenseForm::new("Tea", "ten", "Food"));

    assert!(matches!(
        outcome,
        CommandOutcome::Rejected(ValidationError::InvalidAmount(_))
    ));
    assert_eq!(session.total(), Money::ZERO);
}

#[test]
fn declined_delete_keeps_everything() {
    let mut session = session_on(date(2024, 1, 7));
    let mut surface = RecordingSurface::answering([false]);
    add(&mut session, &mut surface, ExpenseForm::new("Tea", "10", "Food"));
    let renders = surface.views.len();

    assert_eq!(
        delete(&mut session, &mut surface, 1),
        CommandOutcome::Declined(ExpenseId::new(1))
    );
    assert_eq!(session.ledger().len(), 1);
    assert_eq!(surface.views.len(), renders);
}

#[test]
fn total_always_matches_sum_of_records() {
    let mut session = session_on(date(2024, 3, 1));
    let mut surface = RecordingSurface::answering([true, true, true]);
    let amounts = ["0.10", "0.20", "12.5", "99.99", "1000", "0.01", "7.25"];

    for (idx, amount) in amounts.iter().enumerate() {
        add(
            &mut session,
            &mut surface,
            ExpenseForm::new(format!("item {idx}"), *amount, "Other"),
        );
        let sum: Money = session.ledger().all().iter().map(|record| record.amount).sum();
        assert_eq!(session.total(), sum);
    }
    assert_eq!(session.total(), Money::from_minor(112_005));

    for id in [2, 5, 7] {
        delete(&mut session, &mut surface, id);
        let sum: Money = session.ledger().all().iter().map(|record| record.amount).sum();
        assert_eq!(session.total(), sum);
    }
    assert_eq!(session.total(), Money::from_minor(11_260));
    assert_eq!(session.ledger().len(), amounts.len() - 3);
}

#[test]
fn identifiers_are_unique_and_never_reused() {
    let mut session = session_on(date(2024, 3, 1));
    let mut surface = RecordingSurface::answering(std::iter::repeat(true).take(10));
    let mut seen = Vec::new();

    for round in 0..5 {
        for _ in 0..2 {
            if let CommandOutcome::Added(id) =
                add(&mut session, &mut surface, ExpenseForm::new("Tea", "10", "Food"))
            {
                assert!(!seen.contains(&id));
                seen.push(id);
            }
        }
        delete(&mut session, &mut surface, seen[round * 2].get());
    }

    assert_eq!(seen.len(), 10);
    assert_eq!(session.ledger().len(), 5);
}

#[test]
fn missing_date_uses_clock() {
    let mut session = session_on(date(2024, 2, 29));
    let mut surface = RecordingSurface::default();

    add(&mut session, &mut surface, ExpenseForm::new("Rent", "5000", "Utilities"));

    assert_eq!(session.ledger().all()[0].date, date(2024, 2, 29));
    let row = &surface.last_view().expect("rendered").rows()[0];
    assert_eq!(row.date, "29 Feb 2024");
}

#[test]
fn deleting_absent_id_changes_nothing() {
    let mut session = session_on(date(2024, 1, 7));
    let mut surface = RecordingSurface::answering([true, true]);
    add(&mut session, &mut surface, ExpenseForm::new("Coffee", "150", "Food"));
    add(&mut session, &mut surface, ExpenseForm::new("Bus", "50", "Transport"));
    let before = session.ledger().all().to_vec();
    let total_before = session.total();
    let renders = surface.views.len();

    for id in [0, 3, 99] {
        assert_eq!(
            delete(&mut session, &mut surface, id),
            CommandOutcome::NotFound(ExpenseId::new(id))
        );
    }

    assert_eq!(session.ledger().all(), before.as_slice());
    assert_eq!(session.total(), total_before);
    assert_eq!(session.total(), Money::from_major(200));
    assert_eq!(surface.views.len(), renders);
    assert!(surface.confirmations.is_empty());
    assert_eq!(surface.answers.len(), 2);
}

#[test]
fn sub_paisa_amount_is_accepted_and_shown_rounded() {
    let mut session = session_on(date(2024, 1, 7));
    let mut surface = RecordingSurface::default();

    let outcome = add(&mut session, &mut surface, ExpenseForm::new("Gum", "0.004", "Food"));

    assert_eq!(outcome, CommandOutcome::Added(ExpenseId::new(1)));
    assert!(surface.alerts.is_empty());
    assert!(session.total().is_positive());
    let row = &surface.last_view().expect("rendered").rows()[0];
    assert_eq!(row.amount, "₹0.00");
    assert_eq!(surface.last_total(), Some("₹0.00"));
}
