use chrono::{DateTime, Duration, TimeZone, Utc};
use lifebm_core::{evaluate, TodoItem};

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, hour, minute, 0).unwrap()
}

#[test]
fn completed_items_are_never_due() {
    let mut todo = TodoItem::with_reminder("done already", Some(at(8, 0)), Some(5));
    todo.completed = true;

    let pass = evaluate(at(12, 0), &[todo]);
    assert!(pass.due.is_empty());
    assert!(pass.updated.is_empty());
}

#[test]
fn items_without_reminder_fields_are_never_due() {
    let todo = TodoItem::new("no reminder");
    let pass = evaluate(at(12, 0), &[todo]);
    assert!(pass.due.is_empty());
}

#[test]
fn one_shot_fires_at_or_after_its_instant() {
    let todo = TodoItem::with_reminder("call dentist", Some(at(10, 0)), None);

    assert!(evaluate(at(9, 59), std::slice::from_ref(&todo)).due.is_empty());
    assert_eq!(evaluate(at(10, 0), std::slice::from_ref(&todo)).due.len(), 1);
    assert_eq!(evaluate(at(11, 30), &[todo]).due.len(), 1);
}

#[test]
fn one_shot_fires_exactly_once() {
    let todo = TodoItem::with_reminder("call dentist", Some(at(10, 0)), None);

    let first = evaluate(at(10, 5), &[todo]);
    assert_eq!(first.due.len(), 1);
    let fired = first.updated.into_iter().next().unwrap();
    assert_eq!(fired.last_reminded, Some(at(10, 5)));

    // Re-evaluating with the updated record never fires again.
    let second = evaluate(at(23, 59), &[fired]);
    assert!(second.due.is_empty());
}

#[test]
fn recurring_without_anchor_or_prior_fire_is_due_immediately() {
    let todo = TodoItem::with_reminder("hydrate", None, Some(30));
    let pass = evaluate(at(0, 1), &[todo]);
    assert_eq!(pass.due.len(), 1);
}

#[test]
fn recurring_with_anchor_waits_for_the_anchor() {
    let todo = TodoItem::with_reminder("stretch", Some(at(14, 0)), Some(60));

    assert!(evaluate(at(13, 59), std::slice::from_ref(&todo)).due.is_empty());
    assert_eq!(evaluate(at(14, 0), &[todo]).due.len(), 1);
}

#[test]
fn recurring_interval_boundary_is_inclusive() {
    let mut todo = TodoItem::with_reminder("hydrate", None, Some(30));
    todo.last_reminded = Some(at(10, 0));

    assert!(evaluate(at(10, 29), std::slice::from_ref(&todo)).due.is_empty());

    let pass = evaluate(at(10, 30), &[todo]);
    assert_eq!(pass.due.len(), 1);
    assert_eq!(pass.updated[0].last_reminded, Some(at(10, 30)));
}

#[test]
fn recurring_keeps_firing_every_interval() {
    let todo = TodoItem::with_reminder("hydrate", None, Some(30));

    let first = evaluate(at(10, 0), &[todo]);
    assert_eq!(first.due.len(), 1);
    let after_first = first.updated.into_iter().next().unwrap();

    assert!(evaluate(at(10, 15), std::slice::from_ref(&after_first))
        .due
        .is_empty());

    let second = evaluate(at(10, 30), &[after_first]);
    assert_eq!(second.due.len(), 1);
    assert_eq!(second.updated[0].last_reminded, Some(at(10, 30)));
}

#[test]
fn evaluation_is_pure_for_identical_inputs() {
    let todos = vec![
        TodoItem::with_reminder("a", Some(at(9, 0)), None),
        TodoItem::with_reminder("b", None, Some(10)),
        TodoItem::new("c"),
    ];
    let now = at(9, 30);

    let first = evaluate(now, &todos);
    let second = evaluate(now, &todos);
    assert_eq!(first, second);
}

#[test]
fn evaluation_does_not_mutate_its_input() {
    let todo = TodoItem::with_reminder("hydrate", None, Some(5));
    let snapshot = todo.clone();

    let _ = evaluate(at(12, 0), std::slice::from_ref(&todo));
    assert_eq!(todo, snapshot);
}

#[test]
fn due_items_appear_once_even_with_both_fields_set() {
    // Anchor reached and no prior fire satisfies both decision branches.
    let todo = TodoItem::with_reminder("both fields", Some(at(10, 0)), Some(15));

    let pass = evaluate(at(10, 0), &[todo]);
    assert_eq!(pass.due.len(), 1);
    assert_eq!(pass.updated.len(), 1);
}

#[test]
fn drink_water_example_flips_at_the_half_hour() {
    let mut todo = TodoItem::with_reminder("Drink water", None, Some(30));
    todo.last_reminded = Some(at(10, 0));

    assert!(evaluate(at(10, 29), std::slice::from_ref(&todo)).due.is_empty());

    let pass = evaluate(at(10, 30), &[todo.clone()]);
    assert_eq!(pass.due.len(), 1);
    assert_eq!(pass.due[0].text, "Drink water");
    assert_eq!(pass.updated[0].last_reminded, Some(at(10, 30)));

    let later = Duration::minutes(29);
    assert!(evaluate(at(10, 30) + later, &pass.updated).due.is_empty());
}
