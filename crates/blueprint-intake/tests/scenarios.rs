//! End-to-end intake scenarios driven through the public API only.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::cell::RefCell;
use std::rc::Rc;

use blueprint_intake::{
    AcceptedFile, DragState, FileIntake, IntakeConfig, IntakeEvent, IntakeState, Notifier,
    format_megabytes,
};

/// Collects acknowledgment messages.
#[derive(Clone, Default)]
struct RecordingNotifier(Rc<RefCell<Vec<String>>>);

impl Notifier for RecordingNotifier {
    fn success(&mut self, message: &str) {
        self.0.borrow_mut().push(message.to_owned());
    }
}

type Seen = Rc<RefCell<Vec<AcceptedFile>>>;

fn intake_with(
    state: IntakeState<AcceptedFile>,
) -> (
    FileIntake<AcceptedFile, impl FnMut(&AcceptedFile), RecordingNotifier>,
    Seen,
    RecordingNotifier,
) {
    let seen: Seen = Rc::default();
    let sink = Rc::clone(&seen);
    let notifier = RecordingNotifier::default();
    let config = IntakeConfig::default();
    let intake = FileIntake::with_state(
        state,
        move |f: &AcceptedFile| sink.borrow_mut().push(f.clone()),
        notifier.clone(),
        config.success_message,
    );
    (intake, seen, notifier)
}

#[test]
fn drag_then_drop_accepts_plan() {
    let (mut intake, seen, notifier) = intake_with(IntakeState::default());
    assert_eq!(intake.state(), &IntakeState::new(DragState::Idle, None));

    intake.handle(IntakeEvent::DragEnter);
    assert_eq!(intake.state(), &IntakeState::new(DragState::Hovering, None));

    let plan = AcceptedFile::new("plan.pdf", 2_097_152);
    intake.handle(IntakeEvent::Drop(vec![plan.clone()]));

    assert_eq!(
        intake.state(),
        &IntakeState::new(DragState::Idle, Some(plan.clone()))
    );
    assert_eq!(*seen.borrow(), vec![plan]);
    assert_eq!(
        *notifier.0.borrow(),
        vec!["Blueprint uploaded successfully!".to_owned()]
    );
}

#[test]
fn clear_after_accept_returns_to_empty() {
    let file = AcceptedFile::new("elevation.dxf", 4096);
    let (mut intake, seen, notifier) =
        intake_with(IntakeState::new(DragState::Idle, Some(file)));

    intake.handle(IntakeEvent::Clear);

    assert_eq!(intake.state(), &IntakeState::new(DragState::Idle, None));
    assert!(seen.borrow().is_empty());
    assert!(notifier.0.borrow().is_empty());
}

#[test]
fn picker_selection_displays_megabytes() {
    let (mut intake, seen, _) = intake_with(IntakeState::default());

    intake.handle(IntakeEvent::PickerChange(vec![AcceptedFile::new(
        "a.png", 1_048_576,
    )]));

    let file = intake.file().expect("picker selection should be accepted");
    assert_eq!(file.name, "a.png");
    assert_eq!(format_megabytes(file.size), "1.00 MB");
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn hover_cycle_without_drop_never_emits() {
    let (mut intake, seen, notifier) = intake_with(IntakeState::default());

    for _ in 0..3 {
        intake.handle(IntakeEvent::DragEnter);
        intake.handle(IntakeEvent::DragOver);
        assert!(intake.is_hovering());
        intake.handle(IntakeEvent::DragLeave);
        assert!(!intake.is_hovering());
    }
    intake.handle(IntakeEvent::DragEnter);
    intake.handle(IntakeEvent::Drop(Vec::new()));

    assert_eq!(intake.state(), &IntakeState::default());
    assert!(seen.borrow().is_empty());
    assert!(notifier.0.borrow().is_empty());
}

#[test]
fn multi_file_drop_keeps_only_the_first() {
    let (mut intake, seen, notifier) = intake_with(IntakeState::default());
    let files = vec![
        AcceptedFile::new("ground.dwg", 10),
        AcceptedFile::new("first.dwg", 20),
        AcceptedFile::new("roof.dwg", 30),
    ];

    intake.handle(IntakeEvent::Drop(files));

    assert_eq!(intake.file().map(|f| f.name.as_str()), Some("ground.dwg"));
    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(notifier.0.borrow().len(), 1);
}
