use std::cell::RefCell;
use std::rc::Rc;

use tickanim_core::{
    speed_to_time, AnimationDescriptor, Config, Engine, ManualClock, SetterRef, TargetId,
};

fn recorder() -> (SetterRef, Rc<RefCell<Vec<i32>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let setter: SetterRef = Rc::new(move |_t: TargetId, v: i32| sink.borrow_mut().push(v));
    (setter, seen)
}

#[test]
fn speed_derived_duration_drives_an_animation() {
    let duration = speed_to_time(100, 0, 50);
    assert_eq!(duration, 500);

    let mut eng = Engine::default();
    let (setter, seen) = recorder();
    eng.create(
        AnimationDescriptor::new(TargetId(1), setter)
            .with_range(0, 50)
            .with_duration(duration),
    );
    for _ in 0..4 {
        eng.update(125);
    }
    assert_eq!(*seen.borrow(), vec![13, 25, 38, 50]);
    assert!(eng.is_empty());
}

#[test]
fn nominal_tick_uses_configured_period() {
    let mut eng = Engine::new(Config {
        nominal_tick_ms: 25,
        ..Config::default()
    });
    let (setter, seen) = recorder();
    eng.create(
        AnimationDescriptor::new(TargetId(2), setter)
            .with_range(0, 100)
            .with_duration(100),
    );
    assert_eq!(eng.update_nominal().dt_ms, 25);
    eng.update_nominal();
    assert_eq!(*seen.borrow(), vec![25, 50]);
}

#[test]
fn zero_nominal_period_is_rejected() {
    let cfg = Config {
        nominal_tick_ms: 0,
        ..Config::default()
    };
    assert!(Engine::try_new(cfg).is_err());
}

#[test]
fn measured_ticks_follow_the_clock() {
    let clock = ManualClock::new(1_000);
    let mut eng = Engine::default();
    let (setter, seen) = recorder();
    eng.create(
        AnimationDescriptor::new(TargetId(3), setter)
            .with_range(0, 100)
            .with_duration(100),
    );

    // first reading only latches the counter
    assert_eq!(eng.update_from(&clock).dt_ms, 0);
    clock.advance(50);
    assert_eq!(eng.update_from(&clock).dt_ms, 50);
    clock.advance(50);
    eng.update_from(&clock);
    assert_eq!(*seen.borrow(), vec![0, 50, 100]);
    assert!(eng.is_empty());
}

#[test]
fn measured_ticks_survive_counter_wrap() {
    let clock = ManualClock::new(u32::MAX - 19);
    let mut eng = Engine::default();
    let (setter, seen) = recorder();
    eng.create(
        AnimationDescriptor::new(TargetId(4), setter)
            .with_range(0, 100)
            .with_duration(100),
    );
    eng.update_from(&clock);
    clock.advance(50);
    assert_eq!(eng.update_from(&clock).dt_ms, 50);
    assert_eq!(seen.borrow().last().copied(), Some(50));
}

#[test]
fn init_forgets_the_previous_clock_reading() {
    let clock = ManualClock::new(0);
    let mut eng = Engine::default();
    eng.update_from(&clock);
    clock.advance(5_000);
    eng.init();
    assert_eq!(eng.update_from(&clock).dt_ms, 0);
}

#[test]
fn huge_tick_saturates_instead_of_wrapping() {
    let mut eng = Engine::default();
    let (setter, seen) = recorder();
    eng.create(
        AnimationDescriptor::new(TargetId(5), setter)
            .with_range(0, 1000)
            .with_duration(i16::MAX),
    );
    eng.update(10_000_000);
    assert_eq!(*seen.borrow(), vec![1000]);
    assert!(eng.is_empty());
}

#[test]
fn long_start_delay_saturates_to_the_counter_range() {
    let mut eng = Engine::default();
    let (setter, seen) = recorder();
    eng.create(
        AnimationDescriptor::new(TargetId(6), setter)
            .with_range(0, 10)
            .with_duration(10)
            .with_delay(u16::MAX),
    );
    eng.update(32_767);
    assert!(seen.borrow().is_empty());
    eng.update(11);
    assert_eq!(*seen.borrow(), vec![10]);
}
