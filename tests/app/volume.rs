use volume_focus::volume::Volume;

#[test]
fn starts_at_half_of_the_ceiling() {
    assert_eq!(Volume::new(10).level(), 5);
    assert_eq!(Volume::new(7).level(), 3);
    assert_eq!(Volume::default().level(), 5);
}

#[test]
fn increase_saturates_at_the_ceiling() {
    let mut volume = Volume::new(10);

    volume.increase();
    assert_eq!(volume.level(), 6);

    for _ in 0..5 {
        volume.increase();
    }
    assert_eq!(volume.level(), 10);
    assert!(!volume.can_increase());

    for _ in 0..3 {
        volume.increase();
        assert_eq!(volume.level(), 10, "increase past the ceiling must be a no-op");
    }
}

#[test]
fn decrease_saturates_at_the_floor() {
    let mut volume = Volume::new(10);

    for _ in 0..5 {
        volume.decrease();
    }
    assert_eq!(volume.level(), Volume::MIN);
    assert!(!volume.can_decrease());

    volume.decrease();
    assert_eq!(volume.level(), 0, "decrease past the floor must be a no-op");
}

#[test]
fn level_stays_in_range_for_long_sequences() {
    for max in [1u8, 2, 10, 100] {
        let mut volume = Volume::new(max);
        for step in 0..1000u32 {
            if (step / 7) % 3 == 0 {
                volume.decrease();
            } else {
                volume.increase();
            }
            assert!(
                volume.level() <= volume.max(),
                "level {} above ceiling {max} at step {step}",
                volume.level()
            );
        }
    }
}
