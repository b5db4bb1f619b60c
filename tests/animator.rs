mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_wheel_light::{AnimationParam, AnimationState, Animator, Continuation, SlotOutOfRange};

    fn step<T>(
        animator: &mut Animator<T, 2>,
        now: u64,
        answer: Continuation,
    ) -> Option<AnimationParam> {
        let mut seen = None;
        animator.update(Instant::from_millis(now), |_, param| {
            seen = Some(param);
            answer
        });
        seen
    }

    #[test]
    fn test_start_out_of_range() {
        let mut animator = Animator::<u8, 2>::new();
        assert_eq!(
            animator.start(2, Duration::from_millis(100), 0),
            Err(SlotOutOfRange(2))
        );
        assert!(!animator.is_active(2));
    }

    #[test]
    fn test_first_update_has_zero_progress() {
        let mut animator = Animator::<u8, 2>::new();
        animator.start(0, Duration::from_millis(100), 0).unwrap();

        let param = step(&mut animator, 5000, Continuation::Restart).unwrap();
        assert_eq!(param.index, 0);
        assert_eq!(param.progress, 0.0);
        assert_eq!(param.state, AnimationState::Progress);
    }

    #[test]
    fn test_idle_time_before_start_is_not_counted() {
        let mut animator = Animator::<u8, 2>::new();
        assert_eq!(step(&mut animator, 0, Continuation::Restart), None);

        animator.start(0, Duration::from_millis(100), 0).unwrap();
        let param = step(&mut animator, 1010, Continuation::Restart).unwrap();
        assert_eq!(param.progress, 0.0);
        assert_eq!(param.state, AnimationState::Progress);

        let param = step(&mut animator, 1060, Continuation::Restart).unwrap();
        assert_eq!(param.progress, 0.5);
    }

    #[test]
    fn test_started_slot_gets_own_time_base() {
        let mut animator = Animator::<u8, 2>::new();
        animator.start(0, Duration::from_millis(100), 0).unwrap();
        step(&mut animator, 0, Continuation::Restart);
        step(&mut animator, 40, Continuation::Restart);

        animator.start(1, Duration::from_millis(100), 1).unwrap();
        step(&mut animator, 60, Continuation::Restart);
        assert_eq!(animator.progress(0), Some(0.6));
        assert_eq!(animator.progress(1), Some(0.0));

        step(&mut animator, 80, Continuation::Restart);
        assert_eq!(animator.progress(0), Some(0.8));
        assert_eq!(animator.progress(1), Some(0.2));
    }

    #[test]
    fn test_progress_follows_elapsed_time() {
        let mut animator = Animator::<u8, 2>::new();
        animator.start(0, Duration::from_millis(100), 0).unwrap();
        step(&mut animator, 0, Continuation::Restart);

        let param = step(&mut animator, 50, Continuation::Restart).unwrap();
        assert_eq!(param.progress, 0.5);
        assert!(!param.is_completed());
        assert_eq!(animator.progress(0), Some(0.5));
    }

    #[test]
    fn test_completed_cycle_restarts() {
        let mut animator = Animator::<u8, 2>::new();
        animator.start(0, Duration::from_millis(100), 0).unwrap();
        step(&mut animator, 0, Continuation::Restart);

        let param = step(&mut animator, 130, Continuation::Restart).unwrap();
        assert_eq!(param.state, AnimationState::Completed);
        assert_eq!(param.progress, 1.0);
        assert!(animator.is_active(0));
        assert_eq!(animator.progress(0), Some(0.0));

        let param = step(&mut animator, 180, Continuation::Restart).unwrap();
        assert_eq!(param.progress, 0.5);
    }

    #[test]
    fn test_completed_cycle_finishes() {
        let mut animator = Animator::<u8, 2>::new();
        animator.start(1, Duration::from_millis(100), 0).unwrap();
        step(&mut animator, 0, Continuation::Finish);

        // Finish has no effect while the cycle runs
        step(&mut animator, 50, Continuation::Finish);
        assert!(animator.is_active(1));

        step(&mut animator, 100, Continuation::Finish);
        assert!(!animator.is_active(1));
        assert_eq!(step(&mut animator, 150, Continuation::Finish), None);
    }

    #[test]
    fn test_change_duration_keeps_progress() {
        let mut animator = Animator::<u8, 2>::new();
        animator.start(0, Duration::from_millis(100), 0).unwrap();
        step(&mut animator, 0, Continuation::Restart);
        step(&mut animator, 50, Continuation::Restart);

        animator.change_duration(0, Duration::from_millis(200));
        assert_eq!(animator.duration(0), Some(Duration::from_millis(200)));
        assert_eq!(animator.progress(0), Some(0.5));

        let param = step(&mut animator, 100, Continuation::Restart).unwrap();
        assert_eq!(param.progress, 0.75);
    }

    #[test]
    fn test_change_duration_on_idle_slot_is_ignored() {
        let mut animator = Animator::<u8, 2>::new();
        animator.change_duration(0, Duration::from_millis(200));
        assert!(!animator.is_active(0));
        assert_eq!(animator.duration(0), None);
    }

    #[test]
    fn test_restart_and_stop() {
        let mut animator = Animator::<u8, 2>::new();
        animator.start(0, Duration::from_millis(100), 7).unwrap();
        animator.start(1, Duration::from_millis(100), 9).unwrap();
        step(&mut animator, 0, Continuation::Restart);
        step(&mut animator, 40, Continuation::Restart);

        animator.restart(0);
        assert_eq!(animator.progress(0), Some(0.0));
        assert_eq!(animator.progress(1), Some(0.4));

        animator.stop(0);
        assert!(!animator.is_active(0));
        assert_eq!(animator.callback(1), Some(&9));

        animator.stop_all();
        assert!(!animator.is_active(1));
    }

    #[test]
    fn test_callback_payload_is_mutable() {
        let mut animator = Animator::<u32, 2>::new();
        animator.start(0, Duration::from_millis(100), 0).unwrap();
        for now in [0, 10, 20, 30] {
            animator.update(Instant::from_millis(now), |frames, _| {
                *frames += 1;
                Continuation::Restart
            });
        }
        assert_eq!(animator.callback(0), Some(&4));
    }

    #[test]
    fn test_update_across_counter_wraparound() {
        let mut animator = Animator::<u8, 2>::new();
        animator.start(0, Duration::from_millis(100), 0).unwrap();
        let before_wrap = u64::from(u32::MAX) - 19;
        step(&mut animator, before_wrap, Continuation::Restart);

        let param = step(&mut animator, before_wrap + 50, Continuation::Restart).unwrap();
        assert_eq!(param.progress, 0.5);
    }
}
