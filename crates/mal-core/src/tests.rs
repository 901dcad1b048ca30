//! Unit tests for mal-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ActorId, HandlerId};

    #[test]
    fn ordering_follows_allocation() {
        let a = ActorId(0);
        assert!(a < a.next());
        assert_eq!(a.next(), ActorId(1));
    }

    #[test]
    fn display() {
        assert_eq!(ActorId(7).to_string(), "ActorId(7)");
        assert_eq!(HandlerId(2).to_string(), "HandlerId(2)");
    }
}

#[cfg(test)]
mod position {
    use crate::{NEIGHBOUR_OFFSETS, Position};

    #[test]
    fn neighbours_are_adjacent_and_distinct() {
        let p = Position::new(5, 5);
        let ns: Vec<Position> = p.neighbours().collect();
        assert_eq!(ns.len(), 8);
        assert!(ns.iter().all(|n| p.chebyshev(*n) == 1));
        assert!(!ns.contains(&p));
        for (i, a) in ns.iter().enumerate() {
            assert!(!ns[i + 1..].contains(a), "duplicate neighbour {a}");
        }
    }

    #[test]
    fn offsets_exclude_origin() {
        assert!(!NEIGHBOUR_OFFSETS.contains(&(0, 0)));
    }

    #[test]
    fn offset_can_leave_the_plane() {
        assert_eq!(Position::new(0, 0).offset(-1, 0), Position::new(-1, 0));
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn clock_advances_monotonically() {
        let mut clock = SimClock::new();
        assert_eq!(clock.now(), Tick::ZERO);
        assert_eq!(clock.advance(), Tick(1));
        assert_eq!(clock.advance(), Tick(2));
        assert_eq!(clock.now(), Tick(2));
    }

    #[test]
    fn since_saturates() {
        assert_eq!(Tick(10).since(Tick(4)), 6);
        assert_eq!(Tick(4).since(Tick(10)), 0);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        for _ in 0..100 {
            assert_eq!(a.uniform(), b.uniform());
        }
    }

    #[test]
    fn different_seeds_differ() {
        let mut a = SimRng::new(1);
        let mut b = SimRng::new(2);
        assert_ne!(a.uniform(), b.uniform());
    }

    #[test]
    fn chance_consumes_one_draw_at_extremes() {
        // Whatever p is, the stream must advance by exactly one draw.
        let mut a = SimRng::new(5);
        let mut b = SimRng::new(5);
        assert!(!a.chance(0.0));
        assert!(a.chance(1.0));
        b.uniform();
        b.uniform();
        assert_eq!(a.uniform(), b.uniform());
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}

#[cfg(test)]
mod event {
    use crate::{CoreError, Event, HandlerId};

    type Log = Vec<&'static str>;

    #[test]
    fn handlers_run_in_subscription_order() {
        let mut ev: Event<Log, (), String> = Event::new("ordered");
        ev.hook(|log, _| { log.push("a"); Ok(()) });
        ev.hook(|log, _| { log.push("b"); Ok(()) });
        let mut log = Log::new();
        assert!(ev.fire(&mut log, &()).is_empty());
        assert_eq!(log, ["a", "b"]);
    }

    #[test]
    fn failing_handler_does_not_block_others() {
        let mut ev: Event<Log, (), String> = Event::new("isolated");
        ev.hook(|log, _| { log.push("first"); Ok(()) });
        ev.hook(|_, _| Err("boom".into()));
        ev.hook(|log, _| { log.push("third"); Ok(()) });
        let mut log = Log::new();
        let failures = ev.fire(&mut log, &());
        assert_eq!(failures, vec!["boom".to_string()]);
        assert_eq!(log, ["first", "third"]);
    }

    #[test]
    fn unhook_removes_handler() {
        let mut ev: Event<u32, u32, String> = Event::new("sum");
        let id = ev.hook(|acc, n| { *acc += n; Ok(()) });
        ev.hook(|acc, n| { *acc += 10 * n; Ok(()) });
        ev.unhook(id).unwrap();
        let mut acc = 0;
        ev.fire(&mut acc, &1);
        assert_eq!(acc, 10);
        assert_eq!(ev.len(), 1);
    }

    #[test]
    fn unhook_unknown_fails() {
        let mut ev: Event<(), (), String> = Event::new("on_death");
        let err = ev.unhook(HandlerId(3)).unwrap_err();
        assert!(matches!(err, CoreError::UnknownHandler { event: "on_death", .. }));
    }
}

#[cfg(test)]
mod config {
    use crate::SimConfig;

    #[test]
    fn default_is_valid() {
        SimConfig::default().validate().unwrap();
    }

    #[test]
    fn density_sizing() {
        let cfg = SimConfig::default();
        // 0.15 * 60 * 60 = 540
        assert_eq!(cfg.initial_humans(), 540);
    }

    #[test]
    fn absolute_sizing() {
        let mut cfg = SimConfig::default();
        cfg.human.populate_absolute = true;
        cfg.human.count = 12;
        assert_eq!(cfg.initial_humans(), 12);
    }

    #[test]
    fn rejects_probability_out_of_range() {
        let mut cfg = SimConfig::default();
        cfg.mosquito.bite_chance = 1.5;
        let msg = cfg.validate().unwrap_err().to_string();
        assert!(msg.contains("mosquito.bite_chance"), "{msg}");
    }

    #[test]
    fn rejects_empty_grid() {
        let mut cfg = SimConfig::default();
        cfg.grid.width = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_non_negative_fed_hunger() {
        let mut cfg = SimConfig::default();
        cfg.mosquito.fed_hunger = 0.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_overfull_grid() {
        let mut cfg = SimConfig::default();
        cfg.grid.width = 3;
        cfg.grid.height = 3;
        cfg.human.populate_absolute = true;
        cfg.human.count = 10;
        assert!(cfg.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: SimConfig =
            serde_json::from_str(r#"{ "grid": { "width": 10 }, "mosquito": { "count": 3 } }"#)
                .unwrap();
        assert_eq!(cfg.grid.width, 10);
        assert_eq!(cfg.grid.height, 60);
        assert_eq!(cfg.mosquito.count, 3);
        assert_eq!(cfg.human, crate::HumanParams::default());
    }
}
