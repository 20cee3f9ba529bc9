mod common;

mod tests {
    use std::cell::Cell;
    use std::cell::OnceCell;

    use myrtio_buttons::{
        ButtonConfig, ButtonEvent, ButtonRegistry, ButtonState, EdgeDetector, EventContext,
        EventSelector, Level,
    };

    use super::common::{
        Recorder, SimBoard, SimInput, SimLevels, SimRegistry, leak, sim_registry,
    };

    #[test]
    fn test_poll_empty_registry() {
        let registry: ButtonRegistry<'_, SimInput<'_>, EdgeDetector, 6> = ButtonRegistry::new();
        registry.poll();
        registry.poll();
        assert!(registry.is_empty());
        assert_eq!(registry.get_event("key1"), ButtonEvent::NoTrigger);
    }

    #[test]
    fn test_poll_caches_state_and_event() {
        let levels = SimLevels::new();
        let registry = sim_registry(&levels);

        registry.poll();
        assert_eq!(registry.get_state("key1"), ButtonState::NoTrigger);
        assert_eq!(registry.get_event("key1"), ButtonEvent::NoTrigger);

        levels.press(0);
        registry.poll();
        assert_eq!(registry.get_state("key1"), ButtonState::Pressed);
        assert_eq!(registry.get_event("key1"), ButtonEvent::Press);

        // no transition: the last event stays visible
        registry.poll();
        assert_eq!(registry.get_event("key1"), ButtonEvent::Press);

        levels.release(0);
        registry.poll();
        assert_eq!(registry.get_state("key1"), ButtonState::NoTrigger);
        assert_eq!(registry.get_event("key1"), ButtonEvent::Release);

        assert_eq!(registry.get_state("key2"), ButtonState::NoTrigger);
    }

    #[test]
    fn test_active_high_trigger_level() {
        let levels = SimLevels::new();
        let mut board = SimBoard::new(&levels);
        let layout = [ButtonConfig::new("wake", 0, Level::High)];
        let registry: ButtonRegistry<'_, _, EdgeDetector, 1> =
            ButtonRegistry::initialize(&mut board, &layout).unwrap();

        // the pin idles high, so an active-high button starts out pressed
        registry.poll();
        assert_eq!(registry.get_event("wake"), ButtonEvent::Press);

        levels.set(0, Level::Low);
        registry.poll();
        assert_eq!(registry.get_event("wake"), ButtonEvent::Release);
    }

    #[test]
    fn test_dispatch_follows_registry_order() {
        let recorder = Recorder::default();
        let levels = SimLevels::new();
        let registry = sim_registry(&levels);
        for name in ["key1", "key3", "key6"] {
            registry.attach(name, EventSelector::All, Some(&recorder)).unwrap();
        }

        levels.press(5);
        levels.press(2);
        levels.press(0);
        registry.poll();

        assert_eq!(recorder.names(), vec!["key1", "key3", "key6"]);
    }

    #[test]
    fn test_handler_context_carries_state() {
        let recorder = Recorder::default();
        let levels = SimLevels::new();
        let registry = sim_registry(&levels);
        registry.attach("key2", EventSelector::All, Some(&recorder)).unwrap();

        levels.press(1);
        registry.poll();
        levels.release(1);
        registry.poll();

        let seen = recorder.seen.borrow();
        assert_eq!(
            *seen,
            vec![
                EventContext {
                    name: "key2",
                    event: ButtonEvent::Press,
                    state: ButtonState::Pressed,
                },
                EventContext {
                    name: "key2",
                    event: ButtonEvent::Release,
                    state: ButtonState::NoTrigger,
                },
            ]
        );
    }

    #[test]
    fn test_nested_poll_is_ignored() {
        let levels = leak(SimLevels::new());
        let calls = leak(Cell::new(0));
        let registry_slot: &OnceCell<&SimRegistry<'static>> = leak(OnceCell::new());
        let reentrant = leak(move |_: &EventContext| {
            calls.set(calls.get() + 1);
            if let Some(registry) = registry_slot.get() {
                registry.poll();
            }
        });
        let registry: &SimRegistry<'static> = leak(sim_registry(levels));
        let _ = registry_slot.set(registry);
        registry.attach("key1", EventSelector::All, Some(reentrant)).unwrap();

        levels.press(0);
        registry.poll();
        assert_eq!(calls.get(), 1);

        levels.release(0);
        registry.poll();
        assert_eq!(calls.get(), 2);
    }
}
