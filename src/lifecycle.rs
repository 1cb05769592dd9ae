use tauri::RunEvent;

type Reaction = Box<dyn FnOnce()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LifecycleEvent {
    Ready,
    Exit,
}

impl LifecycleEvent {
    pub(crate) fn from_run_event(event: &RunEvent) -> Option<Self> {
        match event {
            RunEvent::Ready => Some(Self::Ready),
            RunEvent::Exit => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Subscriptions to the host runtime's lifecycle signals.
///
/// Reactions run synchronously on the dispatching thread and are drained when
/// they run, so a signal delivered twice never re-runs a reaction.
#[derive(Default)]
pub(crate) struct LifecycleEvents {
    ready: Vec<Reaction>,
    exit: Vec<Reaction>,
    ready_fired: bool,
    exit_fired: bool,
}

impl LifecycleEvents {
    pub(crate) fn on_ready<F>(&mut self, reaction: F)
    where
        F: FnOnce() + 'static,
    {
        self.ready.push(Box::new(reaction));
    }

    pub(crate) fn on_exit<F>(&mut self, reaction: F)
    where
        F: FnOnce() + 'static,
    {
        self.exit.push(Box::new(reaction));
    }

    pub(crate) fn has_fired(&self, event: LifecycleEvent) -> bool {
        match event {
            LifecycleEvent::Ready => self.ready_fired,
            LifecycleEvent::Exit => self.exit_fired,
        }
    }

    pub(crate) fn dispatch(&mut self, event: LifecycleEvent) -> usize {
        let reactions = match event {
            LifecycleEvent::Ready => {
                self.ready_fired = true;
                std::mem::take(&mut self.ready)
            }
            LifecycleEvent::Exit => {
                self.exit_fired = true;
                std::mem::take(&mut self.exit)
            }
        };

        let count = reactions.len();
        for reaction in reactions {
            reaction();
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    #[test]
    fn from_run_event_maps_ready_and_exit() {
        assert_eq!(
            LifecycleEvent::from_run_event(&RunEvent::Ready),
            Some(LifecycleEvent::Ready)
        );
        assert_eq!(
            LifecycleEvent::from_run_event(&RunEvent::Exit),
            Some(LifecycleEvent::Exit)
        );
        assert_eq!(
            LifecycleEvent::from_run_event(&RunEvent::MainEventsCleared),
            None
        );
    }

    #[test]
    fn ready_reactions_run_once_even_if_ready_repeats() {
        let calls = Rc::new(Cell::new(0));
        let mut events = LifecycleEvents::default();
        let counter = Rc::clone(&calls);
        events.on_ready(move || counter.set(counter.get() + 1));

        assert!(!events.has_fired(LifecycleEvent::Ready));
        assert_eq!(events.dispatch(LifecycleEvent::Ready), 1);
        assert_eq!(events.dispatch(LifecycleEvent::Ready), 0);
        assert_eq!(calls.get(), 1);
        assert!(events.has_fired(LifecycleEvent::Ready));
    }

    #[test]
    fn exit_does_not_trigger_ready_reactions() {
        let calls = Rc::new(Cell::new(0));
        let mut events = LifecycleEvents::default();
        let counter = Rc::clone(&calls);
        events.on_ready(move || counter.set(counter.get() + 1));

        assert_eq!(events.dispatch(LifecycleEvent::Exit), 0);
        assert_eq!(calls.get(), 0);
        assert!(events.has_fired(LifecycleEvent::Exit));
        assert!(!events.has_fired(LifecycleEvent::Ready));
    }
}
