use std::marker::PhantomData;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

/// Single-queue event loop. Transitions and renders happen one event at a
/// time on the thread that calls `run`; effects run on their own threads and
/// report back through the queue.
pub struct StateMachine<TState, TEvent, TEffect, T, R, E, D>
where
    T: Fn(TState, TEvent) -> (TState, Vec<TEffect>) + Send + Sync,
    R: Fn(&TState) + Send + Sync,
    E: Fn(TEffect, Sender<TEvent>) + Send + Sync,
    D: Fn(&TState) -> bool + Send + Sync,
{
    pub init: (TState, Vec<TEffect>),
    pub transition_fn: Arc<T>,
    pub render_fn: Arc<R>,
    pub run_effect_fn: Arc<E>,
    pub is_done_fn: Arc<D>,
    event_sender: Sender<TEvent>,
    event_receiver: Receiver<TEvent>,
    _effect: PhantomData<TEffect>,
}

impl<TState, TEvent, TEffect, T, R, E, D> StateMachine<TState, TEvent, TEffect, T, R, E, D>
where
    TState: Send + 'static,
    TEvent: Send + 'static,
    TEffect: Send + 'static,
    T: Fn(TState, TEvent) -> (TState, Vec<TEffect>) + Send + Sync + 'static,
    R: Fn(&TState) + Send + Sync + 'static,
    E: Fn(TEffect, Sender<TEvent>) + Send + Sync + 'static,
    D: Fn(&TState) -> bool + Send + Sync + 'static,
{
    pub fn new(
        init: (TState, Vec<TEffect>),
        transition_fn: T,
        render_fn: R,
        run_effect_fn: E,
        is_done_fn: D,
    ) -> Self {
        let (event_sender, event_receiver) = channel();
        Self {
            init,
            transition_fn: Arc::new(transition_fn),
            render_fn: Arc::new(render_fn),
            run_effect_fn: Arc::new(run_effect_fn),
            is_done_fn: Arc::new(is_done_fn),
            event_sender,
            event_receiver,
            _effect: PhantomData,
        }
    }

    /// Handle for input sources living outside the loop (the window, tests).
    pub fn sender(&self) -> Sender<TEvent> {
        self.event_sender.clone()
    }

    /// Blocks until the state reports done. Returns the final state.
    pub fn run(self) -> Result<TState, Box<dyn std::error::Error + Send + Sync>> {
        let Self {
            init: (mut state, effects),
            transition_fn,
            render_fn,
            run_effect_fn,
            is_done_fn,
            event_sender,
            event_receiver,
            ..
        } = self;

        render_fn(&state);
        spawn_effects(&run_effect_fn, &event_sender, effects);

        while !is_done_fn(&state) {
            let event = event_receiver.recv()?;
            let (new_state, new_effects) = transition_fn(state, event);
            state = new_state;
            render_fn(&state);
            spawn_effects(&run_effect_fn, &event_sender, new_effects);
        }

        Ok(state)
    }
}

fn spawn_effects<TEvent, TEffect, E>(
    run_effect_fn: &Arc<E>,
    event_sender: &Sender<TEvent>,
    effects: Vec<TEffect>,
) where
    TEvent: Send + 'static,
    TEffect: Send + 'static,
    E: Fn(TEffect, Sender<TEvent>) + Send + Sync + 'static,
{
    for effect in effects {
        let effect_sender = event_sender.clone();
        let run_effect_fn = Arc::clone(run_effect_fn);
        std::thread::spawn(move || {
            run_effect_fn(effect, effect_sender);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::StateMachine;
    use std::sync::{Arc, Mutex};

    #[derive(Debug)]
    enum Event {
        Incremented,
        Stop,
    }

    #[derive(Debug)]
    enum Effect {
        Increment,
    }

    #[test]
    fn test_effects_feed_back_until_done() {
        let renders = Arc::new(Mutex::new(Vec::new()));
        let renders_clone = renders.clone();

        let machine = StateMachine::new(
            (0u32, vec![Effect::Increment]),
            |count: u32, event: Event| match event {
                Event::Incremented if count < 2 => (count + 1, vec![Effect::Increment]),
                Event::Incremented => (count + 1, vec![]),
                Event::Stop => (count, vec![]),
            },
            move |count: &u32| renders_clone.lock().unwrap().push(*count),
            |effect: Effect, sender| match effect {
                Effect::Increment => {
                    let _ = sender.send(Event::Incremented);
                }
            },
            |count: &u32| *count >= 3,
        );

        let final_state = machine.run().unwrap();

        assert_eq!(final_state, 3);
        assert_eq!(*renders.lock().unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_external_sender_drives_loop() {
        let machine = StateMachine::new(
            (false, vec![]),
            |_: bool, event: Event| match event {
                Event::Stop => (true, Vec::<Effect>::new()),
                Event::Incremented => (false, vec![]),
            },
            |_: &bool| {},
            |_: Effect, _| {},
            |stopped: &bool| *stopped,
        );

        let sender = machine.sender();
        let handle = std::thread::spawn(move || machine.run());
        sender.send(Event::Incremented).unwrap();
        sender.send(Event::Stop).unwrap();

        assert!(handle.join().unwrap().unwrap());
    }
}
