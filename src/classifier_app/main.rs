use crate::classification_client::interface::ClassificationClient;
use crate::classifier_app::core::{init, transition, Effect, Event, Model};
use crate::classifier_app::render::Render;
use crate::classifier_app::run_effect::RunEffect;
use crate::config::Config;
use crate::file_intake::interface::FileReader;
use crate::label_registry::interface::LabelRegistry;
use crate::library::logger::interface::Logger;
use crate::library::state_machine::StateMachine;
use crate::view::interface::View;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

type TransitionFn = Box<dyn Fn(Model, Event) -> (Model, Vec<Effect>) + Send + Sync>;
type RenderFn = Box<dyn Fn(&Model) + Send + Sync>;
type RunEffectFn = Box<dyn Fn(Effect, Sender<Event>) + Send + Sync>;
type IsDoneFn = Box<dyn Fn(&Model) -> bool + Send + Sync>;

pub struct ClassifierApp {
    machine: StateMachine<Model, Event, Effect, TransitionFn, RenderFn, RunEffectFn, IsDoneFn>,
}

impl ClassifierApp {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        label_registry: Arc<dyn LabelRegistry + Send + Sync>,
        file_reader: Arc<dyn FileReader + Send + Sync>,
        classification_client: Arc<dyn ClassificationClient + Send + Sync>,
        view: Arc<Mutex<dyn View + Send + Sync>>,
    ) -> Self {
        let logger = logger.with_namespace("classifier");
        let render = Render::new(view, logger.clone());
        let run_effect = RunEffect::new(
            logger.clone(),
            label_registry,
            file_reader,
            classification_client,
        );

        let transition_config = config.clone();
        let transition_logger = logger.clone();
        let transition_fn: TransitionFn = Box::new(move |model: Model, event: Event| {
            let _ = transition_logger.info(&format!("event: {}", event.to_display_string()));
            let (new_model, effects) = transition(&transition_config, model, event);
            if !effects.is_empty() {
                let effects: Vec<String> = effects.iter().map(Effect::to_display_string).collect();
                let _ = transition_logger.info(&format!("effects: {:?}", effects));
            }
            (new_model, effects)
        });

        let render_logger = logger.clone();
        let render_fn: RenderFn = Box::new(move |model: &Model| {
            if let Err(e) = render.render(model) {
                let _ = render_logger.error(&format!("render failed: {}", e));
            }
        });

        let run_effect_fn: RunEffectFn =
            Box::new(move |effect: Effect, sender: Sender<Event>| run_effect.run_effect(effect, sender));

        let is_done_fn: IsDoneFn = Box::new(|model: &Model| model.closed);

        Self {
            machine: StateMachine::new(
                init(&config),
                transition_fn,
                render_fn,
                run_effect_fn,
                is_done_fn,
            ),
        }
    }

    pub fn sender(&self) -> Sender<Event> {
        self.machine.sender()
    }

    /// Runs until `Event::WindowClosed`.
    pub fn run(self) -> Result<Model, Box<dyn std::error::Error + Send + Sync>> {
        self.machine.run()
    }
}
