use crate::classification_client::interface::PredictionItem;
use crate::config::Config;
use crate::error::AppError;
use crate::file_intake::interface::{ImageSubmission, SelectedFile};
use crate::label_registry::label_set::LabelSet;
use crate::render_projector::{project, RenderModel};
use crate::result_normalizer::normalize;
use crate::view::interface::Severity;
use std::sync::Arc;

pub const LABELS_UNAVAILABLE: &str = "Could not load class labels.";
pub const READY: &str = "Drop an image or click 'Select Image' to begin.";
pub const IMAGE_LOADED: &str = "Image loaded. Click 'Classify Image' to analyze.";
pub const CLASSIFYING: &str = "Classifying image...";
pub const DONE: &str = "Done";

#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    pub text: String,
    pub severity: Severity,
}

impl Status {
    pub fn neutral(text: &str) -> Self {
        Self {
            text: text.to_string(),
            severity: Severity::Neutral,
        }
    }

    pub fn ok(text: &str) -> Self {
        Self {
            text: text.to_string(),
            severity: Severity::Ok,
        }
    }

    pub fn error(text: &str) -> Self {
        Self {
            text: text.to_string(),
            severity: Severity::Error,
        }
    }
}

/// Lifecycle of the single image held for classification.
#[derive(Debug, Clone, PartialEq)]
pub enum Intake {
    Idle,
    Reading {
        ticket: u64,
    },
    Loaded {
        submission: Arc<ImageSubmission>,
    },
    Classifying {
        ticket: u64,
        submission: Arc<ImageSubmission>,
    },
    Done {
        submission: Arc<ImageSubmission>,
    },
    Failed {
        submission: Arc<ImageSubmission>,
    },
}

impl Intake {
    pub fn submission(&self) -> Option<&Arc<ImageSubmission>> {
        match self {
            Intake::Idle | Intake::Reading { .. } => None,
            Intake::Loaded { submission }
            | Intake::Classifying { submission, .. }
            | Intake::Done { submission }
            | Intake::Failed { submission } => Some(submission),
        }
    }

    /// A submission is held and no request is outstanding.
    pub fn can_classify(&self) -> bool {
        matches!(
            self,
            Intake::Loaded { .. } | Intake::Done { .. } | Intake::Failed { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub labels: LabelSet,
    pub intake: Intake,
    pub status: Status,
    pub results: Option<RenderModel>,
    pub next_ticket: u64,
    pub closed: bool,
}

#[derive(Debug)]
pub enum Event {
    LabelsFetchDone(Result<Vec<String>, AppError>),
    FileDropped(SelectedFile),
    FilePicked(SelectedFile),
    FileReadDone {
        ticket: u64,
        result: Result<ImageSubmission, AppError>,
    },
    ClassifyClicked,
    ClassifyDone {
        ticket: u64,
        result: Result<Vec<PredictionItem>, AppError>,
    },
    WindowClosed,
}

impl Event {
    pub fn to_display_string(&self) -> String {
        match self {
            Event::FileDropped(file) | Event::FilePicked(file) => {
                let source = if matches!(self, Event::FileDropped(_)) {
                    "FileDropped"
                } else {
                    "FilePicked"
                };
                format!("{}({:?}, {:?})", source, file.name, file.media_type)
            }
            Event::FileReadDone {
                ticket,
                result: Ok(submission),
            } => format!(
                "FileReadDone {{ ticket: {}, result: Ok({:?}, {} bytes) }}",
                ticket,
                submission.file_name,
                submission.bytes.len()
            ),
            event => format!("{:?}", event),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchLabels,
    ReadFile { ticket: u64, file: SelectedFile },
    Classify { ticket: u64, encoded_image: String },
}

impl Effect {
    pub fn to_display_string(&self) -> String {
        match self {
            Effect::ReadFile { ticket, file } => {
                format!("ReadFile {{ ticket: {}, file: {:?} }}", ticket, file.name)
            }
            Effect::Classify {
                ticket,
                encoded_image,
            } => format!(
                "Classify {{ ticket: {}, encoded_image: {} bytes }}",
                ticket,
                encoded_image.len()
            ),
            effect => format!("{:?}", effect),
        }
    }
}

/// Placeholder roster straight away, label fetch in the background.
pub fn init(config: &Config) -> (Model, Vec<Effect>) {
    (
        Model {
            labels: LabelSet::placeholder(&config.default_labels),
            intake: Intake::Idle,
            status: Status::neutral(READY),
            results: None,
            next_ticket: 0,
            closed: false,
        },
        vec![Effect::FetchLabels],
    )
}

pub fn transition(config: &Config, model: Model, event: Event) -> (Model, Vec<Effect>) {
    match event {
        Event::LabelsFetchDone(result) => labels_fetched(config, model, result),
        Event::FileDropped(file) | Event::FilePicked(file) => handle_file(model, file),
        Event::FileReadDone { ticket, result } => file_read(model, ticket, result),
        Event::ClassifyClicked => classify(model),
        Event::ClassifyDone { ticket, result } => classified(model, ticket, result),
        Event::WindowClosed => (
            Model {
                closed: true,
                ..model
            },
            vec![],
        ),
    }
}

fn labels_fetched(
    config: &Config,
    model: Model,
    result: Result<Vec<String>, AppError>,
) -> (Model, Vec<Effect>) {
    if model.labels.is_resolved() {
        return (model, vec![]);
    }

    match result.and_then(LabelSet::from_registry) {
        Ok(labels) => (Model { labels, ..model }, vec![]),
        Err(_) => (
            Model {
                labels: LabelSet::fallback(&config.default_labels),
                status: Status::error(LABELS_UNAVAILABLE),
                ..model
            },
            vec![],
        ),
    }
}

/// Single entry point for dropped and picked files.
pub fn handle_file(model: Model, file: SelectedFile) -> (Model, Vec<Effect>) {
    if let Err(error) = file.validate() {
        return (
            Model {
                status: Status::error(&error.to_string()),
                ..model
            },
            vec![],
        );
    }

    let ticket = model.next_ticket;
    let status = Status::neutral(&format!("Reading {}...", file.name));
    (
        Model {
            intake: Intake::Reading { ticket },
            status,
            results: None,
            next_ticket: ticket + 1,
            ..model
        },
        vec![Effect::ReadFile { ticket, file }],
    )
}

fn file_read(
    model: Model,
    ticket: u64,
    result: Result<ImageSubmission, AppError>,
) -> (Model, Vec<Effect>) {
    if !matches!(model.intake, Intake::Reading { ticket: current } if current == ticket) {
        return (model, vec![]);
    }

    match result {
        Ok(submission) => (
            Model {
                intake: Intake::Loaded {
                    submission: Arc::new(submission),
                },
                status: Status::ok(IMAGE_LOADED),
                results: None,
                ..model
            },
            vec![],
        ),
        Err(error) => (
            Model {
                intake: Intake::Idle,
                status: Status::error(&error.to_string()),
                ..model
            },
            vec![],
        ),
    }
}

fn classify(model: Model) -> (Model, Vec<Effect>) {
    let held = if model.intake.can_classify() {
        model.intake.submission().cloned()
    } else {
        None
    };
    let Some(submission) = held else {
        return (model, vec![]);
    };

    let ticket = model.next_ticket;
    let encoded_image = submission.encoded.clone();
    (
        Model {
            intake: Intake::Classifying { ticket, submission },
            status: Status::neutral(CLASSIFYING),
            results: None,
            next_ticket: ticket + 1,
            ..model
        },
        vec![Effect::Classify {
            ticket,
            encoded_image,
        }],
    )
}

fn classified(
    model: Model,
    ticket: u64,
    result: Result<Vec<PredictionItem>, AppError>,
) -> (Model, Vec<Effect>) {
    let pending = match &model.intake {
        Intake::Classifying {
            ticket: current,
            submission,
        } if *current == ticket => Some(submission.clone()),
        _ => None,
    };
    let Some(submission) = pending else {
        return (model, vec![]);
    };

    let result = result.and_then(|items| {
        if items.is_empty() {
            Err(AppError::Payload("empty prediction list".to_string()))
        } else {
            Ok(items)
        }
    });

    match result {
        Ok(items) => {
            let results = project(&normalize(&items, &model.labels));
            (
                Model {
                    intake: Intake::Done { submission },
                    status: Status::ok(DONE),
                    results: Some(results),
                    ..model
                },
                vec![],
            )
        }
        Err(error) => (
            Model {
                status: Status::error(&error.to_string()),
                intake: Intake::Failed { submission },
                results: None,
                ..model
            },
            vec![],
        ),
    }
}
