//! Form engine.
//!
//! The FormEngine owns the whole form: the validation schema, the field
//! bindings, the step controller and the submission sink. Front ends send it
//! [`Op`]s and render from its state; each call to [`FormEngine::apply`]
//! returns the [`Event`]s describing what changed, in order.

use crate::record::build_record;
use crate::schema::FormSchema;
use crate::state::{FieldBindings, StepController, SubmissionSink, Transition};
use sf_protocol::ipc::{Event, Op};
use sf_protocol::{Field, FormDraft, GlobalConfig, Step, Submission, ValidationMode};
use tracing::{debug, info};

/// The synchronous form state machine.
pub struct FormEngine {
    schema: FormSchema,
    mode: ValidationMode,
    fields: FieldBindings,
    steps: StepController,
    sink: SubmissionSink,
}

impl Default for FormEngine {
    fn default() -> Self {
        Self::new(FormSchema::standard(), ValidationMode::default())
    }
}

impl FormEngine {
    /// Create an engine on step 1 with an empty draft.
    pub fn new(schema: FormSchema, mode: ValidationMode) -> Self {
        let fields = FieldBindings::new(&schema);
        Self {
            schema,
            mode,
            fields,
            steps: StepController::new(),
            sink: SubmissionSink::new(),
        }
    }

    /// Create an engine using the standard schema and the configured mode.
    pub fn from_config(config: &GlobalConfig) -> Self {
        Self::new(FormSchema::standard(), config.validation_mode)
    }

    /// Apply a single operation.
    ///
    /// Returns the resulting events; an empty list means nothing changed.
    pub fn apply(&mut self, op: Op) -> Vec<Event> {
        debug!(?op, step = ?self.steps.current(), "applying op");
        match op {
            Op::SetField { field, value } => self.set_field(field, value),
            Op::NextStep => self.next_step(),
            Op::PreviousStep => self.previous_step(),
            Op::Submit => self.submit(),
            Op::Reset => self.reset(),
            Op::Shutdown => vec![Event::ShutdownRequested],
        }
    }

    fn set_field(&mut self, field: Field, value: String) -> Vec<Event> {
        self.fields.set_value(&self.schema, self.mode, field, value);

        let mut events = vec![self.field_changed(field)];
        // A dependent's error can change without its value changing
        for dependent in self.schema.dependents(field) {
            events.push(self.field_changed(dependent));
        }
        events
    }

    fn field_changed(&self, field: Field) -> Event {
        Event::FieldChanged {
            field,
            value: self.fields.value(field).to_string(),
            error: self.fields.visible_error(field).map(str::to_string),
        }
    }

    fn next_step(&mut self) -> Vec<Event> {
        let current = self.steps.current();
        let errors = self.schema.validate_step(current, self.fields.draft());

        match self.steps.next(errors.is_empty()) {
            Transition::Moved(step) => {
                info!(%step, "advanced");
                vec![Event::StepChanged { step }]
            }
            Transition::Blocked => {
                self.fields.touch_step(current);
                info!(step = %current, invalid = errors.len(), "advance blocked");
                vec![Event::StepBlocked {
                    step: current,
                    errors,
                }]
            }
            Transition::Stayed => Vec::new(),
        }
    }

    fn previous_step(&mut self) -> Vec<Event> {
        match self.steps.previous() {
            Transition::Moved(step) => {
                info!(%step, "went back");
                vec![Event::StepChanged { step }]
            }
            Transition::Blocked | Transition::Stayed => Vec::new(),
        }
    }

    fn submit(&mut self) -> Vec<Event> {
        let current = self.steps.current();
        if current != Step::Address {
            debug!(step = %current, "submit ignored");
            return vec![Event::SubmitIgnored { step: current }];
        }

        match build_record(&self.schema, self.fields.draft()) {
            Ok(record) => {
                let submission = self.sink.append(record).clone();
                info!(
                    id = %submission.id,
                    total = self.sink.len(),
                    "record submitted"
                );
                let mut events = vec![Event::RecordSubmitted { submission }];
                events.extend(self.reset());
                events
            }
            Err(err) => {
                self.fields.touch_all();
                info!(%err, "submit rejected");
                vec![Event::SubmitRejected {
                    errors: err.field_errors().to_vec(),
                }]
            }
        }
    }

    fn reset(&mut self) -> Vec<Event> {
        self.fields.reset(&self.schema);
        let mut events = vec![Event::FormReset];
        if let Transition::Moved(step) = self.steps.restart() {
            events.push(Event::StepChanged { step });
        }
        events
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn step(&self) -> Step {
        self.steps.current()
    }

    pub fn draft(&self) -> &FormDraft {
        self.fields.draft()
    }

    pub fn value(&self, field: Field) -> &str {
        self.fields.value(field)
    }

    /// The error to render under `field`, if any.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        self.fields.visible_error(field)
    }

    /// Whether "Next" is enabled.
    pub fn can_advance(&self) -> bool {
        self.steps.current() == Step::Personal
            && self.schema.is_step_valid(Step::Personal, self.fields.draft())
    }

    /// Whether "Submit" is enabled.
    pub fn can_submit(&self) -> bool {
        self.steps.current() == Step::Address && self.schema.is_valid(self.fields.draft())
    }

    /// Submitted records, oldest first.
    pub fn submissions(&self) -> &[Submission] {
        self.sink.submissions()
    }
}
