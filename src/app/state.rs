use crate::config::AppConfig;
use crate::form::{
    CycleForm, FormField, MessageClass, MessageDisplay, Submission, SubmitEvent, SubmitHandler,
    FORM_ID,
};
use crate::insights::{self, CycleInsights};
use tracing::{debug, info};

/// A single-line text input with a byte-offset cursor.
#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing separators, then the word itself
        while pos > 0 && is_word_break(self.text.as_bytes()[pos - 1]) {
            pos -= 1;
        }
        while pos > 0 && !is_word_break(self.text.as_bytes()[pos - 1]) {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }
}

fn is_word_break(b: u8) -> bool {
    b == b' ' || b == b','
}

/// The three cycle form inputs and which one has focus.
#[derive(Debug)]
pub struct FormState {
    pub start_date: InputState,
    pub end_date: InputState,
    pub symptoms: InputState,
    pub focus: FormField,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            start_date: InputState::new(),
            end_date: InputState::new(),
            symptoms: InputState::new(),
            focus: FormField::StartDate,
        }
    }

    pub fn input(&self, field: FormField) -> &InputState {
        match field {
            FormField::StartDate => &self.start_date,
            FormField::EndDate => &self.end_date,
            FormField::Symptoms => &self.symptoms,
        }
    }

    pub fn input_mut(&mut self, field: FormField) -> &mut InputState {
        match field {
            FormField::StartDate => &mut self.start_date,
            FormField::EndDate => &mut self.end_date,
            FormField::Symptoms => &mut self.symptoms,
        }
    }

    pub fn focused_mut(&mut self) -> &mut InputState {
        self.input_mut(self.focus)
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleForm for FormState {
    fn value(&self, field: FormField) -> &str {
        &self.input(field).text
    }

    fn reset(&mut self) {
        for field in FormField::ALL {
            self.input_mut(field).clear();
        }
        self.focus = FormField::StartDate;
    }
}

/// Contents of the message panel. Overwritten on every submission.
#[derive(Debug, Default)]
pub struct MessageState {
    pub text: String,
    pub class: Option<MessageClass>,
}

impl MessageDisplay for MessageState {
    fn show(&mut self, text: &str, class: MessageClass) {
        self.text = text.to_string();
        self.class = Some(class);
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub form: FormState,
    pub message: MessageState,
    pub insights: Option<CycleInsights>,
    listener: Option<SubmitHandler>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            form: FormState::new(),
            message: MessageState::default(),
            insights: None,
            listener: None,
            should_quit: false,
            dirty: true,
        }
    }

    /// Register the submit handler. Only the first call has any effect.
    pub fn mount(&mut self) {
        if self.listener.is_some() {
            debug!(form = FORM_ID, "submit handler already registered");
            return;
        }
        self.listener = Some(SubmitHandler::new());
        info!(form = FORM_ID, "submit handler registered");
    }

    /// Dispatch a submit event to the registered handler, if any, and return
    /// the event so the caller can decide whether the default action runs.
    pub fn dispatch_submit(&mut self) -> (SubmitEvent, Option<Submission>) {
        let mut event = SubmitEvent::new();
        let submission = self
            .listener
            .as_ref()
            .map(|handler| handler.handle(&mut event, &mut self.form, &mut self.message));

        match &submission {
            Some(Submission::Accepted(entry)) if self.config.tracker.show_insights => {
                self.insights = Some(insights::analyze(entry, &self.config.tracker));
            }
            Some(_) => self.insights = None,
            None => {}
        }

        self.dirty = true;
        (event, submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(state: &mut AppState, field: FormField, text: &str) {
        state.form.focus = field;
        for c in text.chars() {
            state.form.focused_mut().insert_char(c);
        }
    }

    #[test]
    fn test_input_editing_handles_multibyte() {
        let mut input = InputState::new();
        for c in "añb".chars() {
            input.insert_char(c);
        }
        input.move_left();
        input.delete_back();
        assert_eq!(input.text, "ab");
        assert_eq!(input.cursor, 1);
        input.move_home();
        input.delete_forward();
        assert_eq!(input.text, "b");
        input.move_end();
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn test_delete_word_back_stops_at_comma() {
        let mut input = InputState::new();
        for c in "cramps, head".chars() {
            input.insert_char(c);
        }
        input.delete_word_back();
        assert_eq!(input.text, "cramps, ");
        input.delete_word_back();
        assert_eq!(input.text, "");
    }

    #[test]
    fn test_reset_clears_all_fields() {
        let mut form = FormState::new();
        form.start_date.text = "2024-01-01".into();
        form.symptoms.text = "cramps".into();
        form.symptoms.cursor = 6;
        form.focus = FormField::Symptoms;

        form.reset();

        for field in FormField::ALL {
            assert_eq!(form.value(field), "");
            assert_eq!(form.input(field).cursor, 0);
        }
        assert_eq!(form.focus, FormField::StartDate);
    }

    #[test]
    fn test_submit_before_mount_does_nothing() {
        let mut state = AppState::new(AppConfig::default());
        type_into(&mut state, FormField::StartDate, "2024-01-01");

        let (event, submission) = state.dispatch_submit();

        assert!(!event.default_prevented());
        assert!(submission.is_none());
        assert!(state.message.text.is_empty());
        assert_eq!(state.form.value(FormField::StartDate), "2024-01-01");
    }

    #[test]
    fn test_mount_twice_keeps_one_listener() {
        let mut state = AppState::new(AppConfig::default());
        state.mount();
        state.mount();
        type_into(&mut state, FormField::StartDate, "2024-01-01");
        type_into(&mut state, FormField::EndDate, "2024-01-02");

        let (event, submission) = state.dispatch_submit();

        assert!(event.default_prevented());
        assert!(matches!(submission, Some(Submission::Accepted(_))));
        assert_eq!(state.form.value(FormField::StartDate), "");
    }

    #[test]
    fn test_accepted_submission_sets_insights() {
        let mut state = AppState::new(AppConfig::default());
        state.mount();
        type_into(&mut state, FormField::StartDate, "2024-01-01");
        type_into(&mut state, FormField::EndDate, "2024-01-10");
        type_into(&mut state, FormField::Symptoms, "cramps, headache");

        let (event, submission) = state.dispatch_submit();

        assert!(event.default_prevented());
        assert!(matches!(submission, Some(Submission::Accepted(_))));
        assert_eq!(
            state.message.text,
            "Cycle added: Start Date: 2024-01-01, End Date: 2024-01-10, Symptoms: cramps, headache"
        );
        assert_eq!(state.message.class, Some(MessageClass::Success));
        assert_eq!(state.insights.as_ref().and_then(|i| i.duration_days), Some(9));
        assert_eq!(state.form.value(FormField::EndDate), "");
    }

    #[test]
    fn test_rejected_submission_clears_previous_insights() {
        let mut state = AppState::new(AppConfig::default());
        state.mount();
        type_into(&mut state, FormField::StartDate, "2024-01-01");
        type_into(&mut state, FormField::EndDate, "2024-01-10");
        state.dispatch_submit();
        assert!(state.insights.is_some());

        type_into(&mut state, FormField::StartDate, "2024-02-01");
        state.dispatch_submit();

        assert_eq!(state.message.text, "Please enter both start and end dates.");
        assert_eq!(state.message.class, Some(MessageClass::Error));
        assert!(state.insights.is_none());
        assert_eq!(state.form.value(FormField::StartDate), "2024-02-01");
    }

    #[test]
    fn test_insights_disabled_by_config() {
        let mut config = AppConfig::default();
        config.tracker.show_insights = false;
        let mut state = AppState::new(config);
        state.mount();
        type_into(&mut state, FormField::StartDate, "2024-01-01");
        type_into(&mut state, FormField::EndDate, "2024-01-10");

        state.dispatch_submit();

        assert!(state.insights.is_none());
        assert_eq!(state.message.class, Some(MessageClass::Success));
    }

    #[test]
    fn test_end_date_at_calendar_limit_is_accepted() {
        let mut state = AppState::new(AppConfig::default());
        state.mount();
        type_into(&mut state, FormField::StartDate, "+262142-12-01");
        type_into(&mut state, FormField::EndDate, "+262142-12-31");

        let (_, submission) = state.dispatch_submit();

        assert!(matches!(submission, Some(Submission::Accepted(_))));
        assert_eq!(state.message.class, Some(MessageClass::Success));
        let insights = state.insights.as_ref().unwrap();
        assert_eq!(insights.duration_days, Some(30));
        assert!(insights.predictions.is_empty());
    }

    #[test]
    fn test_huge_cycle_length_is_accepted_without_predictions() {
        let mut config = AppConfig::default();
        config.tracker.cycle_length_days = u32::MAX;
        let mut state = AppState::new(config);
        state.mount();
        type_into(&mut state, FormField::StartDate, "2024-01-01");
        type_into(&mut state, FormField::EndDate, "2024-01-10");

        let (_, submission) = state.dispatch_submit();

        assert!(matches!(submission, Some(Submission::Accepted(_))));
        let insights = state.insights.as_ref().unwrap();
        assert!(insights.predictions.is_empty());
        assert_eq!(insights.duration_days, Some(9));
    }
}
