//! Editing session state.
//!
//! A `Session` is the single source of truth the presentation layer reads
//! and writes: filter inputs, the selected animation, its configuration, the
//! active code tab and the preview subject. Every method runs to completion
//! synchronously and the session has exactly one owner, so no locking is
//! involved.

use crate::catalog::{AnimationDefinition, Catalog, Category};
use crate::codegen::CodeFormat;
use crate::configuration::{
    AnimationConfiguration, ConfigField, DELAY_RANGE, DURATION_RANGE, FillMode, clamp_to,
};
use crate::filter::filter;
use crate::preview::{PreviewBinding, PreviewSubject};

#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    category: Category,
    search_text: String,
    selected: &'static AnimationDefinition,
    config: AnimationConfiguration,
    format: CodeFormat,
    subject: PreviewSubject,
    replay_key: u64,
}

impl Session {
    /// Start a session on the first catalog entry.
    pub fn new(catalog: Catalog) -> Self {
        let selected = catalog.first();
        Self {
            catalog,
            category: Category::All,
            search_text: String::new(),
            selected,
            config: AnimationConfiguration::initial(selected),
            format: CodeFormat::default(),
            subject: PreviewSubject::default(),
            replay_key: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // -------------------------- FILTER --------------------------

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Definitions matching the current category and search text.
    pub fn visible(&self) -> Vec<&'static AnimationDefinition> {
        filter(&self.catalog, self.category, &self.search_text)
    }

    // -------------------------- SELECTION --------------------------

    pub fn selected(&self) -> &'static AnimationDefinition {
        self.selected
    }

    /// Select an animation by id. Unknown ids select the first entry.
    ///
    /// Re-selecting the current animation leaves the configuration alone.
    pub fn select(&mut self, id: &str) -> &'static AnimationDefinition {
        let next = self.catalog.find_or_default(id);
        if next.id != self.selected.id {
            tracing::debug!(from = self.selected.id, to = next.id, "selection changed");
            self.selected = next;
            self.config = self.config.on_selection_change(next);
            self.bump_replay();
        }
        next
    }

    // -------------------------- CONFIGURATION --------------------------

    pub fn config(&self) -> &AnimationConfiguration {
        &self.config
    }

    /// Replace one field verbatim.
    pub fn set_field(&mut self, field: ConfigField) {
        let next = self.config.with_field(field);
        self.replace_config(next);
    }

    /// Set the duration, clamped to the slider range.
    pub fn set_duration(&mut self, seconds: f64) {
        self.set_field(ConfigField::Duration(clamp_to(seconds, &DURATION_RANGE)));
    }

    /// Set the delay, clamped to the slider range.
    pub fn set_delay(&mut self, seconds: f64) {
        self.set_field(ConfigField::Delay(clamp_to(seconds, &DELAY_RANGE)));
    }

    pub fn set_timing_function(&mut self, token: impl Into<String>) {
        self.set_field(ConfigField::TimingFunction(token.into()));
    }

    pub fn set_iteration_count(&mut self, token: impl Into<String>) {
        self.set_field(ConfigField::IterationCount(token.into()));
    }

    pub fn set_fill_mode(&mut self, fill_mode: FillMode) {
        self.set_field(ConfigField::FillMode(fill_mode));
    }

    pub fn toggle_infinite(&mut self) {
        let next = self.config.toggle_infinite();
        self.replace_config(next);
    }

    fn replace_config(&mut self, next: AnimationConfiguration) {
        if next != self.config {
            self.config = next;
            self.bump_replay();
        }
    }

    // -------------------------- CODE --------------------------

    pub fn format(&self) -> CodeFormat {
        self.format
    }

    pub fn set_format(&mut self, format: CodeFormat) {
        self.format = format;
    }

    /// Code for the selected animation in the active format.
    pub fn code(&self) -> String {
        self.format.render(self.selected, &self.config)
    }

    /// Export file name for the active format.
    pub fn file_name(&self) -> String {
        self.format.file_name(self.selected)
    }

    // -------------------------- PREVIEW --------------------------

    pub fn subject(&self) -> PreviewSubject {
        self.subject
    }

    pub fn set_subject(&mut self, subject: PreviewSubject) {
        if subject != self.subject {
            self.subject = subject;
            self.bump_replay();
        }
    }

    /// Force the preview to start over.
    pub fn replay(&mut self) {
        self.bump_replay();
    }

    pub fn replay_key(&self) -> u64 {
        self.replay_key
    }

    /// Style binding for the preview stage.
    pub fn preview(&self) -> PreviewBinding {
        PreviewBinding::new(self.selected, &self.config, self.subject, self.replay_key)
    }

    fn bump_replay(&mut self) {
        self.replay_key = self.replay_key.wrapping_add(1);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_on_first_entry() {
        let session = Session::default();
        assert_eq!(session.selected().id, "fade-in-up");
        assert_eq!(session.config(), &AnimationConfiguration::initial(session.selected()));
        assert_eq!(session.format(), CodeFormat::Utility);
        assert_eq!(session.category(), Category::All);
        assert_eq!(session.visible().len(), session.catalog().len());
    }

    #[test]
    fn test_select_resets_timing_and_keeps_prefs() {
        let mut session = Session::default();
        session.set_delay(0.8);
        session.set_fill_mode(FillMode::Forwards);
        session.toggle_infinite();

        session.select("ken-burns");
        let config = session.config();
        assert_eq!(config.duration, 10.0);
        assert_eq!(config.delay, 0.0);
        assert_eq!(config.timing_function, "ease-out infinite alternate");
        assert_eq!(config.iteration_count, "infinite");
        assert_eq!(config.fill_mode, FillMode::Forwards);
    }

    #[test]
    fn test_reselecting_same_animation_keeps_config() {
        let mut session = Session::default();
        session.set_delay(0.5);
        let key = session.replay_key();
        session.select("fade-in-up");
        assert_eq!(session.config().delay, 0.5);
        assert_eq!(session.replay_key(), key);
    }

    #[test]
    fn test_unknown_id_falls_back_to_first() {
        let mut session = Session::default();
        session.select("jello");
        let selected = session.select("does-not-exist");
        assert_eq!(selected.id, "fade-in-up");
        assert_eq!(session.selected().id, "fade-in-up");
        assert_eq!(session.config().duration, 0.6);
    }

    #[test]
    fn test_setters_clamp_to_slider_ranges() {
        let mut session = Session::default();
        session.set_duration(12.0);
        session.set_delay(-1.0);
        assert_eq!(session.config().duration, 5.0);
        assert_eq!(session.config().delay, 0.0);

        session.set_field(ConfigField::Duration(12.0));
        assert_eq!(session.config().duration, 12.0);
    }

    #[test]
    fn test_changes_bump_replay_key() {
        let mut session = Session::default();
        let start = session.replay_key();

        session.set_timing_function("linear");
        assert_eq!(session.replay_key(), start + 1);

        // Same value again is not a change.
        session.set_timing_function("linear");
        assert_eq!(session.replay_key(), start + 1);

        session.select("bounce");
        assert_eq!(session.replay_key(), start + 2);

        session.replay();
        assert_eq!(session.preview().replay_key, start + 3);

        session.set_subject(PreviewSubject::Text);
        assert_eq!(session.replay_key(), start + 4);
    }

    #[test]
    fn test_unchanged_slider_value_does_not_replay() {
        // A slider emits its current value on release. The web playground
        // remounted on every update because each update built a new object;
        // here only real changes restart playback.
        let mut session = Session::default();
        session.set_duration(2.0);
        let key = session.replay_key();

        session.set_duration(2.0);
        session.set_duration(7.0);
        session.set_duration(5.0);
        assert_eq!(session.replay_key(), key + 1);

        session.set_delay(0.0);
        session.set_fill_mode(FillMode::Both);
        assert_eq!(session.replay_key(), key + 1);
    }

    #[test]
    fn test_filter_changes_do_not_replay() {
        let mut session = Session::default();
        let key = session.replay_key();
        session.set_category(Category::Exit);
        session.set_search_text("blur");
        assert_eq!(session.replay_key(), key);
        let visible: Vec<_> = session.visible().iter().map(|a| a.id).collect();
        assert_eq!(visible, ["blur-out"]);
    }

    #[test]
    fn test_code_follows_format() {
        let mut session = Session::default();
        assert!(session.code().starts_with("// tailwind.config.js"));
        assert_eq!(session.file_name(), "fade-in-up.js");

        session.set_format(CodeFormat::StyleSheet);
        assert!(session.code().starts_with("@keyframes fade-in-up {"));
        assert_eq!(session.file_name(), "fade-in-up.css");
    }

    #[test]
    fn test_preview_tracks_session() {
        let mut session = Session::default();
        session.select(crate::preview::GRADIENT_FLOW_ID);
        session.set_subject(PreviewSubject::Text);
        let preview = session.preview();
        assert_eq!(preview.animation_name, "gradient-flow");
        assert_eq!(preview.duration, 3.0);
        assert!(preview.has_gradient_treatment());
    }
}
