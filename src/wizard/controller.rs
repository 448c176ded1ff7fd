//! Wizard state machine
//!
//! `WizardController` owns the step sequence, the current-step pointer and
//! the form record. It decides when the pointer may move and hands the
//! finished record to a submission sink.
//!
//! States are `Editing(i)` for each step index and `Submitting`. Navigation
//! is refused while submitting; a failed submission returns to the review
//! step with the record untouched.

use std::collections::HashSet;

use tracing::{debug, info, warn};
use uuid::Uuid;

use super::payload::SubmissionPayload;
use super::step::Step;
use super::validation;
use crate::config::WizardVariant;
use crate::error::{BriefError, BriefResult};
use crate::models::catalog::{self, MAX_PAGE_COUNT};
use crate::models::{FormPatch, FormRecord, LogoAsset, LogoChoice};
use crate::sink::SubmissionSink;

/// Navigation and form state for one wizard session
#[derive(Debug, Clone)]
pub struct WizardController {
    steps: &'static [Step],
    current: usize,
    record: FormRecord,
    is_submitting: bool,
    email_valid: bool,
    /// Correlates log lines for one client session
    session_id: Uuid,
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new(WizardVariant::Standard)
    }
}

impl WizardController {
    /// Start a session at the first step with an empty record
    pub fn new(variant: WizardVariant) -> Self {
        let session_id = Uuid::new_v4();
        debug!(%session_id, ?variant, "wizard session started");
        Self {
            steps: Step::sequence(variant),
            current: 0,
            record: FormRecord::default(),
            is_submitting: false,
            email_valid: false,
            session_id,
        }
    }

    pub fn steps(&self) -> &'static [Step] {
        self.steps
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> Step {
        self.steps[self.current]
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Whether the plan step is part of this wizard
    pub fn includes_plan(&self) -> bool {
        self.steps.contains(&Step::Plan)
    }

    pub fn is_first_step(&self) -> bool {
        self.current == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    /// Fraction of the wizard reached, counting the current step
    pub fn progress(&self) -> f64 {
        (self.current + 1) as f64 / self.steps.len() as f64
    }

    /// Validation for the step at `index`; out-of-range indices never pass
    pub fn can_proceed_at(&self, index: usize) -> bool {
        self.steps
            .get(index)
            .is_some_and(|step| validation::can_proceed(*step, &self.record))
    }

    /// Validation for the current step
    pub fn can_proceed(&self) -> bool {
        self.can_proceed_at(self.current)
    }

    /// Why the current step cannot be left, if it cannot
    pub fn blocking_reason(&self) -> Option<&'static str> {
        validation::blocking_reason(self.current_step(), &self.record)
    }

    /// Whether the contact email currently passes the syntax check
    pub fn is_email_valid(&self) -> bool {
        self.email_valid
    }

    /// Inline message for the email field
    pub fn email_feedback(&self) -> Option<&'static str> {
        validation::email_feedback(&self.record.contact_email)
    }

    /// Advance one step. Returns whether the pointer moved.
    pub fn next(&mut self) -> bool {
        if self.is_submitting || self.is_last_step() || !self.can_proceed() {
            return false;
        }
        self.current += 1;
        debug!(session_id = %self.session_id, step = %self.current_step(), "advanced");
        true
    }

    /// Go back one step. Returns whether the pointer moved.
    pub fn back(&mut self) -> bool {
        if self.is_submitting || self.current == 0 {
            return false;
        }
        self.current -= 1;
        debug!(session_id = %self.session_id, step = %self.current_step(), "went back");
        true
    }

    /// Merge a partial update into the record
    ///
    /// Structural invariants are kept: page names always match the page
    /// count, and leaving the upload choice drops any attached file.
    pub fn update_field(&mut self, patch: FormPatch) {
        let FormPatch {
            plan,
            pages,
            theme,
            content,
            logo_choice,
            inspiration,
            extras,
            contact_email,
        } = patch;

        if let Some(plan) = plan {
            self.select_plan(&plan);
        }
        if let Some(pages) = pages {
            self.record.pages = if pages.names.len() == pages.count {
                pages
            } else {
                pages.resized(pages.count)
            };
        }
        if let Some(theme) = theme {
            self.record.theme = theme;
        }
        if let Some(content) = content {
            self.record.content = content;
        }
        if let Some(choice) = logo_choice {
            self.handle_logo_selection(choice);
        }
        if let Some(inspiration) = inspiration {
            self.record.inspiration = inspiration;
        }
        if let Some(extras) = extras {
            self.record.extras = self.offered_extras(extras);
        }
        if let Some(email) = contact_email {
            self.record.contact_email = email;
        }

        self.email_valid = validation::is_valid_email(&self.record.contact_email);
    }

    /// Resize the page list, keeping names by index
    pub fn handle_page_count_change(&mut self, count: usize) -> BriefResult<()> {
        if count == 0 || count > MAX_PAGE_COUNT {
            return Err(BriefError::Validation(format!(
                "Page count must be between 1 and {}",
                MAX_PAGE_COUNT
            )));
        }
        self.record.pages = self.record.pages.resized(count);
        Ok(())
    }

    /// Name a single page; indices past the page count are ignored
    pub fn set_page_name(&mut self, index: usize, name: impl Into<String>) {
        if let Some(slot) = self.record.pages.names.get_mut(index) {
            *slot = name.into();
        }
    }

    /// Pick a logo option, dropping the attached file unless uploading
    pub fn handle_logo_selection(&mut self, choice: LogoChoice) {
        self.record.logo_choice = choice;
        if choice != LogoChoice::Upload && self.record.logo_asset.take().is_some() {
            debug!(session_id = %self.session_id, "logo file detached");
        }
    }

    /// Attach a logo file after checking its type and size
    ///
    /// A rejected file leaves the current attachment in place.
    pub fn handle_file_attach(&mut self, asset: LogoAsset) -> BriefResult<()> {
        if self.record.logo_choice != LogoChoice::Upload {
            return Err(BriefError::FileRejected(
                "Choose \"Upload Logo\" before attaching a file".into(),
            ));
        }
        asset.check_acceptable()?;
        debug!(
            session_id = %self.session_id,
            file = %asset.file_name,
            size = asset.size,
            "logo file attached"
        );
        self.record.logo_asset = Some(asset);
        Ok(())
    }

    /// Remove the attached logo file
    pub fn detach_logo(&mut self) {
        self.record.logo_asset = None;
    }

    /// Pick a plan, dropping extras the new plan does not offer
    pub fn select_plan(&mut self, plan: &str) {
        let offered = catalog::extras_for_plan(Some(plan));
        self.record
            .extras
            .retain(|id| offered.iter().any(|e| e.id == id));
        self.record.plan = Some(plan.to_string());
    }

    /// Distinct ids, in first-seen order, that the current plan offers
    fn offered_extras(&self, mut extras: Vec<String>) -> Vec<String> {
        let offered = catalog::extras_for_plan(self.record.plan.as_deref());
        let mut seen = HashSet::new();
        extras.retain(|id| offered.iter().any(|e| e.id == id) && seen.insert(id.clone()));
        extras
    }

    /// Add or remove an extra service
    pub fn toggle_extra(&mut self, id: &str) {
        self.record.toggle_extra(id);
    }

    /// Enter the submitting state and build the payload
    ///
    /// Only allowed from the review step and when no submission is running.
    pub fn begin_submit(&mut self) -> BriefResult<SubmissionPayload> {
        if self.is_submitting {
            return Err(BriefError::SubmissionInFlight);
        }
        if !self.is_last_step() {
            return Err(BriefError::NotAtReview {
                current: self.current,
                review: self.steps.len() - 1,
            });
        }

        let payload = SubmissionPayload::build(&self.record, self.includes_plan())?;
        self.is_submitting = true;
        info!(session_id = %self.session_id, "submitting form");
        Ok(payload)
    }

    /// Leave the submitting state with the sink's outcome
    ///
    /// Success resets the session; failure keeps the record for a retry.
    pub fn finish_submit(&mut self, outcome: BriefResult<()>) -> BriefResult<()> {
        self.is_submitting = false;
        match outcome {
            Ok(()) => {
                info!(session_id = %self.session_id, "form submitted");
                self.reset();
                Ok(())
            }
            Err(err) => {
                warn!(session_id = %self.session_id, error = %err, "submission failed");
                Err(match err {
                    BriefError::Submission(_) => err,
                    other => BriefError::Submission(other.to_string()),
                })
            }
        }
    }

    /// Submit through `sink`, blocking until it answers
    pub fn submit(&mut self, sink: &dyn SubmissionSink) -> BriefResult<()> {
        let payload = self.begin_submit()?;
        let outcome = sink.send(&payload);
        self.finish_submit(outcome)
    }

    /// Back to the first step with an empty record
    pub fn reset(&mut self) {
        self.current = 0;
        self.record = FormRecord::default();
        self.is_submitting = false;
        self.email_valid = false;
        self.session_id = Uuid::new_v4();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::logo::{MEDIA_TYPE_PNG, MEDIA_TYPE_SVG};
    use crate::models::PageSelection;
    use std::sync::Mutex;

    const MIB: u64 = 1024 * 1024;

    struct StubSink {
        fail: bool,
        sent: Mutex<Vec<SubmissionPayload>>,
    }

    impl StubSink {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    impl SubmissionSink for StubSink {
        fn name(&self) -> &str {
            "stub"
        }

        fn send(&self, payload: &SubmissionPayload) -> BriefResult<()> {
            self.sent.lock().unwrap().push(payload.clone());
            if self.fail {
                Err(BriefError::Submission("provider unavailable".into()))
            } else {
                Ok(())
            }
        }
    }

    fn at_review(controller: &mut WizardController) {
        controller.update_field(FormPatch::theme("Warm Orange - Energetic and friendly"));
        controller.update_field(FormPatch::content("Acme", "Bakery"));
        controller.update_field(FormPatch::inspiration("Hestia"));
        controller.update_field(FormPatch::contact_email("a@b.co"));
        while controller.next() {}
    }

    #[test]
    fn test_initial_state() {
        let controller = WizardController::default();
        assert_eq!(controller.current_index(), 0);
        assert_eq!(controller.current_step(), Step::Pages);
        assert_eq!(controller.step_count(), 7);
        assert!(!controller.is_submitting());
        assert!(!controller.includes_plan());
    }

    #[test]
    fn test_back_at_start_is_noop() {
        let mut controller = WizardController::default();
        assert!(!controller.back());
        assert_eq!(controller.current_index(), 0);
    }

    #[test]
    fn test_next_blocked_by_validation() {
        let mut controller = WizardController::default();
        assert!(controller.next());
        assert_eq!(controller.current_step(), Step::Theme);
        assert!(!controller.next());
        assert_eq!(controller.blocking_reason(), Some("Choose a theme to continue"));

        controller.update_field(FormPatch::theme("Modern Blue - Professional and trustworthy"));
        assert!(controller.next());
        assert_eq!(controller.current_step(), Step::Content);
    }

    #[test]
    fn test_next_at_last_step_is_noop() {
        let mut controller = WizardController::default();
        at_review(&mut controller);
        assert_eq!(controller.current_index(), 6);
        assert!(!controller.next());
        assert_eq!(controller.current_index(), 6);
    }

    #[test]
    fn test_can_proceed_out_of_range() {
        let controller = WizardController::default();
        assert!(!controller.can_proceed_at(99));
    }

    #[test]
    fn test_page_count_change() {
        let mut controller = WizardController::default();
        controller.handle_page_count_change(3).unwrap();
        controller.set_page_name(0, "Home");
        controller.set_page_name(2, "Contact");
        controller.set_page_name(7, "Ignored");

        controller.handle_page_count_change(2).unwrap();
        assert_eq!(controller.record().pages.names, vec!["Home", ""]);

        controller.handle_page_count_change(4).unwrap();
        assert_eq!(controller.record().pages.names, vec!["Home", "", "", ""]);

        assert!(controller.handle_page_count_change(0).is_err());
        assert!(controller.handle_page_count_change(11).is_err());
        assert_eq!(controller.record().pages.count, 4);
    }

    #[test]
    fn test_update_field_normalizes_page_names() {
        let mut controller = WizardController::default();
        controller.update_field(FormPatch::pages(PageSelection {
            count: 3,
            names: vec!["Home".into()],
        }));
        assert_eq!(controller.record().pages.names, vec!["Home", "", ""]);
    }

    #[test]
    fn test_email_rechecked_on_every_update() {
        let mut controller = WizardController::default();
        controller.update_field(FormPatch::contact_email("a@b.co"));
        assert!(controller.is_email_valid());

        controller.update_field(FormPatch::contact_email("a@b"));
        assert!(!controller.is_email_valid());
        assert!(controller.email_feedback().is_some());

        controller.update_field(FormPatch::contact_email("x@y.io"));
        controller.update_field(FormPatch::theme("anything"));
        assert!(controller.is_email_valid());
    }

    #[test]
    fn test_logo_selection_clears_asset() {
        let mut controller = WizardController::default();
        controller.handle_logo_selection(LogoChoice::Upload);
        controller
            .handle_file_attach(LogoAsset::new("logo.png", MEDIA_TYPE_PNG, MIB, "logo.png"))
            .unwrap();
        assert!(controller.record().logo_asset.is_some());

        controller.handle_logo_selection(LogoChoice::Upload);
        assert!(controller.record().logo_asset.is_some());

        controller.handle_logo_selection(LogoChoice::Design);
        assert!(controller.record().logo_asset.is_none());

        controller.handle_logo_selection(LogoChoice::Upload);
        controller
            .handle_file_attach(LogoAsset::new("logo.svg", MEDIA_TYPE_SVG, MIB, "logo.svg"))
            .unwrap();
        controller.update_field(FormPatch {
            logo_choice: Some(LogoChoice::Skip),
            ..Default::default()
        });
        assert!(controller.record().logo_asset.is_none());
    }

    #[test]
    fn test_rejected_file_keeps_previous_asset() {
        let mut controller = WizardController::default();
        controller.handle_logo_selection(LogoChoice::Upload);
        let good = LogoAsset::new("good.png", MEDIA_TYPE_PNG, 4 * MIB, "good.png");
        controller.handle_file_attach(good.clone()).unwrap();

        let too_big = LogoAsset::new("big.png", MEDIA_TYPE_PNG, 6 * MIB, "big.png");
        assert!(controller.handle_file_attach(too_big).is_err());

        let jpeg = LogoAsset::new("photo.jpg", "image/jpeg", 1024, "photo.jpg");
        assert!(controller.handle_file_attach(jpeg).is_err());

        assert_eq!(controller.record().logo_asset.as_ref(), Some(&good));
    }

    #[test]
    fn test_attach_requires_upload_choice() {
        let mut controller = WizardController::default();
        let asset = LogoAsset::new("logo.png", MEDIA_TYPE_PNG, 10, "logo.png");
        assert!(controller.handle_file_attach(asset).is_err());
        assert!(controller.record().logo_asset.is_none());
    }

    #[test]
    fn test_plan_change_prunes_extras() {
        let mut controller = WizardController::new(WizardVariant::WithPlan);
        controller.select_plan("booking");
        controller.toggle_extra("seo");
        controller.toggle_extra("calendar-sync");

        controller.update_field(FormPatch {
            plan: Some("eshop".into()),
            ..Default::default()
        });
        assert_eq!(controller.record().extras, vec!["seo"]);
        assert_eq!(controller.record().plan.as_deref(), Some("eshop"));
    }

    #[test]
    fn test_update_field_extras_is_a_set() {
        let mut wizard = WizardController::default();
        wizard.update_field(FormPatch {
            extras: Some(vec![
                "seo".into(),
                "hosting".into(),
                "seo".into(),
                "inventory-management".into(),
            ]),
            ..Default::default()
        });
        // No plan chosen, so only the base extras are on offer
        assert_eq!(wizard.record().extras, vec!["seo", "hosting"]);

        let payload = SubmissionPayload::from_record(wizard.record(), false, None);
        assert_eq!(payload.extras, "seo, hosting");
    }

    #[test]
    fn test_update_field_extras_follow_patched_plan() {
        let mut wizard = WizardController::new(WizardVariant::WithPlan);
        wizard.update_field(FormPatch {
            plan: Some("eshop".into()),
            extras: Some(vec!["inventory-management".into(), "calendar-sync".into()]),
            ..Default::default()
        });
        assert_eq!(wizard.record().extras, vec!["inventory-management"]);
    }

    #[test]
    fn test_submit_outside_review_refused() {
        let mut controller = WizardController::default();
        let sink = StubSink::new(false);
        let err = controller.submit(&sink).unwrap_err();
        assert!(matches!(err, BriefError::NotAtReview { current: 0, review: 6 }));
        assert!(sink.sent.lock().unwrap().is_empty());
    }

    #[test]
    fn test_submit_single_flight() {
        let mut controller = WizardController::default();
        at_review(&mut controller);

        controller.begin_submit().unwrap();
        assert!(controller.is_submitting());
        assert!(matches!(
            controller.begin_submit(),
            Err(BriefError::SubmissionInFlight)
        ));
        assert!(!controller.back());
        assert_eq!(controller.current_index(), 6);

        controller.finish_submit(Ok(())).unwrap();
        assert!(!controller.is_submitting());
    }

    #[test]
    fn test_failed_submit_preserves_state() {
        let mut controller = WizardController::default();
        at_review(&mut controller);
        let before = controller.record().clone();

        let sink = StubSink::new(true);
        let err = controller.submit(&sink).unwrap_err();
        assert!(matches!(err, BriefError::Submission(_)));
        assert_eq!(controller.current_index(), 6);
        assert_eq!(controller.record(), &before);
        assert!(!controller.is_submitting());
    }

    #[test]
    fn test_successful_submit_resets() {
        let mut controller = WizardController::default();
        at_review(&mut controller);
        let first_session = controller.session_id();

        let sink = StubSink::new(false);
        controller.submit(&sink).unwrap();

        assert_eq!(controller.current_index(), 0);
        assert_eq!(controller.record(), &FormRecord::default());
        assert_ne!(controller.session_id(), first_session);

        let sent = sink.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].title, "Acme");
        assert_eq!(sent[0].contact_email, "a@b.co");
    }

    #[test]
    fn test_unreadable_logo_does_not_enter_submitting() {
        let mut controller = WizardController::default();
        controller.handle_logo_selection(LogoChoice::Upload);
        controller
            .handle_file_attach(LogoAsset::new(
                "gone.png",
                MEDIA_TYPE_PNG,
                10,
                "/no/such/dir/gone.png",
            ))
            .unwrap();
        at_review(&mut controller);

        let err = controller.begin_submit().unwrap_err();
        assert!(matches!(err, BriefError::Io(_)));
        assert!(!controller.is_submitting());
        assert_eq!(controller.current_index(), 6);
    }
}
