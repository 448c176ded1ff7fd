//! End-to-end runs of the wizard controller against a recording sink

use std::sync::Mutex;

use tempfile::TempDir;

use sitebrief::config::WizardVariant;
use sitebrief::error::{BriefError, BriefResult};
use sitebrief::models::catalog::{TEMPLATES, THEMES};
use sitebrief::models::{FormPatch, LogoAsset, LogoChoice};
use sitebrief::sink::SubmissionSink;
use sitebrief::wizard::{Step, SubmissionPayload, WizardController};

/// Keeps every payload it receives; fails while `fail` is set
#[derive(Default)]
struct RecordingSink {
    sent: Mutex<Vec<SubmissionPayload>>,
    fail: Mutex<bool>,
}

impl RecordingSink {
    fn failing() -> Self {
        let sink = Self::default();
        *sink.fail.lock().unwrap() = true;
        sink
    }

    fn recover(&self) {
        *self.fail.lock().unwrap() = false;
    }

    fn sent(&self) -> Vec<SubmissionPayload> {
        self.sent.lock().unwrap().clone()
    }
}

impl SubmissionSink for RecordingSink {
    fn name(&self) -> &str {
        "recording"
    }

    fn send(&self, payload: &SubmissionPayload) -> BriefResult<()> {
        if *self.fail.lock().unwrap() {
            return Err(BriefError::Submission("service unavailable".into()));
        }
        self.sent.lock().unwrap().push(payload.clone());
        Ok(())
    }
}

/// Fill in every required field, advancing to the review step
fn complete_standard(wizard: &mut WizardController) {
    wizard.handle_page_count_change(3).unwrap();
    wizard.set_page_name(0, "Home");
    wizard.set_page_name(2, "Contact");
    assert!(wizard.next());

    wizard.update_field(FormPatch::theme(THEMES[1].label()));
    assert!(wizard.next());

    wizard.update_field(FormPatch::content("Acme Bakery", ""));
    wizard.handle_logo_selection(LogoChoice::Design);
    assert!(wizard.next());

    wizard.update_field(FormPatch::inspiration(TEMPLATES[2].name));
    assert!(wizard.next());

    wizard.toggle_extra("seo");
    wizard.toggle_extra("hosting");
    assert!(wizard.next());

    wizard.update_field(FormPatch::contact_email("owner@acme.test"));
    assert!(wizard.next());
    assert_eq!(wizard.current_step(), Step::Review);
}

#[test]
fn test_standard_submission_resets_wizard() {
    let sink = RecordingSink::default();
    let mut wizard = WizardController::new(WizardVariant::Standard);
    let first_session = wizard.session_id();

    complete_standard(&mut wizard);
    wizard.submit(&sink).unwrap();

    let sent = sink.sent();
    assert_eq!(sent.len(), 1);
    let payload = &sent[0];
    assert_eq!(payload.plan, None);
    assert_eq!(payload.pages_count, 3);
    assert_eq!(payload.pages_names, "Home, Contact");
    assert_eq!(payload.theme, THEMES[1].label());
    assert_eq!(payload.description, "No description provided");
    assert_eq!(payload.logo, "design");
    assert_eq!(payload.logo_file, None);
    assert_eq!(payload.inspiration, TEMPLATES[2].name);
    assert_eq!(payload.extras, "seo, hosting");
    assert_eq!(payload.contact_email, "owner@acme.test");

    assert_eq!(wizard.current_index(), 0);
    assert!(wizard.record().content.title.is_empty());
    assert_ne!(wizard.session_id(), first_session);
}

#[test]
fn test_failed_submission_can_be_retried() {
    let sink = RecordingSink::failing();
    let mut wizard = WizardController::new(WizardVariant::Standard);
    complete_standard(&mut wizard);

    let err = wizard.submit(&sink).unwrap_err();
    assert!(err.is_retryable());
    assert!(!wizard.is_submitting());
    assert_eq!(wizard.current_step(), Step::Review);
    assert_eq!(wizard.record().content.title, "Acme Bakery");

    sink.recover();
    wizard.submit(&sink).unwrap();
    assert_eq!(sink.sent().len(), 1);
}

#[test]
fn test_second_submit_while_in_flight_is_refused() {
    let mut wizard = WizardController::new(WizardVariant::Standard);
    complete_standard(&mut wizard);

    let payload = wizard.begin_submit().unwrap();
    assert!(matches!(
        wizard.begin_submit(),
        Err(BriefError::SubmissionInFlight)
    ));
    assert!(!wizard.back());

    wizard.finish_submit(Ok(())).unwrap();
    assert_eq!(payload.title, "Acme Bakery");
    assert!(!wizard.is_submitting());
}

#[test]
fn test_plan_variant_prunes_extras_and_sends_plan() {
    let sink = RecordingSink::default();
    let mut wizard = WizardController::new(WizardVariant::WithPlan);
    assert_eq!(wizard.current_step(), Step::Plan);
    assert!(!wizard.next());

    wizard.select_plan("eshop");
    wizard.toggle_extra("inventory-management");
    wizard.toggle_extra("seo");

    // Booking does not offer inventory management
    wizard.select_plan("booking");
    assert_eq!(wizard.record().extras, vec!["seo".to_string()]);
    assert!(wizard.next());

    complete_standard(&mut wizard);
    wizard.submit(&sink).unwrap();

    let payload = &sink.sent()[0];
    assert_eq!(payload.plan.as_deref(), Some("Website with Booking System"));
    assert_eq!(payload.extras, "seo, hosting");
}

#[test]
fn test_attached_logo_is_encoded_at_submit() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("mark.svg");
    std::fs::write(&path, "<svg/>").unwrap();

    let sink = RecordingSink::default();
    let mut wizard = WizardController::new(WizardVariant::Standard);
    complete_standard(&mut wizard);

    wizard.handle_logo_selection(LogoChoice::Upload);
    wizard
        .handle_file_attach(LogoAsset::from_path(&path).unwrap())
        .unwrap();
    wizard.submit(&sink).unwrap();

    let payload = &sink.sent()[0];
    assert_eq!(payload.logo, "upload - File: mark.svg");
    assert_eq!(payload.logo_filename.as_deref(), Some("mark.svg"));
    assert_eq!(
        payload.logo_file.as_deref(),
        Some("data:image/svg+xml;base64,PHN2Zy8+")
    );
}

#[test]
fn test_missing_logo_file_blocks_submission() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("logo.png");
    std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

    let mut wizard = WizardController::new(WizardVariant::Standard);
    complete_standard(&mut wizard);
    wizard.handle_logo_selection(LogoChoice::Upload);
    wizard
        .handle_file_attach(LogoAsset::from_path(&path).unwrap())
        .unwrap();

    std::fs::remove_file(&path).unwrap();

    let sink = RecordingSink::default();
    assert!(matches!(wizard.submit(&sink), Err(BriefError::Io(_))));
    assert!(!wizard.is_submitting());
    assert!(sink.sent().is_empty());
}

#[test]
fn test_oversized_logo_rejected() {
    let mut wizard = WizardController::new(WizardVariant::Standard);
    wizard.handle_logo_selection(LogoChoice::Upload);

    let big = LogoAsset::new("huge.png", "image/png", 5 * 1024 * 1024 + 1, "/nonexistent/huge.png");
    let err = wizard.handle_file_attach(big).unwrap_err();
    assert!(matches!(err, BriefError::FileRejected(_)));
    assert!(wizard.record().logo_asset.is_none());

    let exact = LogoAsset::new("fits.png", "image/png", 5 * 1024 * 1024, "/nonexistent/fits.png");
    wizard.handle_file_attach(exact).unwrap();
    assert!(wizard.record().logo_asset.is_some());
}
