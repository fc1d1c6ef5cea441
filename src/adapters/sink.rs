use crate::domain::model::ContactSubmission;
use crate::domain::ports::SubmissionSink;

/// Logs contact submissions instead of sending them anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl SubmissionSink for TracingSink {
    fn report(&self, submission: &ContactSubmission) {
        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            subject = %submission.subject,
            message = %submission.message,
            submitted_at = %submission.submitted_at.to_rfc3339(),
            "📨 Contact form submitted"
        );
    }
}
