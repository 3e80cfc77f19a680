/// Confirmation step guarding destructive operations.
///
/// The presentation layer implements this over whatever dialog surface it
/// has (native alert dialog, web `confirm`, test stub). The engine asks
/// before a delete or balance reset and proceeds only on `true`.
pub trait ConfirmationGate: Send + Sync {
    /// Present `message` to the user and return their decision.
    fn confirm(&self, message: &str) -> bool;
}

/// Gate that approves every request. For headless embedding and tests,
/// where no dialog surface exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl ConfirmationGate for AutoConfirm {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}
