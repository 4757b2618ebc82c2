use crate::path::Cancel;

/// Listener that the lexer and parser report cancellations to.
///
/// Reporting never resumes the attempt: the reporter returns the same
/// cancellation as its error right after the call.
pub trait ErrorSink {
	/// Record one cancellation raised by the current attempt.
	fn report(&mut self, cancel: &Cancel);
}

/// Per-attempt collector that keeps every reported cancellation.
#[derive(Debug, Default)]
pub struct CancelLog {
	reported: Vec<Cancel>,
}

impl CancelLog {
	/// Create an empty collector for one attempt.
	pub fn new() -> Self {
		Self::default()
	}

	/// First cancellation reported, if any.
	pub fn first(&self) -> Option<&Cancel> {
		self.reported.first()
	}

	/// All cancellations in report order.
	pub fn reported(&self) -> &[Cancel] {
		&self.reported
	}

	/// Whether nothing was reported.
	pub fn is_empty(&self) -> bool {
		self.reported.is_empty()
	}
}

impl ErrorSink for CancelLog {
	fn report(&mut self, cancel: &Cancel) {
		tracing::trace!(%cancel, "path attempt cancelled");
		self.reported.push(cancel.clone());
	}
}
