//! Luna Common - Core engines for the Luna sleep assistant
//!
//! Pure scoring and response logic plus the static knowledge base.
//! No I/O originates here; callers own persistence and presentation.

pub mod analysis;
pub mod error;
pub mod feedback;
pub mod knowledge;
pub mod observation;
pub mod responder;
pub mod scorer;
pub mod session_context;
pub mod transcript;

pub use error::{ObservationError, SessionError};
pub use feedback::{submission_feedback, SubmissionFeedback};
pub use observation::{SleepObservation, YesNo};
pub use responder::{respond, respond_to_payload};
pub use scorer::compute_score;
pub use session_context::SessionContext;
pub use transcript::ChatTurn;
