//! Failure surface port definition.

use crate::domain::AppError;

/// Port for the visible output surface used on graceful rejection.
///
/// The rendered text is the entire diagnostic: implementations must emit the
/// body exactly as given, with no decoration, so rendering the same body
/// twice yields identical output.
pub trait FailureSurface {
    /// Render a rejected response body verbatim.
    fn render(&mut self, body: &str) -> Result<(), AppError>;
}
