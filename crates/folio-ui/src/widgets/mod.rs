//! Reusable Widgets
//!
//! Widgets take the page controller and animator as input and report clicks
//! through return values.

mod animated_photo;
mod button;
mod project_card;

pub use animated_photo::animated_photo;
pub use button::{cta_button, ButtonKind};
pub use project_card::{project_card, CardResponse};
