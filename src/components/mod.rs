//! Reusable view components.
//!
//! ARCHITECTURE
//! ============
//! Widgets receive the store handle as a prop and keep their own local
//! state; none of them talk to each other or to the session.

pub mod counter;
pub mod engagement_chart;
pub mod loading_dots;
pub mod protected_route;
pub mod rich_text_editor;
pub mod user_form;
