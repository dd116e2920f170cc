//! Terminal front end: the interactive page and the one-shot commands.

pub mod convert;
pub mod form;
pub mod rates;
pub mod setup;
pub mod ui;
