pub(crate) mod app;
pub(crate) mod form;
pub(crate) mod render;
pub(crate) mod theme;
pub(crate) mod util;
pub(crate) mod view;

#[cfg(test)]
#[path = "util_tests.rs"]
mod util_tests;

#[cfg(test)]
#[path = "view_tests.rs"]
mod view_tests;

#[cfg(test)]
#[path = "form_tests.rs"]
mod form_tests;
