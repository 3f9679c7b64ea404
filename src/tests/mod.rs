//! # Integration tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `fn general_form()`
//! * `fn standard_form()`
//! * `fn artificial_tableau_form()`
//! * `fn tableau_form()`
//! * `fn solution()`
