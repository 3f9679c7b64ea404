//! # Representing linear programs
//!
//! This module contains different representations of linear programs. Linear programs in general
//! form may contain variables of any sign and constraints of any type, while linear programs in
//! standard form only have non negative variables and are always maximized.
pub mod builder;
pub mod elements;
pub mod function;
pub mod general_form;
pub mod solution;
pub mod standard_form;
