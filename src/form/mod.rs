//! The contact form: fields, editing, validation, payload mapping and the
//! submission controller.

pub mod controller;
pub mod field;
pub mod input;
pub mod payload;
pub mod validator;
