#![cfg_attr(not(test), forbid(unsafe_code))]
#![warn(clippy::pedantic)]

//! Wire models exchanged with the user management REST service.

pub mod models;
