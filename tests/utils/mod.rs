// Shared across test binaries; not every binary uses every helper.
#![allow(dead_code)]

pub mod factories;
pub mod fakes;
pub mod helpers;
