mod common;

mod flags;
mod interpretation;
