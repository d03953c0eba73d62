//! End-to-end tests for the rebranch workspace.
//!
//! Each module drives one layer through its public API, from category
//! parsing up to the corpus pipeline. Corpus files live in
//! `tests/test_data/ccgbank/`.

#[cfg(test)]
mod category;
#[cfg(test)]
mod pipeline;
#[cfg(test)]
mod reader;
#[cfg(test)]
mod rule;
#[cfg(test)]
mod type_raise;
#[cfg(test)]
mod unification;
#[cfg(test)]
mod utils;
