//! # Cuponera Math
//!
//! Root-finding utilities for the Cuponera schedule and yield library.
//!
//! This crate provides:
//!
//! - **Directional search**: a derivative-free adaptive walk with
//!   bisection refinement, tuned for NPV-style objective functions
//! - **Bisection**: a simple and reliable bracketing method
//!
//! ## Design Philosophy
//!
//! - **Bounded**: every solver runs within a fixed iteration ceiling
//! - **Soft failure**: exhausting the budget returns a best-effort root
//!   with an explicit [`solvers::Convergence`] status, never a bare
//!   number whose quality the caller has to guess

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{
        bisection, directional_search, Convergence, SolverConfig, SolverResult,
    };
}

pub use error::{MathError, MathResult};
