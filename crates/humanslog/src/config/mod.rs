//! Handler configuration from file and environment

mod builder;
mod loader;
mod types;

pub use types::{
    HumanLogConfig,
    Output,
};
