//! Builder methods and conversion into a handler

use super::types::{
    HumanLogConfig,
    Output,
};
use crate::{
    handler::{
        Handler,
        HandlerOption,
    },
    severity::Severity,
};
use std::io;

impl HumanLogConfig {
    pub fn with_level(
        mut self,
        level: Severity,
    ) -> Self {
        self.level = level;
        self
    }

    pub fn enable_ansi(
        mut self,
        enabled: bool,
    ) -> Self {
        self.enable_ansi = enabled;
        self
    }

    pub fn output(
        mut self,
        output: Output,
    ) -> Self {
        self.output = output;
        self
    }

    pub fn into_handler(self) -> Handler {
        let destination = match self.output {
            Output::Stdout => HandlerOption::destination(io::stdout),
            Output::Stderr => HandlerOption::destination(io::stderr),
        };
        Handler::new([
            destination,
            HandlerOption::MinSeverity(self.level),
            HandlerOption::Ansi(self.enable_ansi),
        ])
    }
}
