use crate::core::error::{Result, VenvPipError};
use crate::core::{display_argv, CapturedOutput, CommandRunner};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::ffi::OsString;

pub enum Reply {
    Exit(CapturedOutput),
    SpawnError(String),
}

pub struct ScriptedRunner {
    replies: RefCell<VecDeque<Reply>>,
    calls: RefCell<Vec<Vec<String>>>,
}

impl ScriptedRunner {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: RefCell::new(replies.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn ok() -> Reply {
        Reply::Exit(CapturedOutput {
            exit_code: 0,
            stdout: String::new(),
            stderr: String::new(),
        })
    }

    pub fn fail(stderr: &str) -> Reply {
        Reply::Exit(CapturedOutput {
            exit_code: 1,
            stdout: String::new(),
            stderr: stderr.to_string(),
        })
    }

    pub fn spawn_error(message: &str) -> Reply {
        Reply::SpawnError(message.to_string())
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.replies.borrow().len()
    }
}

impl CommandRunner for ScriptedRunner {
    async fn execute(&self, argv: &[OsString]) -> Result<CapturedOutput> {
        self.calls.borrow_mut().push(
            argv.iter()
                .map(|a| a.to_string_lossy().to_string())
                .collect(),
        );
        match self.replies.borrow_mut().pop_front() {
            Some(Reply::Exit(output)) => Ok(output),
            Some(Reply::SpawnError(message)) => Err(VenvPipError::CommandFailed(message)),
            None => Err(VenvPipError::CommandFailed(format!(
                "unscripted call: {}",
                display_argv(argv)
            ))),
        }
    }
}
