use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRequest {
    pub target: PathBuf,
    pub verb: String,
    pub params: Vec<String>,
    pub packages: Vec<String>,
    pub create: bool,
}

pub fn split_words(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}

pub struct LiveCommand<'a> {
    pub verb: &'a str,
    pub params: &'a [String],
    pub packages: &'a [String],
}

impl fmt::Display for LiveCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pip {}", self.verb)?;
        for word in self.params.iter().chain(self.packages.iter()) {
            write!(f, " {}", word)?;
        }
        Ok(())
    }
}
