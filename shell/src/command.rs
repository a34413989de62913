use std::fmt;

/// One program invocation as an ordered list of shell tokens.
/// The first token is the program itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    tokens: Vec<String>,
}

impl Command {
    pub fn new(program: impl Into<String>) -> Self {
        Command {
            tokens: vec![program.into()],
        }
    }

    pub fn arg(mut self, token: impl Into<String>) -> Self {
        self.tokens.push(token.into());
        self
    }

    pub fn args<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tokens.extend(tokens.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Index of the first occurrence of `token`, if any
    pub fn position(&self, token: &str) -> Option<usize> {
        self.tokens.iter().position(|t| t == token)
    }

    pub fn render(&self) -> String {
        self.tokens
            .iter()
            .map(|t| quote(t))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Commands chained with `|`, the first one optionally reading its stdin from a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    stages: Vec<Command>,
    stdin: Option<String>,
}

impl Pipeline {
    pub fn new(first: Command) -> Self {
        Pipeline {
            stages: vec![first],
            stdin: None,
        }
    }

    pub fn pipe(mut self, stage: Command) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn stdin_from(mut self, path: impl Into<String>) -> Self {
        self.stdin = Some(path.into());
        self
    }

    pub fn stages(&self) -> &[Command] {
        &self.stages
    }

    pub fn first(&self) -> &Command {
        &self.stages[0]
    }

    pub fn stdin(&self) -> Option<&str> {
        self.stdin.as_deref()
    }

    /// Programs of every stage, in pipe order
    pub fn programs(&self) -> Vec<&str> {
        self.stages.iter().map(Command::program).collect()
    }

    pub fn render(&self) -> String {
        let mut rendered = Vec::with_capacity(self.stages.len());
        for (idx, stage) in self.stages.iter().enumerate() {
            match (&self.stdin, idx) {
                (Some(path), 0) => rendered.push(format!("{} < {}", stage.render(), quote(path))),
                _ => rendered.push(stage.render()),
            }
        }
        rendered.join(" | ")
    }
}

impl From<Command> for Pipeline {
    fn from(command: Command) -> Self {
        Pipeline::new(command)
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

fn is_plain(c: char) -> bool {
    c.is_ascii_alphanumeric() || "-_./:,=+@%^".contains(c)
}

/// Quote a token for `sh` unless it is made only of characters the shell leaves alone.
pub fn quote(token: &str) -> String {
    if !token.is_empty() && token.chars().all(is_plain) {
        token.to_string()
    } else {
        format!("'{}'", token.replace('\'', r"'\''"))
    }
}
