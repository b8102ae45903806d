use std::fmt::{self, Display};

/// Kinds of failure the shell distinguishes.
#[derive(Debug)]
pub enum Kind {
    Os,
    Syntax,
    Usage,
}

#[derive(Debug)]
pub struct Error(Kind, Option<Box<dyn std::error::Error>>);

impl Error {
    pub fn new(k: Kind, e: Box<dyn std::error::Error>) -> Self {
        Self(k, Some(e))
    }

    pub fn get_kind(&self) -> &Kind {
        &self.0
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Kind::Os => write!(f, "OS error")?,
            Kind::Syntax => write!(f, "syntax error")?,
            Kind::Usage => write!(f, "usage error")?,
        }
        if let Some(e) = &self.1 {
            write!(f, ": {}", e)?
        }
        Ok(())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::new(Kind::Os, e.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::new(Kind::Os, e.into())
    }
}
