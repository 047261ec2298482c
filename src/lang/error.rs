#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    detail: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident; $fmt:expr, $($arg:tt)+) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message(&format!($fmt, $($arg)+))
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            detail: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Channel failures end the session instead of being recovered by `quit`.
    pub fn is_fatal(&self) -> bool {
        self.code == ErrorCode::Io
    }

    pub fn message(self, message: &str) -> Error {
        debug_assert!(self.detail.is_empty());
        Error {
            code: self.code,
            detail: message.to_string(),
        }
    }

    /// Prefix the detail, keeping the code. Used to say where a loaded
    /// source line failed.
    pub fn in_context(self, context: &str) -> Error {
        let detail = if self.detail.is_empty() {
            context.to_string()
        } else {
            format!("{}; {}", self.detail, context)
        };
        Error {
            code: self.code,
            detail,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    StackUnderflow,
    StackOverflow,
    IntegerRequired,
    TextRequired,
    XtRequired,
    AddressRequired,
    DivisionByZero,
    UndefinedWord,
    InvalidAddress,
    OutOfRange,
    FileNotFound,
    Io,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        use ErrorCode::*;
        match self {
            StackUnderflow => "stack underflow",
            StackOverflow => "stack overflow",
            IntegerRequired => "integer required",
            TextRequired => "string required",
            XtRequired => "xt required",
            AddressRequired => "address required",
            DivisionByZero => "division by zero",
            UndefinedWord => "undefined word",
            InvalidAddress => "invalid memory address",
            OutOfRange => "result out of range",
            FileNotFound => "file not found",
            Io => "i/o error",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        Error::new(ErrorCode::Io).message(&error.to_string())
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.detail.is_empty() {
            write!(f, "{}", self.code.as_str())
        } else {
            write!(f, "{}: {}", self.code.as_str(), self.detail)
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(error!(StackUnderflow).to_string(), "stack underflow");
        assert_eq!(error!(StackUnderflow; "pop").to_string(), "stack underflow: pop");
        assert_eq!(
            error!(StackOverflow; "push: {}", 42).to_string(),
            "stack overflow: push: 42"
        );
    }

    #[test]
    fn test_debug() {
        assert_eq!(
            format!("{:?}", error!(DivisionByZero; "/")),
            "Error { division by zero: / }"
        );
    }

    #[test]
    fn test_context() {
        let e = error!(UndefinedWord; "foo").in_context("in line 3");
        assert_eq!(e.code(), ErrorCode::UndefinedWord);
        assert_eq!(e.to_string(), "undefined word: foo; in line 3");
    }

    #[test]
    fn test_fatal() {
        let e: Error = std::io::Error::new(std::io::ErrorKind::Other, "gone").into();
        assert!(e.is_fatal());
        assert!(!error!(DivisionByZero).is_fatal());
    }
}
