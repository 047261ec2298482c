use super::{Address, Xt};

/// ## A stack cell
///
/// Everything the machine can hold on a stack or in memory.

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Integer(i64),
    Text(String),
    Address(Address),
    Xt(Xt),
}

impl Val {
    pub const TRUE: Val = Val::Integer(-1);
    pub const FALSE: Val = Val::Integer(0);
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Val::*;
        match self {
            Integer(n) => write!(f, "{}", n),
            // TODO: escape embedded quotes once there is a word that reads them back
            Text(s) => write!(f, "\"{}\"", s),
            Address(a) => write!(f, "<addr {}>", a),
            Xt(xt) => write!(f, "<xt {}>", xt.name()),
        }
    }
}

impl From<i64> for Val {
    fn from(n: i64) -> Val {
        Val::Integer(n)
    }
}

impl From<&str> for Val {
    fn from(s: &str) -> Val {
        Val::Text(s.to_string())
    }
}
