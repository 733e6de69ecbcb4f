use logos::Logos;
use std::fmt;

/// 表达式的词法单元
///
/// 数字保留原始文本（为了 Eq/Hash，也为了展开时原样保留字面量）。
#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    // --- 运算符 ---
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("**")]
    StarStar,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    /// 自由变量
    #[token("x")]
    Var,

    /// 函数引用：f 后跟至少一位数字
    #[regex(r"f[0-9]+", |lex| lex.slice().to_string())]
    Ref(String),

    #[regex(r"([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?", |lex| lex.slice().to_string())]
    Number(String),
}

impl Token {
    /// 是否为二元运算符
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            Token::Plus | Token::Minus | Token::Star | Token::Slash | Token::StarStar
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Plus => write!(f, "'+'"),
            Token::Minus => write!(f, "'-'"),
            Token::Star => write!(f, "'*'"),
            Token::Slash => write!(f, "'/'"),
            Token::StarStar => write!(f, "'**'"),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
            Token::Var => write!(f, "'x'"),
            Token::Ref(name) => write!(f, "function '{}'", name),
            Token::Number(n) => write!(f, "number '{}'", n),
        }
    }
}

/// 判断一个名字是否是合法的函数引用（整个字符串恰好是一个 `f<digits>`）
pub fn is_reference_name(name: &str) -> bool {
    name.len() > 1
        && name.starts_with('f')
        && name[1..].bytes().all(|b| b.is_ascii_digit())
}
