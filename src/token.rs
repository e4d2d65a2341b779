use strum_macros::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    #[strum(serialize = "ILLEGAL")]
    Illegal,
    #[strum(serialize = "EOF")]
    Eof,

    // Identifiers and literals
    #[strum(serialize = "IDENT")]
    Ident,
    #[strum(serialize = "INT")]
    Int,
    #[strum(serialize = "STRING")]
    String,

    // Operators
    #[strum(serialize = "ASSIGN")]
    Assign,
    #[strum(serialize = "PLUS")]
    Plus,
    #[strum(serialize = "MINUS")]
    Minus,
    #[strum(serialize = "SLASH")]
    Slash,
    #[strum(serialize = "ASTERISK")]
    Asterisk,
    #[strum(serialize = "BANG")]
    Bang,
    #[strum(serialize = "LT")]
    LT,
    #[strum(serialize = "GT")]
    GT,
    #[strum(serialize = "EQ")]
    Eq,
    #[strum(serialize = "NOT_EQ")]
    NotEq,

    // Delimiters
    #[strum(serialize = "COMMA")]
    Comma,
    #[strum(serialize = "SEMICOLON")]
    Semicolon,
    #[strum(serialize = "COLON")]
    Colon,

    #[strum(serialize = "LPAREN")]
    LParen,
    #[strum(serialize = "RPAREN")]
    RParen,
    #[strum(serialize = "LBRACE")]
    LBrace,
    #[strum(serialize = "RBRACE")]
    RBrace,
    #[strum(serialize = "LBRACKET")]
    LBracket,
    #[strum(serialize = "RBRACKET")]
    RBracket,

    // Keywords
    #[strum(serialize = "FUNCTION")]
    Function,
    #[strum(serialize = "LET")]
    Let,
    #[strum(serialize = "TRUE")]
    True,
    #[strum(serialize = "FALSE")]
    False,
    #[strum(serialize = "IF")]
    If,
    #[strum(serialize = "ELSE")]
    Else,
    #[strum(serialize = "RETURN")]
    Return,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token_type: TokenType,
    pub literal: String,
}

impl From<&str> for Token {
    fn from(word: &str) -> Self {
        let token_type = match word {
            "fn" => TokenType::Function,
            "let" => TokenType::Let,
            "true" => TokenType::True,
            "false" => TokenType::False,
            "if" => TokenType::If,
            "else" => TokenType::Else,
            "return" => TokenType::Return,
            _ => TokenType::Ident,
        };

        Self {
            token_type,
            literal: word.to_owned(),
        }
    }
}

impl Token {
    pub fn new(token_type: TokenType, literal: impl Into<String>) -> Self {
        Self {
            token_type,
            literal: literal.into(),
        }
    }

    pub fn new_from_char(token_type: TokenType, ch: u8) -> Self {
        Self {
            token_type,
            literal: (ch as char).to_string(),
        }
    }

    pub fn eof() -> Self {
        Self {
            token_type: TokenType::Eof,
            literal: "".to_owned(),
        }
    }

    pub fn is(&self, token_type: TokenType) -> bool {
        self.token_type == token_type
    }
}
