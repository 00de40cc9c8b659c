use ratatui::style::Color;

/// The five symbols a cell can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Token {
    Smile,
    Laugh,
    Heart,
    Cool,
    Think,
}

impl Token {
    pub const ALL: [Token; 5] = [
        Token::Smile,
        Token::Laugh,
        Token::Heart,
        Token::Cool,
        Token::Think,
    ];

    /// Letter used for boards written as text rows.
    pub fn symbol(self) -> char {
        match self {
            Token::Smile => 'S',
            Token::Laugh => 'L',
            Token::Heart => 'H',
            Token::Cool => 'C',
            Token::Think => 'T',
        }
    }

    pub fn from_char(symbol: char) -> Option<Token> {
        match symbol.to_ascii_uppercase() {
            'S' => Some(Token::Smile),
            'L' => Some(Token::Laugh),
            'H' => Some(Token::Heart),
            'C' => Some(Token::Cool),
            'T' => Some(Token::Think),
            _ => None,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Token::Smile => "😊",
            Token::Laugh => "😂",
            Token::Heart => "🥰",
            Token::Cool => "😎",
            Token::Think => "🤔",
        }
    }

    // Tint used behind the glyph so tokens stay distinguishable on terminals without emoji fonts
    pub fn color(self) -> Color {
        match self {
            Token::Smile => Color::Yellow,
            Token::Laugh => Color::Cyan,
            Token::Heart => Color::Magenta,
            Token::Cool => Color::Blue,
            Token::Think => Color::Green,
        }
    }
}
