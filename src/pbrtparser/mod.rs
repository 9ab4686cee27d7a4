pub mod tokens;
pub mod lexer;
pub mod syntax;
pub mod pbrtparser;
