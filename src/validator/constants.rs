// Deepest parenthesis nesting the parser accepts
pub const MAX_NESTING: usize = 64;
