//! Indentation configuration for code generation.

/// Indentation unit for generated code, a fixed number of spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent {
    width: u8,
}

impl Indent {
    /// 4-space indentation, as rustfmt writes it.
    pub const RUST: Self = Self::spaces(4);

    pub const fn spaces(width: u8) -> Self {
        Self { width }
    }

    /// Append `level` indentation units to `buffer`.
    pub fn write(&self, buffer: &mut String, level: usize) {
        let count = usize::from(self.width) * level;
        buffer.extend(std::iter::repeat_n(' ', count));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indented(indent: Indent, level: usize) -> String {
        let mut buffer = String::new();
        indent.write(&mut buffer, level);
        buffer
    }

    #[test]
    fn test_indent_write() {
        assert_eq!(indented(Indent::spaces(2), 1), "  ");
        assert_eq!(indented(Indent::RUST, 2), "        ");
        assert_eq!(indented(Indent::RUST, 0), "");
    }
}
