//! Validated variable names.
//! 变量名的校验类型。

use std::fmt;

/// Number of distinct variable names: `a`-`z` and `A`-`Z`.
pub const LETTER_COUNT: usize = 52;

/// A variable name: exactly one ASCII letter, case-sensitive.
/// 变量名：恰好一个 ASCII 字母，区分大小写。
///
/// A `Letter` can only be constructed from an ASCII alphabetic
/// character, so an invalid variable name is unrepresentable.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Create a letter, or `None` if `c` is not an ASCII letter.
    pub const fn new(c: char) -> Option<Letter> {
        if c.is_ascii_alphabetic() {
            Some(Letter(c as u8))
        } else {
            None
        }
    }

    /// The underlying character.
    pub fn as_char(self) -> char {
        self.0 as char
    }

    /// Slot index in `0..52`: lowercase letters first, then uppercase.
    /// 槽位索引，`0..52`：小写字母在前，大写在后。
    pub fn index(self) -> usize {
        if self.0.is_ascii_lowercase() {
            (self.0 - b'a') as usize
        } else {
            (self.0 - b'A') as usize + 26
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl fmt::Debug for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Letter({})", self.as_char())
    }
}
