//! Variable bindings.
//! 变量绑定。

use summa_common::{LETTER_COUNT, Letter};

/// A binding of values to the 52 variable names.
/// 52 个变量名到数值的绑定。
///
/// Every name always has a slot; an unbound name reads as NaN, which
/// propagates through evaluation the same way any other NaN does.
#[derive(Debug, Clone)]
pub struct Environment {
    slots: [f64; LETTER_COUNT],
}

impl Environment {
    /// Create an environment with every name unbound.
    pub fn new() -> Self {
        Self {
            slots: [f64::NAN; LETTER_COUNT],
        }
    }

    /// The value bound to `name`, NaN if unbound.
    pub fn get(&self, name: Letter) -> f64 {
        self.slots[name.index()]
    }

    /// Bind `name` to `value`. Binding NaN unbinds the name.
    pub fn set(&mut self, name: Letter, value: f64) {
        self.slots[name.index()] = value;
    }

    /// True if `name` currently holds a value.
    pub fn is_bound(&self, name: Letter) -> bool {
        !self.get(name).is_nan()
    }

    /// Iterate over the bound names in slot order, `a`-`z` then `A`-`Z`.
    /// 按槽位顺序遍历已绑定的名字，先 `a`-`z` 后 `A`-`Z`。
    pub fn bindings(&self) -> impl Iterator<Item = (Letter, f64)> + '_ {
        ('a'..='z')
            .chain('A'..='Z')
            .filter_map(Letter::new)
            .filter(|name| self.is_bound(*name))
            .map(|name| (name, self.get(name)))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
