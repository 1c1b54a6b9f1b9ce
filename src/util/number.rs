use crate::collections::list::QueryableList;

/// A small element type with a field, a getter and a method taking an argument, for exercising
/// each kind of matcher and accessor.
#[derive(Debug, Clone, PartialEq)]
pub struct Number {
    pub n: i32,
}

impl Number {
    pub fn get(&self) -> i32 {
        self.n
    }

    pub fn diff(&self, other: i32) -> i32 {
        (self.n - other).abs()
    }
}

impl PartialEq<i32> for Number {
    fn eq(&self, other: &i32) -> bool {
        self.n == *other
    }
}

pub fn numbers(values: &[i32]) -> QueryableList<Number> {
    values.iter().map(|&n| Number { n }).collect()
}
