// This file is part of carray.
// SPDX-License-Identifier: MIT OR Apache-2.0

use carray::CArray;
use std::{fmt::Display, io};

const SEPARATOR_WIDTH: usize = 77;

/// Writes `vector is empty!`, or the size followed by every element, then a
/// separator line.
pub fn print_array<T: Display, W: io::Write>(out: &mut W, array: &CArray<T>) -> io::Result<()> {
    if array.is_empty() {
        write!(out, "vector is empty!")?;
    } else {
        writeln!(out, "size: {}", array.len())?;
        for item in array {
            write!(out, "{item} ")?;
        }
    }
    writeln!(out, "\n{}", "-".repeat(SEPARATOR_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::print_array;
    use carray::CArray;

    fn render<T: std::fmt::Display>(array: &CArray<T>) -> String {
        let mut out = Vec::new();
        print_array(&mut out, array).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_array() {
        let v: CArray<i32> = CArray::new();
        let text = render(&v);
        assert_eq!(text, format!("vector is empty!\n{}\n", "-".repeat(77)));
    }

    #[test]
    fn test_size_then_space_separated_elements() {
        let v: CArray<i32> = [3, 1, 2].into();
        let text = render(&v);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("size: 3"));
        assert_eq!(lines.next(), Some("3 1 2 "));
        assert_eq!(lines.next(), Some("-".repeat(77).as_str()));
        assert_eq!(lines.next(), None);
    }
}
