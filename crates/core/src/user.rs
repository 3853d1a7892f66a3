//! # User Module
//!
//! Định nghĩa User - chủ thẻ trong hệ thống.
//! User chỉ là value object: không có ID riêng, so sánh bằng structural equality.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Chủ thẻ.
///
/// Không có identity ngoài họ tên; hai User cùng tên là một.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Tên
    pub first_name: String,
    /// Tên đệm (optional)
    pub middle_name: Option<String>,
    /// Họ
    pub last_name: String,
}

impl User {
    /// Tạo User mới
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            middle_name: None,
            last_name: last_name.to_string(),
        }
    }

    /// Thêm tên đệm
    pub fn with_middle_name(mut self, middle_name: &str) -> Self {
        self.middle_name = Some(middle_name.to_string());
        self
    }

    /// Họ tên đầy đủ
    pub fn full_name(&self) -> String {
        match &self.middle_name {
            Some(middle) => format!("{} {} {}", self.first_name, middle, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_full_name() {
        let user = User::new("Amrit", "Sutradhar");
        assert_eq!(user.full_name(), "Amrit Sutradhar");

        let user = User::new("Amrit", "Sutradhar").with_middle_name("Kumar");
        assert_eq!(user.full_name(), "Amrit Kumar Sutradhar");
    }

    #[test]
    fn test_user_equality() {
        let a = User::new("Alice", "Nguyen");
        let b = User::new("Alice", "Nguyen");
        let c = User::new("Alice", "Nguyen").with_middle_name("T");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_user_display() {
        let user = User::new("Bob", "Tran");
        assert_eq!(format!("{}", user), "Bob Tran");
    }
}
