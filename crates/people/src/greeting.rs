//! Greeting helpers and the `Human` defaults.

/// Plain greeting: `"Hello {name}!"`.
pub fn greet(name: &str) -> String {
    format!("Hello {name}!")
}

/// Age bracket remark.
pub fn judge_age(age: u32) -> &'static str {
    match age {
        0..5 => "So cuuute!",
        5..18 => "Wow, you have grown since last year!",
        _ => "Welcome to adulthood!",
    }
}

/// The input when present, otherwise `"No input"`.
pub fn or_no_input(input: Option<&str>) -> &str {
    input.unwrap_or("No input")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Human {
    pub legs: u8,
}

impl Default for Human {
    fn default() -> Self {
        Self { legs: 2 }
    }
}
