//! Greeting text shared by the application entry points.

#[inline]
pub fn hello() -> &'static str {
    "Hello world"
}
