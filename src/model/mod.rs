pub mod annotation;
pub mod selection;

#[cfg(test)]
#[path = "../../tests/src_inline/model/tests.rs"]
mod tests;
