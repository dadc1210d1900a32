pub mod check;
pub mod dump;
pub mod id;
#[cfg(test)]
mod tests;
