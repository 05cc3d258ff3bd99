pub mod database;
pub mod validation;

#[cfg(test)]
pub mod testing;
