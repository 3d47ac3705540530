pub mod disclosure;
pub mod form;
pub mod icon;
pub mod prelude;
pub mod presets;

#[cfg(test)]
mod test_public_api;
