pub mod load;
pub mod types;
pub mod validation;

pub use load::load_record;
pub use types::*;
pub use validation::validate_record;
