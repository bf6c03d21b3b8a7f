//! Variables module
//!
//! Reading variables into request text (`{{name}}` substitution) and writing
//! variables back from JSON responses (extraction rules).

pub mod extract;
pub mod substitution;

pub use extract::{
    execute_extraction, extract_from_response, extract_value, try_execute_extraction,
    ExtractError,
};
pub use substitution::{resolve, substitute_variables};
