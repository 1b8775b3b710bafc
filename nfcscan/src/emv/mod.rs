//! EMV application selection and card data extraction.

mod info;
/// Selection sequence and record decoding
pub mod selector;

pub use info::CardInfo;
pub use selector::{read_card_info, read_templated_card_info, EmvSelector};
