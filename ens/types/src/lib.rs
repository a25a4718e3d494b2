mod address;
mod error;
mod name;
mod proposal;
mod text_record;

pub use {address::*, error::*, name::*, proposal::*, text_record::*};
