pub mod column_ref;
pub mod hasher;
