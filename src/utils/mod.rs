// Browser helpers

pub mod dom;
