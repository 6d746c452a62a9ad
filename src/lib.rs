// Formula code uses the non-standard variable names from the literature
#![allow(non_snake_case)]
pub mod field;
pub mod helper;
pub mod model;
