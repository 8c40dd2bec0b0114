// src/data_input/mod.rs

pub mod sample_table;
pub mod table_parser;
