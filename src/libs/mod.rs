pub mod term_size;
